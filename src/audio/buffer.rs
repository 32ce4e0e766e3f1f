#[derive(Clone, Debug, PartialEq)]
/// Mono PCM audio tied to one source segment.
///
/// Buffers are created at the engine's native rate and replaced by the
/// normalizer's output at the target rate. They are not retained beyond
/// persistence; the on-disk WAV is the durable artifact.
pub struct AudioBuffer {
    /// Mono samples in `[-1, 1]`.
    pub samples: Vec<f32>,
    /// Sample rate in Hz.
    pub sample_rate: u32,
    /// Index of the source segment.
    pub segment_index: u32,
}

impl AudioBuffer {
    /// Duration in seconds, derived from sample count and rate.
    pub fn duration_sec(&self) -> f64 {
        self.samples.len() as f64 / f64::from(self.sample_rate)
    }

    /// Peak absolute amplitude, 0.0 for an empty buffer.
    pub fn peak(&self) -> f32 {
        self.samples.iter().fold(0.0f32, |acc, s| acc.max(s.abs()))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/audio/buffer.rs"]
mod tests;
