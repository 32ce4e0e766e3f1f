use crate::synth::voice::VoiceId;

/// Errors reported by a [`SpeechEngine`] for a single segment.
///
/// These are segment-local: the timeline builder logs them and skips the
/// segment instead of aborting the run.
#[derive(thiserror::Error, Debug)]
pub enum SynthesisError {
    /// The engine produced zero chunks or zero samples for the text.
    #[error("synthesis error: engine produced no audio")]
    Empty,

    /// The engine itself failed.
    #[error("synthesis error: {0}")]
    Engine(String),
}

#[derive(Clone, Debug)]
/// One chunk of synthesized audio, typically covering a sub-phrase.
///
/// Engines may split a segment into several chunks; the adapter joins them
/// along the time axis before timing is computed.
pub struct SynthChunk {
    /// Grapheme text covered by this chunk.
    pub graphemes: String,
    /// Phoneme string produced by the engine, when available.
    pub phonemes: String,
    /// Mono PCM samples at the engine's native rate.
    pub samples: Vec<f32>,
}

/// Capability seam over an opaque text-to-speech engine.
///
/// Implementations are injected into the timeline builder, which enables
/// deterministic substitution with fakes in tests. One call synthesizes one
/// segment; there is no streaming contract.
pub trait SpeechEngine {
    /// Synthesize `text` with `voice`, returning the engine's raw chunks.
    fn synthesize(&self, text: &str, voice: &VoiceId) -> Result<Vec<SynthChunk>, SynthesisError>;

    /// Sample rate of the returned samples, in Hz.
    fn native_sample_rate(&self) -> u32;
}

/// Join all engine chunks into one contiguous mono buffer.
///
/// Zero chunks, or chunks that sum to zero samples, are a
/// [`SynthesisError::Empty`] — the caller must skip the segment, not crash
/// the timeline.
pub fn collect_chunks(chunks: Vec<SynthChunk>) -> Result<Vec<f32>, SynthesisError> {
    if chunks.is_empty() {
        return Err(SynthesisError::Empty);
    }
    let total: usize = chunks.iter().map(|c| c.samples.len()).sum();
    if total == 0 {
        return Err(SynthesisError::Empty);
    }
    let mut samples = Vec::with_capacity(total);
    for chunk in chunks {
        samples.extend_from_slice(&chunk.samples);
    }
    Ok(samples)
}

#[cfg(test)]
#[path = "../../tests/unit/synth/engine.rs"]
mod tests;
