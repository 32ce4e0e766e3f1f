use std::path::Path;

use crate::{
    audio::wav,
    foundation::error::{ClipcastError, ClipcastResult},
    timeline::model::Timeline,
};

/// Merge all segment audio files into one WAV at `target_path`.
///
/// Segments are appended in index order with `floor(delay * rate)` zero
/// samples between consecutive segments (never after the last). The silence
/// injected here is the only place the inter-segment delay exists in audio;
/// the stamped timestamps deliberately exclude it, so caption windows and
/// silence positions stay consistent.
///
/// Returns the total duration `Σ duration + (n-1) * delay` computed from the
/// record durations — authoritative, independent of any rounding in the
/// merged file's actual sample count.
pub fn concat(
    timeline: &Timeline,
    target_path: &Path,
    inter_segment_delay_sec: f64,
    target_rate: u32,
) -> ClipcastResult<f64> {
    if timeline.is_empty() {
        return Err(ClipcastError::EmptyTimeline);
    }
    if target_rate == 0 {
        return Err(ClipcastError::validation("target_rate must be > 0"));
    }
    if !inter_segment_delay_sec.is_finite() || inter_segment_delay_sec < 0.0 {
        return Err(ClipcastError::validation(
            "inter_segment_delay_sec must be finite and >= 0",
        ));
    }

    let gap_samples = (inter_segment_delay_sec * f64::from(target_rate)).floor() as usize;
    let last_index = timeline.indices().last();

    let mut merged = Vec::<f32>::new();
    for record in timeline.records() {
        let (samples, rate) = wav::read_wav_mono(&record.file)?;
        if rate != target_rate {
            tracing::warn!(
                segment = record.index,
                file_rate = rate,
                target_rate,
                "sample rate mismatch in segment file"
            );
        }
        merged.extend_from_slice(&samples);
        if Some(record.index) != last_index {
            merged.extend(std::iter::repeat_n(0.0f32, gap_samples));
        }
    }

    wav::write_wav_mono(target_path, &merged, target_rate)?;

    let total = timeline.total_duration_sec(inter_segment_delay_sec);
    tracing::info!(
        segments = timeline.len(),
        total_duration_sec = total,
        target = %target_path.display(),
        "concatenated segment audio"
    );
    Ok(total)
}

#[cfg(test)]
#[path = "../../tests/unit/audio/concat.rs"]
mod tests;
