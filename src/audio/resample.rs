use crate::{
    audio::buffer::AudioBuffer,
    foundation::error::{ClipcastError, ClipcastResult},
};

/// Peak threshold below which a non-silent buffer is considered too quiet.
pub const QUIET_PEAK_THRESHOLD: f32 = 0.1;

/// Peak amplitude a quiet buffer is rescaled to.
pub const RESCUE_PEAK: f32 = 0.8;

/// Half-width of the sinc kernel, in output-bandwidth sample periods.
const SINC_HALF_TAPS: usize = 24;

/// Resample mono PCM from `from_rate` to `to_rate` with a Hann-windowed sinc
/// kernel.
///
/// The output length is exactly `round(n * to_rate / from_rate)`. Matching
/// rates (and empty input) return the input unchanged, bit-identical. When
/// downsampling, the kernel cutoff is lowered to the output Nyquist so the
/// result stays alias-free.
pub fn resample(input: &[f32], from_rate: u32, to_rate: u32) -> Vec<f32> {
    if from_rate == to_rate || input.is_empty() {
        return input.to_vec();
    }

    let ratio = f64::from(to_rate) / f64::from(from_rate);
    let out_len = (input.len() as f64 * ratio).round() as usize;
    let cutoff = ratio.min(1.0);
    // Kernel support in input samples; widens when the cutoff drops.
    let half_width = (SINC_HALF_TAPS as f64 / cutoff).ceil();

    let mut out = Vec::with_capacity(out_len);
    for i in 0..out_len {
        let center = i as f64 / ratio;
        let j_first = ((center - half_width).ceil()).max(0.0) as usize;
        let j_last = ((center + half_width).floor()).min((input.len() - 1) as f64) as usize;

        let mut acc = 0.0f64;
        let mut weight_sum = 0.0f64;
        for (j, &sample) in input.iter().enumerate().take(j_last + 1).skip(j_first) {
            let d = j as f64 - center;
            let w = sinc(cutoff * d) * hann(d / half_width);
            acc += w * f64::from(sample);
            weight_sum += w;
        }
        // Weight normalization keeps constant signals constant near the edges.
        let value = if weight_sum.abs() > f64::EPSILON {
            acc / weight_sum
        } else {
            0.0
        };
        out.push(value as f32);
    }
    out
}

fn sinc(x: f64) -> f64 {
    if x.abs() < 1e-12 {
        1.0
    } else {
        let px = std::f64::consts::PI * x;
        px.sin() / px
    }
}

fn hann(t: f64) -> f64 {
    if t.abs() >= 1.0 {
        0.0
    } else {
        0.5 + 0.5 * (std::f64::consts::PI * t).cos()
    }
}

/// Resample a synthesized buffer to `target_rate` and rescue quiet audio.
///
/// A peak in `(0, QUIET_PEAK_THRESHOLD)` rescales the whole buffer so its new
/// peak is [`RESCUE_PEAK`]; silence and healthy buffers pass through
/// unchanged. The returned buffer's sample count is the only source of the
/// segment duration used downstream — it is never estimated from the input.
pub fn normalize(buffer: AudioBuffer, target_rate: u32) -> ClipcastResult<AudioBuffer> {
    if target_rate == 0 {
        return Err(ClipcastError::validation("target_rate must be > 0"));
    }
    if buffer.sample_rate == 0 {
        return Err(ClipcastError::validation("buffer sample_rate must be > 0"));
    }

    let mut samples = resample(&buffer.samples, buffer.sample_rate, target_rate);
    if samples.is_empty() {
        return Err(ClipcastError::normalization(format!(
            "segment {} resampled to zero samples",
            buffer.segment_index
        )));
    }

    let peak = samples.iter().fold(0.0f32, |acc, s| acc.max(s.abs()));
    if peak > 0.0 && peak < QUIET_PEAK_THRESHOLD {
        tracing::debug!(
            segment = buffer.segment_index,
            peak,
            "quiet segment, rescaling to peak {RESCUE_PEAK}"
        );
        let gain = RESCUE_PEAK / peak;
        for s in &mut samples {
            *s *= gain;
        }
    }

    Ok(AudioBuffer {
        samples,
        sample_rate: target_rate,
        segment_index: buffer.segment_index,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/audio/resample.rs"]
mod tests;
