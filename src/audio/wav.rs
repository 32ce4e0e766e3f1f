use std::path::Path;

use crate::foundation::error::{ClipcastError, ClipcastResult};

/// Write mono f32 samples as an uncompressed WAV file.
pub fn write_wav_mono(path: &Path, samples: &[f32], sample_rate: u32) -> ClipcastResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| {
            ClipcastError::persistence(format!(
                "failed to create audio output directory '{}': {e}",
                parent.display()
            ))
        })?;
    }

    let spec = hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 32,
        sample_format: hound::SampleFormat::Float,
    };
    let mut writer = hound::WavWriter::create(path, spec).map_err(|e| {
        ClipcastError::persistence(format!(
            "failed to create wav file '{}': {e}",
            path.display()
        ))
    })?;
    for &sample in samples {
        writer.write_sample(sample).map_err(|e| {
            ClipcastError::persistence(format!(
                "failed to write sample to '{}': {e}",
                path.display()
            ))
        })?;
    }
    writer.finalize().map_err(|e| {
        ClipcastError::persistence(format!(
            "failed to finalize wav file '{}': {e}",
            path.display()
        ))
    })?;
    Ok(())
}

/// Read a mono f32 WAV file back as `(samples, sample_rate)`.
pub fn read_wav_mono(path: &Path) -> ClipcastResult<(Vec<f32>, u32)> {
    let mut reader = hound::WavReader::open(path).map_err(|e| {
        ClipcastError::persistence(format!("failed to open wav file '{}': {e}", path.display()))
    })?;
    let spec = reader.spec();
    if spec.channels != 1 {
        return Err(ClipcastError::persistence(format!(
            "wav file '{}' has {} channels, expected mono",
            path.display(),
            spec.channels
        )));
    }

    let samples: Result<Vec<f32>, _> = match spec.sample_format {
        hound::SampleFormat::Float => reader.samples::<f32>().collect(),
        hound::SampleFormat::Int => {
            let scale = (1i64 << (spec.bits_per_sample - 1)) as f32;
            reader
                .samples::<i32>()
                .map(|s| s.map(|v| v as f32 / scale))
                .collect()
        }
    };
    let samples = samples.map_err(|e| {
        ClipcastError::persistence(format!(
            "failed to read samples from '{}': {e}",
            path.display()
        ))
    })?;
    Ok((samples, spec.sample_rate))
}

#[cfg(test)]
#[path = "../../tests/unit/audio/wav.rs"]
mod tests;
