use std::path::PathBuf;

use crate::{
    foundation::error::{ClipcastError, ClipcastResult},
    synth::voice::VoiceId,
};

/// Conventional output sample rate for persisted segment audio (Hz).
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;

/// Default silence gap inserted between concatenated segments, in seconds.
pub const DEFAULT_INTER_SEGMENT_DELAY_SEC: f64 = 0.1;

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Configuration surface consumed by the segment timeline engine.
///
/// A config is pure data; it is validated once at the pipeline entry point
/// and then threaded immutably through the stages.
pub struct PipelineConfig {
    /// Output sample rate for all persisted audio, in Hz.
    pub target_sample_rate: u32,
    /// Silence gap between concatenated segments, in seconds.
    ///
    /// The gap exists only in the concatenated stream and in the total
    /// duration formula; per-segment timestamps never include it.
    pub inter_segment_delay_sec: f64,
    /// Maximum number of words per segment.
    pub max_segment_words: usize,
    /// Maximum number of characters per segment.
    pub max_segment_chars: usize,
    /// Voice used for every segment in the run.
    pub voice: VoiceId,
    /// Directory receiving per-segment and concatenated audio files.
    ///
    /// The directory is exclusively owned by one run; callers must serialize
    /// runs per directory.
    pub output_dir: PathBuf,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            target_sample_rate: DEFAULT_SAMPLE_RATE,
            inter_segment_delay_sec: DEFAULT_INTER_SEGMENT_DELAY_SEC,
            max_segment_words: 8,
            max_segment_chars: 80,
            voice: VoiceId::default(),
            output_dir: PathBuf::from("segments"),
        }
    }
}

impl PipelineConfig {
    /// Validate config invariants.
    pub fn validate(&self) -> ClipcastResult<()> {
        if self.target_sample_rate == 0 {
            return Err(ClipcastError::validation("target_sample_rate must be > 0"));
        }
        if !self.inter_segment_delay_sec.is_finite() || self.inter_segment_delay_sec < 0.0 {
            return Err(ClipcastError::validation(
                "inter_segment_delay_sec must be finite and >= 0",
            ));
        }
        if self.max_segment_words == 0 {
            return Err(ClipcastError::validation("max_segment_words must be > 0"));
        }
        if self.max_segment_chars == 0 {
            return Err(ClipcastError::validation("max_segment_chars must be > 0"));
        }
        if self.voice.as_str().trim().is_empty() {
            return Err(ClipcastError::validation("voice must be non-empty"));
        }
        if self.output_dir.as_os_str().is_empty() {
            return Err(ClipcastError::validation("output_dir must be non-empty"));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, serde::Serialize, serde::Deserialize)]
/// Output canvas and frame rate for the rendered clip.
pub struct RenderTarget {
    /// Output width in pixels.
    pub width: u32,
    /// Output height in pixels.
    pub height: u32,
    /// Output frame rate in frames per second.
    pub fps: u32,
}

impl Default for RenderTarget {
    /// Vertical 1080x1920 at 30 fps.
    fn default() -> Self {
        Self {
            width: 1080,
            height: 1920,
            fps: 30,
        }
    }
}

impl RenderTarget {
    /// Validate target invariants.
    pub fn validate(&self) -> ClipcastResult<()> {
        if self.width == 0 || self.height == 0 {
            return Err(ClipcastError::validation("width/height must be > 0"));
        }
        if !self.width.is_multiple_of(2) || !self.height.is_multiple_of(2) {
            return Err(ClipcastError::validation(
                "width/height must be even (required for yuv420p mp4 output)",
            ));
        }
        if self.fps == 0 {
            return Err(ClipcastError::validation("fps must be > 0"));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/config.rs"]
mod tests;
