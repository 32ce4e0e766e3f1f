use std::path::PathBuf;

use crate::{
    foundation::config::RenderTarget,
    foundation::error::{ClipcastError, ClipcastResult},
    overlay::model::Overlay,
    timeline::model::Timeline,
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Encoder options forwarded to the external compositor.
pub struct EncodeOptions {
    /// Video codec.
    pub video_codec: String,
    /// Audio codec.
    pub audio_codec: String,
    /// Audio bitrate, e.g. `192k`.
    pub audio_bitrate: String,
    /// Encoder preset.
    pub preset: String,
    /// Output pixel format.
    pub pix_fmt: String,
    /// Move the moov atom to the front for web streaming.
    pub faststart: bool,
}

impl Default for EncodeOptions {
    /// h264 + aac in yuv420p with `+faststart`, broad-compatibility defaults.
    fn default() -> Self {
        Self {
            video_codec: "libx264".to_string(),
            audio_codec: "aac".to_string(),
            audio_bitrate: "192k".to_string(),
            preset: "medium".to_string(),
            pix_fmt: "yuv420p".to_string(),
            faststart: true,
        }
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// Everything the external compositor needs to produce the encoded clip.
///
/// Constructed once by [`build_render_request`] and consumed once.
pub struct RenderRequest {
    /// Background clip path.
    pub background: PathBuf,
    /// Output canvas and frame rate.
    pub target: RenderTarget,
    /// Caption overlays in segment index order.
    pub overlays: Vec<Overlay>,
    /// Path of the concatenated audio file.
    pub audio_path: PathBuf,
    /// Authoritative output duration in seconds (the timeline formula, not a
    /// measured file length); drives background trimming.
    pub total_duration_sec: f64,
    /// Output file path.
    pub output_path: PathBuf,
    /// Encoder options.
    pub encode: EncodeOptions,
}

/// Package the timeline into the compositor's contract.
///
/// Overlays are copied out of the records in index order; their timing is
/// already final at this point.
pub fn build_render_request(
    timeline: &Timeline,
    background: impl Into<PathBuf>,
    audio_path: impl Into<PathBuf>,
    output_path: impl Into<PathBuf>,
    total_duration_sec: f64,
    target: RenderTarget,
    encode: EncodeOptions,
) -> ClipcastResult<RenderRequest> {
    if timeline.is_empty() {
        return Err(ClipcastError::EmptyTimeline);
    }
    target.validate()?;
    if !total_duration_sec.is_finite() || total_duration_sec <= 0.0 {
        return Err(ClipcastError::validation(
            "total_duration_sec must be finite and > 0",
        ));
    }

    Ok(RenderRequest {
        background: background.into(),
        target,
        overlays: timeline.records().map(|r| r.overlay.clone()).collect(),
        audio_path: audio_path.into(),
        total_duration_sec,
        output_path: output_path.into(),
        encode,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/request.rs"]
mod tests;
