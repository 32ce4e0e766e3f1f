use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::{
    foundation::error::{ClipcastError, ClipcastResult},
    overlay::model::Overlay,
    overlay::style::{AlignX, AlignY},
    render::request::RenderRequest,
};

/// Capability seam over the external video compositor.
///
/// One call consumes one [`RenderRequest`] and produces the encoded file, or
/// fails. Injected into the pipeline so tests can substitute a fake.
pub trait Compositor {
    /// Composite background, overlays and audio into an encoded file.
    fn composite(&self, request: &RenderRequest) -> ClipcastResult<PathBuf>;
}

/// Compositor backed by the system `ffmpeg` binary.
///
/// The background is scaled to the target height, center-cropped to the
/// target width and trimmed to the timeline's total duration plus a one
/// second tail; captions are burned in with `drawtext` windows matching each
/// overlay's `[start, end)`; the concatenated audio is muxed in.
#[derive(Clone, Copy, Debug, Default)]
pub struct FfmpegCompositor;

impl Compositor for FfmpegCompositor {
    fn composite(&self, request: &RenderRequest) -> ClipcastResult<PathBuf> {
        if !request.background.exists() {
            return Err(ClipcastError::render(format!(
                "background clip not found: {}",
                request.background.display()
            )));
        }
        if !request.audio_path.exists() {
            return Err(ClipcastError::render(format!(
                "audio file not found: {}",
                request.audio_path.display()
            )));
        }
        if !is_ffmpeg_on_path() {
            return Err(ClipcastError::render(
                "ffmpeg is required for compositing, but was not found on PATH",
            ));
        }
        if let Some(parent) = request.output_path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                ClipcastError::render(format!(
                    "failed to create output directory '{}': {e}",
                    parent.display()
                ))
            })?;
        }

        let filtergraph = build_filtergraph(request);
        // Keep one second of background after the audio ends; `-shortest`
        // still caps the output at the shorter stream.
        let video_duration = request.total_duration_sec + 1.0;

        let mut cmd = Command::new("ffmpeg");
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::piped());
        cmd.args(["-y", "-loglevel", "error"]);
        cmd.args(["-t", &format!("{video_duration:.3}")]);
        cmd.arg("-i").arg(&request.background);
        cmd.arg("-i").arg(&request.audio_path);
        cmd.args(["-filter_complex", &filtergraph]);
        cmd.args(["-map", "[vout]", "-map", "1:a"]);
        cmd.args(["-c:v", &request.encode.video_codec]);
        cmd.args(["-preset", &request.encode.preset]);
        cmd.args(["-pix_fmt", &request.encode.pix_fmt]);
        cmd.args(["-c:a", &request.encode.audio_codec]);
        cmd.args(["-b:a", &request.encode.audio_bitrate]);
        if request.encode.faststart {
            cmd.args(["-movflags", "+faststart"]);
        }
        cmd.args(["-shortest"]);
        cmd.arg(&request.output_path);

        tracing::info!(
            output = %request.output_path.display(),
            overlays = request.overlays.len(),
            "spawning ffmpeg compositor"
        );
        let output = cmd.output().map_err(|e| {
            ClipcastError::render(format!(
                "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
            ))
        })?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ClipcastError::render(format!(
                "ffmpeg exited with status {}: {}",
                output.status,
                stderr.trim()
            )));
        }
        Ok(request.output_path.clone())
    }
}

/// Build the `-filter_complex` graph: scale + crop + fps on the background,
/// then one chained `drawtext` per overlay.
fn build_filtergraph(request: &RenderRequest) -> String {
    let t = &request.target;
    let mut graph = format!(
        "[0:v]scale=-2:{h},crop={w}:{h},fps={fps}",
        w = t.width,
        h = t.height,
        fps = t.fps
    );
    for overlay in &request.overlays {
        graph.push(',');
        graph.push_str(&drawtext_filter(overlay));
    }
    graph.push_str("[vout]");
    graph
}

/// Render one overlay as a `drawtext` filter with a visibility window.
fn drawtext_filter(overlay: &Overlay) -> String {
    let style = &overlay.style;
    let font_size = (f64::from(style.font_size_px) * overlay.scale).max(1.0);

    let x = match style.align_x {
        AlignX::Left => "10".to_string(),
        AlignX::Center => "(w-text_w)/2".to_string(),
        AlignX::Right => "w-text_w-10".to_string(),
    };
    let y = match style.align_y {
        AlignY::Top => "10".to_string(),
        AlignY::Center => "(h-text_h)/2".to_string(),
        AlignY::Bottom => "h-text_h-10".to_string(),
    };

    let mut f = format!(
        "drawtext=fontfile='{font}':text='{text}':fontsize={size:.0}:fontcolor={color}",
        font = escape_filter_value(&style.font_source),
        text = escape_filter_value(&overlay.text),
        size = font_size,
        color = ffmpeg_color(style.color_rgba8),
    );
    if style.stroke_width_px > 0.0 {
        f.push_str(&format!(
            ":borderw={:.0}:bordercolor={}",
            style.stroke_width_px,
            ffmpeg_color(style.stroke_rgba8)
        ));
    }
    if style.background_rgba8[3] > 0 {
        f.push_str(&format!(
            ":box=1:boxcolor={}",
            ffmpeg_color(style.background_rgba8)
        ));
    }
    f.push_str(&format!(
        ":line_spacing={:.0}:x={x}:y={y}:enable='between(t,{:.3},{:.3})'",
        style.line_spacing_px,
        overlay.start_sec,
        overlay.end_sec(),
    ));
    f
}

/// RGBA8 to ffmpeg color syntax `0xRRGGBB@A` with fractional alpha.
fn ffmpeg_color(rgba: [u8; 4]) -> String {
    format!(
        "0x{:02X}{:02X}{:02X}@{:.3}",
        rgba[0],
        rgba[1],
        rgba[2],
        f64::from(rgba[3]) / 255.0
    )
}

/// Escape a value embedded in a single-quoted filter argument.
fn escape_filter_value(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\\\\\'"),
            ':' => out.push_str("\\:"),
            ',' => out.push_str("\\,"),
            ';' => out.push_str("\\;"),
            '%' => out.push_str("\\%"),
            '[' | ']' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
    out
}

/// Return `true` when `ffmpeg` can be invoked from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
#[path = "../../tests/unit/render/compositor.rs"]
mod tests;
