use super::*;

use crate::{
    foundation::config::RenderTarget,
    overlay::model::FixedStyler,
    overlay::model::OverlayStyler,
    overlay::style::CaptionStyle,
    render::request::EncodeOptions,
};

fn overlay(text: &str, start_sec: f64, duration_sec: f64) -> Overlay {
    FixedStyler::default()
        .make_overlay(text, start_sec, duration_sec)
        .unwrap()
}

#[test]
fn filtergraph_scales_crops_and_chains_drawtext() {
    let request = RenderRequest {
        background: "bg.mp4".into(),
        target: RenderTarget::default(),
        overlays: vec![overlay("one", 0.0, 1.0), overlay("two", 1.0, 1.0)],
        audio_path: "audio.wav".into(),
        total_duration_sec: 2.0,
        output_path: "out.mp4".into(),
        encode: EncodeOptions::default(),
    };
    let graph = build_filtergraph(&request);
    assert!(graph.starts_with("[0:v]scale=-2:1920,crop=1080:1920,fps=30"));
    assert!(graph.ends_with("[vout]"));
    assert_eq!(graph.matches("drawtext=").count(), 2);
}

#[test]
fn drawtext_window_matches_overlay_timing() {
    let f = drawtext_filter(&overlay("caption", 1.5, 2.0));
    assert!(f.contains("enable='between(t,1.500,3.500)'"));
}

#[test]
fn drawtext_defaults_center_with_stroke_and_no_box() {
    let f = drawtext_filter(&overlay("caption", 0.0, 1.0));
    assert!(f.contains("fontsize=80"));
    assert!(f.contains("fontcolor=0xFFFFFF@1.000"));
    assert!(f.contains("borderw=3:bordercolor=0x000000@1.000"));
    assert!(f.contains("x=(w-text_w)/2:y=(h-text_h)/2"));
    assert!(!f.contains("box=1"));
}

#[test]
fn drawtext_emits_a_box_for_opaque_backgrounds() {
    let mut ov = overlay("caption", 0.0, 1.0);
    ov.style = CaptionStyle {
        background_rgba8: [0, 0, 0, 128],
        ..CaptionStyle::default()
    };
    let f = drawtext_filter(&ov);
    assert!(f.contains("box=1:boxcolor=0x000000@0.502"));
}

#[test]
fn drawtext_scales_the_font_size() {
    let mut ov = overlay("caption", 0.0, 1.0);
    ov.scale = 1.5;
    let f = drawtext_filter(&ov);
    assert!(f.contains("fontsize=120"));
}

#[test]
fn ffmpeg_color_formats_rgba() {
    assert_eq!(ffmpeg_color([255, 255, 255, 255]), "0xFFFFFF@1.000");
    assert_eq!(ffmpeg_color([0, 0, 0, 0]), "0x000000@0.000");
    assert_eq!(ffmpeg_color([18, 52, 86, 51]), "0x123456@0.200");
}

#[test]
fn filter_values_escape_reserved_characters() {
    assert_eq!(escape_filter_value("a:b"), "a\\:b");
    assert_eq!(escape_filter_value("a,b"), "a\\,b");
    assert_eq!(escape_filter_value("100%"), "100\\%");
    assert_eq!(escape_filter_value("it's"), "it\\\\\\'s");
    assert_eq!(escape_filter_value("[tag]"), "\\[tag\\]");
    assert_eq!(escape_filter_value("plain text."), "plain text.");
}

#[test]
fn composite_fails_fast_on_a_missing_background() {
    let dir = tempfile::tempdir().unwrap();
    let request = RenderRequest {
        background: dir.path().join("missing.mp4"),
        target: RenderTarget::default(),
        overlays: vec![overlay("caption", 0.0, 1.0)],
        audio_path: dir.path().join("audio.wav"),
        total_duration_sec: 1.0,
        output_path: dir.path().join("out.mp4"),
        encode: EncodeOptions::default(),
    };
    let err = FfmpegCompositor.composite(&request).unwrap_err();
    assert!(err.to_string().contains("background clip not found"));
}
