use super::*;

use std::sync::Mutex;

use crate::{
    foundation::error::ClipcastError,
    overlay::model::FixedStyler,
    render::request::RenderRequest,
    synth::engine::{SynthChunk, SynthesisError},
    synth::voice::VoiceId,
};

/// One second of constant tone per segment, at a 24 kHz native rate.
struct FakeEngine;

impl SpeechEngine for FakeEngine {
    fn synthesize(&self, text: &str, _voice: &VoiceId) -> Result<Vec<SynthChunk>, SynthesisError> {
        if text.contains("unspeakable") {
            return Err(SynthesisError::Engine("no phonemes".to_string()));
        }
        Ok(vec![SynthChunk {
            graphemes: text.to_string(),
            phonemes: String::new(),
            samples: vec![0.5f32; 24_000],
        }])
    }

    fn native_sample_rate(&self) -> u32 {
        24_000
    }
}

/// Compositor that records the request instead of encoding; creates the
/// output file so callers can observe it surviving cleanup.
#[derive(Default)]
struct FakeCompositor {
    fail: bool,
    seen: Mutex<Vec<RenderRequest>>,
}

impl Compositor for FakeCompositor {
    fn composite(&self, request: &RenderRequest) -> ClipcastResult<PathBuf> {
        if self.fail {
            return Err(ClipcastError::render("encoder exploded"));
        }
        assert!(
            request.audio_path.exists(),
            "concatenated audio must exist while compositing"
        );
        std::fs::write(&request.output_path, b"video")
            .map_err(|e| ClipcastError::render(e.to_string()))?;
        self.seen
            .lock()
            .map_err(|_| ClipcastError::render("poisoned"))?
            .push(request.clone());
        Ok(request.output_path.clone())
    }
}

fn fixtures(dir: &Path, text: &str) -> (ClipSpec, PipelineConfig) {
    let background = dir.join("bg.mp4");
    std::fs::write(&background, b"clip").unwrap();
    let spec = ClipSpec {
        text: text.to_string(),
        background,
        output_path: dir.join("out.mp4"),
        target: RenderTarget::default(),
        encode: EncodeOptions::default(),
    };
    let config = PipelineConfig {
        output_dir: dir.join("segments"),
        ..PipelineConfig::default()
    };
    (spec, config)
}

#[test]
fn assemble_produces_output_and_deletes_intermediates() {
    let dir = tempfile::tempdir().unwrap();
    let (spec, config) = fixtures(dir.path(), "One sentence. Another one. A third.");
    let compositor = FakeCompositor::default();

    let state = assemble(
        &spec,
        &config,
        &FakeEngine,
        &FixedStyler::default(),
        &compositor,
    )
    .unwrap();

    assert_eq!(state.timeline.len(), 3);
    assert_eq!(state.total_duration_sec, 3.0 + 2.0 * 0.1);
    assert_eq!(state.output, spec.output_path);
    assert!(state.output.exists());

    // Segment WAVs and the concatenated file are gone after the run.
    assert!(!state.concatenated_audio.exists());
    for record in state.timeline.records() {
        assert!(!record.file.exists());
    }

    let seen = compositor.seen.lock().unwrap();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].overlays.len(), 3);
    assert_eq!(seen[0].total_duration_sec, state.total_duration_sec);
}

#[test]
fn overlay_effect_is_visible_to_the_compositor() {
    let dir = tempfile::tempdir().unwrap();
    let (spec, config) = fixtures(dir.path(), "One sentence. Another one.");
    let compositor = FakeCompositor::default();

    assemble_with_effect(
        &spec,
        &config,
        &FakeEngine,
        &FixedStyler::default(),
        &compositor,
        |overlay| overlay.scale = 1.3,
    )
    .unwrap();

    let seen = compositor.seen.lock().unwrap();
    assert!(seen[0].overlays.iter().all(|o| o.scale == 1.3));
}

#[test]
fn failed_segments_are_absent_but_the_run_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let (spec, config) = fixtures(dir.path(), "One sentence. Fully unspeakable here. A third.");
    let compositor = FakeCompositor::default();

    let state = assemble(
        &spec,
        &config,
        &FakeEngine,
        &FixedStyler::default(),
        &compositor,
    )
    .unwrap();

    assert_eq!(state.timeline.indices().collect::<Vec<_>>(), vec![0, 2]);
    assert_eq!(state.total_duration_sec, 2.0 + 0.1);
}

#[test]
fn all_segments_failing_is_an_empty_timeline_error() {
    let dir = tempfile::tempdir().unwrap();
    let (spec, config) = fixtures(dir.path(), "Totally unspeakable. Also unspeakable.");
    let compositor = FakeCompositor::default();

    let err = assemble(
        &spec,
        &config,
        &FakeEngine,
        &FixedStyler::default(),
        &compositor,
    )
    .unwrap_err();
    assert!(matches!(err, ClipcastError::EmptyTimeline));
}

#[test]
fn compositor_failure_propagates_and_still_cleans_up() {
    let dir = tempfile::tempdir().unwrap();
    let (spec, config) = fixtures(dir.path(), "One sentence. Another one.");
    let compositor = FakeCompositor {
        fail: true,
        ..FakeCompositor::default()
    };

    let err = assemble(
        &spec,
        &config,
        &FakeEngine,
        &FixedStyler::default(),
        &compositor,
    )
    .unwrap_err();
    assert!(err.to_string().contains("encoder exploded"));

    assert!(!concat_file_path(&config.output_dir).exists());
    let leftover: Vec<_> = std::fs::read_dir(&config.output_dir)
        .unwrap()
        .filter_map(Result::ok)
        .collect();
    assert!(leftover.is_empty(), "intermediates survived: {leftover:?}");
}

#[test]
fn empty_text_fails_before_any_synthesis() {
    let dir = tempfile::tempdir().unwrap();
    let (spec, config) = fixtures(dir.path(), "   ");
    let compositor = FakeCompositor::default();

    let err = assemble(
        &spec,
        &config,
        &FakeEngine,
        &FixedStyler::default(),
        &compositor,
    )
    .unwrap_err();
    assert!(matches!(err, ClipcastError::Segmentation(_)));
    assert!(compositor.seen.lock().unwrap().is_empty());
}
