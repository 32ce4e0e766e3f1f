use std::path::{Path, PathBuf};

use crate::{
    audio::concat::concat,
    foundation::config::{PipelineConfig, RenderTarget},
    foundation::error::ClipcastResult,
    overlay::model::{Overlay, OverlayStyler},
    render::cleanup::cleanup,
    render::compositor::Compositor,
    render::request::{EncodeOptions, build_render_request},
    segment::splitter::split,
    synth::engine::SpeechEngine,
    timeline::builder::TimelineBuilder,
    timeline::effects::apply_overlay_effects,
    timeline::model::Timeline,
};

/// File name of the concatenated audio inside the output directory.
pub const CONCAT_FILE_NAME: &str = "concatenated_audio.wav";

#[derive(Clone, Debug)]
/// Inputs describing one clip to assemble.
pub struct ClipSpec {
    /// Source text, possibly multi-paragraph.
    pub text: String,
    /// Background clip path.
    pub background: PathBuf,
    /// Encoded output file path.
    pub output_path: PathBuf,
    /// Output canvas and frame rate.
    pub target: RenderTarget,
    /// Encoder options.
    pub encode: EncodeOptions,
}

#[derive(Debug)]
/// Immutable snapshot of the pipeline after a successful run.
///
/// The state is threaded explicitly between stages instead of living in
/// hidden mutable fields, so each stage's inputs are exactly what the
/// previous stage returned.
pub struct PipelineState {
    /// The built timeline (post effects).
    pub timeline: Timeline,
    /// Authoritative total duration in seconds.
    pub total_duration_sec: f64,
    /// Path of the concatenated audio file (deleted by cleanup).
    pub concatenated_audio: PathBuf,
    /// Path of the encoded output file.
    pub output: PathBuf,
}

/// Assemble a clip end to end: split, synthesize, concatenate, composite.
///
/// Equivalent to [`assemble_with_effect`] with a no-op overlay effect.
pub fn assemble(
    spec: &ClipSpec,
    config: &PipelineConfig,
    engine: &dyn SpeechEngine,
    styler: &dyn OverlayStyler,
    compositor: &dyn Compositor,
) -> ClipcastResult<PipelineState> {
    assemble_with_effect(spec, config, engine, styler, compositor, |_| {})
}

/// Assemble a clip end to end, applying `effect` to every caption overlay
/// before the render handoff.
///
/// Stages run on a single logical thread in segment-index order. Per-segment
/// synthesis failures are skipped inside the timeline build; any failure
/// after the build is terminal, and intermediate audio files are cleaned up
/// on both the success and the terminal-failure path.
pub fn assemble_with_effect(
    spec: &ClipSpec,
    config: &PipelineConfig,
    engine: &dyn SpeechEngine,
    styler: &dyn OverlayStyler,
    compositor: &dyn Compositor,
    effect: impl FnMut(&mut Overlay),
) -> ClipcastResult<PipelineState> {
    config.validate()?;
    spec.target.validate()?;

    let segments = split(&spec.text, config.max_segment_words, config.max_segment_chars)?;
    tracing::info!(segments = segments.len(), "split input text");

    let builder = TimelineBuilder::new(config, engine, styler);
    let mut timeline = builder.build(&segments)?;

    let concatenated_audio = concat_file_path(&config.output_dir);
    let rendered = render_stages(
        spec,
        config,
        compositor,
        &mut timeline,
        &concatenated_audio,
        effect,
    );
    // Cleanup runs whether compositing succeeded or failed; the render
    // error, if any, wins.
    cleanup(&timeline, &concatenated_audio);

    let (total_duration_sec, output) = rendered?;
    Ok(PipelineState {
        timeline,
        total_duration_sec,
        concatenated_audio,
        output,
    })
}

/// Concatenation through compositing; separated so cleanup can observe the
/// outcome of the whole tail of the pipeline.
fn render_stages(
    spec: &ClipSpec,
    config: &PipelineConfig,
    compositor: &dyn Compositor,
    timeline: &mut Timeline,
    concatenated_audio: &Path,
    effect: impl FnMut(&mut Overlay),
) -> ClipcastResult<(f64, PathBuf)> {
    let total_duration_sec = concat(
        timeline,
        concatenated_audio,
        config.inter_segment_delay_sec,
        config.target_sample_rate,
    )?;

    apply_overlay_effects(timeline, effect);

    let request = build_render_request(
        timeline,
        &spec.background,
        concatenated_audio,
        &spec.output_path,
        total_duration_sec,
        spec.target,
        spec.encode.clone(),
    )?;
    let output = compositor.composite(&request)?;
    Ok((total_duration_sec, output))
}

/// Path of the concatenated audio file for a given output directory.
pub fn concat_file_path(output_dir: &Path) -> PathBuf {
    output_dir.join(CONCAT_FILE_NAME)
}

#[cfg(test)]
#[path = "../tests/unit/pipeline.rs"]
mod tests;
