//! Clipcast assembles a short vertical video from a block of source text:
//! it splits the text into bounded segments, synthesizes speech per segment,
//! normalizes the audio, stamps monotonically consistent timestamps, merges
//! everything into one audio track and hands synchronized caption overlays
//! to an external compositor.
//!
//! # Pipeline overview
//!
//! 1. **Split**: [`split`] packs the text into word/character-bounded
//!    [`Segment`]s.
//! 2. **Build**: [`TimelineBuilder`] drives each segment through synthesis
//!    ([`SpeechEngine`]), normalization, WAV persistence and timestamp
//!    stamping into a [`Timeline`] of [`SegmentRecord`]s.
//! 3. **Concatenate**: [`concat`] merges segment audio with fixed silence
//!    gaps and returns the authoritative total duration.
//! 4. **Effects**: [`apply_overlay_effects`] lets callers restyle caption
//!    overlays without touching timing.
//! 5. **Render**: [`build_render_request`] packages everything for a
//!    [`Compositor`]; [`cleanup`] removes the intermediate audio files.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Timing is exact**: timestamps come from one sequential accumulator,
//!   durations from output sample counts, totals from the timeline formula —
//!   never from measured file lengths.
//! - **Capabilities are injected**: speech synthesis, caption styling and
//!   compositing sit behind single-method traits, substitutable in tests.
//! - **Per-segment failures are isolated**: a failed segment is skipped and
//!   its index left as a gap; only whole-timeline failures abort the run.
#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![allow(missing_docs_in_private_items)]

mod audio;
mod foundation;
mod overlay;
mod pipeline;
mod render;
mod segment;
mod synth;
mod timeline;

pub use audio::buffer::AudioBuffer;
pub use audio::concat::concat;
pub use audio::resample::{QUIET_PEAK_THRESHOLD, RESCUE_PEAK, normalize, resample};
pub use audio::wav::{read_wav_mono, write_wav_mono};
pub use foundation::config::{
    DEFAULT_INTER_SEGMENT_DELAY_SEC, DEFAULT_SAMPLE_RATE, PipelineConfig, RenderTarget,
};
pub use foundation::error::{ClipcastError, ClipcastResult};
pub use overlay::model::{FixedStyler, Overlay, OverlayEffect, OverlayStyler};
pub use overlay::style::{AlignX, AlignY, CaptionStyle};
pub use pipeline::{
    CONCAT_FILE_NAME, ClipSpec, PipelineState, assemble, assemble_with_effect, concat_file_path,
};
pub use render::cleanup::cleanup;
pub use render::compositor::{Compositor, FfmpegCompositor, is_ffmpeg_on_path};
pub use render::request::{EncodeOptions, RenderRequest, build_render_request};
pub use segment::splitter::{Segment, split};
pub use synth::engine::{SpeechEngine, SynthChunk, SynthesisError, collect_chunks};
pub use synth::voice::{KOKORO_NATIVE_SAMPLE_RATE, LanguageId, VoiceId, known_voices};
pub use timeline::builder::{TimelineBuilder, segment_file_path};
pub use timeline::effects::apply_overlay_effects;
pub use timeline::model::{SegmentRecord, Timeline};
