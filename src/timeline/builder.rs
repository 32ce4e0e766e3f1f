use std::path::{Path, PathBuf};

use crate::{
    audio::{buffer::AudioBuffer, resample, wav},
    foundation::config::PipelineConfig,
    foundation::error::{ClipcastError, ClipcastResult},
    overlay::model::OverlayStyler,
    segment::splitter::Segment,
    synth::engine::{SpeechEngine, collect_chunks},
    synth::voice::LanguageId,
    timeline::model::{SegmentRecord, Timeline},
};

/// Outcome of driving one segment through the per-segment state machine
/// `Pending -> Synthesized -> Normalized -> Persisted -> Stamped`, with
/// `Skipped` terminal on any failure.
#[derive(Debug)]
enum SegmentOutcome {
    Stamped(Box<SegmentRecord>),
    Skipped { index: u32, reason: ClipcastError },
}

/// Builds a [`Timeline`] by driving each segment through synthesis,
/// normalization, persistence and stamping.
///
/// The speech engine and the overlay styler are injected capabilities; tests
/// substitute deterministic fakes. One builder run exclusively owns its
/// output directory — callers must serialize runs per directory.
pub struct TimelineBuilder<'a> {
    config: &'a PipelineConfig,
    engine: &'a dyn SpeechEngine,
    styler: &'a dyn OverlayStyler,
}

impl<'a> TimelineBuilder<'a> {
    /// Create a builder over the given capabilities.
    pub fn new(
        config: &'a PipelineConfig,
        engine: &'a dyn SpeechEngine,
        styler: &'a dyn OverlayStyler,
    ) -> Self {
        Self {
            config,
            engine,
            styler,
        }
    }

    /// Drive every segment in index order and collect the stamped records.
    ///
    /// Segments execute strictly sequentially: the running duration is a
    /// sequential accumulator, and stamping must happen in index order. A
    /// failed segment is logged and skipped, never retried; its index is
    /// simply absent from the result. Aborting mid-run leaves already
    /// persisted files behind for the caller to clean up.
    #[tracing::instrument(skip(self, segments))]
    pub fn build(&self, segments: &[Segment]) -> ClipcastResult<Timeline> {
        self.config.validate()?;
        let language = self.config.voice.language()?;

        let mut timeline = Timeline::new();
        let mut running_total = 0.0f64;
        for segment in segments {
            match self.run_segment(segment, language, running_total) {
                SegmentOutcome::Stamped(record) => {
                    running_total = record.end_sec;
                    tracing::debug!(
                        segment = record.index,
                        duration_sec = record.duration_sec,
                        start_sec = record.start_sec,
                        "stamped segment"
                    );
                    timeline.insert(*record)?;
                }
                SegmentOutcome::Skipped { index, reason } => {
                    tracing::warn!(segment = index, %reason, "skipping segment");
                }
            }
        }

        tracing::info!(
            requested = segments.len(),
            stamped = timeline.len(),
            "timeline build finished"
        );
        Ok(timeline)
    }

    /// Per-segment state machine. Any error short-circuits into `Skipped`.
    fn run_segment(
        &self,
        segment: &Segment,
        language: LanguageId,
        running_total: f64,
    ) -> SegmentOutcome {
        match self.synthesize_and_persist(segment) {
            Ok((file, duration_sec)) => {
                match self.stamp(segment, language, file.clone(), duration_sec, running_total) {
                    Ok(record) => SegmentOutcome::Stamped(Box::new(record)),
                    Err(reason) => {
                        // No record references the file; remove it now or it
                        // outlives cleanup.
                        if let Err(e) = std::fs::remove_file(&file)
                            && e.kind() != std::io::ErrorKind::NotFound
                        {
                            tracing::warn!(
                                segment = segment.index,
                                file = %file.display(),
                                error = %e,
                                "failed to remove orphaned segment file"
                            );
                        }
                        SegmentOutcome::Skipped {
                            index: segment.index,
                            reason,
                        }
                    }
                }
            }
            Err(reason) => SegmentOutcome::Skipped {
                index: segment.index,
                reason,
            },
        }
    }

    /// `Pending -> Synthesized -> Normalized -> Persisted`.
    ///
    /// Returns the persisted file path and the duration derived from the
    /// normalized buffer's sample count.
    fn synthesize_and_persist(&self, segment: &Segment) -> ClipcastResult<(PathBuf, f64)> {
        let chunks = self.engine.synthesize(&segment.text, &self.config.voice)?;
        let samples = collect_chunks(chunks)?;

        let native = AudioBuffer {
            samples,
            sample_rate: self.engine.native_sample_rate(),
            segment_index: segment.index,
        };
        let normalized = resample::normalize(native, self.config.target_sample_rate)?;
        let duration_sec = normalized.duration_sec();

        let file = segment_file_path(&self.config.output_dir, segment.index);
        wav::write_wav_mono(&file, &normalized.samples, normalized.sample_rate)?;
        Ok((file, duration_sec))
    }

    /// `Persisted -> Stamped`: assign timestamps and create the overlay.
    ///
    /// The running total advances by the segment duration only — the
    /// inter-segment delay is injected at concatenation, never here.
    fn stamp(
        &self,
        segment: &Segment,
        language: LanguageId,
        file: PathBuf,
        duration_sec: f64,
        running_total: f64,
    ) -> ClipcastResult<SegmentRecord> {
        let start_sec = running_total;
        let end_sec = running_total + duration_sec;
        let overlay = self
            .styler
            .make_overlay(&segment.text, start_sec, duration_sec)?;
        Ok(SegmentRecord {
            index: segment.index,
            text: segment.text.clone(),
            file,
            duration_sec,
            start_sec,
            end_sec,
            voice: self.config.voice.clone(),
            language,
            overlay,
        })
    }
}

/// Deterministic, collision-free per-index segment file name.
pub fn segment_file_path(output_dir: &Path, index: u32) -> PathBuf {
    output_dir.join(format!("segment_{index}.wav"))
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/builder.rs"]
mod tests;
