use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::{
    foundation::error::{ClipcastError, ClipcastResult},
    overlay::model::Overlay,
    synth::voice::{LanguageId, VoiceId},
};

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
/// The timed, persisted result of synthesizing one segment.
///
/// `duration_sec` is derived from the normalized buffer's sample count and
/// is authoritative; it is never re-derived from file metadata later.
pub struct SegmentRecord {
    /// Original segment index (gaps from skipped segments are preserved).
    pub index: u32,
    /// Segment text.
    pub text: String,
    /// Path of the persisted segment WAV file.
    pub file: PathBuf,
    /// Audio duration in seconds.
    pub duration_sec: f64,
    /// Start time on the output timeline, in seconds.
    pub start_sec: f64,
    /// End time on the output timeline (`start_sec + duration_sec`).
    pub end_sec: f64,
    /// Voice used for synthesis.
    pub voice: VoiceId,
    /// Language of the voice.
    pub language: LanguageId,
    /// Caption overlay synchronized to this segment.
    pub overlay: Overlay,
}

#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
/// Ordered mapping from segment index to [`SegmentRecord`].
///
/// Records keep their original split indices, so a skipped segment leaves a
/// gap rather than renumbering its successors. Iteration is always in index
/// order.
pub struct Timeline {
    records: BTreeMap<u32, SegmentRecord>,
}

impl Timeline {
    /// Create an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of usable (non-skipped) segments.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` when no segment survived the build.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Insert a stamped record under its own index.
    pub fn insert(&mut self, record: SegmentRecord) -> ClipcastResult<()> {
        if self.records.contains_key(&record.index) {
            return Err(ClipcastError::validation(format!(
                "duplicate segment index {}",
                record.index
            )));
        }
        self.records.insert(record.index, record);
        Ok(())
    }

    /// Iterate records in index order.
    pub fn records(&self) -> impl Iterator<Item = &SegmentRecord> {
        self.records.values()
    }

    /// Iterate records mutably in index order.
    pub(crate) fn records_mut(&mut self) -> impl Iterator<Item = &mut SegmentRecord> {
        self.records.values_mut()
    }

    /// Look up a record by original segment index.
    pub fn get(&self, index: u32) -> Option<&SegmentRecord> {
        self.records.get(&index)
    }

    /// Original indices present in the timeline, in order.
    pub fn indices(&self) -> impl Iterator<Item = u32> + '_ {
        self.records.keys().copied()
    }

    /// Total output duration in seconds for a given inter-segment delay.
    ///
    /// `Σ duration + (n-1) * delay`. This formula (not the merged file's
    /// measured length) is the canonical timing source of truth for all
    /// downstream trimming decisions.
    pub fn total_duration_sec(&self, inter_segment_delay_sec: f64) -> f64 {
        if self.records.is_empty() {
            return 0.0;
        }
        let sum: f64 = self.records.values().map(|r| r.duration_sec).sum();
        sum + (self.records.len() - 1) as f64 * inter_segment_delay_sec
    }

    /// Validate timing invariants across the record sequence.
    ///
    /// The first record starts at 0, every later record starts exactly where
    /// its predecessor ended, and durations are non-negative. Stamps come
    /// from one sequential accumulator, so the comparisons are exact.
    pub fn validate(&self) -> ClipcastResult<()> {
        let mut prev_end: Option<f64> = None;
        for record in self.records.values() {
            if record.duration_sec < 0.0 {
                return Err(ClipcastError::validation(format!(
                    "segment {} has negative duration",
                    record.index
                )));
            }
            let expected_start = prev_end.unwrap_or(0.0);
            if record.start_sec != expected_start {
                return Err(ClipcastError::validation(format!(
                    "segment {} starts at {} but previous segment ended at {expected_start}",
                    record.index, record.start_sec
                )));
            }
            if record.end_sec != record.start_sec + record.duration_sec {
                return Err(ClipcastError::validation(format!(
                    "segment {} end_sec does not equal start_sec + duration_sec",
                    record.index
                )));
            }
            prev_end = Some(record.end_sec);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/model.rs"]
mod tests;
