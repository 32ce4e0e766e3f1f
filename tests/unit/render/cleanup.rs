use super::*;

use crate::{
    overlay::model::{FixedStyler, OverlayStyler},
    synth::voice::{LanguageId, VoiceId},
    timeline::model::SegmentRecord,
};

fn record_with_file(dir: &Path, index: u32) -> SegmentRecord {
    let file = dir.join(format!("segment_{index}.wav"));
    std::fs::write(&file, b"audio").unwrap();
    let start = f64::from(index);
    SegmentRecord {
        index,
        text: "caption".to_string(),
        file,
        duration_sec: 1.0,
        start_sec: start,
        end_sec: start + 1.0,
        voice: VoiceId::default(),
        language: LanguageId::American,
        overlay: FixedStyler::default()
            .make_overlay("caption", start, 1.0)
            .unwrap(),
    }
}

#[test]
fn removes_segment_files_and_the_concatenated_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut timeline = Timeline::new();
    timeline.insert(record_with_file(dir.path(), 0)).unwrap();
    timeline.insert(record_with_file(dir.path(), 1)).unwrap();
    let concatenated = dir.path().join("concatenated_audio.wav");
    std::fs::write(&concatenated, b"audio").unwrap();

    cleanup(&timeline, &concatenated);

    for record in timeline.records() {
        assert!(!record.file.exists());
    }
    assert!(!concatenated.exists());
}

#[test]
fn missing_files_are_tolerated() {
    let dir = tempfile::tempdir().unwrap();
    let mut timeline = Timeline::new();
    let mut record = record_with_file(dir.path(), 0);
    record.file = dir.path().join("never_written.wav");
    timeline.insert(record).unwrap();

    // Neither the segment file nor the concatenated file exists.
    cleanup(&timeline, &dir.path().join("also_missing.wav"));
}

#[test]
fn unrelated_files_survive() {
    let dir = tempfile::tempdir().unwrap();
    let mut timeline = Timeline::new();
    timeline.insert(record_with_file(dir.path(), 0)).unwrap();
    let keep = dir.path().join("final_output.mp4");
    std::fs::write(&keep, b"video").unwrap();

    cleanup(&timeline, &dir.path().join("concatenated_audio.wav"));
    assert!(keep.exists());
}
