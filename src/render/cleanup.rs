use std::path::Path;

use crate::timeline::model::Timeline;

/// Delete every segment audio file and the concatenated audio file.
///
/// Already-missing files are a no-op, not an error; other IO failures are
/// logged and do not interrupt the remaining deletions. Runs on both the
/// success and the terminal-failure path of the pipeline so intermediates
/// are never silently leaked.
pub fn cleanup(timeline: &Timeline, concatenated: &Path) {
    for record in timeline.records() {
        remove_quiet(&record.file);
    }
    remove_quiet(concatenated);
    tracing::debug!(segments = timeline.len(), "cleaned up intermediate audio");
}

fn remove_quiet(path: &Path) {
    match std::fs::remove_file(path) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => {
            tracing::warn!(file = %path.display(), error = %e, "failed to remove intermediate file");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/cleanup.rs"]
mod tests;
