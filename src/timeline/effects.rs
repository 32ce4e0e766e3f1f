use crate::{overlay::model::Overlay, timeline::model::Timeline};

/// Apply a caller-supplied effect to every record's overlay, in index order.
///
/// The effect sees the overlay only — timing fields, durations and file
/// paths are unreachable from it, so caption/audio synchronization cannot be
/// broken here. Effects are independent per overlay, though a caller's
/// closure may capture external state.
pub fn apply_overlay_effects(timeline: &mut Timeline, mut effect: impl FnMut(&mut Overlay)) {
    for record in timeline.records_mut() {
        effect(&mut record.overlay);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/effects.rs"]
mod tests;
