use crate::{
    foundation::error::{ClipcastError, ClipcastResult},
    overlay::style::CaptionStyle,
};

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// A caption overlay whose visible window matches one segment's audio.
///
/// Overlays are created once by an [`OverlayStyler`] when a segment is
/// stamped, and mutated afterwards only through the effect pipeline — and
/// even then only the visual fields, never the timing.
pub struct Overlay {
    /// Caption text, identical to the segment text.
    pub text: String,
    /// Visible-from time on the output timeline, in seconds.
    pub start_sec: f64,
    /// Visible duration, in seconds.
    pub duration_sec: f64,
    /// Visual style.
    pub style: CaptionStyle,
    /// Uniform scale factor applied to the rendered caption.
    pub scale: f64,
    /// Effect stack attached by the effect pipeline.
    pub effects: Vec<OverlayEffect>,
}

impl Overlay {
    /// Visible-until time on the output timeline, in seconds.
    pub fn end_sec(&self) -> f64 {
        self.start_sec + self.duration_sec
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// Raw effect instance attached to an overlay.
pub struct OverlayEffect {
    /// Effect kind identifier, e.g. `pop-in`.
    pub kind: String,
    /// Effect parameter object.
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub params: serde_json::Value,
}

/// Capability seam over the external caption-rendering collaborator.
///
/// The timeline builder supplies only text plus timing plus style; what the
/// collaborator does with them is opaque to the engine. Injected so tests can
/// substitute a deterministic fake.
pub trait OverlayStyler {
    /// Create the overlay for one stamped segment.
    fn make_overlay(
        &self,
        text: &str,
        start_sec: f64,
        duration_sec: f64,
    ) -> ClipcastResult<Overlay>;
}

/// Styler that applies one fixed [`CaptionStyle`] to every segment.
#[derive(Clone, Debug, Default)]
pub struct FixedStyler {
    /// Style applied to every overlay.
    pub style: CaptionStyle,
}

impl FixedStyler {
    /// Create a styler from a style.
    pub fn new(style: CaptionStyle) -> Self {
        Self { style }
    }
}

impl OverlayStyler for FixedStyler {
    fn make_overlay(
        &self,
        text: &str,
        start_sec: f64,
        duration_sec: f64,
    ) -> ClipcastResult<Overlay> {
        if text.trim().is_empty() {
            return Err(ClipcastError::validation("overlay text must be non-empty"));
        }
        Ok(Overlay {
            text: text.to_string(),
            start_sec,
            duration_sec,
            style: self.style.clone(),
            scale: 1.0,
            effects: Vec::new(),
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/model.rs"]
mod tests;
