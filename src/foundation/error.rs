use crate::synth::engine::SynthesisError;

/// Convenience result type used across clipcast.
pub type ClipcastResult<T> = Result<T, ClipcastError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Per-segment failures (`Synthesis`, `Normalization`, `Persistence`) are
/// recoverable: the timeline builder logs them and skips the segment. The
/// remaining variants are terminal for the whole run.
#[derive(thiserror::Error, Debug)]
pub enum ClipcastError {
    /// Invalid user-provided configuration or argument data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Malformed or empty input text; raised before any synthesis starts.
    #[error("segmentation error: {0}")]
    Segmentation(String),

    /// The speech engine returned nothing usable for one segment.
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),

    /// Resampling produced a zero-length output for one segment.
    #[error("normalization error: {0}")]
    Normalization(String),

    /// A segment audio file could not be written or read back.
    #[error("persistence error: {0}")]
    Persistence(String),

    /// Every segment failed; there is nothing to concatenate or render.
    #[error("empty timeline: no usable segments")]
    EmptyTimeline,

    /// The external compositor failed to produce an encoded file.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ClipcastError {
    /// Build a [`ClipcastError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`ClipcastError::Segmentation`] value.
    pub fn segmentation(msg: impl Into<String>) -> Self {
        Self::Segmentation(msg.into())
    }

    /// Build a [`ClipcastError::Normalization`] value.
    pub fn normalization(msg: impl Into<String>) -> Self {
        Self::Normalization(msg.into())
    }

    /// Build a [`ClipcastError::Persistence`] value.
    pub fn persistence(msg: impl Into<String>) -> Self {
        Self::Persistence(msg.into())
    }

    /// Build a [`ClipcastError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// `true` when the error only invalidates a single segment, not the run.
    pub fn is_segment_local(&self) -> bool {
        matches!(
            self,
            Self::Synthesis(_) | Self::Normalization(_) | Self::Persistence(_)
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
