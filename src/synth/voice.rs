use crate::foundation::error::{ClipcastError, ClipcastResult};

/// Native sample rate of the Kokoro speech model, in Hz.
pub const KOKORO_NATIVE_SAMPLE_RATE: u32 = 24_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Language family a voice belongs to.
pub enum LanguageId {
    /// American English.
    American,
    /// British English.
    British,
    /// French.
    French,
    /// Japanese.
    Japanese,
}

impl LanguageId {
    /// Single-letter engine code for this language.
    pub fn code(self) -> char {
        match self {
            Self::American => 'a',
            Self::British => 'b',
            Self::French => 'f',
            Self::Japanese => 'j',
        }
    }

    /// Parse a single-letter engine code.
    pub fn from_code(code: char) -> ClipcastResult<Self> {
        match code {
            'a' => Ok(Self::American),
            'b' => Ok(Self::British),
            'f' => Ok(Self::French),
            'j' => Ok(Self::Japanese),
            other => Err(ClipcastError::validation(format!(
                "unknown language code '{other}'"
            ))),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
/// Identifier of a speech engine voice, e.g. `af_sarah`.
pub struct VoiceId(pub String);

impl Default for VoiceId {
    fn default() -> Self {
        Self("af_sarah".to_string())
    }
}

impl VoiceId {
    /// Create a voice identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Infer the voice's language from its identifier prefix.
    ///
    /// Kokoro voice names start with the language code followed by a gender
    /// letter (`af_`, `am_`, `bf_`, `bm_`, ...).
    pub fn language(&self) -> ClipcastResult<LanguageId> {
        let first = self.0.chars().next().ok_or_else(|| {
            ClipcastError::validation("voice identifier must be non-empty")
        })?;
        LanguageId::from_code(first)
    }
}

impl std::fmt::Display for VoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Known voices per language, as shipped by the Kokoro model.
pub fn known_voices(language: LanguageId) -> &'static [&'static str] {
    match language {
        LanguageId::American => &[
            "af_sarah",
            "af_olivia",
            "af_mia",
            "af_james",
            "am_adam",
            "am_michael",
        ],
        LanguageId::British => &["bm_george", "bm_lewis", "bf_emma", "bf_isabella"],
        LanguageId::French | LanguageId::Japanese => &[],
    }
}

#[cfg(test)]
#[path = "../../tests/unit/synth/voice.rs"]
mod tests;
