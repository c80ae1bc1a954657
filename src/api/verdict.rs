/// Verdict derivation from the classification response
///
/// The API describes its decision in a free-form `description` string.
/// Only two phrases are recognized; everything else is surfaced as-is.
use std::fmt;

use serde_json::Value;

/// Phrase the backend emits when it flags a manipulated image
const DEEPFAKE_PHRASE: &str = "Deepfake Detected.";

/// Phrase the backend emits when the image looks authentic
const REAL_PHRASE: &str = "This is a real image";

/// Human-readable outcome of one classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// The description contained the deepfake phrase
    Deepfake,
    /// The description contained the real-image phrase
    Real,
    /// A description was present but matched neither phrase
    Uncertain(String),
    /// The payload had no usable `description` field
    Unexpected,
}

impl Verdict {
    /// Derive a verdict from the decoded response payload.
    ///
    /// The deepfake phrase is checked first, so a description containing
    /// both phrases still reads as a detection. A missing `description`,
    /// or one that is not a string, yields `Unexpected`.
    pub fn from_payload(payload: &Value) -> Self {
        match payload.get("description").and_then(Value::as_str) {
            None => Verdict::Unexpected,
            Some(description) if description.contains(DEEPFAKE_PHRASE) => Verdict::Deepfake,
            Some(description) if description.contains(REAL_PHRASE) => Verdict::Real,
            Some(description) => Verdict::Uncertain(description.to_string()),
        }
    }

    /// Whether this verdict should render in the danger color
    pub fn is_deepfake(&self) -> bool {
        matches!(self, Verdict::Deepfake)
    }

    /// Whether this verdict should render in the success color
    pub fn is_real(&self) -> bool {
        matches!(self, Verdict::Real)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Deepfake => write!(f, "Deepfake detected"),
            Verdict::Real => write!(f, "Image is real"),
            Verdict::Uncertain(description) => write!(f, "Uncertain result: {}", description),
            Verdict::Unexpected => write!(f, "Unexpected API response."),
        }
    }
}
