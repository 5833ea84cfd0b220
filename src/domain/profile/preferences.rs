//! User preferences carried on the profile but opaque to the cycle engine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Food preference used when suggesting nutrition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietPreference {
    #[default]
    #[serde(alias = "veg")]
    Vegetarian,
    #[serde(alias = "non-veg")]
    NonVegetarian,
}

impl fmt::Display for DietPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DietPreference::Vegetarian => "vegetarian",
            DietPreference::NonVegetarian => "non-vegetarian",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for DietPreference {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "vegetarian" | "veg" => Ok(DietPreference::Vegetarian),
            "non-vegetarian" | "non-veg" | "nonvegetarian" => Ok(DietPreference::NonVegetarian),
            other => Err(ValidationError::invalid_format(
                "diet_preference",
                format!("unknown diet '{other}'"),
            )),
        }
    }
}

/// Conversation and insight language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Telugu,
    Tamil,
    Kannada,
}

impl Language {
    /// English name of the language.
    pub fn label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "Hindi",
            Language::Telugu => "Telugu",
            Language::Tamil => "Tamil",
            Language::Kannada => "Kannada",
        }
    }

    /// Name of the language in its own script.
    pub fn native_label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिंदी",
            Language::Telugu => "తెలుగు",
            Language::Tamil => "தமிழ்",
            Language::Kannada => "ಕನ್ನಡ",
        }
    }

    /// BCP-47 tag handed to speech recognition.
    pub fn speech_code(&self) -> &'static str {
        match self {
            Language::English => "en-IN",
            Language::Hindi => "hi-IN",
            Language::Telugu => "te-IN",
            Language::Tamil => "ta-IN",
            Language::Kannada => "kn-IN",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label().to_ascii_lowercase())
    }
}

impl FromStr for Language {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "english" | "en" => Ok(Language::English),
            "hindi" | "hi" => Ok(Language::Hindi),
            "telugu" | "te" => Ok(Language::Telugu),
            "tamil" | "ta" => Ok(Language::Tamil),
            "kannada" | "kn" => Ok(Language::Kannada),
            other => Err(ValidationError::invalid_format(
                "language",
                format!("unsupported language '{other}'"),
            )),
        }
    }
}
