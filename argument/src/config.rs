use crate::culture::{Comparison, Culture};
use crate::errors::ArgumentError;
use serde::{Deserialize, Serialize};

/// Text handling defaults a host application can keep in its own config file.
///
/// The library never reads this on its own; callers load it once and hand
/// [`culture`](TextSettings::culture) and [`comparison`](TextSettings::comparison)
/// to the string helpers that need them.
///
/// ```toml
/// culture = "tr-TR"
/// comparison = "culture-ignore-case"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextSettings {
    culture: Culture,
    comparison: Comparison,
}

impl TextSettings {
    pub fn new(culture: Culture, comparison: Comparison) -> Self {
        Self {
            culture,
            comparison,
        }
    }

    /// Parse settings from a TOML document. Missing keys fall back to defaults.
    pub fn from_toml_str(document: &str) -> Result<Self, ArgumentError> {
        toml::from_str(document).map_err(|e| {
            log::warn!("Rejected text settings document: {e}");
            ArgumentError::invalid_format("document", e.message())
        })
    }

    pub fn culture(&self) -> &Culture {
        &self.culture
    }

    pub fn comparison(&self) -> Comparison {
        self.comparison
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use claims::*;

    #[test]
    fn test_empty_document_yields_defaults() {
        let settings = assert_ok!(TextSettings::from_toml_str(""));
        assert_eq!(settings, TextSettings::default());
        assert_eq!(settings.culture(), &Culture::Invariant);
        assert_eq!(settings.comparison(), Comparison::Ordinal);
    }

    #[test]
    fn test_full_document() {
        let settings = assert_ok!(TextSettings::from_toml_str(
            "culture = \"tr-TR\"\ncomparison = \"culture-ignore-case\"\n"
        ));
        assert_eq!(settings.culture(), &Culture::Turkic);
        assert_eq!(settings.comparison(), Comparison::CultureIgnoreCase);
    }

    #[test]
    fn test_unknown_comparison_is_invalid_format() {
        let error = assert_err!(TextSettings::from_toml_str("comparison = \"fuzzy\""));
        assert_eq!(error.kind(), ErrorKind::InvalidFormat);
    }

    #[test]
    fn test_settings_round_trip_through_json() {
        let settings = TextSettings::new(Culture::Turkic, Comparison::OrdinalIgnoreCase);
        let json = assert_ok!(serde_json::to_string(&settings));
        assert_eq!(json, r#"{"culture":"tr","comparison":"ordinal-ignore-case"}"#);

        let back: TextSettings = assert_ok!(serde_json::from_str(&json));
        assert_eq!(back, settings);
    }
}
