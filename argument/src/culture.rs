//! Explicit casing and comparison policy.
//!
//! String helpers that lower-case or compare text take a [`Culture`] (and for
//! substring search a [`Comparison`]) instead of reading an ambient locale, so
//! the same input always produces the same output regardless of where the
//! code runs.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Casing rules applied by culture-aware string helpers.
///
/// Only cultures whose case mapping differs from the Unicode default need a
/// dedicated variant; every other locale tag resolves to [`Culture::Invariant`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Culture {
    /// Unicode default case mapping.
    #[default]
    Invariant,
    /// Turkish and Azerbaijani: dotted and dotless `i` are distinct letters.
    Turkic,
}

impl Culture {
    /// Resolve a BCP-47 style tag such as `"tr-TR"`, `"az_Latn"` or `"en-US"`.
    pub fn from_tag(tag: &str) -> Self {
        let language = tag
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        match language.as_str() {
            "tr" | "az" => Culture::Turkic,
            _ => Culture::Invariant,
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Culture::Invariant => "invariant",
            Culture::Turkic => "tr",
        }
    }

    pub fn to_lowercase(&self, value: &str) -> String {
        match self {
            Culture::Invariant => value.to_lowercase(),
            Culture::Turkic => {
                let mut lowered = String::with_capacity(value.len());
                for c in value.chars() {
                    match c {
                        'I' => lowered.push('ı'),
                        'İ' => lowered.push('i'),
                        _ => lowered.extend(c.to_lowercase()),
                    }
                }
                lowered
            }
        }
    }
}

impl From<String> for Culture {
    fn from(tag: String) -> Self {
        Culture::from_tag(&tag)
    }
}

impl From<Culture> for String {
    fn from(culture: Culture) -> Self {
        culture.tag().to_string()
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// How [`StringUtils::contains`](crate::StringUtils::contains) matches text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Comparison {
    /// Exact code point match.
    #[default]
    Ordinal,
    /// Code point match after simple upper-case folding, independent of culture.
    OrdinalIgnoreCase,
    /// Culture-sensitive, case-sensitive.
    Culture,
    /// Culture-sensitive, case-insensitive.
    CultureIgnoreCase,
}

impl Comparison {
    /// True for the modes that fold case before matching.
    pub fn ignores_case(&self) -> bool {
        matches!(
            self,
            Comparison::OrdinalIgnoreCase | Comparison::CultureIgnoreCase
        )
    }

    /// Bring `value` into the form in which two strings are compared.
    pub(crate) fn fold(&self, value: &str, culture: &Culture) -> String {
        match self {
            Comparison::Ordinal | Comparison::Culture => value.to_string(),
            Comparison::OrdinalIgnoreCase => value.chars().map(simple_uppercase).collect(),
            Comparison::CultureIgnoreCase => culture.to_lowercase(value),
        }
    }
}

// One-to-one mapping only; characters that expand (e.g. `ß`) are kept as is.
fn simple_uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
