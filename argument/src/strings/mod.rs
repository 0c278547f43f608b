//! # String Helpers
//!
//! Small, stateless string predicates and transforms. Helpers with
//! preconditions run the matching [`Argument`] guard first and return its
//! error unchanged.
//!
//! Inputs are taken as `impl Into<Option<&str>>`, so callers can pass a plain
//! `&str` or an `Option<&str>` they have not unwrapped yet:
//!
//! ```no_run
//! use argument::{Culture, StringUtils};
//!
//! let maybe_name: Option<&str> = None;
//! assert!(StringUtils::is_null_or_whitespace(maybe_name));
//! assert_eq!(StringUtils::to_lowercase("TITLE", &Culture::Turkic)?, "tıtle");
//! # Ok::<(), argument::ArgumentError>(())
//! ```
//!
//! ## Casing And Comparison
//!
//! Nothing here consults the process locale. Lower-casing takes an explicit
//! [`Culture`]; substring search additionally takes a [`Comparison`] mode;
//! [`trim_end`](StringUtils::trim_end) always matches its suffix exactly.

mod encoding;
mod format;

use crate::culture::{Comparison, Culture};
use crate::errors::ArgumentError;
use crate::guard::Argument;
use std::fmt::Display;

/// Stateless collection of string helpers.
pub struct StringUtils;

impl StringUtils {
    /// `true` when lower-casing `value` under `culture` leaves it unchanged.
    ///
    /// Strings without cased letters (digits, punctuation, empty) count as lowercase.
    pub fn is_all_lowercase<'a>(
        value: impl Into<Option<&'a str>>,
        culture: &Culture,
    ) -> Result<bool, ArgumentError> {
        let value = Argument::require_not_null(value.into(), "value", None)?;
        Ok(culture.to_lowercase(value) == value)
    }

    pub fn is_null<'a>(value: impl Into<Option<&'a str>>) -> bool {
        value.into().is_none()
    }

    /// `true` when the string is present and has at least one character.
    pub fn is_not_empty<'a>(value: impl Into<Option<&'a str>>) -> bool {
        value.into().is_some_and(|value| !value.is_empty())
    }

    pub fn base64_encode<'a>(text: impl Into<Option<&'a str>>) -> Result<String, ArgumentError> {
        encoding::encode(text)
    }

    /// Fails with [`ArgumentError::InvalidFormat`] when `encoded` is not
    /// canonical, padded, standard-alphabet base64. Spaces, tabs and line
    /// breaks are skipped.
    pub fn base64_decode<'a>(
        encoded: impl Into<Option<&'a str>>,
    ) -> Result<String, ArgumentError> {
        encoding::decode(encoded)
    }

    /// Substitute `{index}` or `{index,alignment}` placeholders in `template`
    /// with `args`. `{{` and `}}` are literal braces.
    pub fn format_with<'a>(
        template: impl Into<Option<&'a str>>,
        args: &[&dyn Display],
    ) -> Result<String, ArgumentError> {
        format::format_with(template, args)
    }

    pub fn to_lowercase<'a>(
        value: impl Into<Option<&'a str>>,
        culture: &Culture,
    ) -> Result<String, ArgumentError> {
        let value = Argument::require_not_null(value.into(), "value", None)?;
        Ok(culture.to_lowercase(value))
    }

    /// `true` when absent, empty, or made only of Unicode whitespace.
    pub fn is_null_or_whitespace<'a>(value: impl Into<Option<&'a str>>) -> bool {
        value.into().is_none_or(|value| value.chars().all(char::is_whitespace))
    }

    pub fn is_not_null_or_whitespace<'a>(value: impl Into<Option<&'a str>>) -> bool {
        !Self::is_null_or_whitespace(value)
    }

    /// Substring search under `comparison`.
    ///
    /// Never fails: an absent or empty `source` contains nothing, and an
    /// absent `value` is never found. An empty `value` is found in any
    /// non-empty `source`.
    pub fn contains<'a, 'b>(
        source: impl Into<Option<&'a str>>,
        value: impl Into<Option<&'b str>>,
        comparison: Comparison,
        culture: &Culture,
    ) -> bool {
        let (Some(source), Some(value)) = (source.into(), value.into()) else {
            return false;
        };
        if source.is_empty() {
            return false;
        }

        if comparison.ignores_case() {
            comparison
                .fold(source, culture)
                .contains(&comparison.fold(value, culture))
        } else {
            source.contains(value)
        }
    }

    /// Remove one trailing `suffix` from `input`, matched exactly.
    pub fn trim_end<'a>(
        input: impl Into<Option<&'a str>>,
        suffix: impl Into<Option<&'a str>>,
    ) -> Result<&'a str, ArgumentError> {
        let input = Argument::require_not_null(input.into(), "input", None)?;
        let suffix = Argument::require_not_null(suffix.into(), "suffix", None)?;

        Ok(input.strip_suffix(suffix).unwrap_or(input))
    }

    /// Join trimmed elements with `separator`.
    ///
    /// A separator is appended after every element and one trailing separator
    /// is removed at the end, so an element that itself ends with the
    /// separator keeps it.
    pub fn to_separated<'a, I>(
        source: Option<I>,
        separator: impl Into<Option<&'a str>>,
    ) -> Result<String, ArgumentError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let source = Argument::require_not_null(source, "source", None)?;
        let separator = Argument::require_not_null(separator.into(), "separator", None)?;

        let mut joined = String::new();
        for item in source {
            joined.push_str(item.as_ref().trim());
            joined.push_str(separator);
        }

        let trimmed = Self::trim_end(joined.as_str(), separator)?.len();
        joined.truncate(trimmed);
        Ok(joined)
    }

    /// Lazily wrap every element as `token + element + token`.
    pub fn wrap_each<'a, I>(
        source: Option<I>,
        token: &'a str,
    ) -> Result<impl Iterator<Item = String>, ArgumentError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let source = Argument::require_not_null(source, "source", None)?;
        Ok(source
            .into_iter()
            .map(move |item| format!("{token}{}{token}", item.as_ref())))
    }

    /// Split on every character that appears in `separator`, keeping empty pieces.
    ///
    /// An empty `source` yields no pieces at all. An empty `separator`
    /// splits on Unicode whitespace.
    pub fn to_split<'a>(
        source: impl Into<Option<&'a str>>,
        separator: impl Into<Option<&'a str>>,
    ) -> Result<Vec<&'a str>, ArgumentError> {
        let source = Argument::require_not_null(source.into(), "source", None)?;
        let separator = Argument::require_not_null(separator.into(), "separator", None)?;

        if source.is_empty() {
            return Ok(Vec::new());
        }

        if separator.is_empty() {
            return Ok(source.split(char::is_whitespace).collect());
        }

        Ok(source.split(|c: char| separator.contains(c)).collect())
    }

    /// Strip every `\n` and `\r`.
    pub fn remove_line_breaks<'a>(
        input: impl Into<Option<&'a str>>,
    ) -> Result<String, ArgumentError> {
        let input = Argument::require_not_null(input.into(), "input", None)?;
        Ok(input.chars().filter(|c| !matches!(c, '\n' | '\r')).collect())
    }

    pub fn to_empty_if_null<'a>(input: impl Into<Option<&'a str>>) -> &'a str {
        input.into().unwrap_or_default()
    }
}
