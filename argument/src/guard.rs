//! Guard clauses for function arguments.
//!
//! Each guard inspects one value and either hands it back or returns an
//! [`ArgumentError`] describing the first precondition it violates. Composite
//! guards always check presence before anything more specific, so a missing
//! value is reported as missing rather than as too short.
//!
//! Every guard verifies its own metadata first: an empty argument name, or a
//! description that is supplied but empty, fails with
//! [`ArgumentError::BadMetadata`]. When no description is given the argument
//! name doubles as the description.

use crate::errors::ArgumentError;
use crate::identifier::Identifier;
use std::fmt::Display;

/// Stateless collection of argument guards.
///
/// # Examples
///
/// ```no_run
/// use argument::{Argument, ArgumentError};
/// use uuid::Uuid;
///
/// fn load_order(id: i64, owner: Option<&str>, token: &str) -> Result<(), ArgumentError> {
///     Argument::require_positive_id(id, "id", Some("The order id"))?;
///     let owner = Argument::require_max_length(owner, "owner", 64)?;
///     let token: Uuid = Argument::require_identifier(token, "token")?;
///     Argument::require_non_empty_id(&token, "token")?;
///     println!("loading order {id} for {owner}");
///     Ok(())
/// }
/// ```
pub struct Argument;

impl Argument {
    /// Fails with [`ArgumentError::NullArgument`] when `value` is absent.
    pub fn require_not_null<T>(
        value: Option<T>,
        name: &str,
        description: Option<&str>,
    ) -> Result<T, ArgumentError> {
        let description = verify_metadata(name, description)?;

        match value {
            Some(value) => Ok(value),
            None => reject(ArgumentError::null(name, description)),
        }
    }

    /// Fails when a string is absent ([`NullArgument`](ArgumentError::NullArgument))
    /// or has no characters ([`EmptyArgument`](ArgumentError::EmptyArgument)).
    ///
    /// Whitespace counts as content.
    pub fn require_not_null_or_empty<'a>(
        value: impl Into<Option<&'a str>>,
        name: &str,
        description: Option<&str>,
    ) -> Result<&'a str, ArgumentError> {
        let description = verify_metadata(name, description)?;

        match value.into() {
            None => reject(ArgumentError::null(name, description)),
            Some("") => reject(ArgumentError::empty(name, description)),
            Some(value) => Ok(value),
        }
    }

    /// Sequence counterpart of [`require_not_null_or_empty`](Self::require_not_null_or_empty).
    ///
    /// Accepts anything whose reference can be iterated (`Vec`, slices, sets, maps).
    /// Only the first element is pulled to decide emptiness.
    pub fn require_not_null_or_empty_items<'a, C>(
        value: Option<&'a C>,
        name: &str,
        description: Option<&str>,
    ) -> Result<&'a C, ArgumentError>
    where
        C: ?Sized,
        &'a C: IntoIterator,
    {
        let description = verify_metadata(name, description)?;

        let Some(items) = value else {
            return reject(ArgumentError::null(name, description));
        };

        if IntoIterator::into_iter(items).next().is_none() {
            return reject(ArgumentError::empty(name, description));
        }

        Ok(items)
    }

    /// Database-style ids start at 1; anything lower is
    /// [`OutOfRange`](ArgumentError::OutOfRange).
    pub fn require_positive_id(
        value: i64,
        name: &str,
        description: Option<&str>,
    ) -> Result<(), ArgumentError> {
        let description = verify_metadata(name, description)?;

        if value < 1 {
            return reject(ArgumentError::out_of_range(
                name,
                value,
                format!("{description} must be at least 1."),
            ));
        }

        Ok(())
    }

    /// Rejects the identifier's sentinel value (the nil UUID for [`uuid::Uuid`]).
    pub fn require_non_empty_id<I: Identifier>(value: &I, name: &str) -> Result<(), ArgumentError> {
        verify_metadata(name, None)?;

        if value.is_sentinel() {
            return reject(ArgumentError::invalid(
                name,
                format!("The database id of {name} is empty"),
            ));
        }

        Ok(())
    }

    /// Parses `value` as identifier `I`, surrounding whitespace ignored.
    ///
    /// An absent value is reported the same way as an unparseable one.
    pub fn require_identifier<'a, I: Identifier>(
        value: impl Into<Option<&'a str>>,
        name: &str,
    ) -> Result<I, ArgumentError> {
        verify_metadata(name, None)?;

        match value.into().and_then(|text| text.trim().parse::<I>().ok()) {
            Some(id) => Ok(id),
            None => reject(ArgumentError::invalid(
                name,
                format!("The {name} is not a {}", I::KIND),
            )),
        }
    }

    /// Strict comparison: `value == threshold` fails.
    pub fn require_greater_than<T>(value: T, name: &str, threshold: T) -> Result<(), ArgumentError>
    where
        T: PartialOrd + Display,
    {
        verify_metadata(name, None)?;

        if value > threshold {
            return Ok(());
        }

        reject(ArgumentError::invalid(
            name,
            format!("Number {name} with a value of {value} is not greater than {threshold}"),
        ))
    }

    /// Requires a non-empty string of at most `max` characters.
    pub fn require_max_length<'a>(
        value: impl Into<Option<&'a str>>,
        name: &str,
        max: usize,
    ) -> Result<&'a str, ArgumentError> {
        let value = Self::require_not_null_or_empty(value, name, None)?;
        check_max_chars(value, name, max)
    }

    /// Like [`require_max_length`](Self::require_max_length) but an empty string passes.
    pub fn require_not_null_with_max_length<'a>(
        value: impl Into<Option<&'a str>>,
        name: &str,
        max: usize,
    ) -> Result<&'a str, ArgumentError> {
        let value = Self::require_not_null(value.into(), name, None)?;
        check_max_chars(value, name, max)
    }

    /// Requires a non-empty sequence of at most `max` elements.
    pub fn require_max_items<'a, C>(
        value: Option<&'a C>,
        name: &str,
        max: usize,
    ) -> Result<&'a C, ArgumentError>
    where
        C: ?Sized,
        &'a C: IntoIterator,
    {
        let items = Self::require_not_null_or_empty_items(value, name, None)?;

        let count = IntoIterator::into_iter(items).count();
        if count > max {
            return reject(ArgumentError::too_long(name, max, count, ""));
        }

        Ok(items)
    }

    /// Requires a present string of at least `min` characters.
    pub fn require_min_length<'a>(
        value: impl Into<Option<&'a str>>,
        name: &str,
        min: usize,
    ) -> Result<&'a str, ArgumentError> {
        let value = Self::require_not_null(value.into(), name, None)?;
        check_min_chars(value, name, min)
    }

    /// Like [`require_min_length`](Self::require_min_length) but an empty
    /// string is reported as empty before its length is considered.
    pub fn require_not_empty_with_min_length<'a>(
        value: impl Into<Option<&'a str>>,
        name: &str,
        min: usize,
    ) -> Result<&'a str, ArgumentError> {
        let value = Self::require_not_null_or_empty(value, name, None)?;
        check_min_chars(value, name, min)
    }
}

fn verify_metadata<'a>(
    name: &'a str,
    description: Option<&'a str>,
) -> Result<&'a str, ArgumentError> {
    if name.is_empty() {
        return reject(ArgumentError::bad_metadata("name"));
    }

    match description {
        None => Ok(name),
        Some("") => reject(ArgumentError::bad_metadata("description")),
        Some(description) => Ok(description),
    }
}

fn check_max_chars<'a>(value: &'a str, name: &str, max: usize) -> Result<&'a str, ArgumentError> {
    let length = value.chars().count();
    if length > max {
        return reject(ArgumentError::too_long(name, max, length, "characters"));
    }
    Ok(value)
}

fn check_min_chars<'a>(value: &'a str, name: &str, min: usize) -> Result<&'a str, ArgumentError> {
    let length = value.chars().count();
    if length < min {
        return reject(ArgumentError::too_short(name, min, length));
    }
    Ok(value)
}

fn reject<T>(error: ArgumentError) -> Result<T, ArgumentError> {
    match error {
        ArgumentError::BadMetadata { .. } => log::warn!("Guard called with bad metadata: {error}"),
        _ => log::debug!("Argument '{}' rejected: {error}", error.argument_name()),
    }
    Err(error)
}
