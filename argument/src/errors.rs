use thiserror::Error;

/// Errors produced when an argument fails a guard clause.
///
/// Every variant carries the declared name of the offending argument and a
/// human-readable message, so a failure can be traced back to the exact
/// precondition that was violated. The rendered form follows
/// `"<message> (Parameter '<name>')"`.
///
/// # Error Categories
///
/// ## Presence
/// - [`NullArgument`] - a required value was absent
/// - [`EmptyArgument`] - a string or sequence was present but empty
///
/// ## Value
/// - [`OutOfRange`] - a numeric id was below its lower bound
/// - [`InvalidArgument`] - a value failed a comparison or identifier check
/// - [`InvalidFormat`] - text could not be decoded or parsed
///
/// ## Length
/// - [`LengthExceeded`] - longer than the allowed maximum
/// - [`LengthTooShort`] - shorter than the required minimum
///
/// ## Caller Misuse
/// - [`BadMetadata`] - the argument name or description passed to a guard was empty
///
/// # Examples
///
/// ```no_run
/// use argument::{Argument, ArgumentError};
///
/// fn rename(user: Option<&str>) -> Result<String, ArgumentError> {
///     let user = Argument::require_not_null_or_empty(user, "user", Some("The user name"))?;
///     Ok(user.to_uppercase())
/// }
///
/// match rename(Some("")) {
///     Err(ArgumentError::EmptyArgument { name, .. }) => assert_eq!(name, "user"),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
///
/// [`NullArgument`]: ArgumentError::NullArgument
/// [`EmptyArgument`]: ArgumentError::EmptyArgument
/// [`OutOfRange`]: ArgumentError::OutOfRange
/// [`InvalidArgument`]: ArgumentError::InvalidArgument
/// [`InvalidFormat`]: ArgumentError::InvalidFormat
/// [`LengthExceeded`]: ArgumentError::LengthExceeded
/// [`LengthTooShort`]: ArgumentError::LengthTooShort
/// [`BadMetadata`]: ArgumentError::BadMetadata
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgumentError {
    /// A required value was absent.
    #[error("{message} (Parameter '{name}')")]
    NullArgument { name: String, message: String },

    /// A string or sequence was present but held nothing.
    #[error("{message} (Parameter '{name}')")]
    EmptyArgument { name: String, message: String },

    /// A numeric value fell below the accepted range.
    ///
    /// # Fields
    /// - `value`: the rejected value, kept for diagnostics
    #[error("{message} (Parameter '{name}', Actual value was {value})")]
    OutOfRange {
        name: String,
        value: i64,
        message: String,
    },

    /// A value was present but not acceptable.
    #[error("{message} (Parameter '{name}')")]
    InvalidArgument { name: String, message: String },

    /// Text was not in the expected encoding or template syntax.
    #[error("{name} is not in a valid format: {reason}")]
    InvalidFormat { name: String, reason: String },

    /// A string or sequence was longer than allowed.
    #[error("{message} (Parameter '{name}')")]
    LengthExceeded {
        name: String,
        max: usize,
        actual: usize,
        message: String,
    },

    /// A string was shorter than required.
    #[error("{message} (Parameter '{name}')")]
    LengthTooShort {
        name: String,
        min: usize,
        actual: usize,
        message: String,
    },

    /// The metadata handed to a guard was itself invalid.
    ///
    /// `name` is the guard parameter that was misused (`name` or
    /// `description`), not the argument under test.
    #[error("{message} (Parameter '{name}')")]
    BadMetadata { name: String, message: String },
}

/// Discriminant of [`ArgumentError`], handy for matching without fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NullArgument,
    EmptyArgument,
    OutOfRange,
    InvalidArgument,
    InvalidFormat,
    LengthExceeded,
    LengthTooShort,
    BadMetadata,
}

impl ArgumentError {
    pub fn null(name: impl Into<String>, description: &str) -> Self {
        Self::NullArgument {
            name: name.into(),
            message: format!("{description} cannot be null."),
        }
    }

    pub fn empty(name: impl Into<String>, description: &str) -> Self {
        Self::EmptyArgument {
            name: name.into(),
            message: format!("{description} cannot be empty."),
        }
    }

    pub fn out_of_range(name: impl Into<String>, value: i64, message: impl Into<String>) -> Self {
        Self::OutOfRange {
            name: name.into(),
            value,
            message: message.into(),
        }
    }

    pub fn invalid(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            message: message.into(),
        }
    }

    pub fn invalid_format(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn too_long(name: impl Into<String>, max: usize, actual: usize, unit: &str) -> Self {
        let name = name.into();
        let message = if unit.is_empty() {
            format!("The length of {name} exceeds {max}")
        } else {
            format!("The length of {name} exceeds {max} {unit}")
        };
        Self::LengthExceeded {
            name,
            max,
            actual,
            message,
        }
    }

    pub fn too_short(name: impl Into<String>, min: usize, actual: usize) -> Self {
        let name = name.into();
        let message = format!("The length of {name} is less than {min} characters");
        Self::LengthTooShort {
            name,
            min,
            actual,
            message,
        }
    }

    pub fn bad_metadata(parameter: &str) -> Self {
        Self::BadMetadata {
            name: parameter.to_string(),
            message: format!("argument {parameter} cannot be empty."),
        }
    }

    /// Name of the argument (or guard parameter) the error refers to.
    pub fn argument_name(&self) -> &str {
        match self {
            Self::NullArgument { name, .. }
            | Self::EmptyArgument { name, .. }
            | Self::OutOfRange { name, .. }
            | Self::InvalidArgument { name, .. }
            | Self::InvalidFormat { name, .. }
            | Self::LengthExceeded { name, .. }
            | Self::LengthTooShort { name, .. }
            | Self::BadMetadata { name, .. } => name,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NullArgument { .. } => ErrorKind::NullArgument,
            Self::EmptyArgument { .. } => ErrorKind::EmptyArgument,
            Self::OutOfRange { .. } => ErrorKind::OutOfRange,
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            Self::LengthExceeded { .. } => ErrorKind::LengthExceeded,
            Self::LengthTooShort { .. } => ErrorKind::LengthTooShort,
            Self::BadMetadata { .. } => ErrorKind::BadMetadata,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_parameter_name() {
        let error = ArgumentError::null("customer", "The customer");
        assert_eq!(
            error.to_string(),
            "The customer cannot be null. (Parameter 'customer')"
        );
    }

    #[test]
    fn test_out_of_range_reports_value() {
        let error = ArgumentError::out_of_range("id", -4, "id must be at least 1.");
        assert_eq!(
            error.to_string(),
            "id must be at least 1. (Parameter 'id', Actual value was -4)"
        );
        assert_eq!(error.kind(), ErrorKind::OutOfRange);
    }

    #[test]
    fn test_too_long_message_with_and_without_unit() {
        let chars = ArgumentError::too_long("title", 10, 12, "characters");
        assert!(
            chars
                .to_string()
                .starts_with("The length of title exceeds 10 characters")
        );

        let items = ArgumentError::too_long("tags", 3, 5, "");
        assert!(items.to_string().starts_with("The length of tags exceeds 3 ("));
    }

    #[test]
    fn test_argument_name_is_uniform_across_variants() {
        let errors = [
            ArgumentError::null("a", "a"),
            ArgumentError::empty("a", "a"),
            ArgumentError::out_of_range("a", 0, "m"),
            ArgumentError::invalid("a", "m"),
            ArgumentError::invalid_format("a", "r"),
            ArgumentError::too_long("a", 1, 2, ""),
            ArgumentError::too_short("a", 2, 1),
        ];
        for error in &errors {
            assert_eq!(error.argument_name(), "a");
        }
        assert_eq!(ArgumentError::bad_metadata("name").argument_name(), "name");
    }
}
