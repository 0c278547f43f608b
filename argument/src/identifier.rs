use std::str::FromStr;
use uuid::Uuid;

/// An identifier type with a reserved "no identifier" value.
///
/// Guards use [`is_sentinel`](Identifier::is_sentinel) to reject ids that were
/// never assigned, and [`FromStr`] to turn caller input into an id.
pub trait Identifier: FromStr + Sized {
    /// Human-readable name of the identifier format, used in error messages.
    const KIND: &'static str;

    fn is_sentinel(&self) -> bool;
}

impl Identifier for Uuid {
    const KIND: &'static str = "Guid";

    fn is_sentinel(&self) -> bool {
        self.is_nil()
    }
}
