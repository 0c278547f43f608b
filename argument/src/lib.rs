//! # Argument
//!
//! Guard clauses for function arguments plus a handful of small string helpers
//! built on top of them.
//!
//! ## Modules
//!
//! - [`guard`] - [`Argument`], null/empty/range/length/identifier checks
//! - [`strings`] - [`StringUtils`], predicates, casing, base64, split/join
//! - [`errors`] - [`ArgumentError`] returned by every failing check
//! - [`culture`] - explicit casing and comparison policy
//! - [`config`] - serde/TOML loadable text handling defaults
//! - [`identifier`] - identifier types with a sentinel "empty" value
//!
//! Every function is stateless and safe to call from any thread.

pub mod config;
pub mod culture;
pub mod errors;
pub mod guard;
pub mod identifier;
pub mod strings;

pub use config::TextSettings;
pub use culture::{Comparison, Culture};
pub use errors::{ArgumentError, ErrorKind};
pub use guard::Argument;
pub use identifier::Identifier;
pub use strings::StringUtils;
