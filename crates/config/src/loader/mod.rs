//! Configuration loader for the Minuet toolkit.
//!
//! Responsibilities:
//! - Locate the JSON config document (builder path, env var, or beside the executable).
//! - Merge present keys over the compiled-in defaults, field by field.
//! - Coerce memory-region addresses from `0x` strings or integers.
//! - Collect every recoverable problem as a `ConfigWarning`.
//!
//! Does NOT handle:
//! - Writing configuration files (see `persistence`).
//! - Cross-field validation such as overlapping regions.
//!
//! Invariants / Assumptions:
//! - Loading never fails and never panics; the worst case is the default snapshot.
//! - Loading the same document twice yields identical outcomes.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.

mod address;
mod builder;
mod document;
mod env;
mod error;
mod overrides;

#[cfg(test)]
mod tests;

pub use address::{coerce_address, parse_hex};
pub use builder::{ConfigLoader, ConfigSource, LoadOutcome, load};
pub use error::{ConfigError, ConfigWarning};
