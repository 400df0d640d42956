//! Small, self-contained helper utilities with no shared state.
//!
//! - `db` - SQLite query execution against a caller-provided connection
//! - `math` - generic arithmetic
//! - `ordering` - key-based three-way comparison
//! - `random` - random alphabetic string generation

pub mod db;
pub mod error;
pub mod math;
pub mod ordering;
pub mod random;

// Re-export common types for convenience
pub use error::{Error, Result};
