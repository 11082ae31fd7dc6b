//! Shared building blocks: the input error type and monetary rounding.

pub mod error;
pub mod money;

pub use error::CoreError;
pub use money::round_to_cents;
