//! Error type for Fibonacci range requests.

use crate::constants::MAX_FIB_U64;

/// Error type for Fibonacci range requests.
///
/// The closed-form evaluation itself is total; these errors are raised by
/// range validation before any work is dispatched.
#[derive(Debug, thiserror::Error)]
pub enum FibError {
    /// The requested index produces a value that a u64 cannot represent.
    #[error("F({0}) does not fit in a u64 (largest representable index is {max})", max = MAX_FIB_U64)]
    Overflow(u64),

    /// Invalid range configuration.
    #[error("configuration error: {0}")]
    Config(String),
}
