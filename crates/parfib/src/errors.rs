//! Error handling and exit codes.

use parfib_core::constants::exit_codes;
use parfib_core::FibError;

/// Map an application error to the process exit code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<FibError>() {
        Some(FibError::Overflow(_)) => exit_codes::ERROR_OVERFLOW,
        Some(FibError::Config(_)) => exit_codes::ERROR_CONFIG,
        None => exit_codes::ERROR_GENERIC,
    }
}
