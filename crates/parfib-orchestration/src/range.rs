//! Parallel evaluation of a contiguous Fibonacci index range.

use parfib_core::constants::MAX_FIB_U64;
use parfib_core::{fib_closed_form, FibError};

use crate::mapper::map_ordered;

/// Compute `count` consecutive Fibonacci values starting at `start`.
///
/// Indices are evaluated concurrently with [`map_ordered`] and returned in
/// index order. The whole range is validated up front: an index past
/// `MAX_FIB_U64` would wrap in u64, so it is reported as an overflow
/// instead of dispatching any work.
pub fn fib_range(start: u64, count: usize, degree: usize) -> Result<Vec<u64>, FibError> {
    if count == 0 {
        return Ok(Vec::new());
    }

    let last = start.checked_add(count as u64 - 1).ok_or_else(|| {
        FibError::Config(format!("index range {start} (+{count}) overflows u64"))
    })?;
    if last > MAX_FIB_U64 {
        return Err(FibError::Overflow(last));
    }

    let indices: Vec<u64> = (start..=last).collect();
    Ok(map_ordered(indices, degree, fib_closed_form))
}
