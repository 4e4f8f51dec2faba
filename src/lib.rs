//! Workspace test package. See `tests/` for cross-crate golden tests.
