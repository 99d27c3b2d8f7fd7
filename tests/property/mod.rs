//! Property-based tests for the overlay merge

mod determinism;
