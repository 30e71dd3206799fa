//! Compile tests for `#[derive(Describe)]`; see `tests/compile.rs`.
