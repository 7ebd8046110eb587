//! Shared test helpers for `s21-core` integration tests.

pub mod review;
