//! Test Module
//!
//! Crate-level tests that exercise several components together.
//!
//! ## Test Categories
//! - `feature_tests`: properties of the individual statistics on real tagged text
//! - `integration_tests`: full extraction with default and stub engines

pub mod feature_tests;
