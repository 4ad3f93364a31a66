//! Test helpers shared by the ringgraph crates.

pub mod proptest_profile;
pub mod scenarios;
pub mod tracing;
