//! Integration test support crate
//!
//! Provides the test server harness and request fixtures used by the
//! end-to-end API tests.

pub mod fixtures;
pub mod helpers;

pub use helpers::{assert_json, assert_status, check_test_env, TestServer};
