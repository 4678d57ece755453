//! Common test utilities for amisync-aws
//!
//! Provides a mock cloud catalog and shared constants for resolution tests.

#![allow(dead_code)]

pub mod mock_cloud;

pub use mock_cloud::*;

/// Account that owns every published test image
pub const ACCOUNT: &str = "126027368216";

/// Release version used throughout the tests
pub const VERSION: &str = "14.2.0";
