//! Common test utilities for gselect CLI tests.
//!
//! This module provides:
//! - `TestEnv`: Isolated test environment with a temp HOME and config dir
//! - Fixtures: Reusable catalog content

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
