//! Testing infrastructure for ior-args integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: Fluent interface for building a results tree and running the CLI
//! - `assertions`: Helpers for inspecting rendered tables
//! - `fixtures`: Synthetic IOR output files and the reference parameter sweep

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
