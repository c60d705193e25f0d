//! Testing infrastructure for teamdeck integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: isolated data directory with a seeded team database
//! - `fixtures`: team database builder and the shared sample team
//! - `assertions`: checks over the CLI's JSON envelopes

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use fixtures::{FIXED_NOW, TeamDb};
pub use world::{CliResult, TestWorld};
