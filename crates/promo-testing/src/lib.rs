//! Testing infrastructure for promo integration tests.
//!
//! This crate provides utilities for writing integration tests:
//! - `TestWorld`: Isolated data directory plus CLI execution
//! - `assertions`: Checks against the JSON output envelope
//! - `fixtures`: Sample campaign rows and boards
//! - `doubles`: Recording backend, surface and impression source

pub mod assertions;
pub mod doubles;
pub mod fixtures;
pub mod world;

pub use doubles::{RecordingBackend, RecordingSurface, StaticImpressions};
pub use world::{CliResult, TestWorld};
