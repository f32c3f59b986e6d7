//! # Presentation Layer
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] --> [ Output ]
//! ```
//!
//! * `view_models/`: serializable data contracts; the JSON output is exactly
//!   these structs wrapped in [`CommandOutput`].
//! * `presenters/`: pure functions from runtime state to view models.
//! * `views/`: `fmt::Display` for the plain text output.
//! * `renderers/`: picks JSON or text and prints badge, content and next steps.

pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{Badge, CommandOutput, NextStep, Outcome};
