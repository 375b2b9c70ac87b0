//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod export;
pub mod form;
pub mod review;
pub mod submit;

pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use form::{run_form, FormCommand};
pub use review::{handle_review_command, load_queue, ReviewCommands};
pub use submit::handle_submit_command;
