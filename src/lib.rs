//! # Okra - a tiny flat-file to-do list
//!
//! Okra keeps a single ordered list of tasks in memory and mirrors it to one
//! JSON file (`todo_data.json` by default) after every change. The file is
//! plain UTF-8 and human-inspectable, so it survives inspection, editing and
//! version control just fine.
//!
//! ## Quick Start
//!
//! ```bash
//! # Add tasks
//! okra add "Buy milk" --due 2025-01-15 --priority high
//! okra add "Pay rent"
//!
//! # See them
//! okra list
//!
//! # Check one off and sweep completed ones away
//! okra done 1
//! okra clear
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: Configuration loading (`.okra.toml`)
//! - [`error`]: Error types and result alias
//! - [`list`]: The in-memory task collection and its operations
//! - [`model`]: Data model (`Task`, `Priority`)
//! - [`store`]: JSON file persistence
//! - [`tracker`]: List + store with save-after-every-mutation

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading.
///
/// Handles the optional `.okra.toml` file in the working directory.
pub mod config;

/// Error types and result aliases.
///
/// Defines the `OkraError` enum and `Result<T>` type alias.
pub mod error;

/// The in-memory task collection.
pub mod list;

/// Data model for tasks.
pub mod model;

/// JSON file storage layer.
pub mod store;

/// Ties the task list to its store with a post-mutation save hook.
pub mod tracker;

pub mod logging;
