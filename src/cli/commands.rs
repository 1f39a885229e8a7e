use crate::model::Priority;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "okra")]
#[command(
    author,
    version,
    about = "A tiny flat-file to-do list for your terminal"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the data file (overrides .okra.toml)
    #[arg(long, global = true, env = "OKRA_FILE")]
    pub file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write logs to this file in addition to stderr
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a new task
    #[command(visible_alias = "a")]
    Add {
        /// Task description
        text: String,

        /// Deadline in YYYY-MM-DD form
        #[arg(short, long)]
        due: Option<String>,

        /// Priority level
        #[arg(short, long, value_enum, default_value = "medium")]
        priority: PriorityArg,

        /// Accept a deadline in the past without asking
        #[arg(short, long)]
        yes: bool,
    },

    /// List all tasks
    #[command(visible_alias = "ls")]
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Mark a task as completed
    Done {
        /// Task number as shown by `okra list`
        id: u64,
    },

    /// Mark a completed task as open again
    Undone {
        /// Task number as shown by `okra list`
        id: u64,
    },

    /// Replace a task's description
    Edit {
        /// Task number as shown by `okra list`
        id: u64,

        /// New description
        text: String,
    },

    /// Delete a task permanently
    #[command(visible_alias = "rm")]
    Delete {
        /// Task number as shown by `okra list`
        id: u64,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Remove every completed task
    Clear,

    /// Reorder the list and print it
    Sort {
        /// Sort key
        #[arg(value_enum)]
        by: SortKey,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum PriorityArg {
    Low,
    Medium,
    High,
}

impl From<PriorityArg> for Priority {
    fn from(arg: PriorityArg) -> Self {
        match arg {
            PriorityArg::Low => Priority::Low,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::High => Priority::High,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortKey {
    Deadline,
    Priority,
}
