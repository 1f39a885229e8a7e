mod commands;

pub use commands::{Cli, Commands, PriorityArg, SortKey};
