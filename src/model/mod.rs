mod task;
mod types;

pub use task::Task;
pub use types::Priority;
