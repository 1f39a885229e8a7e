//! Glue between the task list and its store.
//!
//! Every mutating operation delegates to [`TaskList`] and, if the mutation
//! succeeded, triggers exactly one save. A failed save is logged and
//! swallowed here: persistence trouble must never abort the in-memory
//! session, the list in memory stays the source of truth until exit.
//!
//! Sort operations do not save. That mirrors the upstream behavior, where a
//! restart after sorting reverts to the last-saved order; see DESIGN.md.

use crate::error::Result;
use crate::list::TaskList;
use crate::model::{Priority, Task};
use crate::store::TaskStore;
use chrono::NaiveDate;
use std::path::PathBuf;

pub struct Tracker {
    list: TaskList,
    store: TaskStore,
}

impl Tracker {
    /// Opens the tracker on the given data file, loading whatever is there.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let store = TaskStore::new(path);
        let mut list = TaskList::new();
        list.replace(store.load());
        Self { list, store }
    }

    pub fn tasks(&self) -> &[Task] {
        self.list.tasks()
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.list.get(id)
    }

    pub fn add(
        &mut self,
        text: &str,
        deadline: Option<NaiveDate>,
        priority: Priority,
    ) -> Result<Task> {
        let task = self.list.add(text, deadline, priority)?.clone();
        self.persist();
        Ok(task)
    }

    pub fn set_completed(&mut self, id: u64, completed: bool) -> Result<()> {
        self.list.set_completed(id, completed)?;
        self.persist();
        Ok(())
    }

    pub fn edit_text(&mut self, id: u64, new_text: &str) -> Result<()> {
        self.list.edit_text(id, new_text)?;
        self.persist();
        Ok(())
    }

    pub fn remove(&mut self, id: u64) -> Result<Task> {
        let task = self.list.remove(id)?;
        self.persist();
        Ok(task)
    }

    pub fn clear_completed(&mut self) -> usize {
        let removed = self.list.clear_completed();
        if removed > 0 {
            self.persist();
        }
        removed
    }

    pub fn sort_by_deadline(&mut self) {
        self.list.sort_by_deadline();
    }

    pub fn sort_by_priority(&mut self) {
        self.list.sort_by_priority();
    }

    /// Explicit save for flush-on-exit; unlike the post-mutation hook this
    /// one reports failure to the caller.
    pub fn flush(&self) -> Result<()> {
        self.store.save(self.list.tasks())
    }

    // Post-mutation hook. Best effort: the mutation already happened and
    // stands regardless of whether the write sticks.
    fn persist(&self) {
        if let Err(e) = self.store.save(self.list.tasks()) {
            tracing::error!(path = %self.store.path().display(), error = %e, "Failed to save tasks");
        }
    }
}
