//! The in-memory task collection and its operations.
//!
//! `TaskList` is pure: it owns the one ordered `Vec<Task>` and mutates it,
//! nothing else. Persistence is wired on top by [`crate::tracker::Tracker`].
//! Tasks are addressed by their session-scoped numeric id, assigned here.

use crate::error::{OkraError, Result};
use crate::model::{Priority, Task};
use chrono::NaiveDate;

#[derive(Debug, Default)]
pub struct TaskList {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole collection, e.g. from a freshly loaded file.
    /// Ids are reassigned in order, starting at 1.
    pub fn replace(&mut self, tasks: Vec<Task>) {
        self.tasks = tasks;
        for (i, task) in self.tasks.iter_mut().enumerate() {
            task.id = i as u64 + 1;
        }
        self.next_id = self.tasks.len() as u64;
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    fn get_mut(&mut self, id: u64) -> Result<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(OkraError::NotFound(id))
    }

    /// Appends a new open task. The description is trimmed and must not be
    /// blank; past deadlines are allowed (confirmation is the caller's job).
    pub fn add(
        &mut self,
        text: &str,
        deadline: Option<NaiveDate>,
        priority: Priority,
    ) -> Result<&Task> {
        let text = validate_text(text)?;
        self.next_id += 1;
        let task = Task::new(self.next_id, text)
            .with_deadline(deadline)
            .with_priority(priority);
        tracing::debug!(id = task.id, "Adding task");
        self.tasks.push(task);
        Ok(self.tasks.last().unwrap())
    }

    pub fn set_completed(&mut self, id: u64, completed: bool) -> Result<()> {
        self.get_mut(id)?.completed = completed;
        Ok(())
    }

    pub fn edit_text(&mut self, id: u64, new_text: &str) -> Result<()> {
        let new_text = validate_text(new_text)?;
        self.get_mut(id)?.text = new_text;
        Ok(())
    }

    pub fn remove(&mut self, id: u64) -> Result<Task> {
        let pos = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(OkraError::NotFound(id))?;
        Ok(self.tasks.remove(pos))
    }

    /// Drops every completed task and reports how many were dropped.
    /// Zero is a valid "nothing to do" outcome, not an error.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        before - self.tasks.len()
    }

    /// Stable ascending by deadline; tasks without one sort last.
    pub fn sort_by_deadline(&mut self) {
        self.tasks
            .sort_by_key(|t| t.deadline.unwrap_or(NaiveDate::MAX));
    }

    /// Stable ascending by priority rank (High first).
    pub fn sort_by_priority(&mut self) {
        self.tasks.sort_by_key(|t| t.priority.rank());
    }
}

fn validate_text(text: &str) -> Result<String> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(OkraError::Validation(
            "Task description cannot be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn texts(list: &TaskList) -> Vec<&str> {
        list.tasks().iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn add_appends_open_task() {
        let mut list = TaskList::new();
        let id = list
            .add("Buy milk", None, Priority::Medium)
            .unwrap()
            .id;
        assert_eq!(list.len(), 1);
        let task = list.get(id).unwrap();
        assert!(!task.completed);
        assert_eq!(task.text, "Buy milk");
    }

    #[test]
    fn add_trims_and_rejects_blank() {
        let mut list = TaskList::new();
        assert!(matches!(
            list.add("", None, Priority::Medium),
            Err(OkraError::Validation(_))
        ));
        assert!(matches!(
            list.add("   ", None, Priority::Medium),
            Err(OkraError::Validation(_))
        ));
        assert!(list.is_empty());

        list.add("  padded  ", None, Priority::Low).unwrap();
        assert_eq!(list.tasks()[0].text, "padded");
    }

    #[test]
    fn ids_are_unique_and_monotonic() {
        let mut list = TaskList::new();
        let a = list.add("a", None, Priority::Medium).unwrap().id;
        let b = list.add("b", None, Priority::Medium).unwrap().id;
        list.remove(a).unwrap();
        let c = list.add("c", None, Priority::Medium).unwrap().id;
        assert!(b > a);
        assert!(c > b); // removed ids are not recycled within a session
    }

    #[test]
    fn edit_text_validates_and_replaces() {
        let mut list = TaskList::new();
        let id = list.add("old", None, Priority::Medium).unwrap().id;
        assert!(matches!(
            list.edit_text(id, "  "),
            Err(OkraError::Validation(_))
        ));
        assert_eq!(list.get(id).unwrap().text, "old");

        list.edit_text(id, " new ").unwrap();
        assert_eq!(list.get(id).unwrap().text, "new");
    }

    #[test]
    fn mutations_on_missing_id_fail_loudly() {
        let mut list = TaskList::new();
        assert!(matches!(list.remove(42), Err(OkraError::NotFound(42))));
        assert!(matches!(
            list.set_completed(42, true),
            Err(OkraError::NotFound(42))
        ));
        assert!(matches!(
            list.edit_text(42, "x"),
            Err(OkraError::NotFound(42))
        ));
    }

    #[test]
    fn clear_completed_reports_count() {
        let mut list = TaskList::new();
        let a = list.add("a", None, Priority::Medium).unwrap().id;
        list.add("b", None, Priority::Medium).unwrap();

        assert_eq!(list.clear_completed(), 0);
        assert_eq!(list.len(), 2);

        list.set_completed(a, true).unwrap();
        assert_eq!(list.clear_completed(), 1);
        assert_eq!(texts(&list), vec!["b"]);
    }

    #[test]
    fn toggle_then_clear_empties_list() {
        let mut list = TaskList::new();
        let id = list.add("Task A", None, Priority::Medium).unwrap().id;
        list.set_completed(id, true).unwrap();
        assert_eq!(list.clear_completed(), 1);
        assert!(list.is_empty());
    }

    #[test]
    fn sort_by_deadline_puts_undated_last() {
        let mut list = TaskList::new();
        list.add("no date", None, Priority::Medium).unwrap();
        list.add("late", Some(date("2025-02-01")), Priority::Medium)
            .unwrap();
        list.add("early", Some(date("2025-01-01")), Priority::Medium)
            .unwrap();
        list.add("also no date", None, Priority::Medium).unwrap();

        list.sort_by_deadline();
        assert_eq!(texts(&list), vec!["early", "late", "no date", "also no date"]);
    }

    #[test]
    fn sorts_are_stable() {
        let mut list = TaskList::new();
        list.add("m1", None, Priority::Medium).unwrap();
        list.add("h1", None, Priority::High).unwrap();
        list.add("m2", None, Priority::Medium).unwrap();
        list.add("h2", None, Priority::High).unwrap();

        list.sort_by_priority();
        assert_eq!(texts(&list), vec!["h1", "h2", "m1", "m2"]);

        // equal deadlines keep their relative order
        let mut list = TaskList::new();
        let d = Some(date("2025-01-01"));
        list.add("first", d, Priority::Low).unwrap();
        list.add("second", d, Priority::High).unwrap();
        list.sort_by_deadline();
        assert_eq!(texts(&list), vec!["first", "second"]);
    }

    #[test]
    fn sort_scenario_deadline_then_priority() {
        let mut list = TaskList::new();
        list.add("Buy milk", Some(date("2025-01-15")), Priority::High)
            .unwrap();
        list.add("Pay rent", Some(date("2025-01-01")), Priority::Medium)
            .unwrap();

        list.sort_by_deadline();
        assert_eq!(texts(&list), vec!["Pay rent", "Buy milk"]);

        list.sort_by_priority();
        assert_eq!(texts(&list), vec!["Buy milk", "Pay rent"]);
    }

    #[test]
    fn replace_renumbers_ids() {
        let mut list = TaskList::new();
        list.replace(vec![
            Task::new(0, "a".to_string()),
            Task::new(0, "b".to_string()),
        ]);
        let ids: Vec<u64> = list.tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);

        let id = list.add("c", None, Priority::Medium).unwrap().id;
        assert_eq!(id, 3);
    }
}
