//! Derivation of the displayed list from the store.

use crate::task::Task;
use std::fmt;

/// Completion-status predicate selected by the filter buttons.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Filter {
    #[default]
    All,
    Pending,
    Completed,
}

impl Filter {
    pub const ALL: [Filter; 3] = [Filter::All, Filter::Pending, Filter::Completed];

    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::All => true,
            Filter::Pending => !task.completed,
            Filter::Completed => task.completed,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Pending => "pending",
            Filter::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Filter::All => "All",
            Filter::Pending => "Pending",
            Filter::Completed => "Completed",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive substring match against the text or the due date.
/// An empty term matches everything.
pub fn matches_search(task: &Task, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    task.text.to_lowercase().contains(&term) || task.due_date.to_lowercase().contains(&term)
}

/// Tasks to display for the given filter and search term, in store order.
pub fn visible_tasks<'a>(tasks: &'a [Task], filter: Filter, search: &str) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|task| filter.matches(task))
        .filter(|task| matches_search(task, search))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::Priority;

    fn sample() -> Vec<Task> {
        let mut done = Task::new(2, "Pay rent", "2024-02-01", Priority::High);
        done.completed = true;
        vec![
            Task::new(3, "Buy Milk", "2024-01-01", Priority::Low),
            done,
            Task::new(1, "Read book", "", Priority::Medium),
        ]
    }

    fn ids(tasks: &[&Task]) -> Vec<i64> {
        tasks.iter().map(|task| task.id).collect()
    }

    #[test]
    fn all_filter_keeps_every_task_in_order() {
        let tasks = sample();

        assert_eq!(ids(&visible_tasks(&tasks, Filter::All, "")), vec![3, 2, 1]);
    }

    #[test]
    fn pending_filter_keeps_incomplete_tasks() {
        let tasks = sample();

        assert_eq!(ids(&visible_tasks(&tasks, Filter::Pending, "")), vec![3, 1]);
    }

    #[test]
    fn completed_filter_keeps_completed_tasks() {
        let tasks = sample();

        assert_eq!(ids(&visible_tasks(&tasks, Filter::Completed, "")), vec![2]);
    }

    #[test]
    fn search_matches_text_case_insensitively() {
        let tasks = sample();

        assert_eq!(ids(&visible_tasks(&tasks, Filter::All, "milk")), vec![3]);
        assert_eq!(ids(&visible_tasks(&tasks, Filter::All, "MILK")), vec![3]);
        assert!(visible_tasks(&tasks, Filter::All, "eggs").is_empty());
    }

    #[test]
    fn search_matches_due_date() {
        let tasks = sample();

        assert_eq!(ids(&visible_tasks(&tasks, Filter::All, "2024")), vec![3, 2]);
        assert_eq!(ids(&visible_tasks(&tasks, Filter::All, "no due")), vec![1]);
    }

    #[test]
    fn search_and_filter_combine() {
        let tasks = sample();

        assert_eq!(ids(&visible_tasks(&tasks, Filter::Pending, "2024")), vec![3]);
    }
}
