//! The task store: the ordered task list plus its persistence backend.
//!
//! Every mutation that changes the list writes the full list back through the
//! backend. Calls that change nothing (blank text, unknown id) report that and
//! skip the write.

use crate::persistence::{StoreError, TaskPersistence};
use crate::task::{Priority, Task, TaskId};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use tracing::{debug, info, warn};

#[derive(Debug)]
pub struct TaskStore<P> {
    tasks: Vec<Task>,
    persistence: P,
    revision: u64,
}

impl<P: TaskPersistence> TaskStore<P> {
    /// Rehydrates the list from the backend. Missing or unreadable data yields
    /// an empty store.
    pub fn load(persistence: P) -> Self {
        let tasks = match persistence.load() {
            Ok(tasks) => {
                info!(count = tasks.len(), "Loaded tasks");
                tasks
            }
            Err(err) => {
                warn!(%err, "Discarding unreadable task data");
                Vec::new()
            }
        };
        Self {
            tasks,
            persistence,
            revision: 0,
        }
    }

    /// Writes the full list to the backend.
    pub fn save(&mut self) -> Result<(), StoreError> {
        self.persistence.save(&self.tasks)
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn ids(&self) -> Vec<TaskId> {
        self.tasks.iter().map(|task| task.id).collect()
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn persistence(&self) -> &P {
        &self.persistence
    }

    /// Bumped on every in-memory change, whether or not the write succeeded.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Prepends a new task created now. Returns `None` if `text` is blank.
    pub fn add(
        &mut self,
        text: &str,
        due_date: &str,
        priority: Priority,
    ) -> Result<Option<TaskId>, StoreError> {
        self.add_at(Utc::now(), text, due_date, priority)
    }

    /// Same as [`TaskStore::add`] with an explicit creation time.
    pub fn add_at(
        &mut self,
        created_at: DateTime<Utc>,
        text: &str,
        due_date: &str,
        priority: Priority,
    ) -> Result<Option<TaskId>, StoreError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }

        let id = self.next_id(created_at);
        self.tasks.insert(0, Task::new(id, text, due_date, priority));
        self.revision += 1;
        debug!(id, "Added task");
        self.save()?;
        Ok(Some(id))
    }

    /// Flips completion. Returns the new state, or `None` if the id is unknown.
    pub fn toggle(&mut self, id: TaskId) -> Result<Option<bool>, StoreError> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(None);
        };
        task.completed = !task.completed;
        let completed = task.completed;
        self.revision += 1;
        debug!(id, completed, "Toggled task");
        self.save()?;
        Ok(Some(completed))
    }

    /// Replaces the text of a task. Blank replacements and unknown ids change nothing.
    pub fn edit(&mut self, id: TaskId, new_text: &str) -> Result<bool, StoreError> {
        let new_text = new_text.trim();
        if new_text.is_empty() {
            return Ok(false);
        }
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            return Ok(false);
        };
        task.text = new_text.to_string();
        self.revision += 1;
        debug!(id, "Edited task");
        self.save()?;
        Ok(true)
    }

    /// Deletes a task, returning it if it existed.
    pub fn remove(&mut self, id: TaskId) -> Result<Option<Task>, StoreError> {
        let Some(index) = self.tasks.iter().position(|task| task.id == id) else {
            return Ok(None);
        };
        let removed = self.tasks.remove(index);
        self.revision += 1;
        debug!(id, "Removed task");
        self.save()?;
        Ok(Some(removed))
    }

    /// Reorders tasks to follow `sequence`.
    ///
    /// The listed tasks are permuted among the positions they already occupy,
    /// so a full sequence yields exactly that order while a partial one (a
    /// filtered view) leaves every unlisted task where it was. Unknown and
    /// repeated ids are ignored. Returns whether the order changed.
    pub fn reorder(&mut self, sequence: &[TaskId]) -> Result<bool, StoreError> {
        let mut seen = HashSet::new();
        let sequence: Vec<TaskId> = sequence
            .iter()
            .copied()
            .filter(|id| self.get(*id).is_some() && seen.insert(*id))
            .collect();

        let positions: Vec<usize> = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, task)| seen.contains(&task.id))
            .map(|(index, _)| index)
            .collect();

        let unchanged = positions
            .iter()
            .zip(&sequence)
            .all(|(&index, &id)| self.tasks[index].id == id);
        if unchanged {
            return Ok(false);
        }

        let reordered: Vec<Task> = sequence
            .iter()
            .filter_map(|id| self.get(*id).cloned())
            .collect();
        for (index, task) in positions.into_iter().zip(reordered) {
            self.tasks[index] = task;
        }
        self.revision += 1;
        debug!(?sequence, "Reordered tasks");
        self.save()?;
        Ok(true)
    }

    /// Uses the creation timestamp unless it would collide with or precede an
    /// existing id. Past `TaskId::MAX` it falls back to the lowest free id.
    fn next_id(&self, created_at: DateTime<Utc>) -> TaskId {
        let stamp = created_at.timestamp_millis();
        let Some(max) = self.tasks.iter().map(|task| task.id).max() else {
            return stamp;
        };
        if stamp > max {
            return stamp;
        }
        if let Some(next) = max.checked_add(1) {
            return next;
        }

        let taken: HashSet<TaskId> = self.tasks.iter().map(|task| task.id).collect();
        (TaskId::MIN..=TaskId::MAX)
            .find(|id| !taken.contains(id))
            .unwrap_or(stamp)
    }
}
