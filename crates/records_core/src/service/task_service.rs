//! Task use-case service.

use crate::model::task::Task;
use crate::repo::record_store::{RecordResult, RecordStore};
use std::collections::BTreeMap;

/// Task list backed by an in-memory record store.
#[derive(Debug, Default)]
pub struct TaskService {
    store: RecordStore<Task>,
}

impl TaskService {
    /// Creates an empty task list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a task; fails with `AlreadyExists` on a duplicate id.
    pub fn add_task(&mut self, task: Task) -> RecordResult<()> {
        self.store.add(task)
    }

    /// Deletes a task by id; fails with `NotFound` when absent.
    pub fn delete_task(&mut self, task_id: &str) -> RecordResult<Task> {
        self.store.delete(task_id)
    }

    /// Looks up one task by id.
    pub fn get_task(&self, task_id: &str) -> Option<&Task> {
        self.store.get(task_id)
    }

    /// All tasks keyed by id.
    pub fn tasks(&self) -> &BTreeMap<String, Task> {
        self.store.get_all()
    }

    /// Replaces the task name; `NotFound` or `InvalidArgument` on failure.
    pub fn update_task_name(
        &mut self,
        task_id: &str,
        name: impl Into<String>,
    ) -> RecordResult<&Task> {
        self.store.update(task_id, |task| task.set_name(name))
    }

    /// Replaces the task description; `NotFound` or `InvalidArgument` on
    /// failure.
    pub fn update_task_description(
        &mut self,
        task_id: &str,
        description: impl Into<String>,
    ) -> RecordResult<&Task> {
        self.store
            .update(task_id, |task| task.set_description(description))
    }

    /// Number of stored tasks.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns whether no task is stored.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
