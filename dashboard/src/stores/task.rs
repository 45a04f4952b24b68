//! Task store

use std::sync::RwLock;

use tracing::debug;

use crate::models::task::{StandaloneTask, TaskId};

/// In-memory store of standalone tasks, kept in insertion order
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: RwLock<Vec<StandaloneTask>>,
}

impl TaskStore {
    /// Create an empty task store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a task as-is. IDs are not checked for uniqueness.
    pub fn add_task(&self, task: StandaloneTask) {
        let mut tasks = self.tasks.write().unwrap_or_else(|e| e.into_inner());
        debug!("Added task {}", task.id);
        tasks.push(task);
    }

    /// Overwrite the status of the first task with this ID.
    /// Does nothing if there is no such task.
    pub fn update_task_status(&self, task_id: impl Into<TaskId>, status: impl Into<String>) {
        let task_id = task_id.into();
        let mut tasks = self.tasks.write().unwrap_or_else(|e| e.into_inner());
        if let Some(task) = tasks.iter_mut().find(|t| t.id == task_id) {
            task.status = status.into();
        }
    }

    /// Get the first task with this ID
    pub fn get_task(&self, task_id: impl Into<TaskId>) -> Option<StandaloneTask> {
        let task_id = task_id.into();
        let tasks = self.tasks.read().unwrap_or_else(|e| e.into_inner());
        tasks.iter().find(|t| t.id == task_id).cloned()
    }

    /// ID of the first task whose ID renders as `segment`, so a URL path
    /// can address both numeric and string IDs
    pub fn resolve_id(&self, segment: &str) -> Option<TaskId> {
        let tasks = self.tasks.read().unwrap_or_else(|e| e.into_inner());
        tasks
            .iter()
            .find(|t| t.id.matches_segment(segment))
            .map(|t| t.id.clone())
    }

    /// Snapshot of all tasks in insertion order
    pub fn tasks(&self) -> Vec<StandaloneTask> {
        let tasks = self.tasks.read().unwrap_or_else(|e| e.into_inner());
        tasks.clone()
    }

    /// Number of tasks
    pub fn len(&self) -> usize {
        let tasks = self.tasks.read().unwrap_or_else(|e| e.into_inner());
        tasks.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
