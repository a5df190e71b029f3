//! In-memory task store.
//!
//! The store owns an ordered list of tasks and the auto-increment counter
//! that hands out ids. All CRUD and pagination logic lives here; the HTTP
//! layer is a thin translation on top.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::RwLock;

// ─────────────────────────────────────────────────────────────────────────────
// Task Types
// ─────────────────────────────────────────────────────────────────────────────

/// A single task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned once at creation and never reused
    pub id: u64,
    /// Short task title
    pub title: String,
    /// Longer free-form description
    pub description: String,
    /// Completion flag, false for new tasks
    pub completed: bool,
}

/// One page of tasks plus the unfiltered store size.
#[derive(Debug, Clone, Serialize)]
pub struct TaskPage {
    pub tasks: Vec<Task>,
    #[serde(rename = "totalTasks")]
    pub total_tasks: usize,
}

/// Errors produced by store operations.
///
/// `NotFound` maps to HTTP 404; every other variant is a validation
/// failure and maps to HTTP 400.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("title should not be empty")]
    EmptyTitle,
    #[error("description should not be empty")]
    EmptyDescription,
    #[error("invalid page value")]
    InvalidPage,
    #[error("invalid pageSize value")]
    InvalidPageSize,
    #[error("task {0} not found")]
    NotFound(u64),
}

impl TaskError {
    /// True for the variants that mean "referenced id does not exist".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Task Store
// ─────────────────────────────────────────────────────────────────────────────

struct StoreInner {
    /// Tasks in creation order. Pagination windows index this order.
    tasks: Vec<Task>,
    /// Next id to hand out. Only ever increments, so deleted ids stay dead.
    next_id: u64,
}

/// In-memory store for tasks.
///
/// A single lock guards both the list and the id counter; every operation
/// takes the guard once and runs to completion under it, so readers always
/// observe a consistent snapshot and writers never interleave.
pub struct TaskStore {
    inner: RwLock<StoreInner>,
}

impl TaskStore {
    /// Create an empty store. Ids start at 1.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                tasks: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a new task with the next sequential id.
    pub async fn create(&self, title: &str, description: &str) -> Result<Task, TaskError> {
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        if description.is_empty() {
            return Err(TaskError::EmptyDescription);
        }

        let mut inner = self.inner.write().await;
        let task = Task {
            id: inner.next_id,
            title: title.to_string(),
            description: description.to_string(),
            completed: false,
        };
        inner.next_id += 1;
        inner.tasks.push(task.clone());

        Ok(task)
    }

    /// List one page of tasks.
    ///
    /// The window is `[(page - 1) * page_size, (page - 1) * page_size + page_size)`
    /// over the full ordered list; a window past the end yields an empty page.
    /// `total_tasks` is always the unfiltered store size.
    pub async fn list(&self, page: u64, page_size: u64) -> Result<TaskPage, TaskError> {
        if page < 1 {
            return Err(TaskError::InvalidPage);
        }
        if page_size < 1 {
            return Err(TaskError::InvalidPageSize);
        }

        let inner = self.inner.read().await;
        let total_tasks = inner.tasks.len();

        let start = usize::try_from((page - 1).saturating_mul(page_size))
            .unwrap_or(usize::MAX)
            .min(total_tasks);
        let end = start
            .saturating_add(usize::try_from(page_size).unwrap_or(usize::MAX))
            .min(total_tasks);

        Ok(TaskPage {
            tasks: inner.tasks[start..end].to_vec(),
            total_tasks,
        })
    }

    /// Get a task by id.
    pub async fn get(&self, id: u64) -> Result<Task, TaskError> {
        let inner = self.inner.read().await;
        inner
            .tasks
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(TaskError::NotFound(id))
    }

    /// Replace a task's title and description, and optionally its
    /// completion flag.
    ///
    /// `completed: None` preserves the stored value; `Some(v)` overwrites
    /// it, including an explicit `false`. The task is located by id, never
    /// by using the id as a list index.
    pub async fn update(
        &self,
        id: u64,
        title: &str,
        description: &str,
        completed: Option<bool>,
    ) -> Result<Task, TaskError> {
        if title.is_empty() {
            return Err(TaskError::EmptyTitle);
        }
        if description.is_empty() {
            return Err(TaskError::EmptyDescription);
        }

        let mut inner = self.inner.write().await;
        let task = inner
            .tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))?;

        task.title = title.to_string();
        task.description = description.to_string();
        if let Some(completed) = completed {
            task.completed = completed;
        }

        Ok(task.clone())
    }

    /// Delete a task by id.
    pub async fn delete(&self, id: u64) -> Result<(), TaskError> {
        let mut inner = self.inner.write().await;
        let index = inner
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TaskError::NotFound(id))?;
        inner.tasks.remove(index);
        Ok(())
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared task store type.
pub type SharedTaskStore = Arc<TaskStore>;
