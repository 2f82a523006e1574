//! In-memory task collection.
//!
//! # Design
//! The store owns a `Vec<Task>` — insertion order doubles as listing order —
//! plus a monotone id counter. Deleting a task never frees its id for reuse.
//! Validation and the not-found/validation ordering live here, so the whole
//! request contract is unit-testable without standing up a router, and the
//! handlers stay thin.

use crate::error::ApiError;
use crate::types::{CreateTask, Task, UpdateTask};

/// Minimum accepted `name` length in characters, after trimming.
const MIN_NAME_LEN: usize = 3;

/// Ordered, process-lifetime collection of task records.
///
/// Constructed explicitly and injected into the router; never a global.
#[derive(Debug, Clone)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskStore {
    /// An empty store. The first created task gets id 1.
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// The collection the service boots with: tasks 1 through 3.
    pub fn seeded() -> Self {
        let tasks = (1..=3)
            .map(|id| Task {
                id,
                name: format!("Task {id}"),
                completed: false,
            })
            .collect();
        Self { tasks, next_id: 4 }
    }

    /// All tasks in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: u64) -> Result<&Task, ApiError> {
        self.tasks
            .iter()
            .find(|task| task.id == id)
            .ok_or(ApiError::TaskNotFound)
    }

    /// Validates the name, assigns the next id, and appends the record.
    /// `completed` defaults to false when omitted.
    pub fn create(&mut self, input: CreateTask) -> Result<Task, ApiError> {
        let name = validated_name(input.name)?;
        let task = Task {
            id: self.next_id,
            name,
            completed: input.completed.unwrap_or(false),
        };
        self.next_id += 1;
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Full update: `name` is required; an omitted `completed` retains the
    /// prior value. The not-found check runs before validation.
    pub fn replace(&mut self, id: u64, input: UpdateTask) -> Result<Task, ApiError> {
        let task = self.get_mut(id)?;
        task.name = validated_name(input.name)?;
        if let Some(completed) = input.completed {
            task.completed = completed;
        }
        Ok(task.clone())
    }

    /// Partial update: only supplied fields change. A supplied `name` must
    /// still pass validation.
    pub fn update(&mut self, id: u64, input: UpdateTask) -> Result<Task, ApiError> {
        let task = self.get_mut(id)?;
        if let Some(name) = input.name {
            task.name = validated_name(Some(name))?;
        }
        if let Some(completed) = input.completed {
            task.completed = completed;
        }
        Ok(task.clone())
    }

    /// Excises the record. Its id is never reassigned.
    pub fn remove(&mut self, id: u64) -> Result<Task, ApiError> {
        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(ApiError::TaskNotFound)?;
        Ok(self.tasks.remove(index))
    }

    fn get_mut(&mut self, id: u64) -> Result<&mut Task, ApiError> {
        self.tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(ApiError::TaskNotFound)
    }
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

fn validated_name(name: Option<String>) -> Result<String, ApiError> {
    match name {
        Some(name) if name.trim().chars().count() >= MIN_NAME_LEN => Ok(name),
        _ => Err(ApiError::NameTooShort),
    }
}
