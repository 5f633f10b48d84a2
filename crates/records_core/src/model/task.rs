//! Task record.

use crate::model::validation::{
    check_max_len, ValidationError, ValidationResult, RECORD_ID_MAX_LEN,
    TASK_DESCRIPTION_MAX_LEN, TASK_NAME_MAX_LEN,
};
use crate::model::{Record, RecordKind};
use serde::{Deserialize, Serialize};

/// Named unit of work with a short description.
///
/// `task_id` is fixed at construction; `name` (<= 20 chars) and
/// `description` (<= 50 chars) may be replaced through validated setters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskFields")]
pub struct Task {
    task_id: String,
    name: String,
    description: String,
}

#[derive(Deserialize)]
struct TaskFields {
    task_id: String,
    name: String,
    description: String,
}

impl TryFrom<TaskFields> for Task {
    type Error = ValidationError;

    fn try_from(value: TaskFields) -> Result<Self, Self::Error> {
        Task::new(value.task_id, value.name, value.description)
    }
}

impl Task {
    /// Creates a task, checking `task_id`, `name`, `description` in order.
    pub fn new(
        task_id: impl Into<String>,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> ValidationResult<Self> {
        let task_id = task_id.into();
        let name = name.into();
        let description = description.into();

        check_max_len("task_id", &task_id, RECORD_ID_MAX_LEN)?;
        check_name(&name)?;
        check_description(&description)?;

        Ok(Self {
            task_id,
            name,
            description,
        })
    }

    /// Stable task id.
    pub fn task_id(&self) -> &str {
        &self.task_id
    }

    /// Current task name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current task description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Replaces the name after checking the 20-char bound.
    pub fn set_name(&mut self, name: impl Into<String>) -> ValidationResult<()> {
        let name = name.into();
        check_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Replaces the description after checking the 50-char bound.
    pub fn set_description(&mut self, description: impl Into<String>) -> ValidationResult<()> {
        let description = description.into();
        check_description(&description)?;
        self.description = description;
        Ok(())
    }
}

impl Record for Task {
    const KIND: RecordKind = RecordKind::Task;

    fn record_id(&self) -> &str {
        &self.task_id
    }
}

fn check_name(value: &str) -> ValidationResult<()> {
    check_max_len("name", value, TASK_NAME_MAX_LEN)
}

fn check_description(value: &str) -> ValidationResult<()> {
    check_max_len("description", value, TASK_DESCRIPTION_MAX_LEN)
}
