//! Display implementation for tarea application messages.
//!
//! Provides the `Display` trait implementation for the `Message` enum,
//! converting structured message data into the human-readable text shown
//! in the terminal. All user-facing text lives here, in one place.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(name) => format!("Task '{}' added.", name),
            Message::TaskCompleted(name) => format!("Task '{}' marked as done.", name),
            Message::TaskReopened(name) => format!("Task '{}' marked as pending.", name),
            Message::TaskDeleted(name) => format!("Task '{}' deleted.", name),
            Message::TaskNotFoundAtPosition(position) => format!("No task at position {}.", position),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::NoTasks => "No tasks yet. Add one with 'tarea add'.".to_string(),
            Message::EmptyTaskName => "Task name cannot be empty.".to_string(),
            Message::ConfirmDeleteTask(name) => format!("Are you sure you want to delete task '{}'?", name),
            Message::DeleteCancelled => "Deletion cancelled.".to_string(),
            Message::PromptTaskName => "Enter task name".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration deleted.".to_string(),
            Message::PromptSelectTheme => "Select theme".to_string(),
            Message::ThemeSwitched(theme) => format!("Theme switched to {}.", theme),

            // === STORAGE MESSAGES ===
            Message::StoredTasksMalformed => "Stored task list is malformed; starting with an empty list.".to_string(),
        };
        write!(f, "{}", text)
    }
}
