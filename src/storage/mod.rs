//! Persistence layer for the tarea application.
//!
//! Provides the key-value storage boundary the task list reads and writes
//! through, plus the task-list state machine built on top of it. The stored
//! representation is a single JSON array under the `"tasks"` key; every
//! mutation writes through synchronously, so memory and storage never
//! disagree once an operation has returned.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tarea::storage::tasks::TaskList;
//!
//! let mut tasks = TaskList::new()?;
//! tasks.add("Review code")?;
//! # Ok::<(), tarea::storage::tasks::TaskListError>(())
//! ```

/// Key-value store contract and its file-backed and in-memory implementations.
pub mod store;

/// The task-list state machine: initialize, add, toggle, delete.
pub mod tasks;
