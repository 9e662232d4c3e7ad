//! The task-list state machine.
//!
//! `TaskList` owns the ordered in-memory sequence of tasks and the store it
//! persists through. It is the single source of truth for rendering and the
//! only mutation entry point; every mutation serializes the whole list and
//! writes it through the store before returning, so there is no observable
//! state where memory and storage disagree.
//!
//! ## Stored Format
//!
//! The list is stored under the `"tasks"` key as a JSON array of objects
//! with a string `name` and a boolean `done`:
//!
//! ```json
//! [{"name":"buy milk","done":false},{"name":"pay rent","done":true}]
//! ```
//!
//! There is no schema versioning; the shape above is the compatibility
//! contract with previously stored data.
//!
//! ## Addressing Tasks
//!
//! Operations come in two flavors:
//!
//! - **By index**: `toggle` / `delete` address the current position in the
//!   sequence, matching what a positional list view shows. Deleting shifts
//!   later tasks down by one, so positions are not stable across mutations.
//! - **By identifier**: every task is assigned a [`TaskId`] when the list
//!   is loaded or the task is added. Identifiers stay valid until the task
//!   is deleted, no matter what happens to the rest of the list, and are
//!   the safer handle for long-lived callers. They are never persisted.
//!
//! ## Error Policy
//!
//! - An out-of-range index is a loud [`TaskListError::IndexOutOfRange`],
//!   never silent corruption.
//! - A present-but-unparseable stored value is
//!   [`TaskListError::MalformedPersistedState`]. [`TaskList::init`]
//!   surfaces it; [`TaskList::init_or_empty`] logs a warning and starts
//!   empty instead, which is the behavior interactive front ends want.
//! - A store write failure aborts the operation with an error; there are
//!   no retries.

use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskId};
use crate::storage::store::{FileStore, KvStore};
use crate::{msg_debug, msg_warning};
use thiserror::Error;

/// Storage key the task list lives under.
pub const TASKS_KEY: &str = "tasks";

/// Errors produced by task-list operations.
#[derive(Debug, Error)]
pub enum TaskListError {
    /// A value is stored under the tasks key but does not parse as a task array.
    #[error("stored task list is not a valid task array: {0}")]
    MalformedPersistedState(#[source] serde_json::Error),

    /// An index-addressed operation named a position outside the list.
    #[error("no task at index {index}, list has {len} task(s)")]
    IndexOutOfRange { index: usize, len: usize },

    /// An id-addressed operation named a task that no longer exists.
    #[error("no task with id {0}")]
    TaskNotFound(TaskId),

    /// The underlying store failed to read or write.
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

/// Ordered task collection persisted write-through to a [`KvStore`].
#[derive(Debug)]
pub struct TaskList<S: KvStore = FileStore> {
    store: S,
    tasks: Vec<Task>,
    next_id: u64,
}

impl TaskList<FileStore> {
    /// Opens the default file-backed list.
    ///
    /// Uses the lenient initialization policy: a malformed stored value is
    /// logged and replaced with an empty list rather than refusing to start.
    pub fn new() -> Result<Self, TaskListError> {
        Self::init_or_empty(FileStore::new())
    }
}

impl<S: KvStore> TaskList<S> {
    /// Initializes the list from the store.
    ///
    /// An absent key yields the empty list. A present but unparseable value
    /// is surfaced as [`TaskListError::MalformedPersistedState`].
    pub fn init(store: S) -> Result<Self, TaskListError> {
        let tasks = Self::load(&store)?;
        Ok(Self::with_tasks(store, tasks))
    }

    /// Initializes the list from the store, falling back to empty on
    /// malformed stored data.
    ///
    /// The malformed value is left in place until the next mutation
    /// overwrites it; only a warning is emitted. Store read failures are
    /// still surfaced.
    pub fn init_or_empty(store: S) -> Result<Self, TaskListError> {
        let tasks = match Self::load(&store) {
            Ok(tasks) => tasks,
            Err(TaskListError::MalformedPersistedState(err)) => {
                msg_warning!(Message::StoredTasksMalformed);
                msg_debug!(format!("discarded stored tasks: {}", err));
                Vec::new()
            }
            Err(err) => return Err(err),
        };
        Ok(Self::with_tasks(store, tasks))
    }

    fn load(store: &S) -> Result<Vec<Task>, TaskListError> {
        match store.read(TASKS_KEY)? {
            Some(raw) => serde_json::from_str(&raw).map_err(TaskListError::MalformedPersistedState),
            None => Ok(Vec::new()),
        }
    }

    fn with_tasks(store: S, mut tasks: Vec<Task>) -> Self {
        let mut next_id = 0;
        for task in &mut tasks {
            next_id += 1;
            task.id = TaskId(next_id);
        }
        TaskList { store, tasks, next_id }
    }

    /// Current tasks in order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Task at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    /// Current position of the task with `id`, if it still exists.
    pub fn position_of(&self, id: TaskId) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    /// Appends a new pending task and persists the list.
    ///
    /// `name` is trusted to be non-empty; that precondition belongs to the
    /// calling surface, not the state machine. Returns the appended task.
    pub fn add(&mut self, name: &str) -> Result<Task, TaskListError> {
        self.next_id += 1;
        let mut task = Task::new(name);
        task.id = TaskId(self.next_id);
        self.tasks.push(task.clone());
        self.persist()?;
        Ok(task)
    }

    /// Flips the completion flag of the task at `index` and persists the
    /// list. Returns the task in its new state.
    pub fn toggle(&mut self, index: usize) -> Result<Task, TaskListError> {
        let len = self.tasks.len();
        let task = self
            .tasks
            .get_mut(index)
            .ok_or(TaskListError::IndexOutOfRange { index, len })?;
        task.done = !task.done;
        let task = task.clone();
        self.persist()?;
        Ok(task)
    }

    /// Removes the task at `index`, shifting later tasks down by one, and
    /// persists the list. Returns the removed task.
    pub fn delete(&mut self, index: usize) -> Result<Task, TaskListError> {
        let len = self.tasks.len();
        if index >= len {
            return Err(TaskListError::IndexOutOfRange { index, len });
        }
        let task = self.tasks.remove(index);
        self.persist()?;
        Ok(task)
    }

    /// [`Self::toggle`] addressed by stable identifier.
    pub fn toggle_by_id(&mut self, id: TaskId) -> Result<Task, TaskListError> {
        let index = self.position_of(id).ok_or(TaskListError::TaskNotFound(id))?;
        self.toggle(index)
    }

    /// [`Self::delete`] addressed by stable identifier.
    pub fn delete_by_id(&mut self, id: TaskId) -> Result<Task, TaskListError> {
        let index = self.position_of(id).ok_or(TaskListError::TaskNotFound(id))?;
        self.delete(index)
    }

    /// Consumes the list, returning the underlying store.
    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self) -> Result<(), TaskListError> {
        let raw = serde_json::to_string(&self.tasks).map_err(|err| TaskListError::Store(err.into()))?;
        self.store.write(TASKS_KEY, &raw)?;
        Ok(())
    }
}
