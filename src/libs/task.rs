use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Runtime identifier of a task within one `TaskList` instance.
///
/// Identifiers are assigned when the list is initialized or a task is added
/// and stay stable for the lifetime of the list, surviving deletions of
/// other tasks. They are never written to storage; the persisted shape of a
/// task is exactly `{"name": <string>, "done": <bool>}`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(pub u64);

impl Display for TaskId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One to-do entry: a text label and a completion flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Runtime-only identifier, reassigned on every load.
    #[serde(skip)]
    pub id: TaskId,
    pub name: String,
    pub done: bool,
}

impl Task {
    pub fn new(name: &str) -> Self {
        Task {
            id: TaskId::default(),
            name: name.to_string(),
            done: false,
        }
    }
}
