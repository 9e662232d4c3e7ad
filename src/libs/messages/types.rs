#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(String),
    TaskCompleted(String),
    TaskReopened(String),
    TaskDeleted(String),
    TaskNotFoundAtPosition(usize),
    TasksHeader,
    NoTasks,
    EmptyTaskName,
    ConfirmDeleteTask(String),
    DeleteCancelled,
    PromptTaskName,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    PromptSelectTheme,
    ThemeSwitched(String),

    // === STORAGE MESSAGES ===
    StoredTasksMalformed,
}
