//! Toggle a task's completion flag.
//!
//! Tasks are addressed by the 1-based position shown by `tarea list`.

use crate::libs::messages::Message;
use crate::storage::tasks::TaskList;
use crate::{msg_error, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// Task position as shown by 'tarea list'
    #[arg(required = true)]
    position: usize,
}

pub fn cmd(args: ToggleArgs) -> Result<()> {
    let mut tasks = TaskList::new()?;

    let index = match args.position.checked_sub(1) {
        Some(index) if index < tasks.len() => index,
        _ => {
            msg_error!(Message::TaskNotFoundAtPosition(args.position));
            return Ok(());
        }
    };

    let task = tasks.toggle(index)?;
    if task.done {
        msg_success!(Message::TaskCompleted(task.name));
    } else {
        msg_success!(Message::TaskReopened(task.name));
    }
    Ok(())
}
