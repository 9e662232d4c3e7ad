//! Delete a task from the list.
//!
//! Tasks are addressed by the 1-based position shown by `tarea list`.
//! Deletion shifts later tasks down by one position, so positions printed
//! before the call are stale afterwards.

use crate::libs::messages::Message;
use crate::storage::tasks::TaskList;
use crate::{msg_error, msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task position as shown by 'tarea list'
    #[arg(required = true)]
    position: usize,

    /// Delete without asking for confirmation
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut tasks = TaskList::new()?;

    let index = match args.position.checked_sub(1) {
        Some(index) if index < tasks.len() => index,
        _ => {
            msg_error!(Message::TaskNotFoundAtPosition(args.position));
            return Ok(());
        }
    };
    let name = tasks.tasks()[index].name.clone();

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(name.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::DeleteCancelled);
            return Ok(());
        }
    }

    let deleted = tasks.delete(index)?;
    msg_success!(Message::TaskDeleted(deleted.name));
    Ok(())
}
