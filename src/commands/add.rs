//! Add a new task to the list.
//!
//! The task name can be given as an argument or entered interactively when
//! omitted. Blank names are rejected here; the state machine trusts this
//! boundary and does not re-validate.

use crate::libs::messages::Message;
use crate::storage::tasks::TaskList;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task name; prompted for interactively when omitted
    name: Option<String>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let name = match args.name {
        Some(name) => name,
        None => Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptTaskName.to_string())
            .allow_empty(true)
            .interact_text()?,
    };

    let name = name.trim();
    if name.is_empty() {
        msg_bail_anyhow!(Message::EmptyTaskName);
    }

    let mut tasks = TaskList::new()?;
    let task = tasks.add(name)?;

    msg_success!(Message::TaskAdded(task.name));
    Ok(())
}
