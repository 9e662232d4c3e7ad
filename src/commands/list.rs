//! Display the task list.

use crate::libs::{config::Config, messages::Message, view::View};
use crate::storage::tasks::TaskList;
use crate::{msg_info, msg_print};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let tasks = TaskList::new()?;

    if tasks.is_empty() {
        msg_info!(Message::NoTasks);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(tasks.tasks(), config.theme)?;
    Ok(())
}
