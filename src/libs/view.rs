use super::config::Theme;
use super::task::Task;
use anyhow::Result;
use prettytable::{format, row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task], theme: Theme) -> Result<()> {
        let mut table = Table::new();
        match theme {
            Theme::Light => table.set_format(*format::consts::FORMAT_DEFAULT),
            Theme::Dark => table.set_format(*format::consts::FORMAT_BOX_CHARS),
        }

        table.add_row(row!["#", "NAME", "DONE"]);
        for (position, task) in tasks.iter().enumerate() {
            table.add_row(row![position + 1, task.name, if task.done { "✓" } else { "" }]);
        }
        table.printstd();

        Ok(())
    }
}
