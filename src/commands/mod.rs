pub mod add;
pub mod delete;
pub mod init;
pub mod list;
pub mod theme;
pub mod toggle;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a new task")]
    Add(add::AddArgs),
    #[command(about = "Show all tasks")]
    List,
    #[command(about = "Toggle task completion")]
    Toggle(toggle::ToggleArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Switch between light and dark theme")]
    Theme,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::List => list::cmd(),
            Commands::Toggle(args) => toggle::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Theme => theme::cmd(),
        }
    }
}
