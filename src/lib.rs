//! # Tarea - a small persisted to-do list
//!
//! A command-line utility for keeping a single list of short text tasks:
//! add tasks, toggle their completion, and delete them.
//!
//! ## Features
//!
//! - **Task Management**: Add, complete/uncomplete, and delete tasks
//! - **Write-Through Persistence**: Every mutation is stored immediately as
//!   a JSON array under the `"tasks"` key before control returns
//! - **Stable Identifiers**: Tasks carry runtime identifiers so embedders
//!   are not forced to address them by position
//! - **Theme Preference**: A persisted light/dark theme for list rendering
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tarea::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod libs;
pub mod storage;
