//! Command system for dejadiff
//!
//! Each subcommand is a struct implementing the Command trait; the
//! returned integer becomes the process exit status.

use crate::error::Result;
use crate::ui::UI;

pub mod compare;
pub mod rebase;
pub mod report;
pub mod targets;
mod utils;

pub use compare::CompareCommand;
pub use rebase::RebaseCommand;
pub use report::ReportCommand;
pub use targets::TargetsCommand;

/// Trait that all commands must implement
pub trait Command {
    /// Execute the command
    fn execute(&self, ui: &mut dyn UI) -> Result<i32>;

    /// Get the command name
    fn name(&self) -> &str;

    /// Get command help text
    fn help(&self) -> &str;
}
