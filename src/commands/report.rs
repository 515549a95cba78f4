//! Summarize one summary file as a per-script status table

use crate::commands::utils::{load_summaries, resolve_target};
use crate::commands::Command;
use crate::error::Result;
use crate::table;
use crate::ui::UI;

pub struct ReportCommand {
    file: String,
    target: Option<String>,
    org: bool,
}

impl ReportCommand {
    pub fn new(file: String, target: Option<String>, org: bool) -> Self {
        ReportCommand { file, target, org }
    }
}

impl Command for ReportCommand {
    fn execute(&self, ui: &mut dyn UI) -> Result<i32> {
        let sets = load_summaries(&[self.file.as_str()], ui)?;
        let target = resolve_target(&sets, self.target.as_deref())?;

        let table = table::build(&sets[0], &target);
        let lines = if self.org {
            table.render_org()
        } else {
            table.render_plain()
        };
        for line in lines {
            ui.output(&line)?;
        }
        Ok(0)
    }

    fn name(&self) -> &str {
        "report"
    }

    fn help(&self) -> &str {
        "Summarize one summary file as a status table"
    }
}
