//! Compare two summary files and report status transitions

use crate::commands::utils::{load_summaries, resolve_target};
use crate::commands::Command;
use crate::compare::{compare, ComparisonSummary};
use crate::error::Result;
use crate::ui::UI;

pub struct CompareCommand {
    before: String,
    after: String,
    target: Option<String>,
    collapse: bool,
    org: bool,
}

impl CompareCommand {
    pub fn new(
        before: String,
        after: String,
        target: Option<String>,
        collapse: bool,
        org: bool,
    ) -> Self {
        CompareCommand {
            before,
            after,
            target,
            collapse,
            org,
        }
    }

    fn print_plain(&self, ui: &mut dyn UI, summary: &ComparisonSummary) -> Result<()> {
        ui.output(&format!(
            "Comparing {} with {} for target {}",
            self.before, self.after, summary.target
        ))?;

        if !summary.gone_scripts.is_empty() {
            ui.output("")?;
            ui.output("Gone scripts:")?;
            for path in &summary.gone_scripts {
                ui.output(&format!("  {}", path))?;
            }
        }
        if !summary.new_scripts.is_empty() {
            ui.output("")?;
            ui.output("New scripts:")?;
            for path in &summary.new_scripts {
                ui.output(&format!("  {}", path))?;
            }
        }

        for (transition, results) in &summary.transitions {
            ui.output("")?;
            let marker = if transition.is_bad() { " (bad)" } else { "" };
            ui.output(&format!("{}{}:", transition, marker))?;
            for result in results {
                ui.output(&format!("  {}", result.id()))?;
            }
        }

        ui.output("")?;
        if summary.is_clean() {
            ui.output("No regressions.")?;
        } else {
            ui.output(&format!(
                "Regressed: {} gone script(s), {} transition(s).",
                summary.gone_scripts.len(),
                summary.total_transitions()
            ))?;
        }
        Ok(())
    }

    fn print_org(&self, ui: &mut dyn UI, summary: &ComparisonSummary) -> Result<()> {
        ui.output(&format!(
            "#+TITLE: {} vs {} ({})",
            self.before, self.after, summary.target
        ))?;
        ui.output(&format!(
            "#+DATE: {}",
            chrono::Local::now().format("%Y-%m-%d")
        ))?;

        if !summary.gone_scripts.is_empty() {
            ui.output("* Gone scripts")?;
            for path in &summary.gone_scripts {
                ui.output(&format!("- {}", path))?;
            }
        }
        if !summary.new_scripts.is_empty() {
            ui.output("* New scripts")?;
            for path in &summary.new_scripts {
                ui.output(&format!("- {}", path))?;
            }
        }
        for (transition, results) in &summary.transitions {
            ui.output(&format!("* {}", transition))?;
            for result in results {
                ui.output(&format!("- {}", result.id()))?;
            }
        }
        Ok(())
    }
}

impl Command for CompareCommand {
    fn execute(&self, ui: &mut dyn UI) -> Result<i32> {
        let sets = load_summaries(&[self.before.as_str(), self.after.as_str()], ui)?;
        let target = resolve_target(&sets, self.target.as_deref())?;

        let summary = compare(&sets[0], &sets[1], &target, self.collapse);

        if self.org {
            self.print_org(ui, &summary)?;
        } else {
            self.print_plain(ui, &summary)?;
        }

        // Exit status contract: 0 when clean, 1 when regressed. CI
        // gates on this.
        if summary.is_clean() {
            Ok(0)
        } else {
            Ok(1)
        }
    }

    fn name(&self) -> &str {
        "compare"
    }

    fn help(&self) -> &str {
        "Compare two summary files and report status transitions"
    }
}
