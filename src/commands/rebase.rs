//! Classify rebase regressions across four summary files

use crate::commands::utils::{load_summaries, resolve_target};
use crate::commands::Command;
use crate::error::Result;
use crate::rebase::{classify, ClassifiedResult};
use crate::ui::UI;

pub struct RebaseCommand {
    baseline: String,
    patched: String,
    rebase_base: String,
    rebased: String,
    target: Option<String>,
    org: bool,
}

impl RebaseCommand {
    pub fn new(
        baseline: String,
        patched: String,
        rebase_base: String,
        rebased: String,
        target: Option<String>,
        org: bool,
    ) -> Self {
        RebaseCommand {
            baseline,
            patched,
            rebase_base,
            rebased,
            target,
            org,
        }
    }

    /// Print one pass's results grouped by script path. Entries arrive
    /// sorted by id, so consecutive entries share a path.
    fn print_pass(
        &self,
        ui: &mut dyn UI,
        title: &str,
        entries: &[ClassifiedResult],
    ) -> Result<()> {
        if entries.is_empty() {
            return Ok(());
        }
        ui.output("")?;
        if self.org {
            ui.output(&format!("* {}", title))?;
        } else {
            ui.output(&format!("{}:", title))?;
        }

        let mut current_path: Option<String> = None;
        for entry in entries {
            let path = entry.result.path();
            if current_path.as_deref() != Some(path.as_str()) {
                if self.org {
                    ui.output(&format!("** {}", path))?;
                } else {
                    ui.output(&format!("  {}:", path))?;
                }
                current_path = Some(path);
            }
            let line = format!("{} [{}]", entry.result.testname, entry.transition);
            if self.org {
                ui.output(&format!("- {}", line))?;
            } else {
                ui.output(&format!("    {}", line))?;
            }
        }
        Ok(())
    }
}

impl Command for RebaseCommand {
    fn execute(&self, ui: &mut dyn UI) -> Result<i32> {
        let sets = load_summaries(
            &[
                self.baseline.as_str(),
                self.patched.as_str(),
                self.rebase_base.as_str(),
                self.rebased.as_str(),
            ],
            ui,
        )?;
        let target = resolve_target(&sets, self.target.as_deref())?;

        let classification = classify(&sets[0], &sets[1], &sets[2], &sets[3], &target);

        if self.org {
            ui.output(&format!("#+TITLE: Rebase analysis ({})", target))?;
            ui.output(&format!(
                "#+DATE: {}",
                chrono::Local::now().format("%Y-%m-%d")
            ))?;
        } else {
            ui.output(&format!("Rebase analysis for target {}", target))?;
        }

        self.print_pass(
            ui,
            "Patch results broken after rebase",
            &classification.broken_after_rebase,
        )?;
        self.print_pass(
            ui,
            "Regressions on the rebase target",
            &classification.patch_regressions,
        )?;
        self.print_pass(ui, "New failing tests", &classification.new_failures)?;

        ui.output("")?;
        if classification.is_clean() {
            ui.output("No rebase regressions.")?;
            Ok(0)
        } else {
            ui.output(&format!(
                "{} candidate regression(s).",
                classification.total()
            ))?;
            Ok(1)
        }
    }

    fn name(&self) -> &str {
        "rebase"
    }

    fn help(&self) -> &str {
        "Classify regressions after carrying a patch to a new base"
    }
}
