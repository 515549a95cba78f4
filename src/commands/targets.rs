//! List the targets each summary file provides

use crate::commands::utils::load_summaries;
use crate::commands::Command;
use crate::error::Result;
use crate::ui::UI;

pub struct TargetsCommand {
    files: Vec<String>,
}

impl TargetsCommand {
    pub fn new(files: Vec<String>) -> Self {
        TargetsCommand { files }
    }
}

impl Command for TargetsCommand {
    fn execute(&self, ui: &mut dyn UI) -> Result<i32> {
        let paths: Vec<&str> = self.files.iter().map(String::as_str).collect();
        let sets = load_summaries(&paths, ui)?;

        for set in &sets {
            let targets = set.targets();
            if targets.is_empty() {
                ui.output(&format!("{}: (no targets)", set.source()))?;
            } else {
                ui.output(&format!("{}: {}", set.source(), targets.join(", ")))?;
            }
        }
        Ok(0)
    }

    fn name(&self) -> &str {
        "targets"
    }

    fn help(&self) -> &str {
        "List the targets each summary file provides"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_ui::TestUI;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_targets_listed_per_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "Running target unix\nPASS: a/b.exp: t\n\
             Running target remote\nPASS: a/b.exp: t\n"
        )
        .unwrap();

        let mut ui = TestUI::new();
        let cmd = TargetsCommand::new(vec![file.path().to_string_lossy().to_string()]);
        assert_eq!(cmd.execute(&mut ui).unwrap(), 0);
        assert_eq!(ui.output.len(), 1);
        assert!(ui.output[0].ends_with("unix, remote"));
    }
}
