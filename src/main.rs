//! dejadiff - Command-line tool for DejaGNU summary comparison

use clap::{Parser, Subcommand};
use dejadiff::commands::*;
use dejadiff::config::DejadiffConfig;
use dejadiff::error::Result;
use dejadiff::ui::CliUI;
use std::io::Write;

#[derive(Parser)]
#[command(name = "dejadiff")]
#[command(about = "Compare DejaGNU test summary files", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two summary files and report status transitions
    Compare {
        /// Summary file from the older run
        before: String,

        /// Summary file from the newer run
        after: String,

        /// Target to compare (required when the files disagree)
        #[arg(short, long)]
        target: Option<String>,

        /// Report wholly gone/new scripts instead of their individual tests
        #[arg(long)]
        collapse: bool,

        /// Emit org-mode output
        #[arg(long)]
        org: bool,
    },

    /// Classify regressions after carrying a patch to a new base
    Rebase {
        /// Summary file for the baseline revision
        baseline: String,

        /// Summary file for baseline + patch
        patched: String,

        /// Summary file for the rebase target revision
        rebase_base: String,

        /// Summary file for rebase target + patch
        rebased: String,

        /// Target to analyze (required when the files disagree)
        #[arg(short, long)]
        target: Option<String>,

        /// Emit org-mode output
        #[arg(long)]
        org: bool,
    },

    /// Summarize one summary file as a per-script status table
    Report {
        /// Summary file to summarize
        file: String,

        /// Target to summarize (required for multi-target files)
        #[arg(short, long)]
        target: Option<String>,

        /// Emit org-mode output
        #[arg(long)]
        org: bool,
    },

    /// List the targets each summary file provides
    Targets {
        /// Summary files to inspect
        #[arg(required = true)]
        files: Vec<String>,
    },
}

fn run(cli: Cli, config: DejadiffConfig, ui: &mut CliUI) -> Result<i32> {
    match cli.command {
        Commands::Compare {
            before,
            after,
            target,
            collapse,
            org,
        } => {
            let cmd = CompareCommand::new(
                before,
                after,
                target.or(config.target),
                collapse || config.collapse,
                org || config.org,
            );
            cmd.execute(ui)
        }
        Commands::Rebase {
            baseline,
            patched,
            rebase_base,
            rebased,
            target,
            org,
        } => {
            let cmd = RebaseCommand::new(
                baseline,
                patched,
                rebase_base,
                rebased,
                target.or(config.target),
                org || config.org,
            );
            cmd.execute(ui)
        }
        Commands::Report { file, target, org } => {
            let cmd = ReportCommand::new(file, target.or(config.target), org || config.org);
            cmd.execute(ui)
        }
        Commands::Targets { files } => {
            let cmd = TargetsCommand::new(files);
            cmd.execute(ui)
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let mut ui = CliUI::new();

    let result = DejadiffConfig::load().and_then(|config| run(cli, config, &mut ui));

    match result {
        Ok(exit_code) => std::process::exit(exit_code),
        Err(e) => {
            let _ = writeln!(std::io::stderr(), "Error: {}", e);
            std::process::exit(1);
        }
    }
}
