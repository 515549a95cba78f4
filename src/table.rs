//! Tabular status summaries
//!
//! Builds per-script status-count tables from a parsed ResultSet.
//! Only statuses that actually occur become columns, ordered
//! interesting-first so FAIL columns always precede PASS columns.
//! Tables render as aligned plain text or as an org-mode table.

use crate::summary::{ResultSet, TestStatus, ALL_STATUSES};
use std::collections::BTreeMap;

/// One script's row of status counts.
#[derive(Debug)]
pub struct TableRow {
    /// Script path, e.g. `gdb.base/break.exp`.
    pub path: String,
    counts: Vec<usize>,
}

impl TableRow {
    /// Counts aligned with [`StatusTable::columns`].
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }
}

/// Per-script status counts for one target.
#[derive(Debug)]
pub struct StatusTable {
    /// Target the table was built for.
    pub target: String,
    columns: Vec<TestStatus>,
    rows: Vec<TableRow>,
    totals: Vec<usize>,
}

/// Build the status table for one target of a parsed summary file.
pub fn build(set: &ResultSet, target: &str) -> StatusTable {
    let mut per_script: BTreeMap<String, BTreeMap<TestStatus, usize>> = BTreeMap::new();
    let mut overall: BTreeMap<TestStatus, usize> = BTreeMap::new();

    for result in set.results(target) {
        *per_script
            .entry(result.path())
            .or_default()
            .entry(result.status)
            .or_insert(0) += 1;
        *overall.entry(result.status).or_insert(0) += 1;
    }

    // ALL_STATUSES is declared interesting-first; keeping its order
    // here is what puts FAIL columns before PASS columns.
    let columns: Vec<TestStatus> = ALL_STATUSES
        .into_iter()
        .filter(|status| overall.get(status).copied().unwrap_or(0) > 0)
        .collect();

    let rows = per_script
        .into_iter()
        .map(|(path, counts)| TableRow {
            path,
            counts: columns
                .iter()
                .map(|status| counts.get(status).copied().unwrap_or(0))
                .collect(),
        })
        .collect();

    let totals = columns
        .iter()
        .map(|status| overall.get(status).copied().unwrap_or(0))
        .collect();

    StatusTable {
        target: target.to_string(),
        columns,
        rows,
        totals,
    }
}

impl StatusTable {
    /// Statuses with a non-zero count anywhere, interesting-first.
    pub fn columns(&self) -> &[TestStatus] {
        &self.columns
    }

    /// Rows in sorted script-path order.
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Per-column totals across all scripts.
    pub fn totals(&self) -> &[usize] {
        &self.totals
    }

    /// Render as aligned plain-text lines.
    pub fn render_plain(&self) -> Vec<String> {
        let path_width = self
            .rows
            .iter()
            .map(|row| row.path.len())
            .chain(std::iter::once("Script".len()))
            .chain(std::iter::once("Total".len()))
            .max()
            .unwrap_or(0);

        let mut lines = Vec::new();
        let mut header = format!("{:<width$}", "Script", width = path_width);
        for status in &self.columns {
            header.push_str(&format!("  {:>11}", status.as_str()));
        }
        lines.push(header);

        for row in &self.rows {
            let mut line = format!("{:<width$}", row.path, width = path_width);
            for count in &row.counts {
                line.push_str(&format!("  {:>11}", count));
            }
            lines.push(line);
        }

        let mut line = format!("{:<width$}", "Total", width = path_width);
        for total in &self.totals {
            line.push_str(&format!("  {:>11}", total));
        }
        lines.push(line);
        lines
    }

    /// Render as an org-mode table with a date stamp.
    pub fn render_org(&self) -> Vec<String> {
        let mut lines = vec![
            format!("#+TITLE: Test results for {}", self.target),
            format!("#+DATE: {}", chrono::Local::now().format("%Y-%m-%d")),
            String::new(),
        ];

        let mut header = String::from("| Script |");
        for status in &self.columns {
            header.push_str(&format!(" {} |", status.as_str()));
        }
        lines.push(header);

        let mut rule = String::from("|---+");
        for _ in &self.columns {
            rule.push_str("---+");
        }
        rule.pop();
        rule.push('|');
        lines.push(rule);

        for row in &self.rows {
            let mut line = format!("| {} |", row.path);
            for count in &row.counts {
                line.push_str(&format!(" {} |", count));
            }
            lines.push(line);
        }

        let mut line = String::from("| Total |");
        for total in &self.totals {
            line.push_str(&format!(" {} |", total));
        }
        lines.push(line);
        lines
    }
}
