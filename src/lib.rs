//! dejadiff - Comparative analysis of DejaGNU test summary files
//!
//! dejadiff parses the `.sum` summary logs a DejaGNU-style harness
//! writes (one status line per executed test case) and compares them
//! across revisions of the project under test to surface regressions.
//!
//! # Overview
//!
//! A pairwise comparison reports every status transition between two
//! runs and classifies transitions landing on a bad outcome as
//! regressions; the process exit status (0 clean, 1 regressed) is
//! stable so CI can gate on it. A four-way comparison classifies the
//! effect of carrying a patch from one base revision to another.
//!
//! Matching the "same" test across runs requires normalizing the raw
//! test names first: harnesses embed addresses, PIDs, library
//! versions and other run-specific text in them. The [`filter`]
//! module holds the per-tool normalization rules.
//!
//! # Architecture
//!
//! - [`summary`]: summary-file parsing and the parsed ResultSet model
//! - [`filter`]: test name normalization and the per-tool registry
//! - [`compare`]: pairwise transition analysis
//! - [`rebase`]: four-way rebase regression classification
//! - [`table`]: per-script status-count tables (plain and org-mode)
//! - [`commands`]: the user-facing subcommands
//! - [`config`]: .dejadiff.conf defaults
//! - [`ui`]: user interface abstraction for output
//! - [`error`]: error types and Result alias
//!
//! # Example
//!
//! ```
//! use dejadiff::filter::FilterRegistry;
//! use dejadiff::summary::SummaryParser;
//! use dejadiff::compare::compare;
//!
//! # fn main() -> dejadiff::error::Result<()> {
//! let registry = FilterRegistry::with_builtin_filters();
//! let parser = SummaryParser::new(&registry);
//!
//! let before = parser.parse_str(
//!     "before.sum",
//!     "Running target unix\nPASS: gdb.base/break.exp: run to main\n",
//! )?;
//! let after = parser.parse_str(
//!     "after.sum",
//!     "Running target unix\nFAIL: gdb.base/break.exp: run to main\n",
//! )?;
//!
//! let summary = compare(&before, &after, "unix", false);
//! assert!(summary.saw_bad);
//! # Ok(())
//! # }
//! ```

pub mod commands;
pub mod compare;
pub mod config;
pub mod error;
pub mod filter;
pub mod rebase;
pub mod summary;
pub mod table;
pub mod ui;

pub use error::{Error, Result};
