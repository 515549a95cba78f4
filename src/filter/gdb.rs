//! gdb-specific test name normalization

use crate::filter::{GenericFilter, NameFilter};
use regex::Regex;

/// Name filter for gdb summary files.
///
/// Runs the generic pipeline first, then normalizes ordinals gdb
/// allocates at runtime (breakpoint and thread numbers vary with
/// execution order, not with what is being tested).
pub struct GdbFilter {
    generic: GenericFilter,
    breakpoint: Regex,
    thread: Regex,
}

impl GdbFilter {
    pub fn new() -> Self {
        GdbFilter {
            generic: GenericFilter::new(),
            breakpoint: Regex::new(r"\b([Bb]reakpoint) \d+")
                .expect("built-in filter rule must compile"),
            thread: Regex::new(r"\b([Tt]hread) \d+(\.\d+)*")
                .expect("built-in filter rule must compile"),
        }
    }
}

impl Default for GdbFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl NameFilter for GdbFilter {
    fn filter_testname(&self, tool: &str, path: &str, testname: &str) -> String {
        let name = self.generic.filter_testname(tool, path, testname);
        let name = self.breakpoint.replace_all(&name, "$1 <n>");
        let name = self.thread.replace_all(&name, "$1 <n>");
        name.into_owned()
    }
}
