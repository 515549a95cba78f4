//! Parsed summary files
//!
//! A [`ResultSet`] holds everything parsed out of one DejaGNU summary
//! file: the tool name, the target sections in file order, and the
//! results within each section. Sets are built once by the parser and
//! read-only afterward.

pub mod parser;
pub mod test_result;

pub use parser::SummaryParser;
pub use test_result::{Outcome, TestResult, TestStatus, ALL_STATUSES};

use std::collections::{BTreeMap, HashMap};

/// Tool name used when a summary file carries no tool banner.
pub const UNKNOWN_TOOL: &str = "unknown";

/// Results for one `Running target` section.
#[derive(Debug)]
pub struct TargetResults {
    /// Target name, e.g. `unix` or `x86_64-linux`.
    pub name: String,
    results: Vec<TestResult>,
    // id -> position in `results`, for last-wins deduplication.
    index: HashMap<String, usize>,
}

impl TargetResults {
    fn new(name: impl Into<String>) -> Self {
        TargetResults {
            name: name.into(),
            results: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Add a result, replacing any earlier result with the same id.
    /// Returns the replaced result's status when the statuses differ,
    /// so the caller can emit a diagnostic.
    fn push(&mut self, result: TestResult) -> Option<TestStatus> {
        let id = result.id();
        match self.index.get(&id) {
            Some(&pos) => {
                let previous = self.results[pos].status;
                let changed = previous != result.status;
                self.results[pos] = result;
                changed.then_some(previous)
            }
            None => {
                self.index.insert(id, self.results.len());
                self.results.push(result);
                None
            }
        }
    }

    /// Results in file order (deduplicated by id, last wins).
    pub fn results(&self) -> &[TestResult] {
        &self.results
    }
}

/// All results parsed from one summary file.
#[derive(Debug)]
pub struct ResultSet {
    /// Tool discovered from the file's banner, or [`UNKNOWN_TOOL`].
    pub tool_name: String,
    targets: Vec<TargetResults>,
    warnings: Vec<String>,
    source: String,
}

impl ResultSet {
    pub(crate) fn new(source: impl Into<String>) -> Self {
        ResultSet {
            tool_name: UNKNOWN_TOOL.to_string(),
            targets: Vec::new(),
            warnings: Vec::new(),
            source: source.into(),
        }
    }

    /// Open (or reopen) a target section and return it for insertion.
    pub(crate) fn open_target(&mut self, name: &str) -> &mut TargetResults {
        let pos = match self.targets.iter().position(|t| t.name == name) {
            Some(pos) => pos,
            None => {
                self.targets.push(TargetResults::new(name));
                self.targets.len() - 1
            }
        };
        &mut self.targets[pos]
    }

    pub(crate) fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    /// Name of the file this set was parsed from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Target names in file order.
    pub fn targets(&self) -> Vec<&str> {
        self.targets.iter().map(|t| t.name.as_str()).collect()
    }

    /// Whether this set has a section for `target`.
    pub fn has_target(&self, target: &str) -> bool {
        self.targets.iter().any(|t| t.name == target)
    }

    /// Results for one target, in file order. Empty for an unknown
    /// target name.
    pub fn results(&self, target: &str) -> &[TestResult] {
        self.targets
            .iter()
            .find(|t| t.name == target)
            .map(|t| t.results())
            .unwrap_or(&[])
    }

    /// Results for one target grouped by script path, then indexed by
    /// result id, both in sorted order.
    pub fn by_script(&self, target: &str) -> BTreeMap<String, BTreeMap<String, &TestResult>> {
        let mut scripts: BTreeMap<String, BTreeMap<String, &TestResult>> = BTreeMap::new();
        for result in self.results(target) {
            scripts
                .entry(result.path())
                .or_default()
                .insert(result.id(), result);
        }
        scripts
    }

    /// Flat id -> result map for one target, in sorted id order.
    pub fn flat_results(&self, target: &str) -> BTreeMap<String, &TestResult> {
        self.results(target)
            .iter()
            .map(|result| (result.id(), result))
            .collect()
    }

    /// Diagnostics accumulated while parsing (duplicate ids etc.).
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Total number of results across all targets.
    pub fn total_results(&self) -> usize {
        self.targets.iter().map(|t| t.results.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(target: &str, testname: &str, status: TestStatus) -> TestResult {
        TestResult {
            directory: "gdb.base".to_string(),
            filename: "break.exp".to_string(),
            status,
            original_testname: testname.to_string(),
            testname: testname.to_string(),
            tool_name: "gdb".to_string(),
            target_name: target.to_string(),
        }
    }

    #[test]
    fn test_open_target_preserves_order() {
        let mut set = ResultSet::new("a.sum");
        set.open_target("native");
        set.open_target("remote");
        set.open_target("native");
        assert_eq!(set.targets(), vec!["native", "remote"]);
    }

    #[test]
    fn test_results_for_unknown_target_is_empty() {
        let set = ResultSet::new("a.sum");
        assert!(set.results("nope").is_empty());
    }

    #[test]
    fn test_duplicate_id_last_wins() {
        let mut set = ResultSet::new("a.sum");
        let target = set.open_target("unix");
        assert!(target.push(result("unix", "t1", TestStatus::Pass)).is_none());
        let replaced = target.push(result("unix", "t1", TestStatus::Fail));
        assert_eq!(replaced, Some(TestStatus::Pass));

        let results = set.results("unix");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].status, TestStatus::Fail);
    }

    #[test]
    fn test_duplicate_id_same_status_is_silent() {
        let mut set = ResultSet::new("a.sum");
        let target = set.open_target("unix");
        target.push(result("unix", "t1", TestStatus::Pass));
        assert!(target.push(result("unix", "t1", TestStatus::Pass)).is_none());
        assert_eq!(set.results("unix").len(), 1);
    }

    #[test]
    fn test_by_script_groups_and_sorts() {
        let mut set = ResultSet::new("a.sum");
        let target = set.open_target("unix");
        let mut r = result("unix", "t1", TestStatus::Pass);
        r.filename = "z.exp".to_string();
        target.push(r);
        target.push(result("unix", "t2", TestStatus::Fail));

        let scripts = set.by_script("unix");
        let paths: Vec<&String> = scripts.keys().collect();
        assert_eq!(paths, vec!["gdb.base/break.exp", "gdb.base/z.exp"]);
        assert_eq!(scripts["gdb.base/break.exp"].len(), 1);
    }

    #[test]
    fn test_flat_results_keys_are_ids() {
        let mut set = ResultSet::new("a.sum");
        let target = set.open_target("unix");
        target.push(result("unix", "t1", TestStatus::Pass));
        let flat = set.flat_results("unix");
        assert!(flat.contains_key("gdb.base/break.exp: t1"));
    }
}
