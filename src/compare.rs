//! Pairwise comparison of two summary files
//!
//! Computes the status-transition multiset between a "before" and an
//! "after" ResultSet for one target, and the overall clean/regressed
//! verdict that drives the `compare` command's exit status.

use crate::summary::{Outcome, ResultSet, TestResult};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// A status change for one test identity between the two sets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Transition {
    /// Status in the before set, or GONE.
    pub from: Outcome,
    /// Status in the after set, or GONE.
    pub to: Outcome,
}

impl Transition {
    /// A transition is bad when it lands on a bad outcome. The origin
    /// does not matter: FAIL -> UNRESOLVED is still a regression.
    /// Same-status pairs are never recorded as transitions, so this
    /// is only ever evaluated with `from != to`.
    pub fn is_bad(&self) -> bool {
        self.to.is_bad_landing()
    }
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// Everything the pairwise comparison produced.
#[derive(Debug)]
pub struct ComparisonSummary {
    /// Target the comparison ran over.
    pub target: String,
    /// Scripts present only in the before set (collapse mode only).
    pub gone_scripts: Vec<String>,
    /// Scripts present only in the after set (collapse mode only).
    pub new_scripts: Vec<String>,
    /// Transition -> results undergoing it, sorted by transition key;
    /// each list is sorted by result id. The before instance of a
    /// result is recorded when one exists.
    pub transitions: BTreeMap<Transition, Vec<TestResult>>,
    /// True when any script wholly disappeared or any transition is bad.
    pub saw_bad: bool,
}

impl ComparisonSummary {
    /// The exit-status contract: clean comparisons exit 0.
    pub fn is_clean(&self) -> bool {
        !self.saw_bad
    }

    /// Number of individual result transitions recorded.
    pub fn total_transitions(&self) -> usize {
        self.transitions.values().map(Vec::len).sum()
    }
}

/// Compare two parsed summary files for one target.
///
/// With `collapse` set, a script present on only one side is reported
/// as wholly gone or wholly new and its per-test transitions are
/// skipped; otherwise every one-sided result shows up as a transition
/// to or from GONE.
pub fn compare(
    before: &ResultSet,
    after: &ResultSet,
    target: &str,
    collapse: bool,
) -> ComparisonSummary {
    let before_scripts = before.by_script(target);
    let after_scripts = after.by_script(target);

    let paths: BTreeSet<&String> = before_scripts.keys().chain(after_scripts.keys()).collect();

    let mut gone_scripts = Vec::new();
    let mut new_scripts = Vec::new();
    let mut transitions: BTreeMap<Transition, Vec<TestResult>> = BTreeMap::new();
    let empty = BTreeMap::new();

    for path in paths {
        let before_ids = before_scripts.get(path);
        let after_ids = after_scripts.get(path);

        if collapse {
            match (before_ids, after_ids) {
                (Some(_), None) => {
                    gone_scripts.push(path.clone());
                    continue;
                }
                (None, Some(_)) => {
                    new_scripts.push(path.clone());
                    continue;
                }
                _ => {}
            }
        }

        let before_ids = before_ids.unwrap_or(&empty);
        let after_ids = after_ids.unwrap_or(&empty);
        let ids: BTreeSet<&String> = before_ids.keys().chain(after_ids.keys()).collect();

        for id in ids {
            let from = match before_ids.get(id) {
                Some(result) => Outcome::Known(result.status),
                None => Outcome::Gone,
            };
            let to = match after_ids.get(id) {
                Some(result) => Outcome::Known(result.status),
                None => Outcome::Gone,
            };
            if from == to {
                continue;
            }
            let record = match (before_ids.get(id), after_ids.get(id)) {
                (Some(result), _) => result,
                (None, Some(result)) => result,
                (None, None) => continue,
            };
            transitions
                .entry(Transition { from, to })
                .or_default()
                .push((*record).clone());
        }
    }

    let saw_bad = !gone_scripts.is_empty() || transitions.keys().any(Transition::is_bad);

    ComparisonSummary {
        target: target.to_string(),
        gone_scripts,
        new_scripts,
        transitions,
        saw_bad,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::FilterRegistry;
    use crate::summary::{SummaryParser, TestStatus, ALL_STATUSES};

    fn parse(contents: &str) -> ResultSet {
        let registry = FilterRegistry::with_builtin_filters();
        SummaryParser::new(&registry)
            .parse_str("test.sum", contents)
            .unwrap()
    }

    fn key(from: Outcome, to: Outcome) -> Transition {
        Transition { from, to }
    }

    #[test]
    fn test_badness_table_over_all_status_pairs() {
        for s1 in ALL_STATUSES {
            for s2 in ALL_STATUSES {
                if s1 == s2 {
                    continue;
                }
                let expected = matches!(
                    s2,
                    TestStatus::Fail
                        | TestStatus::Unresolved
                        | TestStatus::Untested
                        | TestStatus::Unsupported
                );
                assert_eq!(
                    key(Outcome::Known(s1), Outcome::Known(s2)).is_bad(),
                    expected,
                    "{} -> {}",
                    s1,
                    s2
                );
            }
            assert!(key(Outcome::Known(s1), Outcome::Gone).is_bad());
        }
    }

    #[test]
    fn test_pass_to_fail_is_reported_and_bad() {
        let before = parse("Running target unix\nPASS: a/b.exp: t1\n");
        let after = parse("Running target unix\nFAIL: a/b.exp: t1\n");

        let summary = compare(&before, &after, "unix", false);
        assert!(summary.saw_bad);
        assert!(!summary.is_clean());
        assert_eq!(summary.transitions.len(), 1);

        let transition = key(
            Outcome::Known(TestStatus::Pass),
            Outcome::Known(TestStatus::Fail),
        );
        let results = &summary.transitions[&transition];
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].id(), "a/b.exp: t1");
        // The before instance is recorded.
        assert_eq!(results[0].status, TestStatus::Pass);
    }

    #[test]
    fn test_identical_sets_are_clean() {
        let text = "Running target unix\nPASS: a/b.exp: t1\nFAIL: a/b.exp: t2\n";
        let summary = compare(&parse(text), &parse(text), "unix", false);
        assert!(summary.is_clean());
        assert_eq!(summary.total_transitions(), 0);
    }

    #[test]
    fn test_fail_to_pass_is_clean() {
        let before = parse("Running target unix\nFAIL: a/b.exp: t1\n");
        let after = parse("Running target unix\nPASS: a/b.exp: t1\n");
        let summary = compare(&before, &after, "unix", false);
        assert!(summary.is_clean());
        assert_eq!(summary.total_transitions(), 1);
    }

    #[test]
    fn test_gone_script_collapse_mode() {
        let before = parse(
            "Running target unix\n\
             PASS: a/b.exp: t1\n\
             PASS: a/c.exp: t1\n\
             FAIL: a/c.exp: t2\n",
        );
        let after = parse("Running target unix\nPASS: a/b.exp: t1\n");

        let summary = compare(&before, &after, "unix", true);
        assert_eq!(summary.gone_scripts, vec!["a/c.exp"]);
        assert!(summary.new_scripts.is_empty());
        // No per-test transitions for the collapsed script.
        assert_eq!(summary.total_transitions(), 0);
        assert!(summary.saw_bad);
    }

    #[test]
    fn test_gone_script_without_collapse_reports_per_test() {
        let before = parse(
            "Running target unix\n\
             PASS: a/c.exp: t1\n\
             FAIL: a/c.exp: t2\n",
        );
        let after = parse("Running target unix\nPASS: a/b.exp: t1\n");

        let summary = compare(&before, &after, "unix", false);
        assert!(summary.gone_scripts.is_empty());
        let gone_pass = key(Outcome::Known(TestStatus::Pass), Outcome::Gone);
        let gone_fail = key(Outcome::Known(TestStatus::Fail), Outcome::Gone);
        assert_eq!(summary.transitions[&gone_pass].len(), 1);
        assert_eq!(summary.transitions[&gone_fail].len(), 1);
        assert!(summary.saw_bad);
    }

    #[test]
    fn test_new_script_collapse_mode_is_clean() {
        let before = parse("Running target unix\nPASS: a/b.exp: t1\n");
        let after = parse(
            "Running target unix\n\
             PASS: a/b.exp: t1\n\
             PASS: a/new.exp: t1\n",
        );
        let summary = compare(&before, &after, "unix", true);
        assert_eq!(summary.new_scripts, vec!["a/new.exp"]);
        assert!(summary.gone_scripts.is_empty());
        assert!(summary.is_clean());
    }

    #[test]
    fn test_new_failing_test_is_bad() {
        let before = parse("Running target unix\nPASS: a/b.exp: t1\n");
        let after = parse(
            "Running target unix\n\
             PASS: a/b.exp: t1\n\
             FAIL: a/b.exp: t2\n",
        );
        let summary = compare(&before, &after, "unix", false);
        let transition = key(Outcome::Gone, Outcome::Known(TestStatus::Fail));
        assert_eq!(summary.transitions[&transition].len(), 1);
        assert!(summary.saw_bad);
    }

    #[test]
    fn test_results_sorted_by_id_within_transition() {
        let before = parse(
            "Running target unix\n\
             PASS: a/b.exp: zz\n\
             PASS: a/b.exp: aa\n",
        );
        let after = parse(
            "Running target unix\n\
             FAIL: a/b.exp: zz\n\
             FAIL: a/b.exp: aa\n",
        );
        let summary = compare(&before, &after, "unix", false);
        let transition = key(
            Outcome::Known(TestStatus::Pass),
            Outcome::Known(TestStatus::Fail),
        );
        let ids: Vec<String> = summary.transitions[&transition]
            .iter()
            .map(|r| r.id())
            .collect();
        assert_eq!(ids, vec!["a/b.exp: aa", "a/b.exp: zz"]);
    }
}
