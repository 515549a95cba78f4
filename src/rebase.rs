//! Four-way rebase regression classification
//!
//! Given four parsed summary files
//!
//! - A: baseline
//! - B: baseline + patch
//! - C: rebase target
//! - D: rebase target + patch
//!
//! decide which tests behave worse after the patch was carried from
//! the old base to the new one. Three independent passes classify the
//! candidates; all of them use [`TestStatus::is_bad`] and handle a
//! missing identity (GONE) explicitly, unlike the pairwise
//! comparator's GONE-aware landing predicate.

use crate::summary::{Outcome, ResultSet, TestResult, TestStatus};
use std::collections::{BTreeMap, BTreeSet};

/// One classified regression candidate.
#[derive(Debug)]
pub struct ClassifiedResult {
    /// The result instance anchoring the pass's premise (B's for pass
    /// one, C's for pass two, D's for pass three).
    pub result: TestResult,
    /// Human-readable transition, e.g. `GONE -> PASS => FAIL`.
    pub transition: String,
}

/// Output of the four-way classification, one list per pass, each
/// sorted by ascending result id.
#[derive(Debug)]
pub struct RebaseClassification {
    /// Target the classification ran over.
    pub target: String,
    /// Tests the patch fixed or introduced on the old base that are
    /// bad or missing on the rebased result.
    pub broken_after_rebase: Vec<ClassifiedResult>,
    /// Tests passing on the new base that go bad or missing once the
    /// patch is applied.
    pub patch_regressions: Vec<ClassifiedResult>,
    /// Failing tests that exist only on the rebased result.
    pub new_failures: Vec<ClassifiedResult>,
}

impl RebaseClassification {
    /// True when no pass reported anything.
    pub fn is_clean(&self) -> bool {
        self.broken_after_rebase.is_empty()
            && self.patch_regressions.is_empty()
            && self.new_failures.is_empty()
    }

    /// Total candidates across all three passes.
    pub fn total(&self) -> usize {
        self.broken_after_rebase.len() + self.patch_regressions.len() + self.new_failures.len()
    }
}

fn outcome_of(entry: Option<&&TestResult>) -> Outcome {
    match entry {
        Some(result) => Outcome::Known(result.status),
        None => Outcome::Gone,
    }
}

/// Classify rebase regressions across the four sets for one target.
pub fn classify(
    a: &ResultSet,
    b: &ResultSet,
    c: &ResultSet,
    d: &ResultSet,
    target: &str,
) -> RebaseClassification {
    let a_map = a.flat_results(target);
    let b_map = b.flat_results(target);
    let c_map = c.flat_results(target);
    let d_map = d.flat_results(target);

    // Pass one: tests that are good in B without having been good in
    // A (the patch fixed or introduced them), and are bad or missing
    // in D.
    let mut broken_after_rebase = Vec::new();
    for (id, b_result) in &b_map {
        if b_result.is_bad() {
            continue;
        }
        if a_map.get(id).is_some_and(|r| !r.is_bad()) {
            continue;
        }
        let d_entry = d_map.get(id);
        if d_entry.is_some_and(|r| !r.is_bad()) {
            continue;
        }
        broken_after_rebase.push(ClassifiedResult {
            result: (*b_result).clone(),
            transition: format!(
                "{} -> {} => {}",
                outcome_of(a_map.get(id)),
                b_result.status,
                outcome_of(d_entry)
            ),
        });
    }

    // Pass two: tests passing in C that go bad or missing in D,
    // unless A/B show the same change happened on the old base too.
    let mut patch_regressions = Vec::new();
    for (id, c_result) in &c_map {
        if !c_result.is_pass() {
            continue;
        }
        let d_entry = d_map.get(id);
        if d_entry.is_some_and(|r| !r.is_bad()) {
            continue;
        }
        if a_map.get(id).is_some_and(|r| r.status == c_result.status) {
            match (b_map.get(id), d_entry) {
                // The patch removed the test on both bases.
                (None, None) => continue,
                // The patch leaves the same outcome on both bases.
                (Some(b_result), Some(d_result)) if b_result.status == d_result.status => {
                    continue;
                }
                _ => {}
            }
        }
        patch_regressions.push(ClassifiedResult {
            result: (*c_result).clone(),
            transition: format!("{} -> {}", c_result.status, outcome_of(d_entry)),
        });
    }

    // Pass three: bad results in D with no counterpart in C or B;
    // wholly new tests brought in by the rebase that fail.
    let mut new_failures = Vec::new();
    for (id, d_result) in &d_map {
        if !d_result.is_bad() {
            continue;
        }
        if c_map.contains_key(id) || b_map.contains_key(id) {
            continue;
        }
        new_failures.push(ClassifiedResult {
            result: (*d_result).clone(),
            transition: format!("GONE -> {}", d_result.status),
        });
    }

    // Scripts that newly went UNSUPPORTED in D explain away their own
    // disappearances; drop those candidates from passes two and three.
    let unsupported = newly_unsupported_scripts(&b_map, &d_map);
    patch_regressions.retain(|entry| !unsupported.contains(&entry.result.path()));
    new_failures.retain(|entry| !unsupported.contains(&entry.result.path()));

    RebaseClassification {
        target: target.to_string(),
        broken_after_rebase,
        patch_regressions,
        new_failures,
    }
}

/// Script paths with an UNSUPPORTED result in D but none in B.
fn newly_unsupported_scripts(
    b_map: &BTreeMap<String, &TestResult>,
    d_map: &BTreeMap<String, &TestResult>,
) -> BTreeSet<String> {
    let unsupported_paths = |map: &BTreeMap<String, &TestResult>| -> BTreeSet<String> {
        map.values()
            .filter(|r| r.status == TestStatus::Unsupported)
            .map(|r| r.path())
            .collect()
    };
    let in_d = unsupported_paths(d_map);
    let in_b = unsupported_paths(b_map);
    in_d.difference(&in_b).cloned().collect()
}
