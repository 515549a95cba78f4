//! Test result data structures

use std::fmt;

/// Status of a single DejaGNU test, as recorded in a summary file.
///
/// Variants are declared in the fixed "interesting-first" order used
/// when choosing table columns: statuses that usually demand attention
/// sort before the ones that do not, so FAIL columns always appear
/// before PASS columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TestStatus {
    /// Test failed.
    Fail,
    /// Test passed but was expected to fail.
    XPass,
    /// Test passed but a known bug was expected to make it fail.
    KPass,
    /// Test produced no usable outcome.
    Unresolved,
    /// Test was not run to completion.
    Untested,
    /// Test is not supported in this configuration.
    Unsupported,
    /// Test failed, and the failure was expected.
    XFail,
    /// Test failed due to a known, filed bug.
    KFail,
    /// Test passed.
    Pass,
}

/// All statuses in interesting-first order.
pub const ALL_STATUSES: [TestStatus; 9] = [
    TestStatus::Fail,
    TestStatus::XPass,
    TestStatus::KPass,
    TestStatus::Unresolved,
    TestStatus::Untested,
    TestStatus::Unsupported,
    TestStatus::XFail,
    TestStatus::KFail,
    TestStatus::Pass,
];

impl TestStatus {
    /// Parse a DejaGNU status keyword. Returns `None` for anything that
    /// is not one of the nine known words; callers treat such lines as
    /// non-status lines rather than errors.
    pub fn from_word(word: &str) -> Option<TestStatus> {
        match word {
            "PASS" => Some(TestStatus::Pass),
            "FAIL" => Some(TestStatus::Fail),
            "XPASS" => Some(TestStatus::XPass),
            "XFAIL" => Some(TestStatus::XFail),
            "KPASS" => Some(TestStatus::KPass),
            "KFAIL" => Some(TestStatus::KFail),
            "UNRESOLVED" => Some(TestStatus::Unresolved),
            "UNSUPPORTED" => Some(TestStatus::Unsupported),
            "UNTESTED" => Some(TestStatus::Untested),
            _ => None,
        }
    }

    /// The DejaGNU keyword for this status.
    pub fn as_str(&self) -> &'static str {
        match self {
            TestStatus::Pass => "PASS",
            TestStatus::Fail => "FAIL",
            TestStatus::XPass => "XPASS",
            TestStatus::XFail => "XFAIL",
            TestStatus::KPass => "KPASS",
            TestStatus::KFail => "KFAIL",
            TestStatus::Unresolved => "UNRESOLVED",
            TestStatus::Unsupported => "UNSUPPORTED",
            TestStatus::Untested => "UNTESTED",
        }
    }

    /// Returns true if this status counts as a pass.
    ///
    /// Passes are PASS, XPASS and KPASS.
    pub fn is_pass(&self) -> bool {
        matches!(
            self,
            TestStatus::Pass | TestStatus::XPass | TestStatus::KPass
        )
    }

    /// Returns true if this status counts as outright bad.
    ///
    /// Bad statuses are FAIL, UNRESOLVED and UNTESTED. UNSUPPORTED,
    /// XFAIL and KFAIL are neither pass nor bad; they are expected
    /// outcomes.
    pub fn is_bad(&self) -> bool {
        matches!(
            self,
            TestStatus::Fail | TestStatus::Unresolved | TestStatus::Untested
        )
    }
}

impl fmt::Display for TestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Either a concrete status or the pseudo-status GONE, meaning the
/// test identity is absent from one side of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Outcome {
    /// The test was present with this status.
    Known(TestStatus),
    /// The test identity does not appear at all.
    Gone,
}

impl Outcome {
    /// Destination badness used by the pairwise comparator: a
    /// transition is bad when it lands on one of these outcomes.
    ///
    /// This is intentionally wider than [`TestStatus::is_bad`]: a test
    /// that vanishes (GONE) or goes UNSUPPORTED is a bad landing even
    /// though neither is a bad status on its own. The four-way
    /// classifier never uses this predicate; it handles GONE
    /// explicitly and sticks to `TestStatus::is_bad`.
    pub fn is_bad_landing(&self) -> bool {
        match self {
            Outcome::Gone => true,
            Outcome::Known(status) => matches!(
                status,
                TestStatus::Fail
                    | TestStatus::Unresolved
                    | TestStatus::Untested
                    | TestStatus::Unsupported
            ),
        }
    }
}

impl From<TestStatus> for Outcome {
    fn from(status: TestStatus) -> Self {
        Outcome::Known(status)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Known(status) => write!(f, "{}", status),
            Outcome::Gone => write!(f, "GONE"),
        }
    }
}

/// One parsed status line from a summary file.
///
/// Immutable once constructed. The filtered `testname` is computed at
/// construction time (the filter registry is always populated before
/// parsing begins), while `original_testname` keeps the raw text
/// exactly as it appeared in the file.
#[derive(Debug, Clone)]
pub struct TestResult {
    /// Grouping directory of the originating test script (e.g. `gdb.base`).
    pub directory: String,
    /// Base script name (e.g. `break.exp`).
    pub filename: String,
    /// Parsed status keyword.
    pub status: TestStatus,
    /// Raw free-text portion of the line after the status prefix.
    pub original_testname: String,
    /// Normalized test name: the tool's name filter applied to
    /// `original_testname`, then trimmed.
    pub testname: String,
    /// Tool this result belongs to ("unknown" if the file had no banner).
    pub tool_name: String,
    /// Target configuration this result was produced under.
    pub target_name: String,
}

impl TestResult {
    /// Script path: `directory + "/" + filename`.
    pub fn path(&self) -> String {
        format!("{}/{}", self.directory, self.filename)
    }

    /// Identity used to match this test across summary files:
    /// `path + ": " + testname`. Not guaranteed unique within one
    /// file; duplicates are tolerated last-wins.
    pub fn id(&self) -> String {
        format!("{}: {}", self.path(), self.testname)
    }

    /// Shorthand for `self.status.is_pass()`.
    pub fn is_pass(&self) -> bool {
        self.status.is_pass()
    }

    /// Shorthand for `self.status.is_bad()`.
    pub fn is_bad(&self) -> bool {
        self.status.is_bad()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(status: TestStatus, testname: &str) -> TestResult {
        TestResult {
            directory: "gdb.base".to_string(),
            filename: "break.exp".to_string(),
            status,
            original_testname: testname.to_string(),
            testname: testname.to_string(),
            tool_name: "gdb".to_string(),
            target_name: "unix".to_string(),
        }
    }

    #[test]
    fn test_status_from_word() {
        assert_eq!(TestStatus::from_word("PASS"), Some(TestStatus::Pass));
        assert_eq!(TestStatus::from_word("KFAIL"), Some(TestStatus::KFail));
        assert_eq!(
            TestStatus::from_word("UNSUPPORTED"),
            Some(TestStatus::Unsupported)
        );
        assert_eq!(TestStatus::from_word("pass"), None);
        assert_eq!(TestStatus::from_word("WARNING"), None);
    }

    #[test]
    fn test_status_round_trip() {
        for status in ALL_STATUSES {
            assert_eq!(TestStatus::from_word(status.as_str()), Some(status));
        }
    }

    #[test]
    fn test_status_is_pass() {
        assert!(TestStatus::Pass.is_pass());
        assert!(TestStatus::XPass.is_pass());
        assert!(TestStatus::KPass.is_pass());
        assert!(!TestStatus::Fail.is_pass());
        assert!(!TestStatus::XFail.is_pass());
        assert!(!TestStatus::Unsupported.is_pass());
    }

    #[test]
    fn test_status_is_bad() {
        assert!(TestStatus::Fail.is_bad());
        assert!(TestStatus::Unresolved.is_bad());
        assert!(TestStatus::Untested.is_bad());
        assert!(!TestStatus::Unsupported.is_bad());
        assert!(!TestStatus::XFail.is_bad());
        assert!(!TestStatus::KFail.is_bad());
        assert!(!TestStatus::Pass.is_bad());
    }

    #[test]
    fn test_fail_sorts_before_pass() {
        assert!(TestStatus::Fail < TestStatus::Pass);
        assert!(TestStatus::XPass < TestStatus::XFail);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Known(TestStatus::Fail).to_string(), "FAIL");
        assert_eq!(Outcome::Gone.to_string(), "GONE");
    }

    #[test]
    fn test_outcome_bad_landing() {
        assert!(Outcome::Gone.is_bad_landing());
        assert!(Outcome::Known(TestStatus::Fail).is_bad_landing());
        assert!(Outcome::Known(TestStatus::Unresolved).is_bad_landing());
        assert!(Outcome::Known(TestStatus::Untested).is_bad_landing());
        assert!(Outcome::Known(TestStatus::Unsupported).is_bad_landing());
        assert!(!Outcome::Known(TestStatus::Pass).is_bad_landing());
        assert!(!Outcome::Known(TestStatus::XFail).is_bad_landing());
        assert!(!Outcome::Known(TestStatus::KFail).is_bad_landing());
        assert!(!Outcome::Known(TestStatus::XPass).is_bad_landing());
        assert!(!Outcome::Known(TestStatus::KPass).is_bad_landing());
    }

    #[test]
    fn test_result_path_and_id() {
        let r = result(TestStatus::Pass, "run to main");
        assert_eq!(r.path(), "gdb.base/break.exp");
        assert_eq!(r.id(), "gdb.base/break.exp: run to main");
        assert_eq!(r.path(), format!("{}/{}", r.directory, r.filename));
    }
}
