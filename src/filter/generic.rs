//! Generic test name normalization rules
//!
//! The consolidated rule set shared by every tool. Rules are ordered:
//! unconditional substitutions run first, then per-script rules keyed
//! on the exact script path, then the tool-conditional trailing
//! annotation strip. Later rules therefore always see text the
//! earlier rules have already normalized.

use crate::filter::NameFilter;
use regex::Regex;

/// One regex rewrite.
struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(pattern: &str, replacement: &'static str) -> Rule {
        Rule {
            pattern: Regex::new(pattern).expect("built-in filter rule must compile"),
            replacement,
        }
    }

    fn apply(&self, text: &str) -> String {
        self.pattern.replace_all(text, self.replacement).into_owned()
    }
}

/// Rules that apply only to one known-special script.
struct PathRules {
    path: &'static str,
    rules: Vec<Rule>,
}

/// The generic name filter.
///
/// Every substitution normalizes to a fixed point: applying the filter
/// to its own output returns the same string.
pub struct GenericFilter {
    unconditional: Vec<Rule>,
    path_conditional: Vec<PathRules>,
    trailing_paren: Regex,
    paren_allowlist: Vec<Regex>,
}

impl GenericFilter {
    pub fn new() -> Self {
        let unconditional = vec![
            // Harness repetition and timeout markers carry no identity.
            Rule::new(
                r" \((?:first time|second time|third time|again|timeout)\)",
                "",
            ),
            // PRMS ticket annotations, parenthesized or bare.
            Rule::new(r" ?\(PRMS:? [^)]*\)", ""),
            Rule::new(r" PRMS:? [A-Za-z.+-]+/\d+", ""),
            // Absolute build-tree paths down to the testsuite-relative suffix.
            Rule::new(r"/\S+/testsuite/", ""),
            // Hexadecimal addresses.
            Rule::new(r"0x[0-9a-fA-F]+", "<hex>"),
            // Process IDs.
            Rule::new(r"\b(process|pid|PID) (\d+)", "$1 <pid>"),
            // Long bare hex strings are content hashes.
            Rule::new(r"\b[0-9a-f]{32,}\b", "<hash>"),
            // Timestamps.
            Rule::new(r"\d{4}-\d{2}-\d{2}[ T]\d{2}:\d{2}:\d{2}", "<timestamp>"),
        ];

        let path_conditional = vec![
            PathRules {
                // Interpreter and libc names carry host version suffixes.
                path: "gdb.base/break-interp.exp",
                rules: vec![
                    Rule::new(r"\.so\.[0-9][0-9.]*", ".so.<ver>"),
                    Rule::new(r"\bld-[0-9][0-9.]*\.so", "ld.so"),
                ],
            },
            PathRules {
                // Record/replay logs print raw decimal addresses.
                path: "gdb.reverse/sigall-reverse.exp",
                rules: vec![Rule::new(r"\baddress \d+", "address <addr>")],
            },
            PathRules {
                // The attached process's PID appears in the test name itself.
                path: "gdb.base/attach.exp",
                rules: vec![Rule::new(r"\battach (\d+)", "attach <pid>")],
            },
        ];

        GenericFilter {
            unconditional,
            path_conditional,
            trailing_paren: Regex::new(r" \([^()]*\)$")
                .expect("built-in filter rule must compile"),
            paren_allowlist: vec![
                // An empty pair is a function call in an expression printout.
                Regex::new(r"\(\)$").expect("built-in filter rule must compile"),
                // Expression-printing commands keep their parentheses.
                Regex::new(r"\b(?:print|ptype|whatis|call)\b")
                    .expect("built-in filter rule must compile"),
            ],
        }
    }

    /// Strip trailing parenthesized annotations for tools whose
    /// harness appends incidental metadata, e.g.
    /// `(the program exited)`. Names on the allow-list keep their
    /// parentheses: there the parenthetical is part of the test name.
    ///
    /// Stripping repeats until a fixed point so stacked annotations
    /// all go.
    fn strip_trailing_annotations(&self, name: &str) -> String {
        let mut current = name.to_string();
        loop {
            if self.paren_allowlist.iter().any(|re| re.is_match(&current)) {
                return current;
            }
            let stripped = self.trailing_paren.replace(&current, "").into_owned();
            if stripped == current {
                return current;
            }
            current = stripped;
        }
    }
}

impl Default for GenericFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl NameFilter for GenericFilter {
    fn filter_testname(&self, tool: &str, path: &str, testname: &str) -> String {
        let mut name = testname.to_string();

        for rule in &self.unconditional {
            name = rule.apply(&name);
        }

        for entry in &self.path_conditional {
            if entry.path == path {
                for rule in &entry.rules {
                    name = rule.apply(&name);
                }
            }
        }

        if tool == "gdb" {
            name = self.strip_trailing_annotations(&name);
        }

        name
    }
}
