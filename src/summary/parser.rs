//! Summary file parsing
//!
//! DejaGNU harnesses have produced two incompatible summary layouts.
//! The older one announces each test script before its results:
//!
//! ```text
//! Running /build/src/testsuite/gdb.base/break.exp ...
//! PASS: run to main
//! ```
//!
//! Parallel harness modes skip the announcements and prefix every
//! status line with its own script path instead:
//!
//! ```text
//! PASS: gdb.base/break.exp: run to main
//! ```
//!
//! A single file must use one layout consistently; the parser commits
//! to whichever it sees first and treats any mixing as fatal. Lines
//! matching neither a banner, a target header, an announcement nor a
//! known status word are ignored, including status-shaped lines with
//! unrecognized keywords.

use crate::error::{Error, Result};
use crate::filter::FilterRegistry;
use crate::summary::{ResultSet, TestResult, TestStatus};
use regex::Regex;
use std::fs;
use std::path::Path;

/// Which layout the file has committed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SummaryFormat {
    /// No announcement or pathed status line seen yet.
    Undetermined,
    /// Announcement lines supply the script context.
    Announced,
    /// Every status line carries its own script path.
    SelfContained,
}

/// Script context derived from an announcement or an embedded path.
#[derive(Debug, Clone)]
struct ExpContext {
    path: String,
    directory: String,
    filename: String,
}

/// Parser for DejaGNU summary files.
///
/// Holds a borrow of the filter registry so test names can be
/// normalized as results are constructed; the registry must be fully
/// populated before parsing begins. Parsing has no other shared
/// state, so one parser can be reused across any number of files.
pub struct SummaryParser<'a> {
    registry: &'a FilterRegistry,
    tool_banner: Regex,
    target_header: Regex,
    announcement: Regex,
    status_line: Regex,
    embedded_path: Regex,
}

impl<'a> SummaryParser<'a> {
    pub fn new(registry: &'a FilterRegistry) -> Self {
        SummaryParser {
            registry,
            tool_banner: Regex::new(r"^\s*=== (\S+) tests ===")
                .expect("parser line pattern must compile"),
            target_header: Regex::new(r"^Running target (.+)$")
                .expect("parser line pattern must compile"),
            announcement: Regex::new(r"^Running \S*/testsuite/(\S+\.exp) \.\.\.")
                .expect("parser line pattern must compile"),
            status_line: Regex::new(r"^([A-Z]+): (.*)$")
                .expect("parser line pattern must compile"),
            embedded_path: Regex::new(r"^(\S+\.exp): (.*)$")
                .expect("parser line pattern must compile"),
        }
    }

    /// Parse a summary file from disk.
    pub fn parse(&self, path: &Path) -> Result<ResultSet> {
        let contents = fs::read_to_string(path).map_err(|source| Error::SummaryFile {
            path: path.to_path_buf(),
            source,
        })?;
        self.parse_str(&path.display().to_string(), &contents)
    }

    /// Parse summary text already in memory. `source` names the input
    /// in diagnostics and errors.
    pub fn parse_str(&self, source: &str, contents: &str) -> Result<ResultSet> {
        let mut set = ResultSet::new(source);
        let mut format = SummaryFormat::Undetermined;
        let mut context: Option<ExpContext> = None;
        let mut current_target: Option<String> = None;
        let mut tool: Option<String> = None;

        for (index, raw_line) in contents.lines().enumerate() {
            let line_no = index + 1;
            let line = raw_line.trim_end_matches('\r');

            if let Some(caps) = self.tool_banner.captures(line) {
                let name = &caps[1];
                match tool.as_deref() {
                    None => {
                        tool = Some(name.to_string());
                        set.tool_name = name.to_string();
                    }
                    Some(existing) if existing == name => {}
                    Some(existing) => {
                        return Err(Error::ConflictingTool {
                            file: source.to_string(),
                            line: line_no,
                            expected: existing.to_string(),
                            found: name.to_string(),
                        });
                    }
                }
                continue;
            }

            if let Some(caps) = self.target_header.captures(line) {
                let name = caps[1].trim().to_string();
                set.open_target(&name);
                current_target = Some(name);
                continue;
            }

            if let Some(caps) = self.announcement.captures(line) {
                if format == SummaryFormat::SelfContained {
                    return Err(Error::AnnouncementAfterStatus {
                        file: source.to_string(),
                        line: line_no,
                        text: line.to_string(),
                    });
                }
                format = SummaryFormat::Announced;
                context = Some(split_exp_path(&caps[1], source, line_no, line)?);
                continue;
            }

            let Some((status, rest)) = self.match_status_line(line) else {
                continue;
            };

            let Some(target) = current_target.as_deref() else {
                return Err(Error::ResultBeforeTarget {
                    file: source.to_string(),
                    line: line_no,
                    text: line.to_string(),
                });
            };

            // Resolve the script context and testname for this line.
            let (ctx, testname) = match self.embedded_path.captures(rest) {
                Some(caps) => {
                    let embedded = caps[1].to_string();
                    let name = caps[2].to_string();
                    match format {
                        SummaryFormat::Announced => {
                            // An embedded path is only acceptable when it
                            // restates the current announcement.
                            let current = context.as_ref().ok_or_else(|| Error::NoContext {
                                file: source.to_string(),
                                line: line_no,
                                text: line.to_string(),
                            })?;
                            if current.path != embedded {
                                return Err(Error::PathMismatch {
                                    file: source.to_string(),
                                    line: line_no,
                                    expected: current.path.clone(),
                                    found: embedded,
                                    text: line.to_string(),
                                });
                            }
                            (current.clone(), name)
                        }
                        SummaryFormat::Undetermined | SummaryFormat::SelfContained => {
                            format = SummaryFormat::SelfContained;
                            let ctx = split_exp_path(&embedded, source, line_no, line)?;
                            context = Some(ctx.clone());
                            (ctx, name)
                        }
                    }
                }
                None => match (format, context.as_ref()) {
                    (SummaryFormat::Announced, Some(ctx)) => (ctx.clone(), rest.to_string()),
                    _ => {
                        return Err(Error::NoContext {
                            file: source.to_string(),
                            line: line_no,
                            text: line.to_string(),
                        });
                    }
                },
            };

            let tool_name = tool.as_deref().unwrap_or(crate::summary::UNKNOWN_TOOL);
            let filtered = self
                .registry
                .find(tool_name)
                .filter_testname(tool_name, &ctx.path, &testname);

            let result = TestResult {
                directory: ctx.directory.clone(),
                filename: ctx.filename.clone(),
                status,
                original_testname: testname,
                testname: filtered.trim().to_string(),
                tool_name: tool_name.to_string(),
                target_name: target.to_string(),
            };

            let id = result.id();
            let target_name = target.to_string();
            if let Some(previous) = set.open_target(&target_name).push(result) {
                set.add_warning(format!(
                    "{}:{}: duplicate test id {:?}: {} replaced by {}",
                    source, line_no, id, previous, status
                ));
            }
        }

        Ok(set)
    }

    /// Match a status line; returns the parsed status and the text
    /// after the `STATUS: ` prefix. Lines with an unrecognized leading
    /// keyword are not status lines.
    fn match_status_line<'l>(&self, line: &'l str) -> Option<(TestStatus, &'l str)> {
        let caps = self.status_line.captures(line)?;
        let status = TestStatus::from_word(caps.get(1)?.as_str())?;
        Some((status, caps.get(2)?.as_str()))
    }
}

/// Split `a/b/c.exp` into directory `a/b` and filename `c.exp` at the
/// last separator. A path with no separator is invalid input.
fn split_exp_path(path: &str, source: &str, line_no: usize, line: &str) -> Result<ExpContext> {
    match path.rfind('/') {
        Some(pos) if pos > 0 && pos + 1 < path.len() => Ok(ExpContext {
            path: path.to_string(),
            directory: path[..pos].to_string(),
            filename: path[pos + 1..].to_string(),
        }),
        _ => Err(Error::MalformedPath {
            file: source.to_string(),
            line: line_no,
            path: path.to_string(),
            text: line.to_string(),
        }),
    }
}
