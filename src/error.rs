//! Error types for dejadiff

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for dejadiff operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for dejadiff
#[derive(Error, Debug)]
pub enum Error {
    /// Summary file could not be opened or read.
    #[error("Cannot read summary file {path}: {source}")]
    SummaryFile {
        /// Path of the summary file.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// A second tool banner named a different tool than the first.
    #[error("{file}:{line}: conflicting tool name {found:?} (file already declared {expected:?})")]
    ConflictingTool {
        /// Summary file being parsed.
        file: String,
        /// 1-based line number of the offending banner.
        line: usize,
        /// Tool name declared first.
        expected: String,
        /// Tool name on the conflicting banner.
        found: String,
    },

    /// A status line carried an exp path that differs from the current
    /// announcement context.
    #[error("{file}:{line}: path mismatch: status line names {found:?} but the last announcement was {expected:?}: {text}")]
    PathMismatch {
        file: String,
        line: usize,
        expected: String,
        found: String,
        text: String,
    },

    /// An announcement line appeared after the file committed to
    /// self-contained status lines.
    #[error("{file}:{line}: announcement after status line in a self-contained summary: {text}")]
    AnnouncementAfterStatus {
        file: String,
        line: usize,
        text: String,
    },

    /// A status line had neither an embedded exp path nor a preceding
    /// announcement to inherit one from.
    #[error("{file}:{line}: no context for result: {text}")]
    NoContext {
        file: String,
        line: usize,
        text: String,
    },

    /// A status line appeared before any target section was opened.
    #[error("{file}:{line}: result before any \"Running target\" header: {text}")]
    ResultBeforeTarget {
        file: String,
        line: usize,
        text: String,
    },

    /// An exp path contained no directory separator.
    #[error("{file}:{line}: malformed exp path {path:?} (no directory component): {text}")]
    MalformedPath {
        file: String,
        line: usize,
        path: String,
        text: String,
    },

    /// No single target could be resolved across the input files.
    #[error("Ambiguous target selection; pass --target explicitly.\n{0}")]
    AmbiguousTarget(String),

    /// An explicitly requested target is missing from an input file.
    #[error("Target {target:?} not present in {file} (available: {available})")]
    TargetNotFound {
        target: String,
        file: String,
        available: String,
    },

    /// Configuration file error or invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Other error with custom message.
    #[error("{0}")]
    Other(String),
}

impl From<String> for Error {
    fn from(s: String) -> Self {
        Error::Other(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Error::Other(s.to_string())
    }
}
