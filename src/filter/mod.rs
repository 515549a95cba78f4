//! Test name normalization filters
//!
//! Raw DejaGNU test names embed non-deterministic text (addresses,
//! PIDs, timestamps) that would make the same test look different
//! across runs. Filters rewrite names to a stable form so that
//! identities can be matched between summary files.
//!
//! Filters are registered per tool in a [`FilterRegistry`] once at
//! startup and looked up read-only afterward. Lookup falls back in
//! three tiers: a filter registered for the tool, else the generic
//! filter once loading has happened, else the identity filter, so a
//! lookup performed before loading never silently applies rules.

pub mod gdb;
pub mod generic;

pub use gdb::GdbFilter;
pub use generic::GenericFilter;

use std::collections::HashMap;

/// Capability interface for test name normalization.
///
/// `filter_testname` is a pure function of its inputs: it returns a
/// fresh string and never mutates the raw name.
pub trait NameFilter {
    /// Normalize `testname` for the given tool and script path.
    fn filter_testname(&self, tool: &str, path: &str, testname: &str) -> String;
}

/// Identity filter: returns the name unchanged.
///
/// Used as the fallback before any filters have been loaded.
pub struct NullFilter;

impl NameFilter for NullFilter {
    fn filter_testname(&self, _tool: &str, _path: &str, testname: &str) -> String {
        testname.to_string()
    }
}

/// Registry mapping tool names to their filters.
pub struct FilterRegistry {
    filters: HashMap<String, Box<dyn NameFilter>>,
    generic: GenericFilter,
    null: NullFilter,
    loaded: bool,
}

impl FilterRegistry {
    /// Create an empty registry. Until filters are loaded, `find`
    /// resolves every tool to the identity filter.
    pub fn new() -> Self {
        FilterRegistry {
            filters: HashMap::new(),
            generic: GenericFilter::new(),
            null: NullFilter,
            loaded: false,
        }
    }

    /// Create a registry with the built-in filters already loaded.
    pub fn with_builtin_filters() -> Self {
        let mut registry = Self::new();
        registry.load_builtin_filters();
        registry
    }

    /// Register a filter for a tool, replacing any previous one.
    pub fn register(&mut self, tool: impl Into<String>, filter: Box<dyn NameFilter>) {
        self.filters.insert(tool.into(), filter);
        self.loaded = true;
    }

    /// Register the built-in per-tool filters. This replaces the
    /// original tool's scan-a-directory-of-modules mechanic with
    /// explicit startup registration; lookup semantics are unchanged.
    pub fn load_builtin_filters(&mut self) {
        self.register("gdb", Box::new(GdbFilter::new()));
    }

    /// Whether any filters have been loaded yet.
    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Look up the filter for a tool.
    ///
    /// Returns the registered filter for `tool` if present, else the
    /// generic filter if loading has happened, else the identity
    /// filter.
    pub fn find(&self, tool: &str) -> &dyn NameFilter {
        if let Some(filter) = self.filters.get(tool) {
            filter.as_ref()
        } else if self.loaded {
            &self.generic
        } else {
            &self.null
        }
    }
}

impl Default for FilterRegistry {
    fn default() -> Self {
        Self::new()
    }
}
