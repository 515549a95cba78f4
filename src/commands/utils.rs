//! Utility functions for command implementation

use crate::error::{Error, Result};
use crate::filter::FilterRegistry;
use crate::summary::{ResultSet, SummaryParser};
use crate::ui::UI;
use std::path::Path;

/// Parse the named summary files in order, surfacing parser warnings
/// through the UI. The filter registry is loaded once, before any
/// parse begins.
pub fn load_summaries(paths: &[&str], ui: &mut dyn UI) -> Result<Vec<ResultSet>> {
    let registry = FilterRegistry::with_builtin_filters();
    let parser = SummaryParser::new(&registry);

    let mut sets = Vec::with_capacity(paths.len());
    for path in paths {
        let set = parser.parse(Path::new(path))?;
        for warning in set.warnings() {
            ui.warning(warning)?;
        }
        sets.push(set);
    }
    Ok(sets)
}

/// Resolve the target the comparison should run over.
///
/// An explicitly requested target must be present in every input.
/// Without one, all inputs must agree on exactly one target;
/// otherwise the error lists what each file provides so the user can
/// re-invoke with --target.
pub fn resolve_target(sets: &[ResultSet], explicit: Option<&str>) -> Result<String> {
    if let Some(target) = explicit {
        for set in sets {
            if !set.has_target(target) {
                return Err(Error::TargetNotFound {
                    target: target.to_string(),
                    file: set.source().to_string(),
                    available: set.targets().join(", "),
                });
            }
        }
        return Ok(target.to_string());
    }

    let mut candidate: Option<&str> = None;
    let mut resolved = true;
    for set in sets {
        let targets = set.targets();
        if targets.len() != 1 {
            resolved = false;
            break;
        }
        match candidate {
            None => candidate = Some(targets[0]),
            Some(name) if name == targets[0] => {}
            Some(_) => {
                resolved = false;
                break;
            }
        }
    }

    if resolved {
        if let Some(name) = candidate {
            return Ok(name.to_string());
        }
    }

    let mut listing = String::new();
    for set in sets {
        let targets = set.targets();
        let available = if targets.is_empty() {
            "(no targets)".to_string()
        } else {
            targets.join(", ")
        };
        listing.push_str(&format!("  {}: {}\n", set.source(), available));
    }
    Err(Error::AmbiguousTarget(listing.trim_end().to_string()))
}
