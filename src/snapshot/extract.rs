// src/snapshot/extract.rs

//! Step extraction: turn the untyped `run_times` log of a run output into a
//! typed step sequence.
//!
//! The contract is best-effort by design: malformed entries are dropped and
//! the rest of the log keeps processing, so a half-broken run still yields a
//! partial visualization. No entry shape ever raises an error.

use serde_json::{Map, Value};
use tracing::debug;

/// One typed entry of a run's step log.
///
/// Produced here so the graph builder never has to inspect raw strings
/// again; the role classification happens exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// A step that reads an external data entity into the workflow.
    Source {
        module: String,
        entity: Option<String>,
    },
    /// A step that writes workflow data out to an entity.
    Sink {
        module: String,
        entity: Option<String>,
    },
    /// Any other step; always private to its task in the graph.
    Intermediate { module: String },
}

impl Step {
    /// The module id of this step, regardless of role.
    pub fn module(&self) -> &str {
        match self {
            Step::Source { module, .. }
            | Step::Sink { module, .. }
            | Step::Intermediate { module } => module,
        }
    }
}

/// Extract the ordered, typed step sequence from a raw run output.
///
/// Rules:
/// - no `run_times` array ⇒ the task contributes nothing (empty sequence)
/// - non-object entries are skipped
/// - entries without a non-empty `module_id` are skipped
/// - `module_type` is classified by case-insensitive prefix:
///   "source*" ⇒ [`Step::Source`], "sink*" ⇒ [`Step::Sink`], anything else
///   (including absent) ⇒ [`Step::Intermediate`]
pub fn extract_steps(output: &Value) -> Vec<Step> {
    let Some(entries) = output.get("run_times").and_then(Value::as_array) else {
        debug!("run output has no step log array; skipping task output");
        return Vec::new();
    };

    let mut steps = Vec::with_capacity(entries.len());

    for entry in entries {
        let Some(obj) = entry.as_object() else {
            debug!("skipping non-object step entry");
            continue;
        };

        // `module_idk` is the spelling used by older scheduler versions;
        // accept both so historical run outputs still visualize.
        let module = match string_field(obj, "module_id")
            .or_else(|| string_field(obj, "module_idk"))
        {
            Some(m) => m,
            None => {
                debug!("skipping step entry without module_id");
                continue;
            }
        };

        let entity = string_field(obj, "module_entity");
        let module_type = string_field(obj, "module_type")
            .unwrap_or_default()
            .to_lowercase();

        let step = if module_type.starts_with("source") {
            Step::Source { module, entity }
        } else if module_type.starts_with("sink") {
            Step::Sink { module, entity }
        } else {
            Step::Intermediate { module }
        };

        steps.push(step);
    }

    steps
}

/// Fetch a non-empty string field from a step entry.
fn string_field(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
