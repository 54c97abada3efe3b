// src/snapshot/model.rs

use serde::Deserialize;
use serde_json::Value;

/// One task's entry in a run snapshot.
///
/// `output` is the raw output record of the task's latest *successful* run,
/// kept as untyped JSON: run outputs are written by arbitrary task code and
/// only the step log inside them has a contract (see `extract.rs`). A task
/// with no successful run carries `output: null` (or omits the field) and
/// contributes nothing to the build.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskSnapshot {
    /// Stable task identifier, used for edge tagging and grouping.
    pub task_id: String,

    /// Human-readable task name.
    ///
    /// Currently only informational; node labels come from module ids.
    #[serde(default)]
    pub name: String,

    /// Raw output of the latest successful run, if any.
    #[serde(default)]
    pub output: Option<Value>,
}

/// An immutable snapshot of the tasks to visualize, in caller-provided
/// order.
///
/// Order matters: it fixes node discovery order, edge creation order, the
/// contributing-task order and therefore the palette. Rebuilding from the
/// same snapshot must yield an identical model.
#[derive(Debug, Clone, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub tasks: Vec<TaskSnapshot>,
}

impl Snapshot {
    /// Keep only the tasks whose id appears in `selected`, preserving the
    /// snapshot's own ordering.
    ///
    /// An empty selection keeps everything, matching the dashboard filter
    /// semantics where no selection means "all tasks".
    pub fn retain_tasks(&mut self, selected: &[String]) {
        if selected.is_empty() {
            return;
        }
        self.tasks.retain(|t| selected.iter().any(|s| s == &t.task_id));
    }
}
