// src/model/mod.rs

//! The emitted layout model: the sole boundary between this engine and the
//! external renderer.
//!
//! - This module defines the serializable types.
//! - [`emit`] assembles a model from the built graph and resolved layout.
//! - [`validate`] checks the structural invariants after a build.

pub mod emit;
pub mod validate;

use serde::Serialize;

use crate::layout::BoxLayout;

pub use emit::emit;
pub use validate::validate_model;

/// One node of the emitted model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelNode {
    pub id: usize,
    /// `None` only for the synthetic root (id 0).
    #[serde(rename = "parentId")]
    pub parent_id: Option<usize>,
    pub label: String,
    /// "module", "entity" or "root".
    pub kind: String,
    /// "source", "sink", "intermediate" or "root".
    pub subtype: String,
    /// Owning task ids, sorted.
    pub groups: Vec<String>,
}

/// One directed link, resolved to integer node ids and tagged with the task
/// that produced it. Links are per task, never deduplicated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskLink {
    pub source: usize,
    pub target: usize,
    pub task: String,
}

/// The complete serializable model consumed by the external renderer.
///
/// `task_order` and `palette` are parallel: color `i` belongs to task `i`.
/// `layout` is present only when the box variant was selected.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutModel {
    pub nodes: Vec<ModelNode>,
    pub task_links: Vec<TaskLink>,
    pub task_order: Vec<String>,
    pub palette: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<BoxLayout>,
}

impl LayoutModel {
    /// Whether this is the minimal root-only model (no task contributed any
    /// node). A valid terminal state, not an error.
    pub fn is_minimal(&self) -> bool {
        self.nodes.len() == 1 && self.task_links.is_empty()
    }
}
