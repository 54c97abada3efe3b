// src/graph/node.rs

use std::collections::BTreeSet;

/// Role of a module node within the lineage graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleRole {
    Source,
    Sink,
    Intermediate,
}

/// Role of an entity node.
///
/// An entity only ever appears on a source or sink step; the same entity
/// name read on one side and written on the other becomes two distinct
/// nodes, one per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRole {
    Source,
    Sink,
}

/// What a graph vertex represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    /// The synthetic layout anchor at id 0. No domain meaning.
    Root,
    Module(ModuleRole),
    Entity(EntityRole),
}

impl NodeKind {
    /// Coarse kind string as used in the emitted model.
    pub fn kind_str(&self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Module(_) => "module",
            NodeKind::Entity(_) => "entity",
        }
    }

    /// Role string as used in the emitted model.
    pub fn subtype_str(&self) -> &'static str {
        match self {
            NodeKind::Root => "root",
            NodeKind::Module(ModuleRole::Source) | NodeKind::Entity(EntityRole::Source) => "source",
            NodeKind::Module(ModuleRole::Sink) | NodeKind::Entity(EntityRole::Sink) => "sink",
            NodeKind::Module(ModuleRole::Intermediate) => "intermediate",
        }
    }
}

/// One graph vertex.
///
/// `id` is dense and assigned in first-seen order; `groups` is the growing
/// set of tasks that referenced this node. Neither the id nor the label is
/// ever reassigned within a build.
#[derive(Debug, Clone)]
pub struct Node {
    pub id: usize,
    pub key: String,
    pub label: String,
    pub kind: NodeKind,
    pub groups: BTreeSet<String>,
}

/// Node key composition.
///
/// The key alone determines identity: two steps producing the same key are
/// the same node, regardless of which task produced them. Source/sink keys
/// are role-qualified but task-free (shared across tasks); intermediate
/// keys embed the task id and step index, so they are never shared.
pub mod keys {
    /// Key of the reserved synthetic root.
    pub const ROOT: &str = "root";

    pub fn source_module(module: &str) -> String {
        format!("module:source:{module}")
    }

    pub fn sink_module(module: &str) -> String {
        format!("module:sink:{module}")
    }

    /// Task-private key for an intermediate step. `index` is the step's
    /// position in the extracted (post-filter) step sequence.
    pub fn intermediate_module(task: &str, module: &str, index: usize) -> String {
        format!("module:mid:{task}:{module}:{index}")
    }

    pub fn source_entity(entity: &str) -> String {
        format!("entity:source:{entity}")
    }

    pub fn sink_entity(entity: &str) -> String {
        format!("entity:sink:{entity}")
    }
}
