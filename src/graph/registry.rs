// src/graph/registry.rs

use std::collections::BTreeSet;
use std::collections::HashMap;

use crate::graph::node::{Node, NodeKind, keys};

/// Id of the reserved synthetic root node.
pub const ROOT_ID: usize = 0;

/// Node storage with stable identity.
///
/// Ids are dense integers in first-seen order, with id 0 pre-allocated for
/// the synthetic root. `ensure` is a pure upsert: a node is never removed
/// or relabeled once created, so ids handed out earlier in a build stay
/// valid for its whole lifetime.
#[derive(Debug, Clone)]
pub struct NodeRegistry {
    nodes: Vec<Node>,
    index: HashMap<String, usize>,
}

impl NodeRegistry {
    /// Create a registry containing only the root node.
    pub fn new() -> Self {
        let root = Node {
            id: ROOT_ID,
            key: keys::ROOT.to_string(),
            label: String::new(),
            kind: NodeKind::Root,
            groups: BTreeSet::new(),
        };
        let mut index = HashMap::new();
        index.insert(root.key.clone(), ROOT_ID);

        Self {
            nodes: vec![root],
            index,
        }
    }

    /// Upsert a node by key.
    ///
    /// If `key` already exists, `owning_task` is added to its group set and
    /// the existing id is returned unchanged; the stored label and kind are
    /// kept as first seen. Otherwise the next sequential id is allocated.
    pub fn ensure(&mut self, key: &str, label: &str, kind: NodeKind, owning_task: &str) -> usize {
        if let Some(&id) = self.index.get(key) {
            self.nodes[id].groups.insert(owning_task.to_string());
            return id;
        }

        let id = self.nodes.len();
        let mut groups = BTreeSet::new();
        groups.insert(owning_task.to_string());

        self.nodes.push(Node {
            id,
            key: key.to_string(),
            label: label.to_string(),
            kind,
            groups,
        });
        self.index.insert(key.to_string(), id);

        id
    }

    /// Id of a node by key, if present.
    pub fn id_of(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Key of a node by id. Ids come from `ensure`, so this only fails on
    /// an out-of-range id.
    pub fn key_of(&self, id: usize) -> Option<&str> {
        self.nodes.get(id).map(|n| n.key.as_str())
    }

    /// All nodes in id order (root first).
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Total node count, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        // The root always exists, so a registry is never truly empty.
        self.nodes.len() <= 1
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
