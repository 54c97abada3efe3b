// src/model/validate.rs

use anyhow::{Result, anyhow};
use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::graph::ROOT_ID;
use crate::model::LayoutModel;

/// Run structural validation against an emitted model.
///
/// This checks:
/// - node ids are dense integers starting at 0
/// - node 0 is the root and the only node without a parent
/// - every parent pointer is in range and not self-referential
/// - the parent-pointer structure is acyclic
/// - link endpoints are in range
/// - palette and task order have the same length
///
/// A build from this crate always satisfies these; a failure here is a bug
/// in the build, not a property of the input data.
pub fn validate_model(model: &LayoutModel) -> Result<()> {
    ensure_dense_ids(model)?;
    ensure_root(model)?;
    ensure_parents(model)?;
    ensure_tree_acyclic(model)?;
    ensure_link_endpoints(model)?;
    ensure_palette_parity(model)?;
    Ok(())
}

fn ensure_dense_ids(model: &LayoutModel) -> Result<()> {
    for (expected, node) in model.nodes.iter().enumerate() {
        if node.id != expected {
            return Err(anyhow!(
                "node ids must be dense from 0: position {} holds id {}",
                expected,
                node.id
            ));
        }
    }
    Ok(())
}

fn ensure_root(model: &LayoutModel) -> Result<()> {
    let root = model
        .nodes
        .first()
        .ok_or_else(|| anyhow!("model has no nodes; even an empty build emits the root"))?;

    if root.kind != "root" {
        return Err(anyhow!("node 0 must be the root (got kind '{}')", root.kind));
    }
    if root.parent_id.is_some() {
        return Err(anyhow!("root node must not have a parent"));
    }
    Ok(())
}

fn ensure_parents(model: &LayoutModel) -> Result<()> {
    for node in model.nodes.iter().skip(1) {
        match node.parent_id {
            None => {
                return Err(anyhow!("non-root node {} has no parent", node.id));
            }
            Some(parent) if parent == node.id => {
                return Err(anyhow!("node {} is its own parent", node.id));
            }
            Some(parent) if parent >= model.nodes.len() => {
                return Err(anyhow!(
                    "node {} has out-of-range parent {}",
                    node.id,
                    parent
                ));
            }
            Some(_) => {}
        }
    }
    Ok(())
}

fn ensure_tree_acyclic(model: &LayoutModel) -> Result<()> {
    // Build a parent -> child graph; a topological sort fails iff the parent
    // pointers contain a cycle, which also proves every chain reaches the
    // root.
    let mut graph: DiGraphMap<usize, ()> = DiGraphMap::new();

    graph.add_node(ROOT_ID);
    for node in model.nodes.iter().skip(1) {
        if let Some(parent) = node.parent_id {
            graph.add_edge(parent, node.id, ());
        }
    }

    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => Err(anyhow!(
            "cycle detected in parent pointers involving node {}",
            cycle.node_id()
        )),
    }
}

fn ensure_link_endpoints(model: &LayoutModel) -> Result<()> {
    for link in &model.task_links {
        if link.source >= model.nodes.len() || link.target >= model.nodes.len() {
            return Err(anyhow!(
                "link {} -> {} (task '{}') references an unknown node",
                link.source,
                link.target,
                link.task
            ));
        }
    }
    Ok(())
}

fn ensure_palette_parity(model: &LayoutModel) -> Result<()> {
    if model.palette.len() != model.task_order.len() {
        return Err(anyhow!(
            "palette length {} does not match task order length {}",
            model.palette.len(),
            model.task_order.len()
        ));
    }
    Ok(())
}
