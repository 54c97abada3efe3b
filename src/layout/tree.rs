// src/layout/tree.rs

//! Single-parent spanning tree derivation for hierarchical rendering.

use tracing::debug;

use crate::graph::{LineageGraph, ROOT_ID};

/// Assign one parent pointer per node from the edge list.
///
/// Edges are visited in creation order and the first inbound edge of a node
/// wins; nodes that never receive an inbound edge are attached to the
/// synthetic root (id 0). The root itself keeps `None`.
///
/// The result is guaranteed acyclic: within one task the chain only ever
/// points at nodes discovered earlier, and for the cross-task back edges
/// that shared nodes can produce, an assignment that would close a cycle is
/// skipped (the node then falls back to a later edge or to the root).
pub fn assign_parents(graph: &LineageGraph) -> Vec<Option<usize>> {
    let mut parents: Vec<Option<usize>> = vec![None; graph.registry.len()];

    for edge in &graph.edges {
        let (Some(from), Some(to)) = (
            graph.registry.id_of(&edge.from),
            graph.registry.id_of(&edge.to),
        ) else {
            // Cannot happen for edges built by the graph builder.
            debug!(from = %edge.from, to = %edge.to, "edge references unknown key; ignoring");
            continue;
        };

        if to == ROOT_ID || parents[to].is_some() {
            continue;
        }
        if reaches(&parents, from, to) {
            debug!(from, to, "parent assignment would close a cycle; skipping edge");
            continue;
        }
        parents[to] = Some(from);
    }

    // Orphans (no inbound edge at all) hang off the root.
    for id in (ROOT_ID + 1)..parents.len() {
        if parents[id].is_none() {
            parents[id] = Some(ROOT_ID);
        }
    }

    parents
}

/// Whether `target` is on the (currently assigned) parent chain of `start`.
fn reaches(parents: &[Option<usize>], start: usize, target: usize) -> bool {
    if start == target {
        return true;
    }
    let mut cursor = start;
    // The chain is acyclic at this point, so it terminates within len steps.
    for _ in 0..parents.len() {
        match parents[cursor] {
            Some(next) if next == target => return true,
            Some(next) => cursor = next,
            None => return false,
        }
    }
    false
}
