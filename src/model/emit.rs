// src/model/emit.rs

use tracing::{debug, warn};

use crate::graph::LineageGraph;
use crate::layout::BoxLayout;
use crate::model::{LayoutModel, ModelNode, TaskLink};

/// Assemble the final model from the built graph, resolved parent pointers
/// and (optionally) the box layout.
///
/// Links are resolved from node keys to integer ids here; a link whose
/// endpoints are not both present in the final node set is dropped. With a
/// graph from [`crate::graph::GraphBuilder`] that never happens, but the
/// emitter does not rely on it.
pub fn emit(
    graph: &LineageGraph,
    parents: &[Option<usize>],
    layout: Option<BoxLayout>,
    palette: Vec<String>,
) -> LayoutModel {
    let nodes: Vec<ModelNode> = graph
        .registry
        .nodes()
        .iter()
        .map(|node| ModelNode {
            id: node.id,
            parent_id: parents.get(node.id).copied().flatten(),
            label: node.label.clone(),
            kind: node.kind.kind_str().to_string(),
            subtype: node.kind.subtype_str().to_string(),
            groups: node.groups.iter().cloned().collect(),
        })
        .collect();

    let mut task_links = Vec::with_capacity(graph.edges.len());
    for edge in &graph.edges {
        match (
            graph.registry.id_of(&edge.from),
            graph.registry.id_of(&edge.to),
        ) {
            (Some(source), Some(target)) => task_links.push(TaskLink {
                source,
                target,
                task: edge.task.clone(),
            }),
            _ => {
                warn!(from = %edge.from, to = %edge.to, "link endpoint missing; dropping link");
            }
        }
    }

    let model = LayoutModel {
        nodes,
        task_links,
        task_order: graph.task_order.clone(),
        palette,
        layout,
    };

    if model.is_minimal() {
        debug!("no task contributed any node; emitting minimal root-only model");
    }

    model
}
