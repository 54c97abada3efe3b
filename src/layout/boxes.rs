// src/layout/boxes.rs

//! Column/box layout: spatial clustering for renderers that draw primitives
//! instead of walking a tree.
//!
//! Nodes land in five ordered columns (source entities, source modules,
//! other modules, sink modules, sink entities), columns are centered
//! vertically, and tasks that share no modules are stacked as separate
//! components so their boxes never overlap.

use std::collections::HashMap;

use serde::Serialize;

use crate::config::LayoutSection;
use crate::graph::{EntityRole, LineageGraph, ModuleRole, NodeKind};
use crate::layout::dsu::DisjointSet;

/// Final position of one node. The root is not placed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NodePosition {
    pub id: usize,
    pub x: f64,
    pub y: f64,
}

/// Padded bounding box over one task's module nodes, plus its label anchor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskBox {
    pub task: String,
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub label_x: f64,
    pub label_y: f64,
}

/// The box-layout half of the emitted model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoxLayout {
    /// Placed nodes in id order.
    pub positions: Vec<NodePosition>,
    /// One box per contributing task, in task order.
    pub task_boxes: Vec<TaskBox>,
}

/// Min/max extents of a set of placed points.
#[derive(Debug, Clone, Copy)]
struct Bounds {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl Bounds {
    fn over(points: impl Iterator<Item = (f64, f64)>) -> Option<Self> {
        let mut bounds: Option<Bounds> = None;
        for (x, y) in points {
            let b = bounds.get_or_insert(Bounds {
                min_x: x,
                max_x: x,
                min_y: y,
                max_y: y,
            });
            b.min_x = b.min_x.min(x);
            b.max_x = b.max_x.max(x);
            b.min_y = b.min_y.min(y);
            b.max_y = b.max_y.max(y);
        }
        bounds
    }
}

/// Compute the box layout for a built graph.
pub fn compute(graph: &LineageGraph, opts: &LayoutSection) -> BoxLayout {
    let node_count = graph.registry.len();

    // 1. Column assignment by kind/role, in node discovery order.
    let mut columns: [Vec<usize>; 5] = Default::default();
    for node in graph.registry.nodes() {
        let column = match node.kind {
            NodeKind::Root => continue,
            NodeKind::Entity(EntityRole::Source) => 0,
            NodeKind::Module(ModuleRole::Source) => 1,
            NodeKind::Module(ModuleRole::Intermediate) => 2,
            NodeKind::Module(ModuleRole::Sink) => 3,
            NodeKind::Entity(EntityRole::Sink) => 4,
        };
        columns[column].push(node.id);
    }

    // 2. Base positions: columns left to right, each centered vertically.
    let mut base: Vec<Option<(f64, f64)>> = vec![None; node_count];
    for (ci, column) in columns.iter().enumerate() {
        let count = column.len();
        let x = ci as f64 * opts.spacing_x;
        for (i, &id) in column.iter().enumerate() {
            let y = (i as f64 - (count as f64 - 1.0) / 2.0) * opts.spacing_y;
            base[id] = Some((x, y));
        }
    }

    // 3. Task components via union-find over shared *module* nodes. Tasks
    // that only share an entity stay in separate components.
    let task_index: HashMap<&str, usize> = graph
        .task_order
        .iter()
        .enumerate()
        .map(|(i, t)| (t.as_str(), i))
        .collect();

    let mut dsu = DisjointSet::new(graph.task_order.len());
    for i in 0..graph.task_order.len() {
        for j in (i + 1)..graph.task_order.len() {
            let a = graph.modules_of(&graph.task_order[i]);
            let b = graph.modules_of(&graph.task_order[j]);
            if a.intersection(b).next().is_some() {
                dsu.union(i, j);
            }
        }
    }

    let mut component_members: HashMap<usize, Vec<usize>> = HashMap::new();
    let mut component_roots: Vec<usize> = Vec::new();
    for i in 0..graph.task_order.len() {
        let root = dsu.find(i);
        let members = component_members.entry(root).or_default();
        if members.is_empty() {
            component_roots.push(root);
        }
        members.push(i);
    }

    // 4. Stack components vertically, ordered by leftmost occupied column.
    let component_bounds = |members: &[usize]| -> Option<Bounds> {
        Bounds::over(members.iter().flat_map(|&ti| {
            graph
                .modules_of(&graph.task_order[ti])
                .iter()
                .filter_map(|&id| base[id])
        }))
    };

    component_roots.sort_by(|a, b| {
        let min_x = |root: &usize| {
            component_bounds(&component_members[root])
                .map(|b| b.min_x)
                .unwrap_or(0.0)
        };
        min_x(a).total_cmp(&min_x(b))
    });

    let mut component_offsets: HashMap<usize, f64> = HashMap::new();
    let mut current_y = 0.0;
    for root in &component_roots {
        match component_bounds(&component_members[root]) {
            Some(b) => {
                component_offsets.insert(*root, current_y - b.min_y);
                current_y += (b.max_y - b.min_y) + opts.separation_y;
            }
            None => {
                component_offsets.insert(*root, current_y);
            }
        }
    }

    // 5. Shift every node by its component's offset. A node shared across
    // tasks takes the component of its lexicographically first owner.
    let mut placed: Vec<Option<(f64, f64)>> = vec![None; node_count];
    for node in graph.registry.nodes() {
        let Some((x, y)) = base[node.id] else {
            continue;
        };
        let offset = node
            .groups
            .iter()
            .next()
            .and_then(|task| task_index.get(task.as_str()))
            .map(|&ti| dsu.find(ti))
            .and_then(|root| component_offsets.get(&root).copied())
            .unwrap_or(0.0);
        placed[node.id] = Some((x, y + offset));
    }

    // 6. Padded per-task boxes with collision-nudged labels.
    let mut task_boxes = Vec::new();
    let mut placed_labels: Vec<(f64, f64)> = Vec::new();

    for task in &graph.task_order {
        let Some(b) = Bounds::over(
            graph
                .modules_of(task)
                .iter()
                .filter_map(|&id| placed[id]),
        ) else {
            continue;
        };

        let label_x = b.min_x - opts.pad_x + 0.1;
        let mut label_y = b.max_y + opts.pad_y - 0.15;

        // Nudge downward while the label collides with an earlier one; give
        // up after a bounded number of attempts and accept the overlap.
        for _ in 0..opts.label_attempts {
            let conflict = placed_labels.iter().any(|&(lx, ly)| {
                (label_x - lx).abs() < opts.label_threshold_x
                    && (label_y - ly).abs() < opts.label_threshold_y
            });
            if !conflict {
                break;
            }
            label_y -= opts.label_shift_y;
        }
        placed_labels.push((label_x, label_y));

        task_boxes.push(TaskBox {
            task: task.clone(),
            x0: b.min_x - opts.pad_x,
            y0: b.min_y - opts.pad_y,
            x1: b.max_x + opts.pad_x,
            y1: b.max_y + opts.pad_y,
            label_x,
            label_y,
        });
    }

    let positions = placed
        .iter()
        .enumerate()
        .filter_map(|(id, p)| p.map(|(x, y)| NodePosition { id, x, y }))
        .collect();

    BoxLayout {
        positions,
        task_boxes,
    }
}
