// src/graph/builder.rs

use std::collections::{BTreeSet, HashMap};

use tracing::debug;

use crate::graph::node::{EntityRole, ModuleRole, NodeKind, keys};
use crate::graph::registry::NodeRegistry;
use crate::snapshot::Step;

/// A directed edge between two node keys, tagged with the task that
/// produced it.
///
/// Edges are deliberately *not* deduplicated across tasks: two tasks walking
/// the same pair of shared nodes contribute two edges with different tags,
/// so the renderer can color each task's path separately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub task: String,
}

/// The fully built lineage graph for one build invocation.
#[derive(Debug, Clone)]
pub struct LineageGraph {
    pub registry: NodeRegistry,
    /// Edges in creation order. Endpoints always reference registered keys.
    pub edges: Vec<Edge>,
    /// Tasks that contributed at least one node, in snapshot order.
    pub task_order: Vec<String>,
    modules_by_task: HashMap<String, BTreeSet<usize>>,
}

impl LineageGraph {
    /// Module node ids touched by a task (entities excluded). Drives the
    /// component grouping of the box layout.
    pub fn modules_of(&self, task: &str) -> &BTreeSet<usize> {
        static EMPTY: BTreeSet<usize> = BTreeSet::new();
        self.modules_by_task.get(task).unwrap_or(&EMPTY)
    }
}

/// Builds the lineage graph one task at a time.
///
/// Owns all mutable build state (registry, edge list, task bookkeeping) and
/// is consumed by [`GraphBuilder::finish`]; nothing here outlives a build.
#[derive(Debug)]
pub struct GraphBuilder {
    registry: NodeRegistry,
    edges: Vec<Edge>,
    task_order: Vec<String>,
    modules_by_task: HashMap<String, BTreeSet<usize>>,
}

impl GraphBuilder {
    pub fn new() -> Self {
        Self {
            registry: NodeRegistry::new(),
            edges: Vec::new(),
            task_order: Vec::new(),
            modules_by_task: HashMap::new(),
        }
    }

    /// Process one task's typed step log in order.
    ///
    /// The walk keeps two cursors:
    /// - `last_source`: the most recent source module, used to chain
    ///   multi-source tasks and to seed the non-source portion of the chain.
    /// - `prev`: the previous node of the sequential chain, once the first
    ///   non-source step has been reached.
    pub fn add_task(&mut self, task_id: &str, steps: &[Step]) {
        if steps.is_empty() {
            debug!(task = %task_id, "no usable steps; task contributes nothing");
            return;
        }

        self.task_order.push(task_id.to_string());
        self.modules_by_task.entry(task_id.to_string()).or_default();

        let mut prev: Option<usize> = None;
        let mut last_source: Option<usize> = None;
        let mut past_sources = false;

        for (index, step) in steps.iter().enumerate() {
            match step {
                Step::Source { module, entity } => {
                    // Entity first so Scenario-style id ordering reads
                    // entity -> module left to right.
                    let entity_id = entity.as_deref().map(|entity| {
                        self.registry.ensure(
                            &keys::source_entity(entity),
                            entity,
                            NodeKind::Entity(EntityRole::Source),
                            task_id,
                        )
                    });

                    let module_id = self.ensure_module(
                        &keys::source_module(module),
                        module,
                        ModuleRole::Source,
                        task_id,
                    );

                    if let Some(entity_id) = entity_id {
                        self.add_edge(entity_id, module_id, task_id);
                    }
                    if let Some(prev_source) = last_source {
                        self.add_edge(prev_source, module_id, task_id);
                    }
                    last_source = Some(module_id);
                }
                Step::Sink { module, entity } => {
                    if !past_sources {
                        prev = last_source;
                        past_sources = true;
                    }

                    let module_id = self.ensure_module(
                        &keys::sink_module(module),
                        module,
                        ModuleRole::Sink,
                        task_id,
                    );
                    if let Some(prev_id) = prev {
                        self.add_edge(prev_id, module_id, task_id);
                    }
                    prev = Some(module_id);

                    if let Some(entity) = entity.as_deref() {
                        let entity_id = self.registry.ensure(
                            &keys::sink_entity(entity),
                            entity,
                            NodeKind::Entity(EntityRole::Sink),
                            task_id,
                        );
                        self.add_edge(module_id, entity_id, task_id);
                    }
                }
                Step::Intermediate { module } => {
                    if !past_sources {
                        prev = last_source;
                        past_sources = true;
                    }

                    // Key embeds task id and step index: intermediates are
                    // task-private by construction.
                    let node_id = self.ensure_module(
                        &keys::intermediate_module(task_id, module, index),
                        module,
                        ModuleRole::Intermediate,
                        task_id,
                    );
                    if let Some(prev_id) = prev {
                        self.add_edge(prev_id, node_id, task_id);
                    }
                    prev = Some(node_id);
                }
            }
        }
    }

    /// Finish the build and hand over the immutable graph.
    pub fn finish(self) -> LineageGraph {
        debug!(
            nodes = self.registry.len(),
            edges = self.edges.len(),
            tasks = self.task_order.len(),
            "lineage graph built"
        );

        LineageGraph {
            registry: self.registry,
            edges: self.edges,
            task_order: self.task_order,
            modules_by_task: self.modules_by_task,
        }
    }

    /// Ensure a module node and record it in the task's module membership.
    fn ensure_module(&mut self, key: &str, label: &str, role: ModuleRole, task_id: &str) -> usize {
        let id = self
            .registry
            .ensure(key, label, NodeKind::Module(role), task_id);
        self.modules_by_task
            .entry(task_id.to_string())
            .or_default()
            .insert(id);
        id
    }

    /// Record an edge between two already-registered nodes.
    fn add_edge(&mut self, from: usize, to: usize, task: &str) {
        // Ids come straight from `ensure`, so both keys must resolve.
        let (Some(from_key), Some(to_key)) = (self.registry.key_of(from), self.registry.key_of(to))
        else {
            debug!(from, to, "edge endpoint missing from registry; dropping edge");
            return;
        };

        self.edges.push(Edge {
            from: from_key.to_string(),
            to: to_key.to_string(),
            task: task.to_string(),
        });
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
