// src/graph/mod.rs

//! Lineage graph construction.
//!
//! - [`node`] defines node identity: keys, kinds and roles.
//! - [`registry`] assigns dense, stable ids to nodes and deduplicates
//!   shared modules/entities across tasks.
//! - [`builder`] walks each task's typed step log and derives the directed
//!   edge list, tagging every edge with its owning task.

pub mod builder;
pub mod node;
pub mod registry;

pub use builder::{Edge, GraphBuilder, LineageGraph};
pub use node::{EntityRole, ModuleRole, Node, NodeKind, keys};
pub use registry::{NodeRegistry, ROOT_ID};
