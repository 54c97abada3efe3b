// src/layout/mod.rs

//! Layout resolution: turn the built graph into renderer-ready structure.
//!
//! Two strategies exist side by side:
//! - [`tree`] derives a single-parent spanning tree (parent pointers are
//!   always part of the emitted model).
//! - [`boxes`] places nodes into columns and computes per-task bounding
//!   boxes, for renderers that prefer spatial clustering over strict trees.
//!
//! [`dsu`] is the small disjoint-set utility backing the component grouping
//! of the box variant.

pub mod boxes;
pub mod dsu;
pub mod tree;

use std::str::FromStr;

pub use boxes::{BoxLayout, NodePosition, TaskBox};
pub use dsu::DisjointSet;
pub use tree::assign_parents;

/// Which layout strategy to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutVariant {
    /// Parent pointers only (the default).
    Tree,
    /// Parent pointers plus column positions and task boxes.
    Boxes,
}

impl FromStr for LayoutVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tree" => Ok(LayoutVariant::Tree),
            "boxes" => Ok(LayoutVariant::Boxes),
            other => Err(format!(
                "unknown layout variant '{other}' (expected \"tree\" or \"boxes\")"
            )),
        }
    }
}
