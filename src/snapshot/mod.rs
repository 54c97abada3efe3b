// src/snapshot/mod.rs

//! Run snapshot input handling.
//!
//! Responsibilities:
//! - Define the snapshot data model (`model.rs`): one record per task with
//!   the raw output of its latest successful run.
//! - Load a snapshot file from disk (`loader.rs`).
//! - Extract and type the step log out of raw run outputs (`extract.rs`).
//!
//! The snapshot fetch itself is the caller's concern; this crate only ever
//! sees a complete, immutable snapshot.

pub mod extract;
pub mod loader;
pub mod model;

pub use extract::{Step, extract_steps};
pub use loader::{load_from_path, load_from_str};
pub use model::{Snapshot, TaskSnapshot};
