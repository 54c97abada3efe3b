// src/errors.rs

//! Crate-wide error aliases and helpers.
//!
//! At the moment this is just a thin wrapper around `anyhow`, but the module
//! gives you a single place to add more structured error types later. The
//! model build itself is infallible by design; only the I/O boundary
//! (snapshot and config files) and post-build validation return errors.

pub use anyhow::{Error, Result};
