//! Helpers for the proc-macro crates of the workspace.
//!
//! - [`Manifest`]: names a workspace crate the way the macro caller sees it.
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro crate")]

// -----------------------------------------------------------------------------
// Modules

mod manifest;

// -----------------------------------------------------------------------------
// Exports

pub use manifest::Manifest;
