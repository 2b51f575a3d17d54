//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! This crate defines traits that abstract external concerns:
//!
//! - [`filesystem`]: Directory traversal producing candidate files
//! - [`measurement`]: Per-file line classification
//! - [`progress`]: Progress reporting for long-running scans
//! - [`vcs`]: Repository history lookup
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod measurement;
pub mod progress;
pub mod vcs;
