// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod filesystem;
pub mod measurement;
pub mod persistence;
pub mod vcs;

pub use filesystem::TreeWalker;
pub use measurement::LineClassifier;
pub use persistence::FileWriter;
pub use vcs::GitHistoryCollector;
