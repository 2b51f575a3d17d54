// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{
    ApplicationError, CodeStatsError, DomainError, ErrorContext, InfraResult, InfrastructureError,
    PresentationError, Result,
};
pub use path::{extension_of, logical_absolute, normalize_extension};

pub mod error;
pub mod path;
