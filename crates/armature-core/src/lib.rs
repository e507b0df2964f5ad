//! Armature Core Library
//!
//! Domain logic for template-driven project scaffolding: configuration,
//! the host capability surface, and the folder workflows.

pub mod config;
pub mod error;
pub mod folders;
pub mod host;
pub mod naming;
pub mod templates;
pub mod workflow;

pub use error::{ScaffoldError, ScaffoldResult};
