//! Core types for the xmlview generator.
//!
//! This crate provides the foundational types shared by the resolver, the
//! code generator and the host bindings:
//! - Design tree nodes as supplied by the design tool
//! - The view configuration collected from the settings form
//! - The visualization tree used for diagnostic display
//! - Error types

pub mod chart;
pub mod config;
pub mod errors;
pub mod node;

pub use chart::*;
pub use config::*;
pub use errors::*;
pub use node::*;
