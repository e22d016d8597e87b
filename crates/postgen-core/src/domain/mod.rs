//! Core domain layer for postgen.
//!
//! This module contains pure logic with ZERO I/O. Existence checks and the
//! byte copy are reached through the `Filesystem` port defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable values**: All domain objects are Clone + PartialEq
//!
// Public API - what the world sees
pub mod entities;
pub mod error;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    post_layout::{DEFAULT_TEMPLATE, DEFAULT_VIEW_BASE, PostLayout},
    scaffolded_post::ScaffoldedPost,
};

pub use error::{DomainError, ErrorCategory};

pub use value_objects::{POST_EXTENSION, Slug};
