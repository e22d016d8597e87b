//! postgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for postgen, the
//! blog post page scaffolder, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           postgen-cli (CLI)             │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (ScaffoldService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │              (Filesystem)               │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    postgen-adapters (Infrastructure)    │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (Slug, PostLayout, ScaffoldedPost)     │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use postgen_core::{
//!     application::ScaffoldService,
//!     domain::{PostLayout, Slug},
//! };
//!
//! # fn run(filesystem: Box<dyn postgen_core::application::Filesystem>) -> postgen_core::error::PostgenResult<()> {
//! let service = ScaffoldService::new(filesystem, PostLayout::new("site/ideas"));
//! let post = service.scaffold(&Slug::new("my-first-post")?)?;
//! println!("Created {} (view at {})", post.file_name, post.view_path);
//! # Ok(())
//! # }
//! ```

// Domain layer (pure values, no I/O)
pub mod domain;

// Application layer (orchestration logic)
pub mod application;

// Error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{ScaffoldService, ports::Filesystem};
    pub use crate::domain::{PostLayout, ScaffoldedPost, Slug};
    pub use crate::error::{PostgenError, PostgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
