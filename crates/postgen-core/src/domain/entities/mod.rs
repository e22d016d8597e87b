pub mod post_layout;
pub mod scaffolded_post;

pub use crate::domain::DomainError;
pub use post_layout::PostLayout;
pub use scaffolded_post::ScaffoldedPost;
