//! Pipeline entry points for page rendering.
//!
//! - `PageLoader`: Gather content for a page, or its fallback notice

pub mod pages;

pub use pages::{
    BlogView, ContactView, Fallback, HomePage, PageKind, PageLoader, PageOutcome, PostView,
    ResourcesView,
};
