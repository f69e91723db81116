//! Service layer for the content tier.
//!
//! This module contains the business logic for:
//! - GraphQL access (`ContentClient`)
//! - Typed page and post content (`ContentService`)
//! - Post lookup by site path (`PostResolver`)
//! - Form submission (`FormSubmitter`)
//! - Listing filters and launch gating (`catalog`, `launch`)

pub mod catalog;
mod client;
mod content;
mod forms;
pub mod launch;
pub mod queries;
mod resolver;

pub use client::ContentClient;
pub use content::{BLOG_POSTS, ContentService, RECENT_POSTS};
pub use forms::{FormKind, FormOutcome, FormSubmitter, NOT_CONFIGURED, parse_field};
pub use launch::{Countdown, SocialLink};
pub use resolver::PostResolver;
