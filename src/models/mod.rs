// src/models/mod.rs

//! Domain models for the content tier.
//!
//! Configuration plus the request-scoped view models templates consume.
//! View models are built fresh per request by [`crate::normalize`] and are
//! never mutated afterwards.

mod config;
mod media;
mod pages;
mod post;

// Re-export all public types
pub use config::{BackendConfig, Config, FormsConfig, SiteConfig, env};
pub use media::MediaReference;
pub use pages::{
    AboutContent, BlogPageContent, Chip, ContactButton, ContactContent, CoreValue, Faq,
    FilterOption, HomeContent, JourneyItem, LabelItem, Leader, LibraryCard, LifeStageProgram,
    MissionCard, OfferCard, QuickLink, ResourceCard, ResourcesContent, ServicesContent,
    SiteSettings, Stat,
};
pub use post::{Category, PostDetail, PostSummary};
