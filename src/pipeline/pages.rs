// src/pipeline/pages.rs

//! Page entry points.
//!
//! Each loader gathers what one page needs and decides between rendering it
//! and showing that page's fallback notice. Backend failures never escape a
//! loader; they are logged and turned into the fallback.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use futures::stream::{self, StreamExt};
use serde::Serialize;
use serde_json::Value;

use crate::error::{AppError, Result};
use crate::models::{
    AboutContent, BlogPageContent, Config, ContactContent, FilterOption, HomeContent, LabelItem,
    LibraryCard, PostDetail, PostSummary, ResourcesContent, ServicesContent,
};
use crate::services::launch::{self, Countdown, SocialLink};
use crate::services::{ContentClient, ContentService, PostResolver, catalog};
use crate::utils::url::{absolute_url, post_href};

/// Pages loaded at once by [`PageLoader::load_all`].
const LOAD_ALL_CONCURRENCY: usize = 3;

/// Notice shown in place of a page that cannot be rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fallback {
    pub heading: String,
    pub message: String,
}

impl Fallback {
    fn new(heading: &str, message: &str) -> Self {
        Self {
            heading: heading.to_string(),
            message: message.to_string(),
        }
    }

    pub fn home() -> Self {
        Self::new("Let’s Talk About Autism", "Content not available yet.")
    }

    pub fn blog() -> Self {
        Self::new("Blog", "Content not available yet.")
    }

    pub fn resources() -> Self {
        Self::new(
            "Resources",
            "Resources content not found. Please check your WordPress ACF setup.",
        )
    }

    pub fn contact() -> Self {
        Self::new("Contact", "Contact page content is not available yet.")
    }

    pub fn post_not_found() -> Self {
        Self::new("Post not found", "Please check the link and try again.")
    }

    pub fn generic(kind: PageKind) -> Self {
        Self::new(kind.title(), "Content not available yet.")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", content = "page", rename_all = "camelCase")]
pub enum PageOutcome<T> {
    Ready(T),
    Unavailable(Fallback),
}

impl<T> PageOutcome<T> {
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }

    pub fn ready(self) -> Option<T> {
        match self {
            Self::Ready(page) => Some(page),
            Self::Unavailable(_) => None,
        }
    }

    /// Ready when `content` is present, else `fallback`.
    fn from_content(content: Option<T>, fallback: Fallback) -> Self {
        content.map_or(Self::Unavailable(fallback), Self::Ready)
    }
}

/// Home page, either the launch countdown or the live site.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(
    tag = "mode",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum HomePage {
    ComingSoon {
        launch_date: Option<String>,
        countdown: Countdown,
        socials: Vec<SocialLink>,
    },
    Live {
        content: Option<HomeContent>,
        recent_posts: Vec<PostSummary>,
        socials: Vec<SocialLink>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogView {
    pub content: BlogPageContent,
    pub filters: Vec<FilterOption>,
    /// Listing with featured posts removed
    pub posts: Vec<PostSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourcesView {
    pub content: ResourcesContent,
    pub filters: Vec<FilterOption>,
    pub library_cards: Vec<LibraryCard>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactView {
    pub content: ContactContent,
    pub identity_options: Vec<LabelItem>,
    pub topic_options: Vec<LabelItem>,
    pub form_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostView {
    pub post: PostDetail,
    pub byline: String,
    pub href: String,
    pub canonical_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Home,
    About,
    Services,
    Resources,
    Blog,
    Contact,
}

impl PageKind {
    pub const ALL: [PageKind; 6] = [
        Self::Home,
        Self::About,
        Self::Services,
        Self::Resources,
        Self::Blog,
        Self::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Services => "services",
            Self::Resources => "resources",
            Self::Blog => "blog",
            Self::Contact => "contact",
        }
    }

    fn title(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Services => "Services",
            Self::Resources => "Resources",
            Self::Blog => "Blog",
            Self::Contact => "Contact",
        }
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PageKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().trim_matches('/');
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| AppError::validation(format!("Unknown page: {s}")))
    }
}

/// Treat a failed fetch as missing content, logging why.
fn or_warn<T>(result: Result<T>, what: &str) -> Option<T> {
    result
        .inspect_err(|e| log::warn!("Failed to fetch {what}: {e}"))
        .ok()
}

/// Loads pages for rendering.
#[derive(Clone)]
pub struct PageLoader {
    content: ContentService,
    resolver: PostResolver,
    config: Arc<Config>,
}

impl PageLoader {
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let content = ContentService::new(ContentClient::new(&config.backend)?);
        Ok(Self::with_content(content, config))
    }

    pub fn with_content(content: ContentService, config: Arc<Config>) -> Self {
        Self {
            content,
            resolver: PostResolver::default(),
            config,
        }
    }

    pub fn content(&self) -> &ContentService {
        &self.content
    }

    /// Home page at `now`.
    ///
    /// Settings and recent posts are optional: a failure there degrades the
    /// page rather than replacing it.
    pub async fn home(&self, now: DateTime<Utc>) -> PageOutcome<HomePage> {
        let (settings, home, posts) = tokio::join!(
            self.content.site_settings(),
            self.content.home(),
            self.content.recent_posts(),
        );

        let settings = or_warn(settings, "site settings").flatten();
        let socials = launch::social_links(settings.as_ref());
        let settings_launch = settings.as_ref().and_then(|s| s.launch_date.as_deref());

        if launch::should_show_coming_soon(settings_launch, &self.config.site, now) {
            let launch_date = launch::effective_launch_date(settings_launch, &self.config.site);
            let target = launch::countdown_target(launch_date, now);
            log::info!("Launch pending, showing coming-soon page");
            return PageOutcome::Ready(HomePage::ComingSoon {
                launch_date: launch_date.map(str::to_string),
                countdown: Countdown::until(target, now),
                socials,
            });
        }

        match home {
            Ok(content) => PageOutcome::Ready(HomePage::Live {
                content,
                recent_posts: or_warn(posts, "recent posts").unwrap_or_default(),
                socials,
            }),
            Err(e) => {
                log::error!("Failed to load home page: {e}");
                PageOutcome::Unavailable(Fallback::home())
            }
        }
    }

    /// About page; absent content renders with template defaults.
    pub async fn about(&self) -> PageOutcome<Option<AboutContent>> {
        match self.content.about().await {
            Ok(content) => PageOutcome::Ready(content),
            Err(e) => {
                log::error!("Failed to load about page: {e}");
                PageOutcome::Unavailable(Fallback::generic(PageKind::About))
            }
        }
    }

    /// Services page; absent content renders with template defaults.
    pub async fn services(&self) -> PageOutcome<Option<ServicesContent>> {
        match self.content.services().await {
            Ok(content) => PageOutcome::Ready(content),
            Err(e) => {
                log::error!("Failed to load services page: {e}");
                PageOutcome::Unavailable(Fallback::generic(PageKind::Services))
            }
        }
    }

    pub async fn resources(&self) -> PageOutcome<ResourcesView> {
        let content = match self.content.resources().await {
            Ok(content) => content,
            Err(e) => {
                log::error!("Failed to load resources page: {e}");
                None
            }
        };
        PageOutcome::from_content(
            content.map(|content| ResourcesView {
                filters: catalog::audience_filters(&content.audience_filters),
                library_cards: catalog::library_cards(&content.library_cards),
                content,
            }),
            Fallback::resources(),
        )
    }

    pub async fn blog(&self) -> PageOutcome<BlogView> {
        let (content, posts) = tokio::join!(self.content.blog_page(), self.content.blog_posts());

        let content = match content {
            Ok(content) => content,
            Err(e) => {
                log::error!("Failed to load blog page: {e}");
                None
            }
        };
        let Some(content) = content else {
            return PageOutcome::Unavailable(Fallback::blog());
        };

        let posts = or_warn(posts, "blog posts").unwrap_or_default();
        let featured: HashSet<&str> = content.featured_posts.iter().map(|p| p.id.as_str()).collect();
        let listed = catalog::filter_posts(&posts, FilterOption::ALL, "", &featured)
            .into_iter()
            .cloned()
            .collect();

        PageOutcome::Ready(BlogView {
            filters: catalog::blog_filters(&content.topic_filters),
            posts: listed,
            content,
        })
    }

    pub async fn contact(&self) -> PageOutcome<ContactView> {
        let content = match self.content.contact().await {
            Ok(content) => content,
            Err(e) => {
                log::error!("Failed to load contact page: {e}");
                None
            }
        };
        let form_enabled = self
            .config
            .forms
            .endpoint
            .as_deref()
            .is_some_and(|e| !e.trim().is_empty());
        PageOutcome::from_content(
            content.map(|content| ContactView {
                identity_options: catalog::identity_options(&content.identity_options),
                topic_options: catalog::topic_options(&content.topic_options),
                form_enabled,
                content,
            }),
            Fallback::contact(),
        )
    }

    /// Post page for a site path such as `blog/my-post`.
    pub async fn post(&self, path: &str) -> PageOutcome<PostView> {
        let post = match self.resolver.resolve(&self.content, path).await {
            Ok(post) => post,
            Err(e) => {
                log::error!("Failed to load post {path:?}: {e}");
                None
            }
        };
        PageOutcome::from_content(
            post.map(|post| {
                let href = post_href(post.uri.as_deref().unwrap_or_default());
                let canonical_url = self
                    .config
                    .site
                    .base_url
                    .as_deref()
                    .and_then(|base| absolute_url(base, &href));
                PostView {
                    byline: post.byline(),
                    href,
                    canonical_url,
                    post,
                }
            }),
            Fallback::post_not_found(),
        )
    }

    /// Load `kind` and serialize the outcome for a template.
    pub async fn load(&self, kind: PageKind, now: DateTime<Utc>) -> Result<Value> {
        let value = match kind {
            PageKind::Home => serde_json::to_value(self.home(now).await)?,
            PageKind::About => serde_json::to_value(self.about().await)?,
            PageKind::Services => serde_json::to_value(self.services().await)?,
            PageKind::Resources => serde_json::to_value(self.resources().await)?,
            PageKind::Blog => serde_json::to_value(self.blog().await)?,
            PageKind::Contact => serde_json::to_value(self.contact().await)?,
        };
        Ok(value)
    }

    /// Load every page, a few at a time, in completion order.
    pub async fn load_all(&self, now: DateTime<Utc>) -> Vec<(PageKind, Result<Value>)> {
        stream::iter(PageKind::ALL)
            .map(|kind| async move { (kind, self.load(kind, now).await) })
            .buffer_unordered(LOAD_ALL_CONCURRENCY)
            .collect()
            .await
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use serde_json::json;

    use super::*;
    use crate::models::{BackendConfig, FormsConfig, SiteConfig};
    use crate::utils::http::fake::FakeTransport;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
    }

    fn config(site: SiteConfig) -> Arc<Config> {
        Arc::new(Config {
            backend: BackendConfig {
                endpoint: Some("https://cms.example.org/graphql".to_string()),
                ..BackendConfig::default()
            },
            site,
            forms: FormsConfig::default(),
        })
    }

    fn loader(transport: Arc<FakeTransport>, site: SiteConfig) -> PageLoader {
        let config = config(site);
        let content = ContentService::new(ContentClient::with_transport(&config.backend, transport));
        PageLoader::with_content(content, config)
    }

    /// Answers each query by the operation name it contains.
    fn backend(answers: Vec<(&'static str, Value)>) -> Arc<FakeTransport> {
        Arc::new(FakeTransport::new(move |body| {
            let query = body["query"].as_str().unwrap_or_default();
            answers
                .iter()
                .find(|(name, _)| query.contains(name))
                .map(|(_, response)| response.clone())
                .unwrap_or_else(|| json!({ "data": {} }))
        }))
    }

    #[test]
    fn test_page_kind_from_str() {
        assert_eq!("Blog".parse::<PageKind>().unwrap(), PageKind::Blog);
        assert_eq!("/contact/".parse::<PageKind>().unwrap(), PageKind::Contact);
        assert!("pricing".parse::<PageKind>().is_err());
    }

    #[tokio::test]
    async fn test_home_coming_soon_when_launch_in_future() {
        let transport = backend(vec![(
            "GetSiteSettings",
            json!({ "data": { "page": { "siteSettings": { "launchdate": "2030-01-01" } } } }),
        )]);
        let outcome = loader(transport, SiteConfig::default()).home(now()).await;

        match outcome {
            PageOutcome::Ready(HomePage::ComingSoon {
                launch_date,
                countdown,
                socials,
            }) => {
                assert_eq!(launch_date.as_deref(), Some("2030-01-01"));
                assert!(!countdown.done);
                assert_eq!(socials[2].href, "https://wa.me/");
            }
            other => panic!("expected coming soon, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_home_bypass_shows_live_page() {
        let transport = backend(vec![
            (
                "GetSiteSettings",
                json!({ "data": { "page": { "siteSettings": { "launchdate": "2030-01-01" } } } }),
            ),
            (
                "HomepageContent",
                json!({ "data": { "page": { "homepageContent": { "heroHeading": "Hi", "missionCards": null } } } }),
            ),
            (
                "query Posts",
                json!({ "data": { "posts": { "nodes": [{ "id": "p1", "title": "News" }] } } }),
            ),
        ]);
        let site = SiteConfig {
            bypass_coming_soon: true,
            ..SiteConfig::default()
        };
        let outcome = loader(transport, site).home(now()).await;

        match outcome {
            PageOutcome::Ready(HomePage::Live {
                content,
                recent_posts,
                ..
            }) => {
                let content = content.unwrap();
                assert_eq!(content.hero_heading.as_deref(), Some("Hi"));
                assert!(content.mission_cards.is_empty());
                assert_eq!(recent_posts.len(), 1);
            }
            other => panic!("expected live page, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_home_failure_shows_fallback() {
        let transport = backend(vec![(
            "HomepageContent",
            json!({ "errors": [{ "message": "boom" }] }),
        )]);
        let outcome = loader(transport, SiteConfig::default()).home(now()).await;
        assert_eq!(outcome, PageOutcome::Unavailable(Fallback::home()));
    }

    #[tokio::test]
    async fn test_about_absent_content_is_ready_none() {
        let transport = backend(vec![]);
        let outcome = loader(transport, SiteConfig::default()).about().await;
        assert_eq!(outcome, PageOutcome::Ready(None));
    }

    #[tokio::test]
    async fn test_resources_absent_content_is_unavailable() {
        let transport = backend(vec![]);
        let outcome = loader(transport, SiteConfig::default()).resources().await;
        assert_eq!(outcome, PageOutcome::Unavailable(Fallback::resources()));
    }

    #[tokio::test]
    async fn test_resources_uses_fallback_lists() {
        let transport = backend(vec![(
            "ResourcesPage",
            json!({ "data": { "page": { "resourcesPageContent": { "heroHeading": "Guides" } } } }),
        )]);
        let view = loader(transport, SiteConfig::default())
            .resources()
            .await
            .ready()
            .unwrap();
        assert_eq!(view.filters.len(), 5);
        assert_eq!(view.library_cards.len(), 4);
        assert_eq!(view.content.hero_heading.as_deref(), Some("Guides"));
    }

    #[tokio::test]
    async fn test_blog_excludes_featured_posts() {
        let transport = backend(vec![
            (
                "BlogPage",
                json!({ "data": { "page": { "blogPageContent": {
                    "featuredposts": [{ "post": { "nodes": [{ "id": "a", "title": "Pinned" }] } }]
                } } } }),
            ),
            (
                "query Posts",
                json!({ "data": { "posts": { "nodes": [
                    { "id": "a", "title": "Pinned" },
                    { "id": "b", "title": "Other" }
                ] } } }),
            ),
        ]);
        let view = loader(transport, SiteConfig::default())
            .blog()
            .await
            .ready()
            .unwrap();

        assert_eq!(view.content.featured_posts.len(), 1);
        let ids: Vec<&str> = view.posts.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["b"]);
        assert_eq!(view.filters.len(), 6);
    }

    #[tokio::test]
    async fn test_blog_absent_content_is_unavailable() {
        let transport = backend(vec![]);
        let outcome = loader(transport, SiteConfig::default()).blog().await;
        assert_eq!(outcome, PageOutcome::Unavailable(Fallback::blog()));
    }

    #[tokio::test]
    async fn test_contact_form_disabled_without_endpoint() {
        let transport = backend(vec![(
            "ContactPage",
            json!({ "data": { "page": { "contactPageContent": { "heroHeading": "Talk to us" } } } }),
        )]);
        let view = loader(transport, SiteConfig::default())
            .contact()
            .await
            .ready()
            .unwrap();
        assert!(!view.form_enabled);
        assert_eq!(view.identity_options.len(), 6);
        assert_eq!(view.topic_options.len(), 8);
    }

    #[tokio::test]
    async fn test_post_found_with_canonical_url() {
        let transport = backend(vec![(
            "PostByUri",
            json!({ "data": { "post": {
                "id": "p1",
                "title": "My post",
                "uri": "/my-post/",
                "date": "2024-05-01T10:00:00",
                "author": { "node": { "name": "Sam" } }
            } } }),
        )]);
        let site = SiteConfig {
            base_url: Some("https://example.org".to_string()),
            ..SiteConfig::default()
        };
        let view = loader(transport, site)
            .post("blog/my-post")
            .await
            .ready()
            .unwrap();

        assert_eq!(view.href, "/blog/my-post/");
        assert_eq!(view.byline, "2024-05-01 · By Sam");
        assert_eq!(view.canonical_url.as_deref(), Some("https://example.org/blog/my-post/"));
    }

    #[tokio::test]
    async fn test_post_missing_and_empty_path() {
        let transport = backend(vec![]);
        let loader = loader(transport.clone(), SiteConfig::default());

        assert_eq!(
            loader.post("blog/missing").await,
            PageOutcome::Unavailable(Fallback::post_not_found())
        );
        let calls = transport.json_calls();
        assert_eq!(
            loader.post("").await,
            PageOutcome::Unavailable(Fallback::post_not_found())
        );
        assert_eq!(transport.json_calls(), calls);
    }

    #[tokio::test]
    async fn test_load_serializes_outcome() {
        let transport = backend(vec![]);
        let value = loader(transport, SiteConfig::default())
            .load(PageKind::Contact, now())
            .await
            .unwrap();
        assert_eq!(value["status"], "unavailable");
        assert_eq!(value["page"]["heading"], "Contact");
    }

    #[tokio::test]
    async fn test_load_all_covers_every_page() {
        let transport = backend(vec![]);
        let results = loader(transport, SiteConfig::default()).load_all(now()).await;

        let kinds: HashSet<PageKind> = results.iter().map(|(kind, _)| *kind).collect();
        assert_eq!(kinds.len(), PageKind::ALL.len());
        assert!(results.iter().all(|(_, result)| result.is_ok()));
    }
}
