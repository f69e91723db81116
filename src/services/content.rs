// src/services/content.rs

//! Content accessors.
//!
//! One method per content type: query the backend, pluck the content group
//! out of the response and normalize it into its view model.

use serde_json::json;

use crate::error::Result;
use crate::models::{
    AboutContent, BlogPageContent, ContactContent, HomeContent, PostDetail, PostSummary,
    ResourcesContent, ServicesContent, SiteSettings,
};
use crate::normalize::schema::post_summaries;
use crate::normalize::{ViewModel, lookup};
use crate::services::ContentClient;
use crate::services::queries::{self, groups};

/// Number of posts in the homepage updates strip.
pub const RECENT_POSTS: usize = 3;

/// Number of posts listed on the blog page.
pub const BLOG_POSTS: usize = 30;

/// Typed access to CMS content.
#[derive(Clone)]
pub struct ContentService {
    client: ContentClient,
}

impl ContentService {
    pub fn new(client: ContentClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &ContentClient {
        &self.client
    }

    /// Fetch a page content group and normalize it.
    ///
    /// `Ok(None)` means the backend has no content configured for it.
    async fn page_group<T: ViewModel>(&self, query: &str, group: &str) -> Result<Option<T>> {
        let data = self.client.query(query, json!({})).await?;
        let content = lookup(&data, group).and_then(T::from_raw);
        if content.is_none() {
            log::debug!("No {} configured", T::NAME);
        }
        Ok(content)
    }

    pub async fn site_settings(&self) -> Result<Option<SiteSettings>> {
        self.page_group(queries::SITE_SETTINGS, groups::SITE_SETTINGS)
            .await
    }

    pub async fn home(&self) -> Result<Option<HomeContent>> {
        self.page_group(queries::HOMEPAGE, groups::HOMEPAGE).await
    }

    pub async fn about(&self) -> Result<Option<AboutContent>> {
        self.page_group(queries::ABOUT, groups::ABOUT).await
    }

    pub async fn services(&self) -> Result<Option<ServicesContent>> {
        self.page_group(queries::SERVICES, groups::SERVICES).await
    }

    pub async fn resources(&self) -> Result<Option<ResourcesContent>> {
        self.page_group(queries::RESOURCES, groups::RESOURCES).await
    }

    pub async fn blog_page(&self) -> Result<Option<BlogPageContent>> {
        self.page_group(queries::BLOG_PAGE, groups::BLOG_PAGE).await
    }

    pub async fn contact(&self) -> Result<Option<ContactContent>> {
        self.page_group(queries::CONTACT, groups::CONTACT).await
    }

    /// Latest published posts, in backend order.
    pub async fn posts(&self, first: usize) -> Result<Vec<PostSummary>> {
        let data = self
            .client
            .query(queries::POSTS, json!({ "first": first }))
            .await?;
        Ok(lookup(&data, groups::POSTS)
            .map(post_summaries)
            .unwrap_or_default())
    }

    pub async fn recent_posts(&self) -> Result<Vec<PostSummary>> {
        self.posts(RECENT_POSTS).await
    }

    pub async fn blog_posts(&self) -> Result<Vec<PostSummary>> {
        self.posts(BLOG_POSTS).await
    }

    /// A single post by its exact backend URI.
    pub async fn post_by_uri(&self, uri: &str) -> Result<Option<PostDetail>> {
        let data = self
            .client
            .query(queries::POST_BY_URI, json!({ "uri": uri }))
            .await?;
        Ok(lookup(&data, groups::POST).and_then(PostDetail::from_raw))
    }
}
