//! Blog post view models.

use serde::{Deserialize, Serialize};

use crate::models::MediaReference;

/// A post as shown in listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    /// Stable backend identifier, unique within one listing
    pub id: String,
    pub title: Option<String>,
    /// Publish date as provided by the backend
    pub date: Option<String>,
    /// Trusted markup
    pub excerpt: Option<String>,
    pub uri: Option<String>,
    pub featured_image: Option<MediaReference>,
    pub author_name: Option<String>,
    pub categories: Vec<Category>,
}

impl PostSummary {
    /// Whether the post carries the given category slug.
    pub fn in_category(&self, slug: &str) -> bool {
        self.categories
            .iter()
            .any(|c| c.slug.as_deref().is_some_and(|s| s.eq_ignore_ascii_case(slug)))
    }
}

/// A single post with its full body.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PostDetail {
    pub id: String,
    pub title: Option<String>,
    pub date: Option<String>,
    pub excerpt: Option<String>,
    /// Trusted markup
    pub content: Option<String>,
    pub uri: Option<String>,
    pub featured_image: Option<MediaReference>,
    pub author_name: Option<String>,
    pub categories: Vec<Category>,
}

impl PostDetail {
    /// Byline shown under the title, e.g. `"2024-05-01 · By Sam"`.
    pub fn byline(&self) -> String {
        let date = self
            .date
            .as_deref()
            .map(|d| d.split('T').next().unwrap_or(d))
            .unwrap_or_default();
        match self.author_name.as_deref().filter(|a| !a.is_empty()) {
            Some(author) if date.is_empty() => format!("By {author}"),
            Some(author) => format!("{date} · By {author}"),
            None => date.to_string(),
        }
    }
}

/// A post category.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub name: Option<String>,
    pub slug: Option<String>,
}
