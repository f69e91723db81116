// src/services/resolver.rs

//! Post lookup by site path.
//!
//! The backend indexes post URIs inconsistently between sections: some are
//! stored at the root (`/my-post/`), some under the list prefix, some
//! without a trailing slash. Rather than guess one canonical form, a small
//! fixed set of candidates is tried in order.

use crate::error::Result;
use crate::models::PostDetail;
use crate::services::ContentService;
use crate::utils::url::{decode_path, segments};

/// Resolves site paths such as `blog/my-post` to posts.
#[derive(Debug, Clone)]
pub struct PostResolver {
    prefix: String,
}

impl Default for PostResolver {
    fn default() -> Self {
        Self::new("blog")
    }
}

impl PostResolver {
    /// Create a resolver for posts listed under `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into().trim_matches('/').to_string(),
        }
    }

    /// Candidate backend URIs for `raw`, deduplicated, in query order.
    ///
    /// 1. the path without the list prefix, with trailing slash
    /// 2. the same without trailing slash
    /// 3. the full path, with trailing slash
    /// 4. the last segment alone
    ///
    /// An empty path yields no candidates.
    pub fn candidates(&self, raw: &str) -> Vec<String> {
        let decoded = decode_path(raw);
        let parts = segments(&decoded);
        let Some(last) = parts.last() else {
            return Vec::new();
        };

        let full = parts.join("/");
        let stripped = match parts.split_first() {
            Some((first, rest)) if !rest.is_empty() && first.eq_ignore_ascii_case(&self.prefix) => {
                rest.join("/")
            }
            _ => full.clone(),
        };

        let ordered = [
            format!("/{stripped}/"),
            format!("/{stripped}"),
            format!("/{full}/"),
            format!("/{last}"),
        ];

        let mut candidates: Vec<String> = Vec::with_capacity(ordered.len());
        for candidate in ordered {
            if !candidates.contains(&candidate) {
                candidates.push(candidate);
            }
        }
        candidates
    }

    /// Resolve `raw` to a post, trying each candidate once.
    ///
    /// A miss on every candidate is `Ok(None)`; backend errors abort the
    /// search and propagate.
    pub async fn resolve(&self, content: &ContentService, raw: &str) -> Result<Option<PostDetail>> {
        for uri in self.candidates(raw) {
            if let Some(post) = content.post_by_uri(&uri).await? {
                log::debug!("Resolved {raw:?} via {uri}");
                return Ok(Some(post));
            }
            log::debug!("No post at {uri}");
        }
        Ok(None)
    }
}
