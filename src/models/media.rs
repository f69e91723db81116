//! Media references.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// An image or file hosted by the CMS.
///
/// Only ever constructed with a non-empty `url`; a missing URL is
/// represented by the absence of the whole reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MediaReference {
    pub url: String,
    pub alt_text: Option<String>,
}

impl MediaReference {
    /// Canonical JSON form, with both keys always present.
    pub fn to_value(&self) -> Value {
        json!({
            "url": self.url,
            "altText": self.alt_text,
        })
    }

    /// Alt text, falling back to the given label.
    pub fn alt_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        self.alt_text
            .as_deref()
            .filter(|alt| !alt.trim().is_empty())
            .unwrap_or(fallback)
    }
}
