// src/utils/url.rs

//! Path and link helpers.

use percent_encoding::percent_decode_str;
use url::Url;

/// Prefix under which the post list and post pages live.
pub const BLOG_PREFIX: &str = "/blog";

/// Percent-decode a path, replacing invalid UTF-8.
pub fn decode_path(raw: &str) -> String {
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

/// Non-empty path segments, ignoring leading, trailing and doubled slashes.
pub fn segments(path: &str) -> Vec<&str> {
    path.split('/')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Site link for a post given its backend URI.
///
/// # Examples
/// ```
/// use cms_presenter::utils::url::post_href;
///
/// assert_eq!(post_href("/my-post/"), "/blog/my-post/");
/// assert_eq!(post_href(""), "/blog");
/// ```
pub fn post_href(uri: &str) -> String {
    if uri.is_empty() {
        return BLOG_PREFIX.to_string();
    }
    if uri.starts_with('/') {
        format!("{BLOG_PREFIX}{uri}")
    } else {
        format!("{BLOG_PREFIX}/{uri}")
    }
}

/// Whether a link leaves the site and should open in a new tab.
pub fn is_external(link: &str) -> bool {
    link.starts_with("http://") || link.starts_with("https://")
}

/// Resolve a site path against the configured base URL.
pub fn absolute_url(base_url: &str, path: &str) -> Option<String> {
    Url::parse(base_url)
        .and_then(|base| base.join(path))
        .map(|u| u.to_string())
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segments() {
        assert_eq!(segments("/blog//my-post/"), vec!["blog", "my-post"]);
        assert!(segments("///").is_empty());
    }

    #[test]
    fn test_decode_path() {
        assert_eq!(decode_path("caf%C3%A9-news"), "café-news");
        assert_eq!(decode_path("plain"), "plain");
    }

    #[test]
    fn test_post_href() {
        assert_eq!(post_href("my-post/"), "/blog/my-post/");
        assert_eq!(post_href("/2024/05/x/"), "/blog/2024/05/x/");
    }

    #[test]
    fn test_is_external() {
        assert!(is_external("https://example.org"));
        assert!(!is_external("/contact"));
    }

    #[test]
    fn test_absolute_url() {
        assert_eq!(
            absolute_url("https://example.org/", "/blog/x/"),
            Some("https://example.org/blog/x/".to_string())
        );
        assert_eq!(absolute_url("not a url", "/x"), None);
    }
}
