//! URI normalization for feed and entry identifiers

use url::Url;

/// Normalize a feed or entry URI
///
/// Absolute URLs are reparsed into canonical form: lower-cased scheme and
/// host, default port dropped, empty path written as `/`. Anything else
/// (relative references, plain GUIDs) is only trimmed. Blank input yields
/// `None`.
///
/// # Examples
///
/// ```
/// use synd_rs::synd::uri::normalize;
///
/// assert_eq!(
///     normalize(Some(" HTTP://Example.COM:80/a b ")).as_deref(),
///     Some("http://example.com/a%20b")
/// );
/// assert_eq!(normalize(Some("item-42")).as_deref(), Some("item-42"));
/// assert_eq!(normalize(Some("   ")), None);
/// assert_eq!(normalize(None), None);
/// ```
pub fn normalize(uri: Option<&str>) -> Option<String> {
    let trimmed = uri?.trim();
    if trimmed.is_empty() {
        return None;
    }

    match Url::parse(trimmed) {
        Ok(url) if url.has_host() => Some(url.to_string()),
        _ => Some(trimmed.to_string()),
    }
}

/// Resolve `href` against an optional base URI
///
/// Returns `href` unchanged when there is no usable base or when it is
/// already absolute.
pub fn resolve(base: Option<&str>, href: &str) -> String {
    if Url::parse(href).is_ok() {
        return href.to_string();
    }
    base.and_then(|b| Url::parse(b).ok())
        .and_then(|b| b.join(href).ok())
        .map(|u| u.to_string())
        .unwrap_or_else(|| href.to_string())
}
