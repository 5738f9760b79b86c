//! URL validation and normalization utilities.
//!
//! Every URL that enters the visited set, the frontier, or a report section
//! passes through [`normalize_url`] first, so "the same page" always compares
//! equal regardless of fragments or a trailing slash.

use log::warn;
use url::Url;

use crate::config::MAX_URL_LENGTH;
use crate::error_handling::AuditError;

/// Canonicalizes a URL for identity comparisons.
///
/// Strips everything from `#` onward and all trailing `/` characters. Pure
/// and infallible: malformed input passes through with the same two rules
/// applied. Idempotent by construction.
pub fn normalize_url(url: &str) -> String {
    let without_fragment = match url.split_once('#') {
        Some((before, _)) => before,
        None => url,
    };
    without_fragment.trim_end_matches('/').to_string()
}

/// Tests whether `url` lives on `hostname`.
///
/// Exact hostname comparison - no subdomain folding, so `blog.example.com`
/// is external to `example.com`. Malformed URLs return `false` rather than
/// erroring, because link discovery feeds untrusted `href` values here.
pub fn is_internal_url(url: &str, hostname: &str) -> bool {
    match Url::parse(url) {
        Ok(parsed) => parsed.host_str() == Some(hostname),
        Err(_) => false,
    }
}

/// Validates the crawl seed URL.
///
/// The seed must be an absolute http(s) URL with a hostname and a sane
/// length. This is the one place where a bad URL is fatal: the crawl cannot
/// start, and no network resource has been allocated yet.
///
/// # Errors
///
/// Returns `AuditError::InvalidBaseUrl` describing why the URL was rejected.
pub fn validate_base_url(url: &str) -> Result<Url, AuditError> {
    if url.len() > MAX_URL_LENGTH {
        return Err(AuditError::InvalidBaseUrl {
            // Char-wise truncation so multibyte input cannot split a boundary
            url: format!("{}...", url.chars().take(50).collect::<String>()),
            reason: format!("exceeds maximum length of {} characters", MAX_URL_LENGTH),
        });
    }

    let parsed = Url::parse(url).map_err(|e| AuditError::InvalidBaseUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(AuditError::InvalidBaseUrl {
                url: url.to_string(),
                reason: format!("unsupported scheme '{}'", other),
            });
        }
    }

    if parsed.host_str().is_none() {
        return Err(AuditError::InvalidBaseUrl {
            url: url.to_string(),
            reason: "missing host".to_string(),
        });
    }

    Ok(parsed)
}

/// Resolves an anchor `href` against the page it was found on.
///
/// Returns the normalized absolute URL, or `None` for hrefs that cannot be
/// followed (non-http schemes such as `mailto:` or `javascript:`, parse
/// failures, over-long results).
pub fn resolve_href(page_url: &Url, href: &str) -> Option<String> {
    let resolved = match page_url.join(href) {
        Ok(u) => u,
        Err(_) => {
            warn!("Dropping unresolvable href '{}' on {}", href, page_url);
            return None;
        }
    };

    if !matches!(resolved.scheme(), "http" | "https") {
        return None;
    }

    let normalized = normalize_url(resolved.as_str());
    if normalized.len() > MAX_URL_LENGTH {
        return None;
    }
    Some(normalized)
}
