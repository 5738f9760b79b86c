//! robots.txt fetching and rule matching.

use log::{debug, warn};
use url::Url;

use crate::error_handling::{ErrorType, ProcessingStats};

/// Parsed robots.txt state for one site.
///
/// Only `Disallow` rules under a `User-agent: *` group are honored. The
/// blocking predicate is pure: the report's list of blocked URLs is computed
/// by the aggregator from the crawled pages, so checking the same URL twice
/// never double-counts anything.
#[derive(Debug, Clone, Default)]
pub struct RobotsTxtData {
    /// Whether a robots.txt file was successfully fetched.
    pub has_robots_txt: bool,
    /// Disallow path prefixes collected from `User-agent: *` groups.
    pub disallow_rules: Vec<String>,
}

impl RobotsTxtData {
    /// Returns the state for a site with no robots.txt: nothing is blocked.
    pub fn absent() -> Self {
        Self::default()
    }

    /// Tests whether a URL's path falls under a disallow rule.
    ///
    /// `Disallow: /` blocks every path; other rules are prefix matches on the
    /// URL path. Malformed URLs are treated as unblocked.
    pub fn is_blocked(&self, url: &str) -> bool {
        if self.disallow_rules.is_empty() {
            return false;
        }
        let path = match Url::parse(url) {
            Ok(parsed) => parsed.path().to_string(),
            Err(_) => return false,
        };
        self.disallow_rules
            .iter()
            .any(|rule| rule == "/" || path.starts_with(rule.as_str()))
    }
}

/// Parses robots.txt content into disallow rules.
///
/// Rules accumulate inside `User-agent: *` groups and stop at the first
/// `User-agent:` line naming another agent. Comments and empty `Disallow:`
/// lines (which mean "allow everything") are ignored.
pub fn parse_robots_txt(content: &str) -> RobotsTxtData {
    let mut rules = Vec::new();
    let mut in_star_group = false;

    for raw_line in content.lines() {
        // Strip comments before matching directives
        let line = match raw_line.split_once('#') {
            Some((before, _)) => before.trim(),
            None => raw_line.trim(),
        };
        if line.is_empty() {
            continue;
        }

        // Directive names match case-insensitively; the path value keeps its
        // case, since robots.txt paths are case-sensitive
        let lower = line.to_ascii_lowercase();
        if lower.starts_with("user-agent:") {
            let agent = line["user-agent:".len()..].trim();
            in_star_group = agent == "*";
            continue;
        }

        if in_star_group && lower.starts_with("disallow:") {
            let path = line["disallow:".len()..].trim();
            if !path.is_empty() {
                rules.push(path.to_string());
            }
        }
    }

    RobotsTxtData {
        has_robots_txt: true,
        disallow_rules: rules,
    }
}

/// Fetches and parses `{origin}/robots.txt`.
///
/// Unreachable or non-200 responses yield [`RobotsTxtData::absent`]: absence
/// of robots.txt means "no restriction", never a crawl-fatal condition.
pub async fn fetch_robots_txt(
    client: &reqwest::Client,
    base_url: &Url,
    stats: &ProcessingStats,
) -> RobotsTxtData {
    let robots_url = format!("{}/robots.txt", base_url.origin().ascii_serialization());

    let response = match client.get(&robots_url).send().await {
        Ok(r) => r,
        Err(e) => {
            warn!("Failed to fetch {}: {}", robots_url, e);
            stats.increment_error(ErrorType::RobotsFetchError);
            return RobotsTxtData::absent();
        }
    };

    if !response.status().is_success() {
        debug!("{} returned {}", robots_url, response.status());
        return RobotsTxtData::absent();
    }

    match response.text().await {
        Ok(body) => {
            let data = parse_robots_txt(&body);
            debug!(
                "Parsed robots.txt with {} disallow rule(s)",
                data.disallow_rules.len()
            );
            data
        }
        Err(e) => {
            warn!("Failed to read robots.txt body from {}: {}", robots_url, e);
            stats.increment_error(ErrorType::RobotsFetchError);
            RobotsTxtData::absent()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_collects_star_group_rules() {
        let data = parse_robots_txt("User-agent: *\nDisallow: /private\nDisallow: /tmp\n");
        assert!(data.has_robots_txt);
        assert_eq!(data.disallow_rules, vec!["/private", "/tmp"]);
    }

    #[test]
    fn test_parse_stops_at_other_agent() {
        let data = parse_robots_txt(
            "User-agent: *\nDisallow: /private\nUser-agent: Googlebot\nDisallow: /google-only\n",
        );
        assert_eq!(data.disallow_rules, vec!["/private"]);
    }

    #[test]
    fn test_parse_ignores_rules_before_star_group() {
        let data = parse_robots_txt(
            "User-agent: Googlebot\nDisallow: /google-only\nUser-agent: *\nDisallow: /private\n",
        );
        assert_eq!(data.disallow_rules, vec!["/private"]);
    }

    #[test]
    fn test_parse_ignores_empty_disallow_and_comments() {
        let data = parse_robots_txt("User-agent: *\nDisallow:\nDisallow: /a # staging\n");
        assert_eq!(data.disallow_rules, vec!["/a"]);
    }

    #[test]
    fn test_parse_preserves_rule_path_case() {
        let data = parse_robots_txt("User-agent: *\nDisallow: /Admin\n");
        assert_eq!(data.disallow_rules, vec!["/Admin"]);
        assert!(data.is_blocked("https://example.com/Admin/panel"));
        assert!(!data.is_blocked("https://example.com/admin/panel"));
    }

    #[test]
    fn test_parse_directive_names_case_insensitive() {
        let data = parse_robots_txt("USER-AGENT: *\nDISALLOW: /private\n");
        assert_eq!(data.disallow_rules, vec!["/private"]);
    }

    #[test]
    fn test_is_blocked_prefix_match() {
        let data = parse_robots_txt("User-agent: *\nDisallow: /private\n");
        assert!(data.is_blocked("https://example.com/private/page"));
        assert!(data.is_blocked("https://example.com/private"));
        assert!(!data.is_blocked("https://example.com/public"));
    }

    #[test]
    fn test_is_blocked_root_rule_blocks_everything() {
        let data = parse_robots_txt("User-agent: *\nDisallow: /\n");
        assert!(data.is_blocked("https://example.com/"));
        assert!(data.is_blocked("https://example.com/anything/at/all"));
    }

    #[test]
    fn test_is_blocked_is_idempotent() {
        let data = parse_robots_txt("User-agent: *\nDisallow: /private\n");
        let url = "https://example.com/private/page";
        assert_eq!(data.is_blocked(url), data.is_blocked(url));
    }

    #[test]
    fn test_absent_blocks_nothing() {
        let data = RobotsTxtData::absent();
        assert!(!data.has_robots_txt);
        assert!(!data.is_blocked("https://example.com/private"));
    }
}
