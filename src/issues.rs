//! Issue synthesizer seam.
//!
//! The finished report is handed to an [`IssueSynthesizer`] that turns it
//! into prioritized, human-readable findings - in production an AI-backed
//! service, in tests whatever the test needs. The synthesizer is an opaque
//! collaborator: its failures are logged and yield an empty issue list, and
//! the report is returned regardless.

use std::future::Future;

use serde::Serialize;

use crate::report::SiteWideReport;

/// Severity of one synthesized finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueSeverity {
    /// Must be fixed; actively harming indexing or crawlability.
    Critical,
    /// Should be fixed; degraded but not broken.
    Warning,
    /// Worth knowing; no action required.
    Info,
}

/// One prioritized, human-readable finding.
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    /// Short headline for the finding.
    pub title: String,
    /// What was observed and what to do about it.
    pub description: String,
    /// Priority of the finding.
    pub severity: IssueSeverity,
}

/// Capability to turn a finished report into prioritized findings.
pub trait IssueSynthesizer: Send + Sync {
    /// Produces findings for `report`, scoped to `category`.
    ///
    /// Errors are recovered by the caller: the crawl's output is still valid
    /// and returned without issues.
    fn generate_issues(
        &self,
        report: &SiteWideReport,
        url: &str,
        category: &str,
    ) -> impl Future<Output = anyhow::Result<Vec<Issue>>> + Send;
}

/// Synthesizer that produces no findings. The default for callers that only
/// want the report.
pub struct NoopSynthesizer;

impl IssueSynthesizer for NoopSynthesizer {
    async fn generate_issues(
        &self,
        _report: &SiteWideReport,
        _url: &str,
        _category: &str,
    ) -> anyhow::Result<Vec<Issue>> {
        Ok(Vec::new())
    }
}
