//! Issue and report types

use serde::Serialize;

use crate::fix::FixAction;

/// How serious an issue is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Display label
    #[inline]
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }
}

/// What part of the platform an issue concerns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Data,
    Component,
    Performance,
    Structure,
    DesignSystem,
    Accessibility,
    CodeQuality,
}

/// One finding from a health scan
///
/// Issue ids are deterministic: the same underlying problem always produces
/// the same id, so issues fixed earlier in a session do not reappear under a
/// fresh identity after a re-scan.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    pub severity: Severity,
    pub category: Category,
    pub title: String,
    pub description: String,
    pub auto_fixable: bool,
    #[serde(skip)]
    pub fix: Option<FixAction>,
    pub location: Option<String>,
    pub recommendation: Option<String>,
    pub code_snippet: Option<String>,
}

impl Issue {
    /// Deterministic issue id: bare prefix, or `prefix-{project_id}` when the
    /// issue is scoped to one project
    #[must_use]
    pub fn make_id(prefix: &str, project_id: Option<&str>) -> String {
        match project_id {
            Some(pid) => format!("{prefix}-{pid}"),
            None => prefix.to_string(),
        }
    }
}

/// Outcome of one full scan
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthReport {
    /// 0-100, the rounded share of checks that passed
    pub score: u8,
    pub issues: Vec<Issue>,
    pub total_checks: usize,
    pub passed_checks: usize,
    /// ISO-8601 timestamp of the scan
    pub last_run: String,
}

impl HealthReport {
    /// Score from check counts, 100 when nothing ran
    #[must_use]
    pub fn compute_score(passed: usize, total: usize) -> u8 {
        if total == 0 {
            return 100;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let score = ((passed as f64 / total as f64) * 100.0).round() as u8;
        score
    }

    /// Issues of a given severity
    #[must_use]
    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.issues.iter().filter(|i| i.severity == severity).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_ids_are_deterministic() {
        assert_eq!(Issue::make_id("storage-error", None), "storage-error");
        assert_eq!(
            Issue::make_id("project-missing-author", Some("p1")),
            "project-missing-author-p1"
        );
    }

    #[test]
    fn score_rounds_and_handles_empty() {
        assert_eq!(HealthReport::compute_score(0, 0), 100);
        assert_eq!(HealthReport::compute_score(12, 12), 100);
        assert_eq!(HealthReport::compute_score(0, 12), 0);
        assert_eq!(HealthReport::compute_score(11, 12), 92);
        assert_eq!(HealthReport::compute_score(1, 3), 33);
        assert_eq!(HealthReport::compute_score(2, 3), 67);
    }
}
