//! Compliance checker for Japanese ad copy
//!
//! Screens marketing text against three statutes (景品表示法, 薬機法,
//! 金融商品取引法) using declarative pattern rule tables, and folds the
//! per-category findings into an overall risk assessment. Evaluation is
//! pure and stateless; persistence belongs to the caller.

pub mod aggregate;
pub mod engine;
pub mod error;
pub mod recommend;
pub mod rules;

use adcheck_types::{CheckReport, CheckRequest, Finding, OverallAssessment, RegulationCategory};

pub use error::ComplianceError;

/// ComplianceChecker entry point
pub struct ComplianceChecker;

impl ComplianceChecker {
    pub fn new() -> Self {
        Self
    }

    /// Check raw text, returning one finding per category in fixed order
    pub fn check_text(&self, text: &str) -> Vec<Finding> {
        RegulationCategory::all()
            .into_iter()
            .map(|category| engine::evaluate_category(category, text))
            .collect()
    }

    /// Check one piece of content and wrap the findings for the caller
    pub fn check_content(&self, content_id: &str, text: &str) -> CheckReport {
        CheckReport {
            content_id: content_id.to_string(),
            findings: self.check_text(text),
            checked_at: chrono::Utc::now(),
        }
    }

    /// Check a deserialized request; a request without text is a caller bug
    pub fn check_request(&self, request: &CheckRequest) -> Result<CheckReport, ComplianceError> {
        let text = request.text.as_deref().ok_or_else(|| {
            ComplianceError::InvalidInput("text must be present (empty text is allowed)".to_string())
        })?;
        Ok(self.check_content(&request.content_id, text))
    }

    /// Fold findings into the overall status, risk, and summary
    pub fn overall_risk(&self, findings: &[Finding]) -> OverallAssessment {
        aggregate::overall_risk(findings)
    }
}

impl Default for ComplianceChecker {
    fn default() -> Self {
        Self::new()
    }
}
