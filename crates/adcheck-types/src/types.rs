use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::category::{LegalReference, RegulationCategory};

/// Lowest risk level a finding can carry
pub const MIN_RISK_LEVEL: u8 = 1;
/// Highest risk level a finding can carry
pub const MAX_RISK_LEVEL: u8 = 5;

/// Check outcome for one category; the derived ordering widens toward violation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FindingStatus {
    Passed,
    Warning,
    Violation,
}

/// Result of checking one regulation category against one text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub category: RegulationCategory,
    pub status: FindingStatus,
    pub risk_level: u8, // 1..=5
    pub violations: Vec<String>,
    pub recommendations: Vec<String>, // Never empty
    pub legal_reference: LegalReference,
    pub created_at: DateTime<Utc>,
}

/// Full check result for one piece of content; persistence is the caller's job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    pub content_id: String,
    pub findings: Vec<Finding>,
    pub checked_at: DateTime<Utc>,
}

/// Aggregate view over a set of findings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverallAssessment {
    pub status: FindingStatus,
    pub overall_risk: u8,
    pub summary: String,
}

/// Check payload as callers send it
///
/// `text` stays optional so an absent or null field reaches validation
/// instead of failing deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckRequest {
    pub content_id: String,
    pub text: Option<String>,
}
