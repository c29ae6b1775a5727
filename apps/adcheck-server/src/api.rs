//! API handlers for the adcheck server
//!
//! Provides REST endpoints for:
//! - Content compliance checks
//! - Overall risk assessment over previously stored findings
//! - Regulation category listing

use axum::{extract::State, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use adcheck_engine::{rules, ComplianceChecker};
use adcheck_types::{CheckRequest, Finding, LegalReference, OverallAssessment, RegulationCategory};

use crate::error::ServerError;
use crate::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "adcheck-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Category list response
#[derive(Serialize)]
pub struct CategoryListResponse {
    pub success: bool,
    pub categories: Vec<CategoryInfo>,
    pub count: usize,
}

/// Regulation category metadata
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryInfo {
    pub category: RegulationCategory,
    pub name: &'static str,
    pub rule_count: usize,
    pub legal_reference: LegalReference,
}

/// Handler: GET /api/categories
pub async fn handle_list_categories() -> Json<CategoryListResponse> {
    let categories: Vec<CategoryInfo> = RegulationCategory::all()
        .into_iter()
        .map(|category| CategoryInfo {
            category,
            name: category.name(),
            rule_count: rules::rules_for(category).len(),
            legal_reference: category.legal_reference(),
        })
        .collect();

    let count = categories.len();

    Json(CategoryListResponse {
        success: true,
        categories,
        count,
    })
}

/// Check response
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckApiResponse {
    pub success: bool,
    /// Server-generated id for this check run
    pub check_id: String,
    pub content_id: String,
    pub findings: Vec<Finding>,
    pub overall: OverallAssessment,
    pub checked_at: DateTime<Utc>,
}

/// Handler: POST /api/check
pub async fn handle_check(
    State(state): State<AppState>,
    Json(req): Json<CheckRequest>,
) -> Result<Json<CheckApiResponse>, ServerError> {
    info!("Check request: content_id={}", req.content_id);

    if let Some(text) = &req.text {
        if text.len() > state.max_text_bytes {
            return Err(ServerError::PayloadTooLarge(state.max_text_bytes));
        }
        debug!("Text length: {} bytes", text.len());
    }

    let checker = ComplianceChecker::new();
    let report = checker.check_request(&req)?;
    let overall = checker.overall_risk(&report.findings);

    Ok(Json(CheckApiResponse {
        success: true,
        check_id: Uuid::new_v4().to_string(),
        content_id: report.content_id,
        findings: report.findings,
        overall,
        checked_at: report.checked_at,
    }))
}

/// Assessment request: findings the caller fetched from its own storage
#[derive(Deserialize)]
pub struct AssessApiRequest {
    pub findings: Vec<Finding>,
}

/// Assessment response
#[derive(Serialize)]
pub struct AssessApiResponse {
    pub success: bool,
    pub overall: OverallAssessment,
}

/// Handler: POST /api/assess
pub async fn handle_assess(Json(req): Json<AssessApiRequest>) -> Json<AssessApiResponse> {
    info!("Assess request: {} findings", req.findings.len());

    let checker = ComplianceChecker::new();
    let overall = checker.overall_risk(&req.findings);

    Json(AssessApiResponse {
        success: true,
        overall,
    })
}
