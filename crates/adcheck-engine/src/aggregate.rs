//! Folding findings into an overall assessment

use adcheck_types::{Finding, FindingStatus, OverallAssessment, MIN_RISK_LEVEL};

/// Summary used when no findings exist yet
const NOT_CHECKED_SUMMARY: &str = "コンプライアンスチェックは未実施です。";

/// Summary used when every category passed
const ALL_CLEAR_SUMMARY: &str = "すべてのカテゴリで問題は検出されませんでした。";

/// Fold findings into overall status, risk, and a one-line summary
///
/// An empty set is the "no check has run" state and aggregates to the
/// neutral default rather than an error.
pub fn overall_risk(findings: &[Finding]) -> OverallAssessment {
    if findings.is_empty() {
        return OverallAssessment {
            status: FindingStatus::Passed,
            overall_risk: MIN_RISK_LEVEL,
            summary: NOT_CHECKED_SUMMARY.to_string(),
        };
    }

    let status = findings
        .iter()
        .map(|f| f.status)
        .max()
        .unwrap_or(FindingStatus::Passed);
    let overall_risk = findings
        .iter()
        .map(|f| f.risk_level)
        .max()
        .unwrap_or(MIN_RISK_LEVEL);

    let violation_count = findings
        .iter()
        .filter(|f| f.status == FindingStatus::Violation)
        .count();
    let warning_count = findings
        .iter()
        .filter(|f| f.status == FindingStatus::Warning)
        .count();

    let summary = if violation_count == 0 && warning_count == 0 {
        ALL_CLEAR_SUMMARY.to_string()
    } else {
        format!(
            "違反{}件、警告{}件が検出されました。",
            violation_count, warning_count
        )
    };

    OverallAssessment {
        status,
        overall_risk,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use adcheck_types::RegulationCategory;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn finding(category: RegulationCategory, status: FindingStatus, risk_level: u8) -> Finding {
        Finding {
            category,
            status,
            risk_level,
            violations: if status == FindingStatus::Passed {
                vec![]
            } else {
                vec!["問題のある表現が見つかりました。".to_string()]
            },
            recommendations: vec!["表現を見直してください。".to_string()],
            legal_reference: category.legal_reference(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_empty_findings_aggregate_to_neutral_default() {
        let assessment = overall_risk(&[]);

        assert_eq!(assessment.status, FindingStatus::Passed);
        assert_eq!(assessment.overall_risk, MIN_RISK_LEVEL);
        assert_eq!(assessment.summary, NOT_CHECKED_SUMMARY);
    }

    #[test]
    fn test_all_passed_aggregates_to_all_clear() {
        let findings = vec![
            finding(RegulationCategory::UnfairRepresentationAct, FindingStatus::Passed, 1),
            finding(RegulationCategory::PharmaceuticalAffairsAct, FindingStatus::Passed, 1),
            finding(RegulationCategory::FinancialInstrumentsAct, FindingStatus::Passed, 1),
        ];

        let assessment = overall_risk(&findings);
        assert_eq!(assessment.status, FindingStatus::Passed);
        assert_eq!(assessment.overall_risk, MIN_RISK_LEVEL);
        assert_eq!(assessment.summary, ALL_CLEAR_SUMMARY);
    }

    #[test]
    fn test_mixed_statuses_take_the_maximum() {
        let findings = vec![
            finding(RegulationCategory::UnfairRepresentationAct, FindingStatus::Violation, 5),
            finding(RegulationCategory::PharmaceuticalAffairsAct, FindingStatus::Passed, 1),
            finding(RegulationCategory::FinancialInstrumentsAct, FindingStatus::Warning, 2),
        ];

        let assessment = overall_risk(&findings);
        assert_eq!(assessment.status, FindingStatus::Violation);
        assert_eq!(assessment.overall_risk, 5);
        assert_eq!(assessment.summary, "違反1件、警告1件が検出されました。");
    }

    #[test]
    fn test_warnings_only_keep_warning_status() {
        let findings = vec![
            finding(RegulationCategory::UnfairRepresentationAct, FindingStatus::Warning, 3),
            finding(RegulationCategory::FinancialInstrumentsAct, FindingStatus::Warning, 2),
        ];

        let assessment = overall_risk(&findings);
        assert_eq!(assessment.status, FindingStatus::Warning);
        assert_eq!(assessment.overall_risk, 3);
        assert_eq!(assessment.summary, "違反0件、警告2件が検出されました。");
    }

    #[test]
    fn test_single_violation_counts_once() {
        let findings = vec![finding(
            RegulationCategory::PharmaceuticalAffairsAct,
            FindingStatus::Violation,
            5,
        )];

        let assessment = overall_risk(&findings);
        assert_eq!(assessment.summary, "違反1件、警告0件が検出されました。");
    }
}
