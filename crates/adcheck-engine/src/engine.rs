//! Generic category evaluation over the rule tables

use adcheck_types::{Finding, FindingStatus, RegulationCategory, MIN_RISK_LEVEL};
use chrono::Utc;

use crate::recommend::recommendations_for;
use crate::rules::{rules_for, PatternRule};

/// Evaluate one category against a text
///
/// Each rule fires at most once and contributes its message in table order.
/// Status and risk are folded from the triggered set; a severe rule carries
/// violation status and severity 5 in its table entry.
pub fn evaluate_category(category: RegulationCategory, text: &str) -> Finding {
    let triggered: Vec<(&PatternRule, &str)> = rules_for(category)
        .iter()
        .filter_map(|rule| {
            rule.matcher
                .first_match(text)
                .map(|fragment| (rule, fragment))
        })
        .collect();

    let status = triggered
        .iter()
        .map(|(rule, _)| rule.tier.status())
        .max()
        .unwrap_or(FindingStatus::Passed);
    let risk_level = triggered
        .iter()
        .map(|(rule, _)| rule.severity)
        .max()
        .unwrap_or(MIN_RISK_LEVEL);

    let violations = triggered
        .iter()
        .map(|(rule, fragment)| rule.message.replacen("{}", fragment, 1))
        .collect();
    let tiers: Vec<_> = triggered.iter().map(|(rule, _)| rule.tier).collect();

    Finding {
        category,
        status,
        risk_level,
        violations,
        recommendations: recommendations_for(&tiers),
        legal_reference: category.legal_reference(),
        created_at: Utc::now(),
    }
}
