//! Pattern rule tables for each regulation category
//!
//! Rules are data: each category module declares a static table of
//! `PatternRule` entries and the engine iterates them generically.
//! Adding or tuning a rule is a table edit, never an engine change.

use adcheck_types::{FindingStatus, RegulationCategory};
use regex::Regex;

pub mod financial;
pub mod pharmaceutical;
pub mod unfair_representation;

/// Thematic rule groups; each carries one remediation guidance set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleTier {
    // 景品表示法
    Superiority,
    Advantage,
    Exaggeration,
    AbsoluteClaim,
    // 薬機法
    MedicalEfficacy,
    BodyEnhancement,
    SafetyGuarantee,
    // 金融商品取引法
    PerformanceGuarantee,
    YieldAppeal,
    MissingRiskNotice,
}

impl RuleTier {
    /// Severe tiers force a violation outcome on any match
    pub fn is_severe(&self) -> bool {
        matches!(
            self,
            RuleTier::AbsoluteClaim | RuleTier::SafetyGuarantee | RuleTier::PerformanceGuarantee
        )
    }

    /// Status a triggered rule in this tier contributes
    pub fn status(&self) -> FindingStatus {
        if self.is_severe() {
            FindingStatus::Violation
        } else {
            FindingStatus::Warning
        }
    }
}

/// How a rule decides it applies to a text
pub enum RuleMatcher {
    /// Triggers when the pattern matches; the first match feeds the message
    Pattern(Regex),
    /// Triggers when `subject` matches but `required` appears nowhere in the
    /// text (risk-disclaimer style rules)
    MissingKeyword {
        subject: Regex,
        required: &'static str,
    },
}

impl RuleMatcher {
    /// First substring the rule objects to, if it triggers at all
    pub fn first_match<'t>(&self, text: &'t str) -> Option<&'t str> {
        match self {
            RuleMatcher::Pattern(pattern) => pattern.find(text).map(|m| m.as_str()),
            RuleMatcher::MissingKeyword { subject, required } => {
                if text.contains(required) {
                    None
                } else {
                    subject.find(text).map(|m| m.as_str())
                }
            }
        }
    }
}

/// One table entry: matcher plus tier, message template, and severity
pub struct PatternRule {
    pub tier: RuleTier,
    pub matcher: RuleMatcher,
    /// Violation message; `{}` is replaced with the matched fragment
    pub message: &'static str,
    /// Risk contribution on match, 1..=5
    pub severity: u8,
}

impl PatternRule {
    pub fn pattern(tier: RuleTier, pattern: &str, message: &'static str, severity: u8) -> Self {
        Self {
            tier,
            matcher: RuleMatcher::Pattern(Regex::new(pattern).unwrap()),
            message,
            severity,
        }
    }

    pub fn missing_keyword(
        tier: RuleTier,
        subject: &str,
        required: &'static str,
        message: &'static str,
        severity: u8,
    ) -> Self {
        Self {
            tier,
            matcher: RuleMatcher::MissingKeyword {
                subject: Regex::new(subject).unwrap(),
                required,
            },
            message,
            severity,
        }
    }
}

/// Get the rule table for a category, in declaration order
pub fn rules_for(category: RegulationCategory) -> &'static [PatternRule] {
    match category {
        RegulationCategory::UnfairRepresentationAct => &unfair_representation::RULES,
        RegulationCategory::PharmaceuticalAffairsAct => &pharmaceutical::RULES,
        RegulationCategory::FinancialInstrumentsAct => &financial::RULES,
    }
}
