//! Remediation guidance keyed by rule tier
//!
//! Guidance is fixed text per tier. Callers always get at least one entry;
//! a clean result carries a single positive note instead of an empty list.

use crate::rules::RuleTier;

/// Recommendation attached when nothing in the category triggered
pub const NO_ISSUES_RECOMMENDATION: &str = "このカテゴリについて問題は見つかりませんでした。";

/// Get the fixed advisory strings for a tier
pub fn tier_guidance(tier: RuleTier) -> &'static [&'static str] {
    match tier {
        RuleTier::Superiority => &[
            "No.1・日本一などの表示には、調査機関名と調査時期を明記できる客観的な根拠資料を用意してください。",
            "根拠を示せない最上級表現は削除するか、具体的な事実の記載に置き換えてください。",
        ],
        RuleTier::Advantage => &[
            "期間限定・価格訴求は、実際の販売条件と一致していることを確認してください。",
            "通常価格と比較する場合は、相当期間の販売実績がある価格を基準にしてください。",
        ],
        RuleTier::Exaggeration => &[
            "誇大な印象を与える表現は、検証可能な具体的数値や事実に置き換えてください。",
        ],
        RuleTier::AbsoluteClaim => &[
            "効果を断定する表現は削除してください。措置命令の対象となる可能性があります。",
            "個人の感想を紹介する場合でも、効果の保証と受け取られる表現は避けてください。",
        ],
        RuleTier::MedicalEfficacy => &[
            "医薬品的な効能効果の標榜は広告全体から削除してください。",
            "健康食品・化粧品では、認められた表現の範囲内への言い換えを検討してください。",
        ],
        RuleTier::BodyEnhancement => &[
            "痩身・美容効果の表現は、身体の変化を保証しない表現に言い換えてください。",
        ],
        RuleTier::SafetyGuarantee => &[
            "安全性を保証する表現は削除し、使用上の注意への誘導を検討してください。",
        ],
        RuleTier::PerformanceGuarantee => &[
            "元本保証・確実な利益をうたう表現は直ちに削除してください。行政処分の対象となります。",
        ],
        RuleTier::YieldAppeal => &[
            "利回りを表示する場合は、手数料等の費用とリスク情報を同等の文字サイズで併記してください。",
        ],
        RuleTier::MissingRiskNotice => &[
            "「元本割れのリスクがあります」など、リスクに関する表示を追加してください。",
        ],
    }
}

/// Collect guidance for the triggered tiers, first-seen order, deduplicated
pub fn recommendations_for(tiers: &[RuleTier]) -> Vec<String> {
    let mut recommendations: Vec<String> = Vec::new();

    for tier in tiers {
        for guidance in tier_guidance(*tier) {
            let guidance = guidance.to_string();
            if !recommendations.contains(&guidance) {
                recommendations.push(guidance);
            }
        }
    }

    if recommendations.is_empty() {
        recommendations.push(NO_ISSUES_RECOMMENDATION.to_string());
    }

    recommendations
}
