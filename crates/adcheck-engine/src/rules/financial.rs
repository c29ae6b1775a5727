//! 金融商品取引法 (Financial Instruments and Exchange Act) rule table
//!
//! Investment solicitation copy may not guarantee outcomes (第38条第2号)
//! and must carry risk information next to any appeal (第37条). The
//! risk-notice rule is a `MissingKeyword` table entry like any other rule.

use lazy_static::lazy_static;

use super::{PatternRule, RuleTier};

lazy_static! {
    pub static ref RULES: Vec<PatternRule> = vec![
        // ====================================================================
        // 断定的判断の提供 - guaranteed outcome claims (第38条第2号, severe)
        // ====================================================================
        PatternRule::pattern(
            RuleTier::PerformanceGuarantee,
            r"元本保証|元本割れ(?:は)?(?:なし|ない|ありません)",
            "元本の安全性を断定する表示「{}」は、金融商品取引法上認められません。",
            5,
        ),
        PatternRule::pattern(
            RuleTier::PerformanceGuarantee,
            r"絶対に?儲かる|必ず儲かる|確実に(?:儲かる|利益|増える)|損(?:は)?(?:しない|させません)|負けない投資",
            "断定的判断の提供にあたる表現「{}」は金融商品取引法第38条第2号で禁止されています。",
            5,
        ),
        // ====================================================================
        // 利回り・リターン訴求 - yield appeals (第37条)
        // ====================================================================
        PatternRule::pattern(
            RuleTier::YieldAppeal,
            r"(?:月利|年利|利回り)\s?\d+(?:\.\d+)?\s?[%％]|高利回り|ハイリターン",
            "利回り表示「{}」には、手数料等の費用とリスク情報を併記する必要があります。",
            3,
        ),
        PatternRule::pattern(
            RuleTier::YieldAppeal,
            r"資産が\d+倍|配当\d+倍",
            "運用成果を強調する表示「{}」は、実績条件の明示がない場合、誇大広告となるおそれがあります。",
            3,
        ),
        // ====================================================================
        // リスク表示の欠如 - missing risk notice (第37条)
        // ====================================================================
        PatternRule::missing_keyword(
            RuleTier::MissingRiskNotice,
            r"(?i)投資信託|投資|株式|FX|仮想通貨|暗号資産|ファンド|資産運用|NISA|iDeCo",
            "リスク",
            "金融商品の広告「{}」にはリスクに関する表示がありません。金融商品取引法第37条の表示義務を確認してください。",
            2,
        ),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_principal_guarantees() {
        let rule = &RULES[0];
        assert!(rule.tier.is_severe());
        assert_eq!(rule.matcher.first_match("元本保証で安心"), Some("元本保証"));
        assert!(rule.matcher.first_match("元本割れはありません").is_some());
    }

    #[test]
    fn test_detects_certain_profit_claims() {
        let matched = RULES[1].matcher.first_match("この投資法なら必ず儲かる");
        assert_eq!(matched, Some("必ず儲かる"));
    }

    #[test]
    fn test_detects_yield_figures() {
        let rule = &RULES[2];
        assert_eq!(rule.matcher.first_match("年利10%の商品"), Some("年利10%"));
        assert!(rule.matcher.first_match("高利回りを実現").is_some());
    }

    #[test]
    fn test_risk_notice_rule_fires_without_risk_wording() {
        let rule = RULES.last().unwrap();
        assert_eq!(rule.tier, RuleTier::MissingRiskNotice);
        assert_eq!(
            rule.matcher.first_match("少額から始める投資信託"),
            Some("投資信託")
        );
    }

    #[test]
    fn test_risk_notice_rule_satisfied_by_risk_wording() {
        let rule = RULES.last().unwrap();
        let text = "投資信託には元本割れのリスクがあります";
        assert_eq!(rule.matcher.first_match(text), None);
    }

    #[test]
    fn test_allows_non_financial_copy() {
        let text = "新生活にぴったりの家具をご紹介します。";
        for rule in RULES.iter() {
            assert_eq!(rule.matcher.first_match(text), None);
        }
    }
}
