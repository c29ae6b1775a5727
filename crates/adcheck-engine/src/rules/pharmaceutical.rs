//! 薬機法 (Pharmaceutical and Medical Device Act) rule table
//!
//! Health food and cosmetics copy may not claim medical efficacy
//! (第66条・第68条). Covers cure claims, named-disease efficacy,
//! body-change promises, and safety guarantees.

use lazy_static::lazy_static;

use super::{PatternRule, RuleTier};

lazy_static! {
    pub static ref RULES: Vec<PatternRule> = vec![
        // ====================================================================
        // 医薬品的効能効果 - medical efficacy claims (第68条)
        // ====================================================================
        PatternRule::pattern(
            RuleTier::MedicalEfficacy,
            r"完治|治癒|治ります|病気が(?:治る|よくなる)|症状が(?:治る|消える)",
            "医薬品的な効能効果「{}」の標榜は、承認を受けた医薬品以外では薬機法第68条に違反するおそれがあります。",
            4,
        ),
        PatternRule::pattern(
            RuleTier::MedicalEfficacy,
            r"(?:がん|ガン|癌|糖尿病|高血圧|アトピー|花粉症)(?:に|が)(?:効く|効果|改善|治る)",
            "特定の疾病への効果「{}」を示す広告表現は薬機法上認められていません。",
            4,
        ),
        PatternRule::pattern(
            RuleTier::MedicalEfficacy,
            r"血流(?:が|を)(?:改善|促進)|免疫力(?:が|を)?(?:高める|向上|アップ)|デトックス効果",
            "身体機能への効果「{}」は医薬品的効能効果とみなされるおそれがあります。",
            4,
        ),
        PatternRule::pattern(
            RuleTier::MedicalEfficacy,
            r"(?:飲む|塗る|貼る)だけで(?:痩せる|治る|効く|改善)",
            "「{}」のような表現は効果を保証する誇大広告として薬機法第66条に該当するおそれがあります。",
            4,
        ),
        // ====================================================================
        // 痩身・美容効果 - body enhancement claims
        // ====================================================================
        PatternRule::pattern(
            RuleTier::BodyEnhancement,
            r"痩せる|痩せられる|ダイエット効果|脂肪(?:が)?燃焼|セルライト(?:を|が)?(?:除去|解消)",
            "痩身効果「{}」の標榜は、健康食品・化粧品の広告では薬機法違反となるおそれがあります。",
            3,
        ),
        PatternRule::pattern(
            RuleTier::BodyEnhancement,
            r"美白効果|シミが(?:消える|なくなる)|シワが(?:消える|なくなる)|若返り",
            "美容効果「{}」は承認された効能効果の範囲を超えるおそれがあります。",
            3,
        ),
        PatternRule::pattern(
            RuleTier::BodyEnhancement,
            r"発毛|育毛効果|毛が生える",
            "発毛・育毛効果「{}」は医薬品・医薬部外品以外では標榜できません。",
            3,
        ),
        // ====================================================================
        // 安全性の保証 - safety guarantees (severe)
        // ====================================================================
        PatternRule::pattern(
            RuleTier::SafetyGuarantee,
            r"副作用(?:は)?(?:なし|ない|ありません|ゼロ)|100[%％]安全|１００[%％]安全|絶対に?安全|天然(?:成分)?だから安全",
            "安全性を保証する表現「{}」は薬機法第66条で禁止されています。",
            5,
        ),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_cure_claims() {
        let text = "このお茶で症状が治るとの声を多数いただいています";
        let matched = RULES[0].matcher.first_match(text);
        assert_eq!(matched, Some("症状が治る"));
    }

    #[test]
    fn test_detects_named_disease_claims() {
        assert!(RULES[1].matcher.first_match("花粉症に効くサプリ").is_some());
        assert!(RULES[1].matcher.first_match("がんに効果があるとされる成分").is_some());
    }

    #[test]
    fn test_detects_slimming_claims() {
        let rule = &RULES[4];
        assert_eq!(rule.tier, RuleTier::BodyEnhancement);
        assert_eq!(rule.matcher.first_match("飲めば痩せると評判"), Some("痩せる"));
    }

    #[test]
    fn test_detects_safety_guarantees() {
        let rule = RULES.last().unwrap();
        assert!(rule.tier.is_severe());
        assert_eq!(
            rule.matcher.first_match("副作用なしで安心です"),
            Some("副作用なし")
        );
        assert!(rule.matcher.first_match("100%安全な成分").is_some());
    }

    #[test]
    fn test_allows_approved_style_copy() {
        let text = "ビタミンCを配合した清涼飲料水です。";
        for rule in RULES.iter() {
            assert_eq!(rule.matcher.first_match(text), None);
        }
    }
}
