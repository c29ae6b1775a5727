//! 景品表示法 (Act against Unjustifiable Premiums and Misleading
//! Representations) rule table
//!
//! Covers 優良誤認 (superiority claims, 第5条第1号), 有利誤認 (advantage
//! claims, 第5条第2号), exaggerated wording, and absolute effect claims.

use lazy_static::lazy_static;

use super::{PatternRule, RuleTier};

lazy_static! {
    pub static ref RULES: Vec<PatternRule> = vec![
        // ====================================================================
        // 優良誤認 - superiority claims (第5条第1号)
        // ====================================================================
        PatternRule::pattern(
            RuleTier::Superiority,
            r"(?i)(?:業界|地域|日本|世界|売上|顧客満足度)?No\.?\s?[1１]|ナンバーワン|ナンバー[1１]",
            "No.1表示「{}」には、調査機関と調査時期を示せる客観的な根拠が必要です。根拠がない場合は優良誤認表示に該当するおそれがあります。",
            3,
        ),
        PatternRule::pattern(
            RuleTier::Superiority,
            r"日本一|世界一|業界初|日本初|世界初|最高級|最上級|極上|唯一無二",
            "最上級表現「{}」は、事実に反する場合、優良誤認表示と判断されるおそれがあります。",
            3,
        ),
        // ====================================================================
        // 有利誤認 - advantage claims (第5条第2号)
        // ====================================================================
        PatternRule::pattern(
            RuleTier::Advantage,
            r"今だけ|本日限り|期間限定|今なら|残りわずか|先着\d+名",
            "限定訴求「{}」は、実際の販売条件と異なる場合、有利誤認表示に該当するおそれがあります。",
            2,
        ),
        PatternRule::pattern(
            RuleTier::Advantage,
            r"半額|最安値|業界最安|実質無料|実質タダ",
            "価格訴求「{}」は、実際の取引条件より著しく有利と誤認させる場合、有利誤認表示に該当します。",
            2,
        ),
        // ====================================================================
        // 誇大表現 - exaggerated wording
        // ====================================================================
        PatternRule::pattern(
            RuleTier::Exaggeration,
            r"完璧な?|完全無欠|100[%％]|１００[%％]|百パーセント",
            "誇大な表現「{}」は、裏付けとなる根拠がない場合、景品表示法上問題となるおそれがあります。",
            2,
        ),
        PatternRule::pattern(
            RuleTier::Exaggeration,
            r"奇跡の|魔法のような?|驚異の|革命的",
            "「{}」のような誇大表現は、消費者に実際以上の効果を誤認させるおそれがあります。",
            2,
        ),
        PatternRule::pattern(
            RuleTier::Exaggeration,
            r"誰でも簡単に|すぐに(?:効果|結果)|たった\d+日で",
            "「{}」は効果の程度を誤認させるおそれがある表現です。",
            2,
        ),
        // ====================================================================
        // 断定的表現 - absolute effect claims (severe)
        // ====================================================================
        PatternRule::pattern(
            RuleTier::AbsoluteClaim,
            r"絶対に?(?:痩せる|儲かる|稼げる|治る|効く|成功|合格)|必ず(?:痩せる|儲かる|稼げる|治る|効く|成功|合格)|(?:効果|成果|結果)を保証",
            "断定的表現「{}」は効果を保証するものであり、景品表示法第5条に違反する可能性が高い表現です。",
            5,
        ),
    ];
}
