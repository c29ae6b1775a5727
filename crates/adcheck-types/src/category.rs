//! Regulation categories for Japanese ad-copy compliance checks
//!
//! Each category maps to one statute:
//! - 景品表示法: misleading superiority/advantage representations
//! - 薬機法: drug and cosmetics advertising limits
//! - 金融商品取引法: financial product solicitation rules

use serde::{Deserialize, Serialize};

/// Regulation categories, declared in evaluation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RegulationCategory {
    UnfairRepresentationAct,
    PharmaceuticalAffairsAct,
    FinancialInstrumentsAct,
}

impl RegulationCategory {
    /// Get the Japanese short name of the statute
    pub fn name(&self) -> &'static str {
        match self {
            RegulationCategory::UnfairRepresentationAct => "景品表示法",
            RegulationCategory::PharmaceuticalAffairsAct => "薬機法",
            RegulationCategory::FinancialInstrumentsAct => "金融商品取引法",
        }
    }

    /// Get the statute citation attached to findings in this category
    pub fn legal_reference(&self) -> LegalReference {
        match self {
            RegulationCategory::UnfairRepresentationAct => LegalReference {
                law: "不当景品類及び不当表示防止法（景品表示法）".to_string(),
                articles: vec![
                    "第5条第1号（優良誤認表示）".to_string(),
                    "第5条第2号（有利誤認表示）".to_string(),
                    "第7条（措置命令）".to_string(),
                ],
                url: "https://elaws.e-gov.go.jp/document?lawid=337AC0000000134".to_string(),
            },
            RegulationCategory::PharmaceuticalAffairsAct => LegalReference {
                law: "医薬品、医療機器等の品質、有効性及び安全性の確保等に関する法律（薬機法）"
                    .to_string(),
                articles: vec![
                    "第66条（誇大広告等の禁止）".to_string(),
                    "第68条（承認前の医薬品等の広告の禁止）".to_string(),
                ],
                url: "https://elaws.e-gov.go.jp/document?lawid=335AC0000000145".to_string(),
            },
            RegulationCategory::FinancialInstrumentsAct => LegalReference {
                law: "金融商品取引法".to_string(),
                articles: vec![
                    "第37条（広告等の規制）".to_string(),
                    "第38条第2号（断定的判断の提供等の禁止）".to_string(),
                ],
                url: "https://elaws.e-gov.go.jp/document?lawid=323AC0000000025".to_string(),
            },
        }
    }

    /// Get all categories in the fixed evaluation order
    pub fn all() -> Vec<Self> {
        vec![
            RegulationCategory::UnfairRepresentationAct,
            RegulationCategory::PharmaceuticalAffairsAct,
            RegulationCategory::FinancialInstrumentsAct,
        ]
    }
}

impl std::fmt::Display for RegulationCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Statute citation carried by every finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegalReference {
    pub law: String,
    pub articles: Vec<String>,
    pub url: String,
}
