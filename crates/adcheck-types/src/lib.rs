pub mod category;
pub mod types;

pub use category::{LegalReference, RegulationCategory};
pub use types::{
    CheckReport, CheckRequest, Finding, FindingStatus, OverallAssessment, MAX_RISK_LEVEL,
    MIN_RISK_LEVEL,
};
