use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct PoemResponse {
    pub message: String,
}

/// Label → value pairs scraped from a reply. Sorted so the same reply always
/// serializes the same way.
#[derive(Debug, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct LabeledFields(pub BTreeMap<String, String>);

pub const MISSING_RATING: &str = "N/A";
pub const MISSING_COMMENT: &str = "No comment provided";

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct Assessment {
    pub rating: String,
    pub comment: String,
}

impl Default for Assessment {
    fn default() -> Self {
        Self {
            rating: MISSING_RATING.to_string(),
            comment: MISSING_COMMENT.to_string(),
        }
    }
}

#[derive(Debug, Default, Serialize, Clone, PartialEq, Eq)]
pub struct AnalysisReport {
    pub overall: Assessment,
    pub technical_skills: Assessment,
    pub communication_skills: Assessment,
    pub problem_solving: Assessment,
}
