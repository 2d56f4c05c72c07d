use serde::Serialize;

/// Discrete confidence bucket derived from a detector score. Derived on
/// read, never stored.
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    Low,
    Confident,
    VeryConfident,
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum VerdictCategory {
    LikelyArtificial,
    LikelyHuman,
    Unclassified,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Diagnosis {
    pub category: VerdictCategory,
    pub verdict: String,
    pub detail: Option<String>,
    pub score_text: Option<String>,
}
