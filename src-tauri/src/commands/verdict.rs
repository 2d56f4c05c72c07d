use crate::models::analysis_types::AnalysisMode;
use crate::models::verdict_types::{ConfidenceTier, Diagnosis};
use crate::services::verdict;

// Pure derivations over the current result; the view calls these on
// read and never stores the output.

#[tauri::command]
pub fn classify_confidence(score: Option<f64>) -> Option<ConfidenceTier> {
    verdict::classify_score(score)
}

#[tauri::command]
pub fn resolve_verdict(
    label: Option<String>,
    score: Option<f64>,
    mode: AnalysisMode,
) -> Option<Diagnosis> {
    verdict::resolve_diagnosis(label.as_deref(), score, mode)
}
