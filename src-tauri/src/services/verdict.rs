use crate::models::analysis_types::AnalysisMode;
use crate::models::verdict_types::{ConfidenceTier, Diagnosis, VerdictCategory};

const ARTIFICIAL_LABELS: &[&str] = &["artificial", "ai", "ai-generated", "synthetic", "fake"];
const HUMAN_LABELS: &[&str] = &["human", "real"];

/// Maps a detector score to a confidence tier. A missing score yields
/// no tier at all ("no badge"), which callers must keep distinct from
/// `Low`. Out-of-range scores are not clamped; the thresholds place
/// them wherever the comparison lands.
pub fn classify_score(score: Option<f64>) -> Option<ConfidenceTier> {
    let score = score?;
    if score >= 0.9 {
        Some(ConfidenceTier::VeryConfident)
    } else if score >= 0.6 {
        Some(ConfidenceTier::Confident)
    } else {
        Some(ConfidenceTier::Low)
    }
}

pub fn format_score(score: f64) -> String {
    format!("{:.1}%", score * 100.0)
}

/// Resolves a detector label (plus optional score) to a human-readable
/// verdict. The mode only varies the wording of the human-label
/// sentence, never the category. Returns `None` when there is nothing
/// to show: both label and score absent.
pub fn resolve_diagnosis(
    label: Option<&str>,
    score: Option<f64>,
    mode: AnalysisMode,
) -> Option<Diagnosis> {
    if label.is_none() && score.is_none() {
        return None;
    }

    let lowered = label.map(|l| l.to_lowercase());

    let (category, verdict, detail) = match (&lowered, label) {
        (Some(l), _) if ARTIFICIAL_LABELS.contains(&l.as_str()) => (
            VerdictCategory::LikelyArtificial,
            "Likely AI-generated".to_string(),
            Some(
                "The detector found patterns that are typically present in synthetic / AI images."
                    .to_string(),
            ),
        ),
        (Some(l), _) if HUMAN_LABELS.contains(&l.as_str()) => (
            VerdictCategory::LikelyHuman,
            "Likely real / human-captured".to_string(),
            Some(format!(
                "The detector did not find strong signs of AI generation on this {}",
                match mode {
                    AnalysisMode::Video => "frame/video.",
                    AnalysisMode::Image => "image.",
                }
            )),
        ),
        (Some(_), Some(raw)) => (
            VerdictCategory::Unclassified,
            format!("Label returned: {}", raw),
            None,
        ),
        // Score present, label absent: the generic fallback line.
        _ => (
            VerdictCategory::Unclassified,
            "Result: model returned a label".to_string(),
            None,
        ),
    };

    Some(Diagnosis {
        category,
        verdict,
        detail,
        score_text: score.map(format_score),
    })
}
