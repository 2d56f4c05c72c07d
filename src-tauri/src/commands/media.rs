use crate::error::AppError;
use crate::services::workflow::AnalysisEngine;
use tauri::State;

/// Resolves a relative artifact path from a result (`stored_at` or a
/// per-frame `path`) against the detector base and returns the media
/// as a data URL for direct display.
#[tauri::command]
pub async fn fetch_artifact(
    engine: State<'_, AnalysisEngine>,
    path: String,
) -> Result<String, AppError> {
    engine.client().fetch_artifact(&path).await
}
