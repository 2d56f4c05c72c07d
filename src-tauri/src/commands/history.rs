use crate::error::AppError;
use crate::models::history_types::HistoryEntry;
use crate::services::workflow::AnalysisEngine;
use tauri::State;

#[tauri::command]
pub async fn list_history(engine: State<'_, AnalysisEngine>) -> Result<Vec<HistoryEntry>, AppError> {
    Ok(engine.list_history().await)
}

#[tauri::command]
pub async fn load_history_entry(
    engine: State<'_, AnalysisEngine>,
    id: u64,
) -> Result<HistoryEntry, AppError> {
    engine.load_history(id).await
}
