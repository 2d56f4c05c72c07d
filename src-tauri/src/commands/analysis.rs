use crate::error::AppError;
use crate::models::analysis_types::{
    AnalysisMode, AnalysisResult, PendingFileInfo, WorkflowStatus,
};
use crate::services::workflow::AnalysisEngine;
use std::path::PathBuf;
use tauri::{AppHandle, Emitter, State};

#[tauri::command]
pub async fn get_status(engine: State<'_, AnalysisEngine>) -> Result<WorkflowStatus, AppError> {
    Ok(engine.status().await)
}

#[tauri::command]
pub async fn get_api_base(engine: State<'_, AnalysisEngine>) -> Result<String, AppError> {
    Ok(engine.client().base_url().to_string())
}

#[tauri::command]
pub async fn select_file(
    engine: State<'_, AnalysisEngine>,
    path: String,
) -> Result<PendingFileInfo, AppError> {
    engine.select_file(&PathBuf::from(path)).await
}

#[tauri::command]
pub async fn select_dropped_file(
    engine: State<'_, AnalysisEngine>,
    name: String,
    bytes: Vec<u8>,
) -> Result<PendingFileInfo, AppError> {
    engine.select_bytes(name, bytes).await
}

#[tauri::command]
pub async fn switch_mode(
    engine: State<'_, AnalysisEngine>,
    mode: AnalysisMode,
) -> Result<(), AppError> {
    engine.switch_mode(mode).await
}

#[tauri::command]
pub async fn run_analysis(
    app: AppHandle,
    engine: State<'_, AnalysisEngine>,
) -> Result<AnalysisResult, AppError> {
    let _ = app.emit("analysis-started", ());
    let outcome = engine.run().await;
    let _ = app.emit("analysis-settled", engine.status().await);
    outcome
}
