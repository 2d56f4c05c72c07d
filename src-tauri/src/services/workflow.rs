use crate::error::{AppError, ErrorKind};
use crate::models::analysis_types::{
    AnalysisMode, AnalysisResult, PendingFile, PendingFileInfo, WorkflowStatus,
};
use crate::models::history_types::HistoryEntry;
use crate::services::detector_client::DetectorClient;
use crate::services::history::RunHistory;
use crate::services::media;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Mutex;

/// Owns the selection/submission lifecycle: at most one pending file,
/// at most one current result, one outstanding request at a time.
/// Commands other than the read-only snapshots are rejected while a
/// request is in flight; an accepted request always runs to completion
/// (no cancellation, no engine-side timeout).
#[derive(Clone)]
pub struct AnalysisEngine {
    client: DetectorClient,
    mode: Arc<Mutex<AnalysisMode>>,
    pending: Arc<Mutex<Option<PendingFile>>>,
    result: Arc<Mutex<Option<AnalysisResult>>>,
    error: Arc<Mutex<Option<String>>>,
    analyzing: Arc<Mutex<bool>>,
    online: Arc<AtomicBool>,
    last_completed: Arc<Mutex<Option<u64>>>,
    history: Arc<Mutex<RunHistory>>,
}

impl AnalysisEngine {
    pub fn new(client: DetectorClient) -> Self {
        Self {
            client,
            mode: Arc::new(Mutex::new(AnalysisMode::Image)),
            pending: Arc::new(Mutex::new(None)),
            result: Arc::new(Mutex::new(None)),
            error: Arc::new(Mutex::new(None)),
            analyzing: Arc::new(Mutex::new(false)),
            online: Arc::new(AtomicBool::new(true)),
            last_completed: Arc::new(Mutex::new(None)),
            history: Arc::new(Mutex::new(RunHistory::new())),
        }
    }

    pub fn client(&self) -> &DetectorClient {
        &self.client
    }

    async fn ensure_not_analyzing(&self) -> Result<(), AppError> {
        if *self.analyzing.lock().await {
            return Err(AppError::engine_busy());
        }
        Ok(())
    }

    /// Reads the file at `path` and stores it as the pending selection,
    /// clearing any previous result and error. The file kind must match
    /// the current mode.
    pub async fn select_file(&self, path: &Path) -> Result<PendingFileInfo, AppError> {
        self.ensure_not_analyzing().await?;

        let mode = *self.mode.lock().await;
        if !media::accepts(mode, path) {
            return Err(format!(
                "Not a supported {} file: {}",
                match mode {
                    AnalysisMode::Image => "image",
                    AnalysisMode::Video => "video",
                },
                path.display()
            )
            .into());
        }

        let bytes = tokio::fs::read(path).await.map_err(|e| AppError {
            kind: ErrorKind::Other,
            message: format!("Failed to read {}: {}", path.display(), e),
        })?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "unknown".to_string());

        self.set_pending(name, bytes).await
    }

    /// Stores an already-loaded payload as the pending selection
    /// (drag-and-drop hands the engine bytes rather than a path).
    pub async fn select_bytes(&self, name: String, bytes: Vec<u8>) -> Result<PendingFileInfo, AppError> {
        self.ensure_not_analyzing().await?;
        self.set_pending(name, bytes).await
    }

    async fn set_pending(&self, name: String, bytes: Vec<u8>) -> Result<PendingFileInfo, AppError> {
        let file = PendingFile {
            size: bytes.len() as u64,
            name,
            bytes,
        };
        let info = PendingFileInfo {
            name: file.name.clone(),
            size: file.size,
        };
        *self.pending.lock().await = Some(file);
        *self.result.lock().await = None;
        *self.error.lock().await = None;
        Ok(info)
    }

    /// Switches between image and video analysis. The pending file,
    /// current result and error are all cleared: the endpoint and the
    /// accepted file kinds differ between modes.
    pub async fn switch_mode(&self, mode: AnalysisMode) -> Result<(), AppError> {
        self.ensure_not_analyzing().await?;
        *self.mode.lock().await = mode;
        *self.pending.lock().await = None;
        *self.result.lock().await = None;
        *self.error.lock().await = None;
        Ok(())
    }

    /// Submits the pending file to the detector and settles the run.
    /// Strictly serialized: a second call while one is outstanding is
    /// rejected, and the outstanding request always runs to completion.
    pub async fn run(&self) -> Result<AnalysisResult, AppError> {
        let (mode, file) = self.begin().await?;
        let outcome = self.client.analyze(mode, &file).await;
        self.settle(mode, &file, outcome).await
    }

    async fn begin(&self) -> Result<(AnalysisMode, PendingFile), AppError> {
        let mut analyzing = self.analyzing.lock().await;
        if *analyzing {
            return Err(AppError::engine_busy());
        }

        let file = self
            .pending
            .lock()
            .await
            .clone()
            .ok_or_else(AppError::no_file_selected)?;

        *analyzing = true;
        drop(analyzing);

        *self.error.lock().await = None;
        *self.result.lock().await = None;

        Ok((*self.mode.lock().await, file))
    }

    async fn settle(
        &self,
        mode: AnalysisMode,
        file: &PendingFile,
        outcome: Result<AnalysisResult, AppError>,
    ) -> Result<AnalysisResult, AppError> {
        let settled = match outcome {
            Ok(result) => {
                self.online.store(true, Ordering::Relaxed);

                let display_name = if result.filename().is_empty() {
                    file.name.clone()
                } else {
                    result.filename().to_string()
                };
                let entry = self
                    .history
                    .lock()
                    .await
                    .record(mode, result.clone(), display_name);

                *self.last_completed.lock().await = Some(entry.completed_at);
                *self.result.lock().await = Some(result.clone());
                *self.pending.lock().await = None;

                Ok(result)
            }
            Err(err) => {
                eprintln!("Analysis of {} failed: {}", file.name, err.message);
                self.online.store(false, Ordering::Relaxed);
                *self.error.lock().await = Some(err.message.clone());
                Err(err)
            }
        };

        *self.analyzing.lock().await = false;
        settled
    }

    /// Restores mode, result and completion time from a recorded run.
    /// Does not re-issue a request and does not touch the cache.
    pub async fn load_history(&self, id: u64) -> Result<HistoryEntry, AppError> {
        self.ensure_not_analyzing().await?;

        let entry = self
            .history
            .lock()
            .await
            .find(id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("No run with id {} in history", id)))?;

        *self.mode.lock().await = entry.mode;
        *self.result.lock().await = Some(entry.result.clone());
        *self.error.lock().await = None;
        *self.last_completed.lock().await = Some(entry.completed_at);

        Ok(entry)
    }

    pub async fn list_history(&self) -> Vec<HistoryEntry> {
        self.history.lock().await.list()
    }

    pub async fn status(&self) -> WorkflowStatus {
        WorkflowStatus {
            mode: *self.mode.lock().await,
            file: self.pending.lock().await.as_ref().map(|f| PendingFileInfo {
                name: f.name.clone(),
                size: f.size,
            }),
            analyzing: *self.analyzing.lock().await,
            result: self.result.lock().await.clone(),
            error: self.error.lock().await.clone(),
            online: self.online.load(Ordering::Relaxed),
            last_completed_at: *self.last_completed.lock().await,
        }
    }
}
