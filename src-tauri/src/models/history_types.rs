use crate::models::analysis_types::{AnalysisMode, AnalysisResult};
use serde::Serialize;

/// One completed run. Created only on a successful settlement and never
/// mutated afterwards; loading it back only moves the engine's current
/// pointers.
#[derive(Debug, Serialize, Clone)]
pub struct HistoryEntry {
    pub id: u64,
    pub mode: AnalysisMode,
    pub result: AnalysisResult,
    pub completed_at: u64,
    pub display_name: String,
}
