use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    Image,
    Video,
}

impl AnalysisMode {
    pub fn endpoint(&self) -> &'static str {
        match self {
            AnalysisMode::Image => "/analyze/image",
            AnalysisMode::Video => "/analyze/video",
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ImageAnalysis {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
    #[serde(default)]
    pub model: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ImageResult {
    pub filename: String,
    #[serde(default)]
    pub stored_at: Option<String>,
    #[serde(default)]
    pub analysis: Option<ImageAnalysis>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FrameAnalysis {
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub score: Option<f64>,
}

/// One extracted frame. A frame carries either `analysis` or `error`,
/// never both; `stderr` is the backend's ffmpeg output passthrough.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VideoFrame {
    pub timestamp: f64,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stderr: Option<String>,
    #[serde(default)]
    pub analysis: Option<FrameAnalysis>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VideoSummary {
    pub frames_analyzed: u32,
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub first_human_at: Option<f64>,
    pub ffmpeg_ok: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VideoResult {
    pub filename: String,
    #[serde(default)]
    pub stored_at: Option<String>,
    #[serde(default)]
    pub summary: Option<VideoSummary>,
    #[serde(default)]
    pub frames: Vec<VideoFrame>,
}

/// Decoded detector response for one run. Serialized untagged so the
/// view layer sees the raw backend shape.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum AnalysisResult {
    Image(ImageResult),
    Video(VideoResult),
}

impl AnalysisResult {
    pub fn filename(&self) -> &str {
        match self {
            AnalysisResult::Image(r) => &r.filename,
            AnalysisResult::Video(r) => &r.filename,
        }
    }
}

/// The currently selected file, owned by the workflow engine. Bytes are
/// held in memory until submission; only name and size cross the IPC
/// boundary.
#[derive(Debug, Clone)]
pub struct PendingFile {
    pub name: String,
    pub size: u64,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Serialize, Clone)]
pub struct PendingFileInfo {
    pub name: String,
    pub size: u64,
}

/// Read-only view of the engine for the presentation layer.
#[derive(Debug, Serialize, Clone)]
pub struct WorkflowStatus {
    pub mode: AnalysisMode,
    pub file: Option<PendingFileInfo>,
    pub analyzing: bool,
    pub result: Option<AnalysisResult>,
    pub error: Option<String>,
    pub online: bool,
    pub last_completed_at: Option<u64>,
}
