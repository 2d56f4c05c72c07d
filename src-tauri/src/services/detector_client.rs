use crate::error::AppError;
use crate::models::analysis_types::{
    AnalysisMode, AnalysisResult, ImageResult, PendingFile, VideoResult,
};

const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";
const API_BASE_ENV: &str = "PADS_API_BASE";

/// Client for the detection service. Owns the base URL and the reqwest
/// client; the workflow engine calls `analyze` exactly once per run.
#[derive(Clone)]
pub struct DetectorClient {
    http: reqwest::Client,
    base_url: String,
}

impl DetectorClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_env() -> Self {
        let base = std::env::var(API_BASE_ENV).unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        Self::new(base)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submits the file to the mode's endpoint as a multipart form with
    /// a single `file` field and decodes the response into the shape
    /// for that mode. No timeout and no retry; the caller serializes
    /// submissions.
    pub async fn analyze(
        &self,
        mode: AnalysisMode,
        file: &PendingFile,
    ) -> Result<AnalysisResult, AppError> {
        let part = reqwest::multipart::Part::bytes(file.bytes.clone()).file_name(file.name.clone());
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(format!("{}{}", self.base_url, mode.endpoint()))
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::http(error_message(status.as_u16(), &body)));
        }

        let body = response.text().await?;
        decode_result(mode, &body)
    }

    /// Fetches a stored artifact (`stored_at` or a per-frame `path`)
    /// relative to the detector base and returns it as a data URL.
    pub async fn fetch_artifact(&self, relative_path: &str) -> Result<String, AppError> {
        let url = format!("{}/{}", self.base_url, relative_path.trim_start_matches('/'));
        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::http(format!(
                "Failed to fetch {}: HTTP {}",
                relative_path, status
            )));
        }

        let bytes = response.bytes().await?;
        let b64 = base64::Engine::encode(&base64::engine::general_purpose::STANDARD, &bytes);
        Ok(format!(
            "data:{};base64,{}",
            super::media::mime_for_path(relative_path),
            b64
        ))
    }
}

/// Failure message preference: a `detail` field from a decodable JSON
/// error body, else a line synthesized from the status code.
pub fn error_message(status: u16, body: &str) -> String {
    extract_detail(body).unwrap_or_else(|| format!("Request failed with status {}", status))
}

fn extract_detail(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value.get("detail")?.as_str().map(|s| s.to_string())
}

pub fn decode_result(mode: AnalysisMode, body: &str) -> Result<AnalysisResult, AppError> {
    match mode {
        AnalysisMode::Image => serde_json::from_str::<ImageResult>(body)
            .map(AnalysisResult::Image)
            .map_err(|e| AppError::decode(format!("Failed to decode image result: {}", e))),
        AnalysisMode::Video => serde_json::from_str::<VideoResult>(body)
            .map(AnalysisResult::Video)
            .map_err(|e| AppError::decode(format!("Failed to decode video result: {}", e))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_detail_field() {
        assert_eq!(
            error_message(500, r#"{"detail":"model unavailable"}"#),
            "model unavailable"
        );
    }

    #[test]
    fn error_message_falls_back_to_status() {
        assert_eq!(error_message(502, "bad gateway"), "Request failed with status 502");
        assert_eq!(error_message(404, r#"{"other":"x"}"#), "Request failed with status 404");
        assert_eq!(error_message(500, ""), "Request failed with status 500");
    }

    #[test]
    fn decodes_image_result() {
        let body = r#"{
            "filename": "cat.jpg",
            "stored_at": "uploads/20240101.jpg",
            "analysis": { "label": "artificial", "score": 0.97, "model": "local" }
        }"#;
        let result = decode_result(AnalysisMode::Image, body).unwrap();
        match result {
            AnalysisResult::Image(r) => {
                assert_eq!(r.filename, "cat.jpg");
                let analysis = r.analysis.unwrap();
                assert_eq!(analysis.label.as_deref(), Some("artificial"));
                assert_eq!(analysis.score, Some(0.97));
            }
            AnalysisResult::Video(_) => panic!("decoded as video"),
        }
    }

    #[test]
    fn decodes_image_result_with_absent_analysis() {
        let body = r#"{ "filename": "cat.jpg" }"#;
        let result = decode_result(AnalysisMode::Image, body).unwrap();
        match result {
            AnalysisResult::Image(r) => {
                assert!(r.stored_at.is_none());
                assert!(r.analysis.is_none());
            }
            AnalysisResult::Video(_) => panic!("decoded as video"),
        }
    }

    #[test]
    fn decodes_video_result_with_mixed_frames() {
        let body = r#"{
            "filename": "clip.mp4",
            "stored_at": "uploads/clip.mp4",
            "frames": [
                { "timestamp": 1, "path": "uploads/f1.jpg",
                  "analysis": { "label": "human", "score": 0.71 } },
                { "timestamp": 2, "path": null, "error": "ffmpeg failed at 2s",
                  "stderr": "..." }
            ],
            "summary": {
                "frames_analyzed": 2,
                "labels": ["human"],
                "first_human_at": 1,
                "ffmpeg_ok": false
            }
        }"#;
        let result = decode_result(AnalysisMode::Video, body).unwrap();
        match result {
            AnalysisResult::Video(r) => {
                assert_eq!(r.frames.len(), 2);
                assert_eq!(r.frames[0].analysis.as_ref().unwrap().label.as_deref(), Some("human"));
                assert_eq!(r.frames[1].error.as_deref(), Some("ffmpeg failed at 2s"));
                let summary = r.summary.unwrap();
                assert_eq!(summary.first_human_at, Some(1.0));
                assert!(!summary.ffmpeg_ok);
            }
            AnalysisResult::Image(_) => panic!("decoded as image"),
        }
    }

    #[test]
    fn undecodable_body_is_a_decode_error() {
        let err = decode_result(AnalysisMode::Image, "<html>oops</html>").unwrap_err();
        assert_eq!(err.kind, crate::error::ErrorKind::Decode);
    }
}
