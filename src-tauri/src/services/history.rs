use crate::models::analysis_types::{AnalysisMode, AnalysisResult};
use crate::models::history_types::HistoryEntry;
use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

const HISTORY_CAPACITY: usize = 5;

/// Bounded, insertion-ordered store of the most recent completed runs.
/// Newest entry sits at the front; the tail is evicted past capacity.
/// Entries are never reordered or mutated after insertion.
#[derive(Debug, Default)]
pub struct RunHistory {
    entries: VecDeque<HistoryEntry>,
    last_id: u64,
}

impl RunHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a completed run and returns the stored entry. Ids follow
    /// the completion timestamp in ms, bumped on collision so two runs
    /// settling within the same millisecond stay distinct.
    pub fn record(
        &mut self,
        mode: AnalysisMode,
        result: AnalysisResult,
        display_name: String,
    ) -> HistoryEntry {
        let now_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        let id = now_ms.max(self.last_id + 1);
        self.last_id = id;

        let entry = HistoryEntry {
            id,
            mode,
            result,
            completed_at: now_ms,
            display_name,
        };

        self.entries.push_front(entry.clone());
        while self.entries.len() > HISTORY_CAPACITY {
            self.entries.pop_back();
        }

        entry
    }

    /// Entries newest-first.
    pub fn list(&self) -> Vec<HistoryEntry> {
        self.entries.iter().cloned().collect()
    }

    pub fn find(&self, id: u64) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::analysis_types::{ImageAnalysis, ImageResult};

    fn image_result(name: &str) -> AnalysisResult {
        AnalysisResult::Image(ImageResult {
            filename: name.to_string(),
            stored_at: Some(format!("uploads/{}", name)),
            analysis: Some(ImageAnalysis {
                label: Some("artificial".to_string()),
                score: Some(0.93),
                model: Some("local".to_string()),
            }),
        })
    }

    #[test]
    fn capacity_is_bounded_at_five_newest_first() {
        let mut history = RunHistory::new();
        for i in 0..8 {
            history.record(
                AnalysisMode::Image,
                image_result(&format!("photo_{}.jpg", i)),
                format!("photo_{}.jpg", i),
            );
        }

        let entries = history.list();
        assert_eq!(entries.len(), 5);
        let names: Vec<&str> = entries.iter().map(|e| e.display_name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "photo_7.jpg",
                "photo_6.jpg",
                "photo_5.jpg",
                "photo_4.jpg",
                "photo_3.jpg",
            ]
        );
    }

    #[test]
    fn ids_are_strictly_increasing() {
        let mut history = RunHistory::new();
        let mut last = 0;
        for i in 0..6 {
            let entry = history.record(
                AnalysisMode::Image,
                image_result(&format!("photo_{}.jpg", i)),
                format!("photo_{}.jpg", i),
            );
            assert!(entry.id > last);
            last = entry.id;
        }
    }

    #[test]
    fn no_deduplication_for_repeat_runs() {
        let mut history = RunHistory::new();
        history.record(AnalysisMode::Image, image_result("same.jpg"), "same.jpg".into());
        history.record(AnalysisMode::Image, image_result("same.jpg"), "same.jpg".into());
        assert_eq!(history.list().len(), 2);
    }

    #[test]
    fn find_returns_matching_entry() {
        let mut history = RunHistory::new();
        let a = history.record(AnalysisMode::Image, image_result("a.jpg"), "a.jpg".into());
        let b = history.record(AnalysisMode::Image, image_result("b.jpg"), "b.jpg".into());

        assert_eq!(history.find(a.id).map(|e| e.display_name.as_str()), Some("a.jpg"));
        assert_eq!(history.find(b.id).map(|e| e.display_name.as_str()), Some("b.jpg"));
        assert!(history.find(b.id + 1000).is_none());
    }
}
