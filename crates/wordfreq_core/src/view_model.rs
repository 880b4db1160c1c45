use crate::{Chart, ChartKind, RankedEntry, SliderBounds, Status};

/// Everything the UI needs to draw one page.
#[derive(Debug, Clone, PartialEq)]
pub struct AppViewModel {
    pub url_input: String,
    pub analyzed_url: Option<String>,
    pub page_title: Option<String>,
    pub chart_kind: ChartKind,
    /// Threshold actually applied, clamped into `slider`.
    pub threshold: u32,
    pub slider: SliderBounds,
    /// Chart built from the filtered table.
    pub chart: Chart,
    /// Filtered entries by rank.
    pub ranked: Vec<RankedEntry>,
    /// Distinct words before filtering.
    pub distinct_words: usize,
    /// Total counted words before filtering.
    pub total_words: u64,
    pub status: Status,
}

impl AppViewModel {
    pub fn error_message(&self) -> Option<&str> {
        match &self.status {
            Status::Failed { message } => Some(message),
            _ => None,
        }
    }
}
