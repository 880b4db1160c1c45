use url::Url;

use crate::view_model::AppViewModel;
use crate::{ChartKind, FrequencyTable};

/// What the user should currently be told about the analysis.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Fetching { url: String },
    Ready,
    Failed { message: String },
}

/// State of one UI interaction. Built fresh per request; nothing here
/// outlives the response.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    url_input: String,
    pending_url: Option<String>,
    analyzed_url: Option<String>,
    chart_kind: ChartKind,
    threshold: u32,
    table: FrequencyTable,
    page_title: Option<String>,
    status: Status,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let slider = self.table.slider_bounds();
        let threshold = slider.clamp(self.threshold);
        let filtered = self.table.filter_min_count(threshold);
        AppViewModel {
            url_input: self.url_input.clone(),
            analyzed_url: self.analyzed_url.clone(),
            page_title: self.page_title.clone(),
            chart_kind: self.chart_kind,
            threshold,
            slider,
            chart: self.chart_kind.build(&filtered),
            ranked: filtered.ranked(),
            distinct_words: self.table.len(),
            total_words: self.table.total(),
            status: self.status.clone(),
        }
    }

    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    pub fn pending_url(&self) -> Option<&str> {
        self.pending_url.as_deref()
    }

    pub(crate) fn set_url_input(&mut self, input: String) {
        self.url_input = input;
    }

    pub(crate) fn url_input(&self) -> &str {
        &self.url_input
    }

    pub(crate) fn set_chart_kind(&mut self, kind: ChartKind) {
        self.chart_kind = kind;
    }

    pub(crate) fn set_threshold(&mut self, threshold: u32) {
        self.threshold = threshold;
    }

    /// Drop the previous result and wait for `url`.
    pub(crate) fn begin_fetch(&mut self, url: String) {
        self.table = FrequencyTable::new();
        self.analyzed_url = None;
        self.page_title = None;
        self.status = Status::Fetching { url: url.clone() };
        self.pending_url = Some(url);
    }

    pub(crate) fn reject_input(&mut self, message: String) {
        self.table = FrequencyTable::new();
        self.analyzed_url = None;
        self.page_title = None;
        self.pending_url = None;
        self.status = Status::Failed { message };
    }

    /// Whether a result for `url` is the one this state is waiting for.
    pub(crate) fn is_pending(&self, url: &str) -> bool {
        self.pending_url.as_deref() == Some(url)
    }

    pub(crate) fn apply_text(&mut self, url: String, text: &str, title: Option<String>) {
        self.table = FrequencyTable::from_text(text);
        self.analyzed_url = Some(url);
        self.page_title = title;
        self.pending_url = None;
        self.status = Status::Ready;
    }

    pub(crate) fn apply_failure(&mut self, url: String, message: String) {
        self.table = FrequencyTable::new();
        self.analyzed_url = Some(url);
        self.page_title = None;
        self.pending_url = None;
        self.status = Status::Failed { message };
    }
}

/// Trim user input and make it fetchable: a missing scheme defaults to
/// `https://`. Returns `None` for blank input.
pub fn normalize_url_input(raw: &str) -> Option<Result<String, url::ParseError>> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    };
    Some(Url::parse(&candidate).map(|url| url.to_string()))
}
