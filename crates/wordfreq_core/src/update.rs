use engine_logging::{engine_debug, engine_info, engine_warn};

use crate::state::normalize_url_input;
use crate::{AppState, Effect, Msg};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::InputChanged(text) => {
            state.set_url_input(text);
            Vec::new()
        }
        Msg::UrlSubmitted => match normalize_url_input(state.url_input()) {
            None => Vec::new(),
            Some(Ok(url)) => {
                engine_debug!("Analysis requested for {}", url);
                state.begin_fetch(url.clone());
                vec![Effect::FetchUrl { url }]
            }
            Some(Err(err)) => {
                engine_warn!("Rejected URL input {:?}: {}", state.url_input(), err);
                let message = format!("Invalid URL: {err}");
                state.reject_input(message);
                Vec::new()
            }
        },
        Msg::ChartSelected(kind) => {
            state.set_chart_kind(kind);
            Vec::new()
        }
        Msg::ThresholdChanged(threshold) => {
            state.set_threshold(threshold);
            Vec::new()
        }
        Msg::PageFetched { url, text, title } => {
            if state.is_pending(&url) {
                engine_debug!("Received {} chars of text for {}", text.len(), url);
                state.apply_text(url, &text, title);
                engine_info!(
                    "Counted {} distinct words ({} total)",
                    state.table().len(),
                    state.table().total()
                );
            } else {
                engine_debug!("Ignoring stale result for {}", url);
            }
            Vec::new()
        }
        Msg::FetchFailed { url, message } => {
            if state.is_pending(&url) {
                engine_warn!("Fetching {} failed: {}", url, message);
                state.apply_failure(url, message);
            } else {
                engine_debug!("Ignoring stale failure for {}", url);
            }
            Vec::new()
        }
    };

    (state, effects)
}
