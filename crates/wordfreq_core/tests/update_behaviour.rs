use std::sync::Once;

use pretty_assertions::assert_eq;
use wordfreq_core::{update, AppState, Chart, ChartKind, Effect, Msg, Status};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(engine_logging::initialize_for_tests);
}

fn submit_url(state: AppState, input: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::InputChanged(input.to_string()));
    update(state, Msg::UrlSubmitted)
}

fn fetched(state: AppState, url: &str, text: &str) -> AppState {
    let (state, effects) = update(
        state,
        Msg::PageFetched {
            url: url.to_string(),
            text: text.to_string(),
            title: Some("Example".to_string()),
        },
    );
    assert!(effects.is_empty());
    state
}

#[test]
fn submitting_a_url_requests_a_fetch() {
    init_logging();
    let (state, effects) = submit_url(AppState::new(), "  https://example.com/post  ");

    assert_eq!(
        effects,
        vec![Effect::FetchUrl {
            url: "https://example.com/post".to_string(),
        }]
    );
    assert_eq!(
        state.status(),
        &Status::Fetching {
            url: "https://example.com/post".to_string()
        }
    );
}

#[test]
fn blank_input_is_ignored() {
    init_logging();
    let (state, effects) = submit_url(AppState::new(), "   \n");
    assert!(effects.is_empty());
    assert_eq!(state.status(), &Status::Idle);
}

#[test]
fn missing_scheme_defaults_to_https() {
    init_logging();
    let (_state, effects) = submit_url(AppState::new(), "example.com/a");
    assert_eq!(
        effects,
        vec![Effect::FetchUrl {
            url: "https://example.com/a".to_string(),
        }]
    );
}

#[test]
fn unparsable_url_is_reported_without_fetching() {
    init_logging();
    let (state, effects) = submit_url(AppState::new(), "http://exa mple.com");
    assert!(effects.is_empty());
    let view = state.view();
    assert!(view.error_message().unwrap().starts_with("Invalid URL"));
    assert!(view.chart.is_empty());
}

#[test]
fn fetched_text_produces_table_and_chart() {
    init_logging();
    let (state, _) = submit_url(AppState::new(), "https://example.com/");
    let state = fetched(state, "https://example.com/", "test test hello 2 2 ab");
    let (state, _) = update(state, Msg::ChartSelected(ChartKind::TopWordsBar));

    let view = state.view();
    assert_eq!(view.status, Status::Ready);
    assert_eq!(view.analyzed_url.as_deref(), Some("https://example.com/"));
    assert_eq!(view.page_title.as_deref(), Some("Example"));
    assert_eq!(view.distinct_words, 3);
    assert_eq!(view.total_words, 4);
    assert_eq!((view.slider.min, view.slider.max), (0, 2));
    match view.chart {
        Chart::Bar(bar) => {
            assert_eq!(bar.categories, vec!["test", "hello", "ab"]);
            assert_eq!(bar.values, vec![2, 1, 1]);
        }
        other => panic!("expected bar chart, got {other:?}"),
    }
}

#[test]
fn threshold_filters_chart_and_ranked_entries() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::ThresholdChanged(2));
    let (state, _) = submit_url(state, "https://example.com/");
    let state = fetched(state, "https://example.com/", "test test hello 2 2 ab");

    let view = state.view();
    assert_eq!(view.threshold, 2);
    let ranked: Vec<_> = view
        .ranked
        .iter()
        .map(|e| (e.token.as_str(), e.count))
        .collect();
    assert_eq!(ranked, vec![("test", 2)]);
    // Unfiltered totals stay visible.
    assert_eq!(view.distinct_words, 3);
}

#[test]
fn threshold_above_max_is_clamped() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::ThresholdChanged(50));
    let (state, _) = submit_url(state, "https://example.com/");
    let state = fetched(state, "https://example.com/", "alpha alpha beta");

    let view = state.view();
    assert_eq!(view.threshold, 2);
    assert_eq!(view.ranked.len(), 1);
}

#[test]
fn fetch_failure_shows_message_and_empty_charts() {
    init_logging();
    for kind in ChartKind::ALL {
        let (state, _) = update(AppState::new(), Msg::ChartSelected(kind));
        let (state, _) = submit_url(state, "https://example.com/missing");
        let (state, effects) = update(
            state,
            Msg::FetchFailed {
                url: "https://example.com/missing".to_string(),
                message: "http status 404".to_string(),
            },
        );
        assert!(effects.is_empty());

        let view = state.view();
        assert_eq!(view.error_message(), Some("http status 404"));
        assert_eq!((view.slider.min, view.slider.max), (0, 0));
        assert_eq!(view.threshold, 0);
        assert_eq!(view.chart.kind(), kind);
        assert!(view.chart.is_empty());
    }
}

#[test]
fn empty_page_text_is_not_an_error() {
    init_logging();
    let (state, _) = submit_url(AppState::new(), "https://example.com/");
    let state = fetched(state, "https://example.com/", "");

    let view = state.view();
    assert_eq!(view.status, Status::Ready);
    assert_eq!(view.error_message(), None);
    assert!(view.chart.is_empty());
}

#[test]
fn new_submission_supersedes_pending_result() {
    init_logging();
    let (state, _) = submit_url(AppState::new(), "https://first.example.com/");
    let (state, _) = submit_url(state, "https://second.example.com/");

    let state = fetched(state, "https://first.example.com/", "stale stale words");
    assert_eq!(state.view().distinct_words, 0);
    assert_eq!(state.pending_url(), Some("https://second.example.com/"));

    let state = fetched(state, "https://second.example.com/", "fresh words");
    let view = state.view();
    assert_eq!(view.analyzed_url.as_deref(), Some("https://second.example.com/"));
    assert_eq!(view.distinct_words, 2);
    assert_eq!(state.pending_url(), None);
}

#[test]
fn resubmitting_discards_previous_table() {
    init_logging();
    let (state, _) = submit_url(AppState::new(), "https://example.com/");
    let state = fetched(state, "https://example.com/", "one two three");
    assert_eq!(state.table().len(), 3);

    let (state, effects) = update(state, Msg::UrlSubmitted);
    assert_eq!(effects.len(), 1);
    assert!(state.table().is_empty());
}
