use std::collections::VecDeque;
use std::sync::Arc;

use anyhow::Context;
use axum::extract::{Query, State};
use axum::response::{Html, Json};
use axum::routing::get;
use axum::Router;
use engine_logging::{engine_debug, engine_error, engine_info, engine_warn};
use serde::{Deserialize, Serialize};
use wordfreq_core::{update, AppState, AppViewModel, ChartKind, Msg, RankedEntry, SliderBounds};
use wordfreq_engine::{FetchSettings, PageTextEngine};

use super::config::{self, AppConfig};
use super::effects::EffectRunner;
use super::logging;
use super::ui;

pub async fn run_app() -> anyhow::Result<()> {
    let path = config::config_path();
    let loaded = config::load_config(&path);
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        _ => AppConfig::default(),
    };
    logging::initialize(&config);
    match loaded {
        Ok(Some(_)) => engine_info!("Loaded configuration from {:?}", path),
        Ok(None) => engine_debug!("No configuration at {:?}; using defaults", path),
        Err(err) => engine_warn!("{}; using defaults", err),
    }

    let engine = PageTextEngine::new(FetchSettings::from(&config.fetch));
    let router = router(EffectRunner::new(engine));

    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    engine_info!("Serving on http://{}", config.bind_addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    engine_info!("Server stopped");
    Ok(())
}

#[derive(Clone)]
struct AppContext {
    runner: Arc<EffectRunner>,
}

fn router(runner: EffectRunner) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/api/words", get(api_words))
        .route("/healthz", get(healthz))
        .with_state(AppContext {
            runner: Arc::new(runner),
        })
}

/// Raw query parameters; anything unparseable falls back to a default.
#[derive(Debug, Default, Deserialize)]
struct AnalyzeParams {
    url: Option<String>,
    chart: Option<String>,
    threshold: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct AnalyzeRequest {
    url: String,
    chart: ChartKind,
    threshold: u32,
}

impl From<AnalyzeParams> for AnalyzeRequest {
    fn from(params: AnalyzeParams) -> Self {
        let chart = match params.chart.as_deref().map(str::parse::<ChartKind>) {
            Some(Ok(kind)) => kind,
            Some(Err(err)) => {
                engine_warn!("{}; falling back to {}", err, ChartKind::default());
                ChartKind::default()
            }
            None => ChartKind::default(),
        };
        let threshold = params
            .threshold
            .as_deref()
            .and_then(|raw| raw.trim().parse().ok())
            .unwrap_or(0);
        Self {
            url: params.url.unwrap_or_default(),
            chart,
            threshold,
        }
    }
}

impl AnalyzeRequest {
    fn into_messages(self) -> Vec<Msg> {
        vec![
            Msg::ChartSelected(self.chart),
            Msg::ThresholdChanged(self.threshold),
            Msg::InputChanged(self.url),
            Msg::UrlSubmitted,
        ]
    }
}

/// Drive one request-scoped state machine until no effects remain.
async fn analyze(runner: &EffectRunner, request: AnalyzeRequest) -> AppViewModel {
    let mut state = AppState::new();
    let mut inbox: VecDeque<Msg> = request.into_messages().into();
    while let Some(msg) = inbox.pop_front() {
        let (next, effects) = update(state, msg);
        state = next;
        if !effects.is_empty() {
            inbox.extend(runner.run(effects).await);
        }
    }
    state.view()
}

async fn index(
    State(ctx): State<AppContext>,
    Query(params): Query<AnalyzeParams>,
) -> Html<String> {
    let view = analyze(&ctx.runner, params.into()).await;
    let analyzed_at = view
        .analyzed_url
        .as_ref()
        .map(|_| chrono::Utc::now().to_rfc3339());
    let page = ui::render::render(&view, analyzed_at.as_deref()).unwrap_or_else(|err| {
        engine_error!("Failed to render page: {}", err);
        ui::render::RENDER_FAILED_PAGE.to_string()
    });
    Html(page)
}

#[derive(Debug, Serialize)]
struct WordsResponse {
    url: Option<String>,
    error: Option<String>,
    slider: SliderBounds,
    threshold: u32,
    distinct_words: usize,
    total_words: u64,
    words: Vec<RankedEntry>,
}

impl From<AppViewModel> for WordsResponse {
    fn from(view: AppViewModel) -> Self {
        Self {
            error: view.error_message().map(str::to_string),
            url: view.analyzed_url,
            slider: view.slider,
            threshold: view.threshold,
            distinct_words: view.distinct_words,
            total_words: view.total_words,
            words: view.ranked,
        }
    }
}

async fn api_words(
    State(ctx): State<AppContext>,
    Query(params): Query<AnalyzeParams>,
) -> Json<WordsResponse> {
    let view = analyze(&ctx.runner, params.into()).await;
    Json(view.into())
}

async fn healthz() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            engine_warn!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                engine_warn!("Failed to listen for SIGTERM: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    engine_info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wordfreq_core::Status;
    use wordfreq_engine::{
        FailureKind, FetchError, FetchMetadata, FetchOutput, Fetcher, HtmlTextExtractor,
        ProgressSink,
    };

    struct StubFetcher {
        body: Option<&'static str>,
    }

    #[async_trait::async_trait]
    impl Fetcher for StubFetcher {
        async fn fetch(
            &self,
            url: &str,
            _sink: &dyn ProgressSink,
        ) -> Result<FetchOutput, FetchError> {
            let body = self
                .body
                .ok_or_else(|| FetchError::new(FailureKind::HttpStatus(404), "404 Not Found"))?;
            Ok(FetchOutput {
                bytes: body.as_bytes().to_vec(),
                metadata: FetchMetadata {
                    original_url: url.to_string(),
                    final_url: url.to_string(),
                    redirect_count: 0,
                    content_type: Some("text/html; charset=utf-8".to_string()),
                    byte_len: body.len() as u64,
                },
            })
        }
    }

    fn runner(body: Option<&'static str>) -> EffectRunner {
        engine_logging::initialize_for_tests();
        EffectRunner::new(PageTextEngine::with_parts(
            Arc::new(StubFetcher { body }),
            Arc::new(HtmlTextExtractor),
        ))
    }

    fn params(url: &str, chart: &str, threshold: &str) -> AnalyzeParams {
        AnalyzeParams {
            url: Some(url.to_string()),
            chart: Some(chart.to_string()),
            threshold: Some(threshold.to_string()),
        }
    }

    const PAGE: &str = "<html><head><title>Tests</title></head>\
        <body><p>test test hello 2 2 ab</p><script>var ignored = 1;</script></body></html>";

    #[test]
    fn params_fall_back_to_defaults() {
        let request = AnalyzeRequest::from(params(" example.com ", "histogram", "-3"));
        assert_eq!(request.chart, ChartKind::WordCloud);
        assert_eq!(request.threshold, 0);
        assert_eq!(request.url, " example.com ");

        let request = AnalyzeRequest::from(params("", "Pie", "4"));
        assert_eq!(request.chart, ChartKind::Pie);
        assert_eq!(request.threshold, 4);

        assert_eq!(
            AnalyzeRequest::from(AnalyzeParams::default()),
            AnalyzeRequest::default()
        );
    }

    #[tokio::test]
    async fn analyze_counts_words_from_the_page() {
        let view = analyze(
            &runner(Some(PAGE)),
            params("https://example.com/", "bar", "0").into(),
        )
        .await;
        assert_eq!(view.status, Status::Ready);
        assert_eq!(view.page_title.as_deref(), Some("Tests"));
        let words: Vec<(&str, u32)> = view
            .ranked
            .iter()
            .map(|e| (e.token.as_str(), e.count))
            .collect();
        assert_eq!(words, vec![("test", 2), ("Tests", 1), ("hello", 1), ("ab", 1)]);
        assert_eq!(view.slider, SliderBounds { min: 0, max: 2 });
        assert_eq!(view.chart.kind(), ChartKind::TopWordsBar);
    }

    #[tokio::test]
    async fn threshold_filters_and_clamps() {
        let view = analyze(
            &runner(Some(PAGE)),
            params("https://example.com/", "line", "9").into(),
        )
        .await;
        assert_eq!(view.threshold, 2);
        assert_eq!(view.ranked.len(), 1);
        assert_eq!(view.ranked[0].token, "test");
    }

    #[tokio::test]
    async fn failed_fetch_yields_error_and_empty_chart() {
        let view = analyze(&runner(None), params("https://example.com/", "radar", "0").into()).await;
        let error = view.error_message().unwrap_or_default();
        assert!(error.contains("404"), "{error}");
        assert!(view.ranked.is_empty());
        assert!(view.chart.is_empty());
        assert_eq!(view.slider, SliderBounds { min: 0, max: 0 });
    }

    #[tokio::test]
    async fn blank_url_does_not_fetch() {
        let view = analyze(&runner(None), params("   ", "pie", "0").into()).await;
        assert_eq!(view.status, Status::Idle);
        assert_eq!(view.error_message(), None);
    }

    #[tokio::test]
    async fn api_response_lists_ranked_words() {
        let ctx = AppContext {
            runner: Arc::new(runner(Some(PAGE))),
        };
        let Json(response) = api_words(
            State(ctx),
            Query(params("https://example.com/", "wordcloud", "2")),
        )
        .await;
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "url": "https://example.com/",
                "error": null,
                "slider": { "min": 0, "max": 2 },
                "threshold": 2,
                "distinct_words": 4,
                "total_words": 5,
                "words": [{ "token": "test", "count": 2 }],
            })
        );
    }

    #[tokio::test]
    async fn healthz_reports_ok() {
        let Json(body) = healthz().await;
        assert_eq!(body, serde_json::json!({ "status": "ok" }));
    }

    #[tokio::test]
    async fn index_renders_the_analysis() {
        let ctx = AppContext {
            runner: Arc::new(runner(Some(PAGE))),
        };
        let Html(page) = index(
            State(ctx),
            Query(params("https://example.com/", "scatter", "0")),
        )
        .await;
        assert!(page.contains("Word frequency scatter"));
        assert!(page.contains("<option value=\"scatter\" selected>"));
    }
}
