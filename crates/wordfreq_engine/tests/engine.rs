use std::sync::{Arc, Mutex};

use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wordfreq_engine::{
    FailureKind, FetchError, FetchMetadata, FetchOutput, FetchProgress, FetchSettings, Fetcher,
    HtmlTextExtractor, LogProgressSink, PageTextEngine, ProgressSink, Stage,
};

struct StaticFetcher {
    body: &'static [u8],
    content_type: Option<&'static str>,
}

#[async_trait::async_trait]
impl Fetcher for StaticFetcher {
    async fn fetch(&self, url: &str, _sink: &dyn ProgressSink) -> Result<FetchOutput, FetchError> {
        Ok(FetchOutput {
            bytes: self.body.to_vec(),
            metadata: FetchMetadata {
                original_url: url.to_string(),
                final_url: url.to_string(),
                redirect_count: 0,
                content_type: self.content_type.map(str::to_string),
                byte_len: self.body.len() as u64,
            },
        })
    }
}

#[derive(Default)]
struct StageSink {
    stages: Mutex<Vec<Stage>>,
}

impl ProgressSink for StageSink {
    fn emit(&self, progress: FetchProgress) {
        self.stages.lock().unwrap().push(progress.stage);
    }
}

#[tokio::test]
async fn engine_turns_bytes_into_page_text() {
    let fetcher = StaticFetcher {
        body: b"<html><head><title>Hi</title></head><body><p>caf\xe9 time</p></body></html>",
        content_type: Some("text/html; charset=windows-1252"),
    };
    let engine = PageTextEngine::with_parts(Arc::new(fetcher), Arc::new(HtmlTextExtractor));
    let sink = StageSink::default();

    let page = engine.page_text("https://example.com/", &sink).await.unwrap();
    assert_eq!(page.title.as_deref(), Some("Hi"));
    assert_eq!(page.text, "Hi\ncafé time");
    assert_eq!(page.encoding, "windows-1252");
    assert_eq!(page.final_url, "https://example.com/");

    let stages = sink.stages.lock().unwrap().clone();
    assert_eq!(stages, vec![Stage::Decoding, Stage::Extracting, Stage::Done]);
}

#[tokio::test]
async fn engine_fetches_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/article"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            "<html><body><p>test test hello 2 2 ab</p></body></html>",
            "text/html; charset=utf-8",
        ))
        .mount(&server)
        .await;

    let engine = PageTextEngine::new(FetchSettings::default());
    let url = format!("{}/article", server.uri());

    let page = engine.page_text(&url, &LogProgressSink).await.unwrap();
    assert_eq!(page.text, "test test hello 2 2 ab");
    assert_eq!(page.title, None);
}

#[tokio::test]
async fn engine_propagates_fetch_failures() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let engine = PageTextEngine::new(FetchSettings::default());
    let err = engine
        .page_text(&server.uri(), &LogProgressSink)
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::HttpStatus(500));
    assert!(err.to_string().starts_with("http status 500"));
}
