use std::sync::Arc;

use engine_logging::{engine_info, engine_warn};

use crate::decode::decode_html;
use crate::extract::{HtmlTextExtractor, TextExtractor};
use crate::fetch::{FetchSettings, Fetcher, ProgressSink, ReqwestFetcher};
use crate::{FetchError, FetchProgress, PageText, Stage};

/// Runs fetch -> decode -> extract for one URL.
#[derive(Clone)]
pub struct PageTextEngine {
    fetcher: Arc<dyn Fetcher>,
    extractor: Arc<dyn TextExtractor>,
}

impl PageTextEngine {
    pub fn new(settings: FetchSettings) -> Self {
        Self::with_parts(
            Arc::new(ReqwestFetcher::new(settings)),
            Arc::new(HtmlTextExtractor),
        )
    }

    pub fn with_parts(fetcher: Arc<dyn Fetcher>, extractor: Arc<dyn TextExtractor>) -> Self {
        Self { fetcher, extractor }
    }

    pub async fn page_text(
        &self,
        url: &str,
        sink: &dyn ProgressSink,
    ) -> Result<PageText, FetchError> {
        let output = self.fetcher.fetch(url, sink).await?;
        let metadata = output.metadata;

        sink.emit(FetchProgress {
            url: url.to_string(),
            stage: Stage::Decoding,
            bytes: Some(metadata.byte_len),
        });
        let decoded = decode_html(&output.bytes, metadata.content_type.as_deref());
        if decoded.had_errors {
            engine_warn!(
                "Malformed {} bytes in {}; replaced invalid sequences",
                decoded.encoding_label,
                metadata.final_url
            );
        }

        sink.emit(FetchProgress {
            url: url.to_string(),
            stage: Stage::Extracting,
            bytes: None,
        });
        let extracted = self.extractor.extract(&decoded.html);

        sink.emit(FetchProgress {
            url: url.to_string(),
            stage: Stage::Done,
            bytes: None,
        });
        engine_info!(
            "Fetched {} ({} bytes, {}, {} redirects)",
            metadata.final_url,
            metadata.byte_len,
            decoded.encoding_label,
            metadata.redirect_count
        );

        Ok(PageText {
            text: extracted.text,
            title: extracted.title,
            final_url: metadata.final_url,
            encoding: decoded.encoding_label,
            byte_len: metadata.byte_len,
        })
    }
}
