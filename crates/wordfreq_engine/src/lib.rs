//! Wordfreq engine: fetches pages and reduces them to plain text.
mod decode;
mod engine;
mod extract;
mod fetch;
mod types;

pub use decode::{decode_html, DecodedHtml};
pub use engine::PageTextEngine;
pub use extract::{ExtractedText, HtmlTextExtractor, TextExtractor};
pub use fetch::{FetchSettings, Fetcher, LogProgressSink, ProgressSink, ReqwestFetcher};
pub use types::{
    FailureKind, FetchError, FetchMetadata, FetchOutput, FetchProgress, PageText, Stage,
};
