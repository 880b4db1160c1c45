#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Fetch the page and report back with `Msg::PageFetched` or `Msg::FetchFailed`.
    FetchUrl { url: String },
}
