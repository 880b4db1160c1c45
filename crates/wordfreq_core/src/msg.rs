use crate::ChartKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User edited the URL input box.
    InputChanged(String),
    /// User submitted the current URL input for analysis.
    UrlSubmitted,
    /// User picked a chart type.
    ChartSelected(ChartKind),
    /// User moved the frequency-threshold slider.
    ThresholdChanged(u32),
    /// Engine returned the plain text of a page.
    PageFetched {
        url: String,
        text: String,
        title: Option<String>,
    },
    /// Engine failed to fetch a page; the message is shown to the user.
    FetchFailed { url: String, message: String },
}
