//! Page text, dimensions and script locations used by the renderer.

pub const PAGE_TITLE: &str = "Word frequency analysis";

/// Height of the chart viewport; the width follows the page.
pub const CHART_HEIGHT_PX: u32 = 600;
/// The radar is drawn on a fixed square canvas inside the viewport.
pub const RADAR_SIZE_PX: u32 = 800;
pub const RADAR_BACKGROUND: &str = "#ffffff";

pub const ECHARTS_SCRIPT_URL: &str = "https://cdn.jsdelivr.net/npm/echarts@5/dist/echarts.min.js";
pub const WORDCLOUD_SCRIPT_URL: &str =
    "https://cdn.jsdelivr.net/npm/echarts-wordcloud@2/dist/echarts-wordcloud.min.js";

pub const EMPTY_CHART_TEXT: &str = "No words to display.";
