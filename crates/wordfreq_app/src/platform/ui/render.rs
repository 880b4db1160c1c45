use askama::Html as HtmlEscaper;
use askama::{MarkupDisplay, Template};
use wordfreq_core::{AppViewModel, ChartKind, Status};

use super::chart_options::{chart_option, fixed_width};
use super::constants::*;

type SafeJson = MarkupDisplay<HtmlEscaper, String>;

/// Shown when the page template itself fails to render.
pub const RENDER_FAILED_PAGE: &str =
    "<!DOCTYPE html><html><body><p>Failed to render the page.</p></body></html>";

struct ChartChoice {
    tag: &'static str,
    label: &'static str,
    selected: bool,
}

struct Summary<'a> {
    subject: &'a str,
    distinct_words: usize,
    total_words: u64,
    analyzed_at: Option<&'a str>,
}

struct ChartFrame {
    width: String,
    height: u32,
    option: SafeJson,
}

#[derive(Template)]
#[template(
    source = r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{{ title }}</title>
<script src="{{ echarts_url|safe }}"></script>
<script src="{{ wordcloud_url|safe }}"></script>
</head>
<body>
<h1>{{ title }}</h1>
<form method="get" action="/">
<label>URL <input type="text" name="url" size="60" value="{{ url_input }}"></label>
<label>Chart <select name="chart">
{% for choice in charts %}
<option value="{{ choice.tag }}"{% if choice.selected %} selected{% endif %}>{{ choice.label }}</option>
{% endfor %}
</select></label>
<label>Minimum frequency <input type="range" name="threshold" min="{{ slider_min }}" max="{{ slider_max }}" value="{{ threshold }}" oninput="this.nextElementSibling.value = this.value"><output>{{ threshold }}</output></label>
<button type="submit">Analyze</button>
</form>
{% if let Some(url) = fetching %}
<p class="status">Fetching {{ url }}</p>
{% endif %}
{% if let Some(message) = error %}
<p class="error" style="color:#b00020">{{ message }}</p>
{% endif %}
{% if let Some(summary) = summary %}
<p class="status">{{ summary.subject }}: {{ summary.distinct_words }} distinct words, {{ summary.total_words }} in total{% if let Some(at) = summary.analyzed_at %} (analyzed {{ at }}){% endif %}</p>
{% endif %}
{% if let Some(text) = placeholder %}
<p class="placeholder">{{ text }}</p>
{% endif %}
{% if let Some(frame) = frame %}
<div style="width:100%;height:{{ viewport_height }}px;overflow:auto"><div id="chart" style="width:{{ frame.width }};height:{{ frame.height }}px"></div></div>
<script>
const chart = echarts.init(document.getElementById('chart'));
chart.setOption({{ frame.option|safe }});
window.addEventListener('resize', () => chart.resize());
</script>
{% endif %}
</body>
</html>"#,
    ext = "html"
)]
struct AnalysisPage<'a> {
    title: &'a str,
    echarts_url: &'a str,
    wordcloud_url: &'a str,
    url_input: &'a str,
    charts: Vec<ChartChoice>,
    slider_min: u32,
    slider_max: u32,
    threshold: u32,
    fetching: Option<&'a str>,
    error: Option<&'a str>,
    summary: Option<Summary<'a>>,
    placeholder: Option<&'a str>,
    frame: Option<ChartFrame>,
    viewport_height: u32,
}

impl<'a> AnalysisPage<'a> {
    fn new(view: &'a AppViewModel, analyzed_at: Option<&'a str>) -> Self {
        let charts = ChartKind::ALL
            .into_iter()
            .map(|kind| ChartChoice {
                tag: kind.tag(),
                label: kind.label(),
                selected: kind == view.chart_kind,
            })
            .collect();

        let summary = matches!(view.status, Status::Ready).then(|| Summary {
            subject: view
                .page_title
                .as_deref()
                .or(view.analyzed_url.as_deref())
                .unwrap_or_default(),
            distinct_words: view.distinct_words,
            total_words: view.total_words,
            analyzed_at,
        });

        let has_result = matches!(view.status, Status::Ready | Status::Failed { .. });
        let placeholder = (has_result && view.chart.is_empty()).then_some(EMPTY_CHART_TEXT);
        let frame = (has_result && !view.chart.is_empty()).then(|| chart_frame(view));

        Self {
            title: PAGE_TITLE,
            echarts_url: ECHARTS_SCRIPT_URL,
            wordcloud_url: WORDCLOUD_SCRIPT_URL,
            url_input: &view.url_input,
            charts,
            slider_min: view.slider.min,
            slider_max: view.slider.max,
            threshold: view.threshold,
            fetching: match &view.status {
                Status::Fetching { url } => Some(url.as_str()),
                _ => None,
            },
            error: view.error_message(),
            summary,
            placeholder,
            frame,
            viewport_height: CHART_HEIGHT_PX,
        }
    }
}

fn chart_frame(view: &AppViewModel) -> ChartFrame {
    let fixed = fixed_width(&view.chart);
    ChartFrame {
        width: fixed
            .map(|px| format!("{px}px"))
            .unwrap_or_else(|| "100%".to_string()),
        height: fixed.unwrap_or(CHART_HEIGHT_PX),
        option: MarkupDisplay::new_safe(
            script_safe_json(&chart_option(&view.chart).to_string()),
            HtmlEscaper,
        ),
    }
}

/// Render the full page for `view`. `analyzed_at` is shown next to a
/// finished analysis.
pub fn render(view: &AppViewModel, analyzed_at: Option<&str>) -> askama::Result<String> {
    AnalysisPage::new(view, analyzed_at).render()
}

/// Keep embedded JSON from closing the surrounding script element.
fn script_safe_json(json: &str) -> String {
    json.replace("</", "<\\/")
}
