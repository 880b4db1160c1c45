//! Chart builders: pure transforms from a frequency table to display-ready
//! chart structures. Every builder accepts an empty table and returns an
//! empty chart.
use std::fmt;
use std::str::FromStr;

use crate::frequency::{FrequencyTable, RankedEntry, TOP_WORDS_LIMIT};

/// Word sizes, in pixels, used by the word cloud.
pub const WORD_CLOUD_SIZE_RANGE: (u32, u32) = (20, 100);

/// Name of the single radar axis.
pub const RADAR_AXIS_NAME: &str = "frequency";

/// Series name used for count-valued axes.
pub const SERIES_NAME: &str = "Word frequency";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChartKind {
    #[default]
    WordCloud,
    TopWordsBar,
    Line,
    Pie,
    Boxplot,
    Scatter,
    Radar,
}

impl ChartKind {
    pub const ALL: [ChartKind; 7] = [
        ChartKind::WordCloud,
        ChartKind::TopWordsBar,
        ChartKind::Line,
        ChartKind::Pie,
        ChartKind::Boxplot,
        ChartKind::Scatter,
        ChartKind::Radar,
    ];

    /// Stable tag used in URLs and forms.
    pub fn tag(self) -> &'static str {
        match self {
            ChartKind::WordCloud => "wordcloud",
            ChartKind::TopWordsBar => "bar",
            ChartKind::Line => "line",
            ChartKind::Pie => "pie",
            ChartKind::Boxplot => "boxplot",
            ChartKind::Scatter => "scatter",
            ChartKind::Radar => "radar",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChartKind::WordCloud => "Word cloud",
            ChartKind::TopWordsBar => "Top 20 words (bar)",
            ChartKind::Line => "Line chart",
            ChartKind::Pie => "Pie chart",
            ChartKind::Boxplot => "Box plot",
            ChartKind::Scatter => "Scatter plot",
            ChartKind::Radar => "Radar chart",
        }
    }

    pub fn builder(self) -> fn(&FrequencyTable) -> Chart {
        match self {
            ChartKind::WordCloud => build_word_cloud,
            ChartKind::TopWordsBar => build_top_words_bar,
            ChartKind::Line => build_line,
            ChartKind::Pie => build_pie,
            ChartKind::Boxplot => build_boxplot,
            ChartKind::Scatter => build_scatter,
            ChartKind::Radar => build_radar,
        }
    }

    pub fn build(self, table: &FrequencyTable) -> Chart {
        (self.builder())(table)
    }
}

fn build_word_cloud(table: &FrequencyTable) -> Chart {
    Chart::WordCloud(word_cloud(table))
}

fn build_top_words_bar(table: &FrequencyTable) -> Chart {
    Chart::Bar(top_words_bar(table))
}

fn build_line(table: &FrequencyTable) -> Chart {
    Chart::Line(line(table))
}

fn build_pie(table: &FrequencyTable) -> Chart {
    Chart::Pie(pie(table))
}

fn build_boxplot(table: &FrequencyTable) -> Chart {
    Chart::Boxplot(boxplot(table))
}

fn build_scatter(table: &FrequencyTable) -> Chart {
    Chart::Scatter(scatter(table))
}

fn build_radar(table: &FrequencyTable) -> Chart {
    Chart::Radar(radar(table))
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown chart type {0:?}")]
pub struct ChartKindParseError(pub String);

impl FromStr for ChartKind {
    type Err = ChartKindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ChartKind::ALL
            .into_iter()
            .find(|kind| kind.tag().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ChartKindParseError(s.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Chart {
    WordCloud(WordCloudChart),
    Bar(CategoryChart),
    Line(CategoryChart),
    Pie(PieChart),
    Boxplot(BoxplotChart),
    Scatter(ScatterChart),
    Radar(RadarChart),
}

impl Chart {
    pub fn kind(&self) -> ChartKind {
        match self {
            Chart::WordCloud(_) => ChartKind::WordCloud,
            Chart::Bar(_) => ChartKind::TopWordsBar,
            Chart::Line(_) => ChartKind::Line,
            Chart::Pie(_) => ChartKind::Pie,
            Chart::Boxplot(_) => ChartKind::Boxplot,
            Chart::Scatter(_) => ChartKind::Scatter,
            Chart::Radar(_) => ChartKind::Radar,
        }
    }

    /// Whether there is nothing to plot; the UI shows a placeholder instead.
    pub fn is_empty(&self) -> bool {
        match self {
            Chart::WordCloud(c) => c.words.is_empty(),
            Chart::Bar(c) | Chart::Line(c) => c.categories.is_empty(),
            Chart::Pie(c) => c.slices.is_empty(),
            Chart::Boxplot(c) => c.summary.is_none(),
            Chart::Scatter(c) => c.points.is_empty(),
            Chart::Radar(c) => c.series.is_empty(),
        }
    }

    pub fn title(&self) -> Option<&str> {
        match self {
            Chart::WordCloud(_) => None,
            Chart::Bar(c) | Chart::Line(c) => Some(c.title),
            Chart::Pie(c) => Some(c.title),
            Chart::Boxplot(c) => Some(c.title),
            Chart::Scatter(c) => Some(c.title),
            Chart::Radar(c) => Some(c.title),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeightedWord {
    pub token: String,
    pub weight: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCloudChart {
    pub words: Vec<WeightedWord>,
    pub size_range: (u32, u32),
}

/// Parallel category/value arrays, ordered by rank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryChart {
    pub title: &'static str,
    pub series_name: &'static str,
    pub categories: Vec<String>,
    pub values: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub token: String,
    pub count: u32,
    /// Share of the total, in `0.0..=1.0`.
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PieChart {
    pub title: &'static str,
    pub slices: Vec<PieSlice>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FiveNumberSummary {
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl FiveNumberSummary {
    /// Summary of `values`, or `None` when empty.
    pub fn from_counts(values: &[u32]) -> Option<Self> {
        let mut sorted = values.to_vec();
        sorted.sort_unstable();
        let first = *sorted.first()?;
        let last = *sorted.last()?;
        Some(Self {
            min: f64::from(first),
            q1: quartile(&sorted, 1),
            median: quartile(&sorted, 2),
            q3: quartile(&sorted, 3),
            max: f64::from(last),
        })
    }

    pub fn as_array(&self) -> [f64; 5] {
        [self.min, self.q1, self.median, self.q3, self.max]
    }
}

/// Linear interpolation at 1-based position `q * (n + 1) / 4`, clamped to the
/// sample. `sorted` must be non-empty.
fn quartile(sorted: &[u32], q: u32) -> f64 {
    let n = sorted.len();
    let pos = (f64::from(q) * (n as f64 + 1.0) / 4.0).clamp(1.0, n as f64);
    let lower = pos.floor() as usize;
    let frac = pos - lower as f64;
    let low = f64::from(sorted[lower - 1]);
    if lower >= n || frac == 0.0 {
        return low;
    }
    let high = f64::from(sorted[lower]);
    low + (high - low) * frac
}

#[derive(Debug, Clone, PartialEq)]
pub struct BoxplotChart {
    pub title: &'static str,
    pub series_name: &'static str,
    pub summary: Option<FiveNumberSummary>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScatterPoint {
    pub index: usize,
    pub count: u32,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScatterChart {
    pub title: &'static str,
    pub series_name: &'static str,
    pub points: Vec<ScatterPoint>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadarSeries {
    pub name: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadarChart {
    pub title: &'static str,
    pub axis_name: &'static str,
    /// Never below 1, so an empty chart still has a drawable axis.
    pub axis_max: u32,
    pub series: Vec<RadarSeries>,
}

impl RadarChart {
    /// Angle in degrees at which series `index` is drawn; series are spread
    /// evenly around the circle.
    pub fn angle_of(&self, index: usize) -> f64 {
        if self.series.is_empty() {
            return 0.0;
        }
        360.0 * index as f64 / self.series.len() as f64
    }
}

pub fn word_cloud(table: &FrequencyTable) -> WordCloudChart {
    WordCloudChart {
        words: table
            .iter()
            .map(|(token, count)| WeightedWord {
                token: token.to_string(),
                weight: count,
            })
            .collect(),
        size_range: WORD_CLOUD_SIZE_RANGE,
    }
}

pub fn top_words_bar(table: &FrequencyTable) -> CategoryChart {
    category_chart("Top 20 words by frequency", table.top(TOP_WORDS_LIMIT))
}

pub fn line(table: &FrequencyTable) -> CategoryChart {
    category_chart("Word frequency trend", table.ranked())
}

fn category_chart(title: &'static str, ranked: Vec<RankedEntry>) -> CategoryChart {
    let (categories, values) = ranked.into_iter().map(|e| (e.token, e.count)).unzip();
    CategoryChart {
        title,
        series_name: SERIES_NAME,
        categories,
        values,
    }
}

pub fn pie(table: &FrequencyTable) -> PieChart {
    let total = table.total();
    let slices = table
        .iter()
        .map(|(token, count)| PieSlice {
            token: token.to_string(),
            count,
            share: if total == 0 {
                0.0
            } else {
                f64::from(count) / total as f64
            },
        })
        .collect();
    PieChart {
        title: "Word frequency share",
        slices,
    }
}

pub fn boxplot(table: &FrequencyTable) -> BoxplotChart {
    let counts: Vec<u32> = table.iter().map(|(_, count)| count).collect();
    BoxplotChart {
        title: "Word frequency box plot",
        series_name: SERIES_NAME,
        summary: FiveNumberSummary::from_counts(&counts),
    }
}

pub fn scatter(table: &FrequencyTable) -> ScatterChart {
    ScatterChart {
        title: "Word frequency scatter",
        series_name: SERIES_NAME,
        points: table
            .iter()
            .enumerate()
            .map(|(index, (token, count))| ScatterPoint {
                index,
                count,
                label: token.to_string(),
            })
            .collect(),
    }
}

pub fn radar(table: &FrequencyTable) -> RadarChart {
    RadarChart {
        title: "Word frequency radar",
        axis_name: RADAR_AXIS_NAME,
        axis_max: table.max_count().max(1),
        series: table
            .iter()
            .map(|(token, count)| RadarSeries {
                name: token.to_string(),
                value: count,
            })
            .collect(),
    }
}
