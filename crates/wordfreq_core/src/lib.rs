//! Wordfreq core: tokenizer, frequency table, chart builders and the pure
//! request state machine.
mod chart;
mod effect;
mod frequency;
mod msg;
mod state;
mod tokenize;
mod update;
mod view_model;

pub use chart::{
    boxplot, line, pie, radar, scatter, top_words_bar, word_cloud, BoxplotChart, CategoryChart,
    Chart, ChartKind, ChartKindParseError, FiveNumberSummary, PieChart, PieSlice, RadarChart,
    RadarSeries, ScatterChart, ScatterPoint, WeightedWord, WordCloudChart, RADAR_AXIS_NAME,
    SERIES_NAME, WORD_CLOUD_SIZE_RANGE,
};
pub use effect::Effect;
pub use frequency::{FrequencyTable, RankedEntry, SliderBounds, TOP_WORDS_LIMIT};
pub use msg::Msg;
pub use state::{normalize_url_input, AppState, Status};
pub use tokenize::{is_countable, tokenize, MIN_TOKEN_CHARS};
pub use update::update;
pub use view_model::AppViewModel;
