//! Translates core chart structures into ECharts option objects.
use serde_json::{json, Value};
use wordfreq_core::{
    BoxplotChart, CategoryChart, Chart, PieChart, RadarChart, ScatterChart, WordCloudChart,
};

use super::constants::{RADAR_BACKGROUND, RADAR_SIZE_PX};

pub fn chart_option(chart: &Chart) -> Value {
    match chart {
        Chart::WordCloud(c) => word_cloud_option(c),
        Chart::Bar(c) => category_option(c, "bar"),
        Chart::Line(c) => category_option(c, "line"),
        Chart::Pie(c) => pie_option(c),
        Chart::Boxplot(c) => boxplot_option(c),
        Chart::Scatter(c) => scatter_option(c),
        Chart::Radar(c) => radar_option(c),
    }
}

/// Canvas width in pixels, when the chart is not drawn at page width.
pub fn fixed_width(chart: &Chart) -> Option<u32> {
    match chart {
        Chart::Radar(_) => Some(RADAR_SIZE_PX),
        _ => None,
    }
}

fn title(text: &str) -> Value {
    json!({ "text": text, "left": "center" })
}

fn word_cloud_option(chart: &WordCloudChart) -> Value {
    let data: Vec<Value> = chart
        .words
        .iter()
        .map(|w| json!({ "name": w.token, "value": w.weight }))
        .collect();
    json!({
        "tooltip": { "show": true },
        "series": [{
            "type": "wordCloud",
            "shape": "circle",
            "sizeRange": [chart.size_range.0, chart.size_range.1],
            "width": "100%",
            "height": "100%",
            "data": data,
        }],
    })
}

fn category_option(chart: &CategoryChart, series_type: &str) -> Value {
    json!({
        "title": title(chart.title),
        "tooltip": { "trigger": "axis" },
        "xAxis": {
            "type": "category",
            "data": chart.categories,
            "axisLabel": { "rotate": 45, "interval": 0 },
        },
        "yAxis": { "type": "value" },
        "series": [{
            "name": chart.series_name,
            "type": series_type,
            "data": chart.values,
        }],
    })
}

fn pie_option(chart: &PieChart) -> Value {
    let data: Vec<Value> = chart
        .slices
        .iter()
        .map(|s| json!({ "name": s.token, "value": s.count }))
        .collect();
    json!({
        "title": title(chart.title),
        "tooltip": { "trigger": "item", "formatter": "{b}: {c} ({d}%)" },
        "series": [{
            "type": "pie",
            "radius": "60%",
            "data": data,
        }],
    })
}

fn boxplot_option(chart: &BoxplotChart) -> Value {
    let data: Vec<[f64; 5]> = chart.summary.iter().map(|s| s.as_array()).collect();
    json!({
        "title": title(chart.title),
        "tooltip": { "trigger": "item" },
        "xAxis": { "type": "category", "data": [chart.series_name] },
        "yAxis": { "type": "value" },
        "series": [{
            "name": chart.series_name,
            "type": "boxplot",
            "data": data,
        }],
    })
}

// The point name is what the item tooltip shows on hover.
fn scatter_option(chart: &ScatterChart) -> Value {
    let data: Vec<Value> = chart
        .points
        .iter()
        .map(|p| json!({ "name": p.label, "value": [p.index, p.count] }))
        .collect();
    json!({
        "title": title(chart.title),
        "tooltip": { "trigger": "item", "formatter": "{b}: {c}" },
        "xAxis": { "type": "value", "name": "index" },
        "yAxis": { "type": "value", "name": "count" },
        "series": [{
            "name": chart.series_name,
            "type": "scatter",
            "data": data,
        }],
    })
}

/// One polar series per token at an evenly spaced angle, with the single
/// "frequency" axis as the radius.
fn radar_option(chart: &RadarChart) -> Value {
    let series: Vec<Value> = chart
        .series
        .iter()
        .enumerate()
        .map(|(index, s)| {
            json!({
                "name": s.name,
                "type": "scatter",
                "coordinateSystem": "polar",
                "symbolSize": 10,
                "data": [[s.value, chart.angle_of(index)]],
            })
        })
        .collect();
    json!({
        "backgroundColor": RADAR_BACKGROUND,
        "title": title(chart.title),
        "tooltip": { "trigger": "item", "formatter": "{a}: {c}" },
        "polar": { "radius": "70%" },
        "angleAxis": {
            "type": "value",
            "min": 0,
            "max": 360,
            "startAngle": 90,
            "axisLabel": { "show": false },
        },
        "radiusAxis": {
            "name": chart.axis_name,
            "min": 0,
            "max": chart.axis_max,
        },
        "series": series,
    })
}
