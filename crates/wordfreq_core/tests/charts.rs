use pretty_assertions::assert_eq;
use wordfreq_core::{
    boxplot, line, pie, radar, scatter, top_words_bar, word_cloud, Chart, ChartKind,
    FrequencyTable, RADAR_AXIS_NAME, TOP_WORDS_LIMIT, WORD_CLOUD_SIZE_RANGE,
};

fn sample() -> FrequencyTable {
    [("test", 2), ("hello", 1), ("ab", 1), ("rust", 4)]
        .into_iter()
        .collect()
}

#[test]
fn every_chart_kind_builds_from_an_empty_table() {
    let empty = FrequencyTable::new();
    for kind in ChartKind::ALL {
        let chart = kind.build(&empty);
        assert_eq!(chart.kind(), kind);
        assert!(chart.is_empty(), "{kind} should be empty");
    }
}

#[test]
fn every_chart_kind_builds_from_a_populated_table() {
    let table = sample();
    for kind in ChartKind::ALL {
        let chart = kind.build(&table);
        assert_eq!(chart.kind(), kind);
        assert!(!chart.is_empty(), "{kind} should have data");
    }
}

#[test]
fn chart_tags_round_trip_through_parsing() {
    for kind in ChartKind::ALL {
        assert_eq!(kind.tag().parse::<ChartKind>().unwrap(), kind);
    }
    assert_eq!(" PIE ".parse::<ChartKind>().unwrap(), ChartKind::Pie);
    assert!("histogram".parse::<ChartKind>().is_err());
}

#[test]
fn word_cloud_keeps_encounter_order_and_size_range() {
    let cloud = word_cloud(&sample());
    let words: Vec<_> = cloud.words.iter().map(|w| (w.token.as_str(), w.weight)).collect();
    assert_eq!(words, vec![("test", 2), ("hello", 1), ("ab", 1), ("rust", 4)]);
    assert_eq!(cloud.size_range, WORD_CLOUD_SIZE_RANGE);
}

#[test]
fn bar_chart_shows_top_twenty_by_rank() {
    let text: String = (0..25).map(|i| format!("w{i} ").repeat(i + 1)).collect();
    let bar = top_words_bar(&FrequencyTable::from_text(&text));
    assert_eq!(bar.categories.len(), TOP_WORDS_LIMIT);
    assert_eq!(bar.values.len(), TOP_WORDS_LIMIT);
    assert_eq!(bar.categories[0], "w24");
    assert_eq!(bar.values[0], 25);
    assert_eq!(bar.categories[19], "w5");
}

#[test]
fn line_chart_ranks_without_truncating() {
    let chart = line(&sample());
    assert_eq!(chart.categories, vec!["rust", "test", "hello", "ab"]);
    assert_eq!(chart.values, vec![4, 2, 1, 1]);
}

#[test]
fn pie_shares_sum_to_one() {
    let chart = pie(&sample());
    assert_eq!(chart.slices.len(), 4);
    let total: f64 = chart.slices.iter().map(|s| s.share).sum();
    assert!((total - 1.0).abs() < 1e-9);
    assert_eq!(chart.slices[3].token, "rust");
    assert!((chart.slices[3].share - 0.5).abs() < 1e-9);
}

#[test]
fn boxplot_summarises_all_counts() {
    let summary = boxplot(&sample()).summary.unwrap();
    // Sorted counts: 1, 1, 2, 4.
    assert_eq!(summary.as_array(), [1.0, 1.0, 1.5, 3.5, 4.0]);
}

#[test]
fn scatter_keeps_index_count_and_label() {
    let chart = scatter(&sample());
    let points: Vec<_> = chart
        .points
        .iter()
        .map(|p| (p.index, p.count, p.label.as_str()))
        .collect();
    assert_eq!(
        points,
        vec![(0, 2, "test"), (1, 1, "hello"), (2, 1, "ab"), (3, 4, "rust")]
    );
}

#[test]
fn radar_has_one_axis_and_series_spread_evenly() {
    let chart = radar(&sample());
    assert_eq!(chart.axis_name, RADAR_AXIS_NAME);
    assert_eq!(chart.axis_max, 4);
    assert_eq!(chart.series.len(), 4);
    assert_eq!(chart.series[0].name, "test");
    assert_eq!(chart.series[0].value, 2);
    assert_eq!(chart.angle_of(0), 0.0);
    assert_eq!(chart.angle_of(1), 90.0);
    assert_eq!(chart.angle_of(3), 270.0);
}

#[test]
fn radar_axis_max_is_guarded_for_empty_tables() {
    let chart = radar(&FrequencyTable::new());
    assert_eq!(chart.axis_max, 1);
    assert!(chart.series.is_empty());
    assert_eq!(chart.angle_of(0), 0.0);
}

#[test]
fn builders_do_not_mutate_their_input() {
    let table = sample();
    let before = table.clone();
    for kind in ChartKind::ALL {
        let _ = kind.build(&table);
    }
    assert_eq!(table, before);
}

#[test]
fn titles_are_present_except_for_the_word_cloud() {
    let table = sample();
    for kind in ChartKind::ALL {
        let chart = kind.build(&table);
        match &chart {
            Chart::WordCloud(_) => assert!(chart.title().is_none()),
            _ => assert!(chart.title().is_some()),
        }
    }
}
