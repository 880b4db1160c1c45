use std::collections::HashMap;

use serde::Serialize;

use crate::tokenize::tokenize;

/// Number of entries kept by [`FrequencyTable::top`] for the top-words chart.
pub const TOP_WORDS_LIMIT: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub token: String,
    pub count: u32,
}

/// Token occurrence counts. Iteration follows first-seen order.
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<RankedEntry>,
    index: HashMap<String, usize>,
}

impl PartialEq for FrequencyTable {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl Eq for FrequencyTable {}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize `text` and count every retained token.
    pub fn from_text(text: &str) -> Self {
        let mut table = Self::new();
        for token in tokenize(text) {
            table.add(token, 1);
        }
        table
    }

    /// Add `count` occurrences of `token`, appending it if unseen.
    pub fn add(&mut self, token: &str, count: u32) {
        if let Some(&idx) = self.index.get(token) {
            let entry = &mut self.entries[idx];
            entry.count = entry.count.saturating_add(count);
            return;
        }
        self.index.insert(token.to_string(), self.entries.len());
        self.entries.push(RankedEntry {
            token: token.to_string(),
            count,
        });
    }

    pub fn get(&self, token: &str) -> Option<u32> {
        self.index.get(token).map(|&idx| self.entries[idx].count)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order.
    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|e| (e.token.as_str(), e.count))
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.count)).sum()
    }

    /// Highest count, or 0 for an empty table.
    pub fn max_count(&self) -> u32 {
        self.entries.iter().map(|e| e.count).max().unwrap_or(0)
    }

    /// New table holding only entries with `count >= threshold`.
    pub fn filter_min_count(&self, threshold: u32) -> Self {
        self.entries
            .iter()
            .filter(|e| e.count >= threshold)
            .map(|e| (e.token.as_str(), e.count))
            .collect()
    }

    /// All entries by count descending; ties keep first-seen order.
    pub fn ranked(&self) -> Vec<RankedEntry> {
        let mut ranked = self.entries.clone();
        // `sort_by` is stable, which is what breaks ties by encounter order.
        ranked.sort_by(|a, b| b.count.cmp(&a.count));
        ranked
    }

    /// The `limit` highest-ranked entries.
    pub fn top(&self, limit: usize) -> Vec<RankedEntry> {
        let mut ranked = self.ranked();
        ranked.truncate(limit);
        ranked
    }

    pub fn slider_bounds(&self) -> SliderBounds {
        SliderBounds {
            min: 0,
            max: self.max_count(),
        }
    }
}

impl<'a> FromIterator<(&'a str, u32)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (&'a str, u32)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (token, count) in iter {
            table.add(token, count);
        }
        table
    }
}

impl From<&[RankedEntry]> for FrequencyTable {
    fn from(entries: &[RankedEntry]) -> Self {
        entries
            .iter()
            .map(|e| (e.token.as_str(), e.count))
            .collect()
    }
}

/// Inclusive range offered by the threshold slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SliderBounds {
    pub min: u32,
    pub max: u32,
}

impl SliderBounds {
    pub fn clamp(&self, value: u32) -> u32 {
        value.clamp(self.min, self.max)
    }
}
