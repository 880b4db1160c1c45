use std::sync::LazyLock;

use jieba_rs::Jieba;

/// Shortest token, in characters, that is counted.
pub const MIN_TOKEN_CHARS: usize = 2;

// Loading the bundled dictionary is slow; share one segmenter.
static SEGMENTER: LazyLock<Jieba> = LazyLock::new(Jieba::new);

/// Segment `text` with jieba (HMM enabled) and yield only countable tokens.
///
/// Chinese runs become dictionary words; other text splits at whitespace
/// and punctuation, so `can't` yields `can` and `t`.
pub fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    SEGMENTER
        .cut(text, true)
        .into_iter()
        .filter(|segment| is_countable(segment))
}

/// A token counts when it has at least two characters, every character is
/// alphanumeric, and it is not made up of digits alone.
pub fn is_countable(token: &str) -> bool {
    let mut chars = 0usize;
    let mut all_digits = true;
    for c in token.chars() {
        if !c.is_alphanumeric() {
            return false;
        }
        if !is_digit(c) {
            all_digits = false;
        }
        chars += 1;
    }
    chars >= MIN_TOKEN_CHARS && !all_digits
}

/// Decimal and other digit characters (`7`, `٣`, `²`). Numerals that are
/// also letters, such as `二` or `Ⅱ`, do not count as digits.
fn is_digit(c: char) -> bool {
    c.is_numeric() && !c.is_alphabetic()
}
