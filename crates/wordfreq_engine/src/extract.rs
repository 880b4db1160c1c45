use ego_tree::iter::Edge;
use scraper::node::Node;
use scraper::{Html, Selector};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    pub title: Option<String>,
    pub text: String,
}

pub trait TextExtractor: Send + Sync {
    fn extract(&self, html: &str) -> ExtractedText;
}

/// Strips markup from a whole document:
/// - collects every text node in document order, `<title>` included
/// - skips scripting and template subtrees
/// - breaks lines around block elements so neighbouring blocks never merge
///   into one word.
#[derive(Debug, Default, Clone, Copy)]
pub struct HtmlTextExtractor;

impl TextExtractor for HtmlTextExtractor {
    fn extract(&self, html: &str) -> ExtractedText {
        let doc = Html::parse_document(html);
        let title = Selector::parse("title")
            .ok()
            .as_ref()
            .and_then(|sel| doc.select(sel).next())
            .map(|t| collapse_whitespace(&t.text().collect::<String>()))
            .filter(|t| !t.is_empty());

        ExtractedText {
            title,
            text: collect_text(&doc),
        }
    }
}

/// Walks the tree with open/close edges so arbitrarily deep documents never
/// grow the call stack.
fn collect_text(doc: &Html) -> String {
    let mut out = TextBuilder::default();
    // Nesting depth inside a skipped subtree; 0 when not skipping.
    let mut skip_depth = 0usize;
    for edge in doc.tree.root().traverse() {
        match edge {
            Edge::Open(node) => {
                if skip_depth > 0 {
                    skip_depth += 1;
                    continue;
                }
                match node.value() {
                    Node::Text(text) => out.append_text(text),
                    Node::Element(element) => {
                        let name = element.name();
                        if is_skipped(name) {
                            skip_depth = 1;
                        } else if name.eq_ignore_ascii_case("br") || is_block(name) {
                            out.ensure_newline();
                        }
                    }
                    _ => {}
                }
            }
            Edge::Close(node) => {
                if skip_depth > 0 {
                    skip_depth -= 1;
                    continue;
                }
                if let Node::Element(element) = node.value() {
                    if is_block(element.name()) {
                        out.ensure_newline();
                    }
                }
            }
        }
    }
    out.finish()
}

fn is_skipped(tag: &str) -> bool {
    ["script", "style", "noscript", "iframe", "template"]
        .iter()
        .any(|t| t.eq_ignore_ascii_case(tag))
}

fn is_block(tag: &str) -> bool {
    const BLOCKS: &[&str] = &[
        "address", "article", "aside", "blockquote", "body", "dd", "div", "dl", "dt",
        "figcaption", "figure", "footer", "form", "h1", "h2", "h3", "h4", "h5", "h6", "head",
        "header", "hr", "li", "main", "nav", "ol", "p", "pre", "section", "table", "td", "th",
        "title", "tr", "ul",
    ];
    BLOCKS.iter().any(|b| b.eq_ignore_ascii_case(tag))
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[derive(Default)]
struct TextBuilder {
    buf: String,
    last_char: Option<char>,
}

impl TextBuilder {
    fn append_text(&mut self, text: &str) {
        for ch in text.chars() {
            if ch.is_whitespace() {
                if self.buf.is_empty() || matches!(self.last_char, Some(' ' | '\n')) {
                    continue;
                }
                self.push_char(' ');
            } else {
                self.push_char(ch);
            }
        }
    }

    fn ensure_newline(&mut self) {
        match self.last_char {
            None | Some('\n') => {}
            Some(' ') => {
                self.buf.pop();
                self.push_char('\n');
            }
            Some(_) => self.push_char('\n'),
        }
    }

    fn push_char(&mut self, ch: char) {
        self.buf.push(ch);
        self.last_char = Some(ch);
    }

    fn finish(self) -> String {
        self.buf.trim().to_string()
    }
}
