//! Inline Markdown for body text.
//!
//! Only inline markup is honoured. Text that happens to start with a block
//! marker ("1.", "-", "#", ">") stays literal instead of becoming a list,
//! heading or quote.

use pulldown_cmark::{Event, Parser, Tag, TagEnd};
use serde::Serialize;

/// A run of text with uniform styling.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Span {
    pub text: String,
    #[serde(skip_serializing_if = "is_false")]
    pub strong: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub emphasis: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub code: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn is_false(value: &bool) -> bool {
    !*value
}

impl Span {
    /// An unstyled span.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    fn same_style(&self, other: &Span) -> bool {
        self.strong == other.strong
            && self.emphasis == other.emphasis
            && self.code == other.code
            && self.link == other.link
    }
}

/// Renders inline Markdown into styled spans.
#[must_use]
pub fn inline(text: &str) -> Vec<Span> {
    let source = escape_block_markers(text);
    let mut spans: Vec<Span> = Vec::new();
    let mut strong = 0_u32;
    let mut emphasis = 0_u32;
    let mut links: Vec<String> = Vec::new();
    let mut paragraphs = 0_u32;

    for event in Parser::new(&source) {
        let style = Span {
            text: String::new(),
            strong: strong > 0,
            emphasis: emphasis > 0,
            code: false,
            link: links.last().cloned(),
        };
        let piece = match event {
            Event::Start(Tag::Strong) => {
                strong += 1;
                continue;
            }
            Event::End(TagEnd::Strong) => {
                strong = strong.saturating_sub(1);
                continue;
            }
            Event::Start(Tag::Emphasis) => {
                emphasis += 1;
                continue;
            }
            Event::End(TagEnd::Emphasis) => {
                emphasis = emphasis.saturating_sub(1);
                continue;
            }
            Event::Start(Tag::Link { dest_url, .. }) => {
                links.push(dest_url.into_string());
                continue;
            }
            Event::End(TagEnd::Link) => {
                links.pop();
                continue;
            }
            Event::Start(Tag::Paragraph) => {
                paragraphs += 1;
                if paragraphs > 1 {
                    Span {
                        text: "\n\n".to_owned(),
                        ..style
                    }
                } else {
                    continue;
                }
            }
            Event::Text(text) | Event::Html(text) | Event::InlineHtml(text) => Span {
                text: text.into_string(),
                ..style
            },
            Event::Code(text) => Span {
                text: text.into_string(),
                code: true,
                ..style
            },
            Event::SoftBreak => Span {
                text: " ".to_owned(),
                ..style
            },
            Event::HardBreak => Span {
                text: "\n".to_owned(),
                ..style
            },
            _ => continue,
        };
        push_merged(&mut spans, piece);
    }
    spans
}

/// Concatenated text of a span list, without styling.
#[must_use]
pub fn plain_text(spans: &[Span]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}

fn push_merged(spans: &mut Vec<Span>, piece: Span) {
    match spans.last_mut() {
        Some(last) if last.same_style(&piece) => last.text.push_str(&piece.text),
        _ => spans.push(piece),
    }
}

fn escape_block_markers(text: &str) -> String {
    text.lines()
        .map(escape_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn escape_line(line: &str) -> String {
    let body = line.trim_start();
    let mut chars = body.chars();
    let Some(first) = chars.next() else {
        return String::new();
    };
    let second = chars.next();

    let marker_at = match first {
        '#' | '>' | '=' => Some(0),
        '-' | '+' | '*' if second.is_none_or(|c| c.is_whitespace() || c == first) => {
            // "**strong**" opens emphasis, not a list or a rule.
            if first == '*' && second == Some('*') {
                None
            } else {
                Some(0)
            }
        }
        '`' | '~' if body.starts_with("```") || body.starts_with("~~~") => Some(0),
        c if c.is_ascii_digit() => ordered_marker(body),
        _ => None,
    };

    match marker_at {
        Some(at) => format!("{}\\{}", &body[..at], &body[at..]),
        None => body.to_owned(),
    }
}

/// Byte offset of the `.` or `)` in an ordered-list marker such as "12. ".
fn ordered_marker(body: &str) -> Option<usize> {
    let digits = body.bytes().take_while(u8::is_ascii_digit).count();
    if digits == 0 || digits > 9 {
        return None;
    }
    let rest = &body[digits..];
    let mut rest_chars = rest.chars();
    match (rest_chars.next(), rest_chars.next()) {
        (Some('.' | ')'), None) => Some(digits),
        (Some('.' | ')'), Some(c)) if c.is_whitespace() => Some(digits),
        _ => None,
    }
}
