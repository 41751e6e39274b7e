//! Styled spans → ratatui `Text`.
//!
//! The content renderer produces a flat, ordered list of [`StyledSpan`]s.
//! Line breaks live inside span text (separators are `"\n\n"`), so the
//! conversion here splits on `\n` while keeping each fragment's style.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanStyle {
    Title,
    Text,
    Strong,
    Emphasis,
    /// Highlighted code token, coloured by the highlighter's theme.
    Code(Color),
    Plain,
}

impl SpanStyle {
    pub fn to_style(self) -> Style {
        match self {
            SpanStyle::Title => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            SpanStyle::Text => Style::default(),
            SpanStyle::Strong => Style::default().add_modifier(Modifier::BOLD),
            SpanStyle::Emphasis => Style::default().add_modifier(Modifier::ITALIC),
            SpanStyle::Code(fg) => Style::default().fg(fg),
            SpanStyle::Plain => Style::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyledSpan {
    pub text: String,
    pub style: SpanStyle,
}

impl StyledSpan {
    pub fn new(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, SpanStyle::Plain)
    }
}

/// Concatenate spans into lines. Every `\n` starts a new line; tabs become
/// four spaces since ratatui renders `\t` as zero-width.
pub fn to_text(spans: &[StyledSpan]) -> Text<'static> {
    let mut lines: Vec<Line<'static>> = vec![Line::default()];
    for span in spans {
        let style = span.style.to_style();
        for (i, fragment) in span.text.split('\n').enumerate() {
            if i > 0 {
                lines.push(Line::default());
            }
            if fragment.is_empty() {
                continue;
            }
            let content = fragment.replace('\t', "    ");
            if let Some(line) = lines.last_mut() {
                line.push_span(Span::styled(content, style));
            }
        }
    }
    Text::from(lines)
}

/// Plain concatenation of span text, mostly useful for logging and tests.
pub fn plain_text(spans: &[StyledSpan]) -> String {
    spans.iter().map(|s| s.text.as_str()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_separator_produces_blank_line() {
        let spans = vec![
            StyledSpan::new("T", SpanStyle::Title),
            StyledSpan::plain("\n\n"),
            StyledSpan::new("A", SpanStyle::Text),
        ];
        let text = to_text(&spans);
        assert_eq!(text.lines.len(), 3);
        assert_eq!(text.lines[0].spans[0].content, "T");
        assert!(text.lines[1].spans.is_empty());
        assert_eq!(text.lines[2].spans[0].content, "A");
    }

    #[test]
    fn test_inline_spans_share_a_line() {
        let spans = vec![
            StyledSpan::new("plain ", SpanStyle::Text),
            StyledSpan::new("bold", SpanStyle::Strong),
        ];
        let text = to_text(&spans);
        assert_eq!(text.lines.len(), 1);
        assert_eq!(text.lines[0].spans.len(), 2);
        assert!(
            text.lines[0].spans[1]
                .style
                .add_modifier
                .contains(Modifier::BOLD)
        );
    }

    #[test]
    fn test_code_style_keeps_token_colour() {
        let style = SpanStyle::Code(Color::Rgb(1, 2, 3)).to_style();
        assert_eq!(style.fg, Some(Color::Rgb(1, 2, 3)));
    }

    #[test]
    fn test_tabs_expand() {
        let text = to_text(&[StyledSpan::plain("\tx")]);
        assert_eq!(text.lines[0].spans[0].content, "    x");
    }

    #[test]
    fn test_plain_text_concatenates() {
        let spans = vec![StyledSpan::plain("a"), StyledSpan::plain("\n\n"), StyledSpan::plain("b")];
        assert_eq!(plain_text(&spans), "a\n\nb");
    }
}
