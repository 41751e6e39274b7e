//! Syntax highlighting for code blocks.
//!
//! The content renderer only sees the [`HighlighterRegistry`] trait: give it
//! a language name, get back a highlighter or `None`. [`SyntectRegistry`] is
//! the production implementation over syntect's bundled syntaxes and themes.

use std::sync::LazyLock;

use log::{debug, warn};
use ratatui::style::Color;
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::{SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use crate::core::config::DEFAULT_SYNTAX_THEME;
use crate::tui::styled::{SpanStyle, StyledSpan};

static SYNTAX_SET: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);
static THEME_SET: LazyLock<ThemeSet> = LazyLock::new(ThemeSet::load_defaults);

/// Turns source text into per-token styled spans.
pub trait Highlighter {
    fn highlight(&mut self, code: &str) -> Vec<StyledSpan>;
}

/// Resolves a language identifier to a highlighter.
pub trait HighlighterRegistry {
    fn highlighter(&self, language: &str) -> Option<Box<dyn Highlighter + '_>>;
}

/// Registry backed by syntect's default syntax and theme sets.
pub struct SyntectRegistry {
    theme: &'static Theme,
}

impl SyntectRegistry {
    /// Falls back to the default theme when `theme_name` is unknown.
    pub fn new(theme_name: &str) -> Self {
        let theme = match THEME_SET.themes.get(theme_name) {
            Some(theme) => theme,
            None => {
                warn!(
                    "Unknown syntax theme '{}', using {}",
                    theme_name, DEFAULT_SYNTAX_THEME
                );
                &THEME_SET.themes[DEFAULT_SYNTAX_THEME]
            }
        };
        Self { theme }
    }

    fn find_syntax(language: &str) -> Option<&'static SyntaxReference> {
        if language.trim().is_empty() {
            return None;
        }
        SYNTAX_SET
            .find_syntax_by_token(language)
            .or_else(|| SYNTAX_SET.find_syntax_by_token(&language.to_lowercase()))
    }
}

impl Default for SyntectRegistry {
    fn default() -> Self {
        Self::new(DEFAULT_SYNTAX_THEME)
    }
}

impl HighlighterRegistry for SyntectRegistry {
    fn highlighter(&self, language: &str) -> Option<Box<dyn Highlighter + '_>> {
        let syntax = Self::find_syntax(language)?;
        debug!("Highlighting '{}' with syntax {}", language, syntax.name);
        Some(Box::new(SyntectHighlighter {
            lines: HighlightLines::new(syntax, self.theme),
        }))
    }
}

struct SyntectHighlighter {
    lines: HighlightLines<'static>,
}

impl Highlighter for SyntectHighlighter {
    fn highlight(&mut self, code: &str) -> Vec<StyledSpan> {
        let mut spans = Vec::new();
        for line in LinesWithEndings::from(code) {
            match self.lines.highlight_line(line, &SYNTAX_SET) {
                Ok(ranges) => {
                    spans.extend(ranges.into_iter().filter(|(_, frag)| !frag.is_empty()).map(
                        |(style, frag)| {
                            let fg = Color::Rgb(
                                style.foreground.r,
                                style.foreground.g,
                                style.foreground.b,
                            );
                            StyledSpan::new(frag, SpanStyle::Code(fg))
                        },
                    ));
                }
                Err(e) => {
                    // Keep the text even when the tokenizer chokes on a line.
                    warn!("Highlighting failed: {}", e);
                    spans.push(StyledSpan::plain(line));
                }
            }
        }
        spans
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::styled::plain_text;

    #[test]
    fn test_python_resolves() {
        let registry = SyntectRegistry::default();
        assert!(registry.highlighter("python").is_some());
        assert!(registry.highlighter("Python").is_some());
    }

    #[test]
    fn test_unknown_and_empty_languages_do_not_resolve() {
        let registry = SyntectRegistry::default();
        assert!(registry.highlighter("no-such-language").is_none());
        assert!(registry.highlighter("").is_none());
    }

    #[test]
    fn test_tokens_preserve_source_text() {
        let registry = SyntectRegistry::default();
        let mut hl = registry.highlighter("python").unwrap();
        let code = "  def f(x):\n      return x + 1\n";
        let spans = hl.highlight(code);
        assert!(spans.len() > 1);
        assert!(spans.iter().all(|s| matches!(s.style, SpanStyle::Code(_))));
        assert_eq!(plain_text(&spans), code);
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let registry = SyntectRegistry::new("not-a-theme");
        assert!(std::ptr::eq(
            registry.theme,
            &THEME_SET.themes[DEFAULT_SYNTAX_THEME]
        ));
    }
}
