//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::style::Color;

use crate::core::book::{Book, Chapter};
use crate::core::document::DocumentNode;
use crate::tui::highlight::{Highlighter, HighlighterRegistry};
use crate::tui::styled::{SpanStyle, StyledSpan};

/// Resolves exactly one language to a highlighter that emits one yellow
/// token per whitespace-separated word.
pub struct FixedRegistry {
    language: &'static str,
}

impl FixedRegistry {
    pub fn new(language: &'static str) -> Self {
        Self { language }
    }
}

struct WordHighlighter;

impl Highlighter for WordHighlighter {
    fn highlight(&mut self, code: &str) -> Vec<StyledSpan> {
        code.split_whitespace()
            .map(|word| StyledSpan::new(word, SpanStyle::Code(Color::Yellow)))
            .collect()
    }
}

impl HighlighterRegistry for FixedRegistry {
    fn highlighter(&self, language: &str) -> Option<Box<dyn Highlighter + '_>> {
        if language == self.language {
            Some(Box::new(WordHighlighter))
        } else {
            None
        }
    }
}

/// Resolves nothing.
pub struct EmptyRegistry;

impl HighlighterRegistry for EmptyRegistry {
    fn highlighter(&self, _language: &str) -> Option<Box<dyn Highlighter + '_>> {
        None
    }
}

/// A two-chapter book with one short section each.
pub fn sample_book() -> Book {
    Book {
        title: "Sample".to_string(),
        chapters: vec![
            Chapter {
                title: "Basics".to_string(),
                sections: vec![DocumentNode::section(
                    "Printing",
                    vec![
                        DocumentNode::paragraph(vec![DocumentNode::text("Use print.")]),
                        DocumentNode::code_block(Some("python"), "print('hi')"),
                    ],
                )],
            },
            Chapter {
                title: "Loops".to_string(),
                sections: vec![DocumentNode::section(
                    "For",
                    vec![DocumentNode::paragraph(vec![DocumentNode::text("Iterate.")])],
                )],
            },
        ],
    }
}
