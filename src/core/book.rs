//! # Books
//!
//! A book is a pre-built lesson tree stored as TOML: a title plus chapters,
//! each holding a list of sections (see [`DocumentNode`]). This module only
//! deserializes trees that were produced elsewhere; it does not parse lesson
//! sources.
//!
//! ```toml
//! title = "Intro to Python"
//!
//! [[chapters]]
//! title = "Basics"
//!
//! [[chapters.sections]]
//! kind = "section"
//! title = "Printing"
//! children = [{ kind = "paragraph", children = [{ kind = "text", text = "Hi" }] }]
//! ```

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;

use crate::core::document::DocumentNode;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Book {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub chapters: Vec<Chapter>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Chapter {
    pub title: String,
    #[serde(default)]
    pub sections: Vec<DocumentNode>,
}

#[derive(Debug)]
pub enum BookError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for BookError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BookError::Io(e) => write!(f, "book I/O error: {e}"),
            BookError::Parse(e) => write!(f, "book parse error: {e}"),
        }
    }
}

impl std::error::Error for BookError {}

impl Book {
    pub fn from_toml(contents: &str) -> Result<Self, BookError> {
        toml::from_str(contents).map_err(BookError::Parse)
    }

    pub fn load(path: &Path) -> Result<Self, BookError> {
        let contents = fs::read_to_string(path).map_err(BookError::Io)?;
        let book = Self::from_toml(&contents)?;
        info!(
            "Loaded book '{}' ({} chapters) from {}",
            book.title,
            book.chapters.len(),
            path.display()
        );
        Ok(book)
    }

    pub fn chapter(&self, index: usize) -> Option<&Chapter> {
        self.chapters.get(index)
    }

    pub fn section(&self, chapter: usize, section: usize) -> Option<&DocumentNode> {
        let node = self.chapter(chapter)?.sections.get(section);
        if node.is_none() {
            debug!("No section {section} in chapter {chapter}");
        }
        node
    }
}

impl Chapter {
    /// Menu labels for this chapter's sections. Untitled sections get a
    /// positional label.
    pub fn section_labels(&self) -> Vec<String> {
        self.sections
            .iter()
            .enumerate()
            .map(|(i, node)| match node.title() {
                Some(title) if !title.is_empty() => title.to_string(),
                _ => format!("Section {}", i + 1),
            })
            .collect()
    }
}
