//! # Document Model
//!
//! The lesson tree consumed by the content renderer. Nodes are produced by
//! whatever loads a lesson (see [`crate::core::book`]) and are only ever
//! read by the TUI layer.
//!
//! ```text
//! Section { title }
//! ├── Paragraph
//! │   ├── Text
//! │   ├── Strong
//! │   └── Emphasis
//! ├── CodeBlock { language }
//! ├── TestBlock
//! └── Section { title }   (nested)
//! ```
//!
//! Each variant carries only the options that make sense for it, so a
//! missing option (`title`, `language`) is an explicit `None` rather than a
//! failed lookup.

use serde::{Deserialize, Serialize};

/// A node in a lesson tree.
///
/// Serialized internally tagged by `kind`, e.g.
/// `{ kind = "code_block", language = "python", code = "..." }`.
/// Unrecognized kinds deserialize to [`DocumentNode::Unknown`].
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DocumentNode {
    Section {
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        children: Vec<DocumentNode>,
    },
    Paragraph {
        #[serde(default)]
        children: Vec<DocumentNode>,
    },
    CodeBlock {
        #[serde(default)]
        language: Option<String>,
        #[serde(default)]
        code: String,
    },
    TestBlock {
        #[serde(default)]
        children: Vec<DocumentNode>,
    },
    Text {
        text: String,
    },
    Strong {
        text: String,
    },
    Emphasis {
        text: String,
    },
    #[serde(other)]
    Unknown,
}

/// Payload-free discriminant of a [`DocumentNode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Section,
    Paragraph,
    CodeBlock,
    TestBlock,
    Text,
    Strong,
    Emphasis,
    Unknown,
}

impl DocumentNode {
    pub fn section(title: impl Into<String>, children: Vec<DocumentNode>) -> Self {
        DocumentNode::Section {
            title: Some(title.into()),
            children,
        }
    }

    pub fn paragraph(children: Vec<DocumentNode>) -> Self {
        DocumentNode::Paragraph { children }
    }

    pub fn code_block(language: Option<&str>, code: impl Into<String>) -> Self {
        DocumentNode::CodeBlock {
            language: language.map(str::to_string),
            code: code.into(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        DocumentNode::Text { text: text.into() }
    }

    pub fn strong(text: impl Into<String>) -> Self {
        DocumentNode::Strong { text: text.into() }
    }

    pub fn emphasis(text: impl Into<String>) -> Self {
        DocumentNode::Emphasis { text: text.into() }
    }

    pub fn tag(&self) -> Tag {
        match self {
            DocumentNode::Section { .. } => Tag::Section,
            DocumentNode::Paragraph { .. } => Tag::Paragraph,
            DocumentNode::CodeBlock { .. } => Tag::CodeBlock,
            DocumentNode::TestBlock { .. } => Tag::TestBlock,
            DocumentNode::Text { .. } => Tag::Text,
            DocumentNode::Strong { .. } => Tag::Strong,
            DocumentNode::Emphasis { .. } => Tag::Emphasis,
            DocumentNode::Unknown => Tag::Unknown,
        }
    }

    /// Ordered children. Leaf nodes have none.
    pub fn children(&self) -> &[DocumentNode] {
        match self {
            DocumentNode::Section { children, .. }
            | DocumentNode::Paragraph { children }
            | DocumentNode::TestBlock { children } => children,
            _ => &[],
        }
    }

    /// Section title, if this is a titled section.
    pub fn title(&self) -> Option<&str> {
        match self {
            DocumentNode::Section { title, .. } => title.as_deref(),
            _ => None,
        }
    }

    /// Declared code block language, if any.
    pub fn language(&self) -> Option<&str> {
        match self {
            DocumentNode::CodeBlock { language, .. } => language.as_deref(),
            _ => None,
        }
    }

    /// Leaf text. Containers concatenate the text of their descendants;
    /// section titles are not part of it.
    pub fn text_content(&self) -> String {
        match self {
            DocumentNode::Text { text }
            | DocumentNode::Strong { text }
            | DocumentNode::Emphasis { text } => text.clone(),
            DocumentNode::CodeBlock { code, .. } => code.clone(),
            DocumentNode::Unknown => String::new(),
            _ => self
                .children()
                .iter()
                .map(DocumentNode::text_content)
                .collect(),
        }
    }
}
