//! # Core
//!
//! UI-agnostic pieces: the lesson document model, book loading, and
//! configuration. Nothing here knows about ratatui or crossterm.
//!
//! ## Modules
//!
//! - [`document`]: `DocumentNode`, the lesson tree the renderer reads
//! - [`book`]: pre-built lesson trees stored as TOML
//! - [`config`]: `~/.lira/config.toml` and override resolution

pub mod book;
pub mod config;
pub mod document;
