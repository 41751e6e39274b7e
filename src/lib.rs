//! Lira library exports: lesson rendering, navigation stacks, and the
//! terminal front end built on them.

pub mod core;
pub mod tui;

#[cfg(test)]
pub mod test_support;
