//! # Content Area
//!
//! Shows one rendered lesson section at a time.
//!
//! [`ContentRenderer`] walks a [`DocumentNode`] tree depth-first and emits
//! a flat list of [`StyledSpan`]s in reading order, then installs the result
//! as the single view of its [`ViewStack`] with `reset`. Paging between
//! sections is the caller's business.
//!
//! ## Span order
//!
//! For a section titled `T` with paragraphs `A` and `B`:
//!
//! ```text
//! Title("T")  "\n\n"  Text("A")  "\n\n"  Text("B")
//! ```
//!
//! Paragraphs and code blocks are each preceded by a blank-line separator;
//! inline nodes are emitted as-is. Nested sections are rendered inline with
//! their own title. Unknown nodes produce nothing.

use ratatui::Frame;
use ratatui::layout::{Rect, Size};
use ratatui::widgets::{Block, Padding, Paragraph, Wrap};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::document::DocumentNode;
use crate::tui::component::{Component, EventHandler, View};
use crate::tui::components::view_stack::ViewStack;
use crate::tui::context::{Context, FocusId};
use crate::tui::event::TuiEvent;
use crate::tui::highlight::HighlighterRegistry;
use crate::tui::styled::{SpanStyle, StyledSpan, to_text};

/// Blank line placed before every paragraph and code block.
pub const SEPARATOR: &str = "\n\n";
/// Stand-in for test blocks, which are not expanded here.
pub const TEST_BLOCK_PLACEHOLDER: &str = "\n\n [TestBlock]";
const CODE_INDENT: &str = "  ";

/// A rendered, scrollable block of styled text.
pub struct ContentView {
    spans: Vec<StyledSpan>,
    focusable: bool,
    pub scroll_state: ScrollViewState,
}

impl ContentView {
    /// The static greeting shown before any section is opened.
    pub fn welcome() -> Self {
        let text = format!(
            "Welcome to Lira!\n\n\
             - Press <Ctrl-c> or <Ctrl-q> to exit.\n\
             - Navigate with <Tab> and the arrow keys.\n\n\
             Version: {}",
            env!("CARGO_PKG_VERSION")
        );
        Self {
            spans: vec![StyledSpan::plain(text)],
            focusable: false,
            scroll_state: ScrollViewState::default(),
        }
    }

    pub fn document(spans: Vec<StyledSpan>) -> Self {
        Self {
            spans,
            focusable: true,
            scroll_state: ScrollViewState::default(),
        }
    }

    pub fn spans(&self) -> &[StyledSpan] {
        &self.spans
    }
}

impl Component for ContentView {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default().padding(Padding::uniform(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        // Leave a column for the scrollbar.
        let content_width = inner.width.saturating_sub(1);
        let paragraph = Paragraph::new(to_text(&self.spans)).wrap(Wrap { trim: false });
        let height = (paragraph.line_count(content_width) as u16).max(1);

        let visibility = if self.focusable {
            ScrollbarVisibility::Automatic
        } else {
            ScrollbarVisibility::Never
        };
        let mut scroll_view = ScrollView::new(Size::new(content_width, height))
            .vertical_scrollbar_visibility(visibility)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);
        scroll_view.render_widget(paragraph, Rect::new(0, 0, content_width, height));
        frame.render_stateful_widget(scroll_view, inner, &mut self.scroll_state);
    }
}

impl View for ContentView {
    fn first_focusable(&self) -> Option<FocusId> {
        self.focusable.then_some(FocusId::Content)
    }
}

impl EventHandler for ContentView {
    type Event = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::CursorUp => self.scroll_state.scroll_up(),
            TuiEvent::CursorDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            _ => {}
        }
        None
    }
}

/// Renders document trees into the content area's view stack.
pub struct ContentRenderer<R> {
    stack: ViewStack<ContentView>,
    registry: R,
}

impl<R: HighlighterRegistry> ContentRenderer<R> {
    pub fn new(registry: R, ctx: &Context) -> Self {
        Self {
            stack: ViewStack::new(ContentView::welcome, ctx.focus.clone()),
            registry,
        }
    }

    /// Render `section` and make it the only view in the content area.
    pub fn render_section(&mut self, section: &DocumentNode) {
        let spans = self.render_spans(section);
        log::debug!(
            "Rendered section {:?} into {} spans",
            section.title().unwrap_or_default(),
            spans.len()
        );
        self.stack.reset(Some(ContentView::document(spans)));
    }

    /// The span sequence for `node`, in reading order.
    pub fn render_spans(&self, node: &DocumentNode) -> Vec<StyledSpan> {
        let mut spans = Vec::new();
        self.collect(node, &mut spans);
        spans
    }

    pub fn stack(&self) -> &ViewStack<ContentView> {
        &self.stack
    }

    pub fn stack_mut(&mut self) -> &mut ViewStack<ContentView> {
        &mut self.stack
    }

    fn collect(&self, node: &DocumentNode, out: &mut Vec<StyledSpan>) {
        if let DocumentNode::Section { title, .. } = node {
            out.push(StyledSpan::new(
                title.clone().unwrap_or_default(),
                SpanStyle::Title,
            ));
        }

        for child in node.children() {
            match child {
                DocumentNode::Section { .. } => self.collect(child, out),
                DocumentNode::Paragraph { .. } => {
                    out.push(StyledSpan::plain(SEPARATOR));
                    self.collect(child, out);
                }
                DocumentNode::CodeBlock { language, code } => {
                    out.push(StyledSpan::plain(SEPARATOR));
                    out.extend(self.code_block(language.as_deref(), code));
                }
                DocumentNode::TestBlock { .. } => {
                    out.push(StyledSpan::plain(TEST_BLOCK_PLACEHOLDER));
                }
                DocumentNode::Text { text } => out.push(StyledSpan::new(text, SpanStyle::Text)),
                DocumentNode::Strong { text } => {
                    out.push(StyledSpan::new(text, SpanStyle::Strong))
                }
                DocumentNode::Emphasis { text } => {
                    out.push(StyledSpan::new(text, SpanStyle::Emphasis))
                }
                DocumentNode::Unknown => {}
            }
        }
    }

    fn code_block(&self, language: Option<&str>, code: &str) -> Vec<StyledSpan> {
        let indented = textwrap::indent(code, CODE_INDENT);
        match language.and_then(|lang| self.registry.highlighter(lang)) {
            Some(mut highlighter) => highlighter.highlight(&indented),
            None => vec![StyledSpan::plain(indented)],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FixedRegistry, EmptyRegistry};
    use crate::tui::styled::plain_text;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn renderer() -> ContentRenderer<FixedRegistry> {
        ContentRenderer::new(FixedRegistry::new("python"), &Context::default())
    }

    #[test]
    fn test_section_with_two_paragraphs() {
        let tree = DocumentNode::section(
            "T",
            vec![
                DocumentNode::paragraph(vec![DocumentNode::text("A")]),
                DocumentNode::paragraph(vec![DocumentNode::text("B")]),
            ],
        );
        let spans = renderer().render_spans(&tree);
        assert_eq!(
            spans,
            vec![
                StyledSpan::new("T", SpanStyle::Title),
                StyledSpan::plain(SEPARATOR),
                StyledSpan::new("A", SpanStyle::Text),
                StyledSpan::plain(SEPARATOR),
                StyledSpan::new("B", SpanStyle::Text),
            ]
        );
    }

    #[test]
    fn test_inline_styles_follow_tags() {
        let tree = DocumentNode::paragraph(vec![
            DocumentNode::text("a "),
            DocumentNode::strong("b"),
            DocumentNode::emphasis("c"),
        ]);
        let styles: Vec<SpanStyle> = renderer()
            .render_spans(&tree)
            .into_iter()
            .map(|s| s.style)
            .collect();
        assert_eq!(
            styles,
            vec![SpanStyle::Text, SpanStyle::Strong, SpanStyle::Emphasis]
        );
    }

    #[test]
    fn test_code_block_with_known_language_uses_highlighter() {
        let tree = DocumentNode::section(
            "Code",
            vec![DocumentNode::code_block(Some("python"), "x = 1\ny = 2")],
        );
        let spans = renderer().render_spans(&tree);
        assert_eq!(spans[1], StyledSpan::plain(SEPARATOR));
        // FixedRegistry emits one token per whitespace-separated word
        let tokens: Vec<&str> = spans[2..].iter().map(|s| s.text.as_str()).collect();
        assert_eq!(tokens, vec!["x", "=", "1", "y", "=", "2"]);
        assert!(spans[2..].iter().all(|s| matches!(s.style, SpanStyle::Code(_))));
    }

    #[test]
    fn test_code_block_with_unknown_language_is_one_plain_span() {
        let tree = DocumentNode::section(
            "Code",
            vec![DocumentNode::code_block(Some("cobol"), "MOVE 1 TO X\nSTOP RUN")],
        );
        let spans = renderer().render_spans(&tree);
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[2], StyledSpan::plain("  MOVE 1 TO X\n  STOP RUN"));
    }

    #[test]
    fn test_code_block_without_language_is_plain() {
        let r = ContentRenderer::new(EmptyRegistry, &Context::default());
        let tree = DocumentNode::paragraph(vec![]);
        assert!(r.render_spans(&tree).is_empty());

        let tree = DocumentNode::section("S", vec![DocumentNode::code_block(None, "print(1)")]);
        let spans = r.render_spans(&tree);
        assert_eq!(spans.last(), Some(&StyledSpan::plain("  print(1)")));
    }

    #[test]
    fn test_code_block_with_syntect_python() {
        use crate::tui::highlight::SyntectRegistry;
        let r = ContentRenderer::new(SyntectRegistry::default(), &Context::default());
        let tree = DocumentNode::section(
            "S",
            vec![DocumentNode::code_block(Some("python"), "def f():\n    return 1\n")],
        );
        let spans = r.render_spans(&tree);
        let code = &spans[2..];
        assert!(code.len() > 1);
        assert!(code.iter().all(|s| matches!(s.style, SpanStyle::Code(_))));
        assert_eq!(
            plain_text(code),
            textwrap::indent("def f():\n    return 1\n", "  ")
        );
    }

    #[test]
    fn test_test_block_is_placeholder_only() {
        let tree = DocumentNode::section(
            "S",
            vec![DocumentNode::TestBlock {
                children: vec![DocumentNode::text("hidden")],
            }],
        );
        let spans = renderer().render_spans(&tree);
        assert_eq!(
            spans,
            vec![
                StyledSpan::new("S", SpanStyle::Title),
                StyledSpan::plain(TEST_BLOCK_PLACEHOLDER),
            ]
        );
    }

    #[test]
    fn test_unknown_nodes_are_skipped() {
        let tree = DocumentNode::section(
            "S",
            vec![DocumentNode::Unknown, DocumentNode::text("kept")],
        );
        let spans = renderer().render_spans(&tree);
        assert_eq!(spans.len(), 2);
        assert_eq!(spans[1].text, "kept");
    }

    #[test]
    fn test_missing_title_renders_empty_span() {
        let tree = DocumentNode::Section {
            title: None,
            children: vec![],
        };
        let spans = renderer().render_spans(&tree);
        assert_eq!(spans, vec![StyledSpan::new("", SpanStyle::Title)]);
    }

    #[test]
    fn test_nested_section_recurses_into_child() {
        let tree = DocumentNode::section(
            "Outer",
            vec![
                DocumentNode::paragraph(vec![DocumentNode::text("intro")]),
                DocumentNode::section(
                    "Inner",
                    vec![DocumentNode::paragraph(vec![DocumentNode::text("detail")])],
                ),
            ],
        );
        let texts: Vec<String> = renderer()
            .render_spans(&tree)
            .into_iter()
            .map(|s| s.text)
            .collect();
        assert_eq!(
            texts,
            vec!["Outer", SEPARATOR, "intro", "Inner", SEPARATOR, "detail"]
        );
    }

    #[test]
    fn test_render_section_replaces_previous_document() {
        let mut r = renderer();
        assert!(r.stack().is_empty());
        assert!(!r.stack().current().spans().is_empty()); // welcome text

        r.render_section(&DocumentNode::section("One", vec![]));
        r.render_section(&DocumentNode::section("Two", vec![]));
        assert_eq!(r.stack().depth(), 1);
        assert_eq!(r.stack().current().spans()[0].text, "Two");
        assert_eq!(
            r.stack().current().first_focusable(),
            Some(FocusId::Content)
        );
    }

    #[test]
    fn test_welcome_view_is_not_focusable() {
        let view = ContentView::welcome();
        assert_eq!(view.first_focusable(), None);
        assert!(plain_text(view.spans()).starts_with("Welcome to Lira!"));
    }

    #[test]
    fn test_document_view_renders_text() {
        let mut r = renderer();
        r.render_section(&DocumentNode::section(
            "Loops",
            vec![DocumentNode::paragraph(vec![DocumentNode::text("for x in y")])],
        ));

        let backend = TestBackend::new(40, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| r.stack_mut().current_mut().render(f, f.area()))
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Loops"));
        assert!(text.contains("for x in y"));
    }
}
