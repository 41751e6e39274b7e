//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI, and
//! routes keyboard events to the region that holds focus.
//!
//! ```text
//! ┌ menu ─────┐┌ content ─────────────────────────┐
//! │ Chapters  ││ Printing                         │
//! │> Basics   ││                                  │
//! │  Loops    ││ Use print.                       │
//! │           ││                                  │
//! └───────────┘│   print('hi')                    │
//!   < Back >   │                                  │
//!   < Exit >   │                                  │
//! >>> status line                                  │
//! ```
//!
//! ## Redraw Strategy
//!
//! The loop only draws when an event arrived or a component asked for a
//! repaint through the shared [`RedrawHandle`](context::RedrawHandle)
//! (notifications fire from background tasks). Idle polls wait up to
//! 100ms so those requests are picked up promptly.

mod component;
pub mod components;
pub mod context;
mod event;
pub mod highlight;
pub mod styled;
mod ui;

pub use component::{Component, EventHandler, View};
pub use event::TuiEvent;

use log::{debug, info};
use std::cell::{Cell, RefCell};
use std::io::stdout;
use std::rc::Rc;
use std::time::Duration;

use crossterm::execute;
use crossterm::terminal::SetTitle;

use crate::core::book::Book;
use crate::core::config::ResolvedConfig;
use crate::tui::components::{
    ContentRenderer, MenuEvent, MenuItem, MenuList, MenuTarget, NavigationMenu,
    NotificationScheduler,
};
use crate::tui::context::{Context, FocusId};
use crate::tui::event::{poll_event_immediate, poll_event_timeout};
use crate::tui::highlight::{HighlighterRegistry, SyntectRegistry};

pub const DEFAULT_TITLE: &str = "Lira";
const KEY_HINTS: &str = "Tab: focus  ↑/↓: move  Enter: open  Backspace: back  Ctrl-q: quit";

/// All presentation state for one reading session.
pub struct TuiState<R> {
    pub ctx: Context,
    pub book: Book,
    pub content: ContentRenderer<R>,
    pub menu: NavigationMenu,
    pub status: NotificationScheduler,
    pub sidebar_width: u16,
    notify_delay: Duration,
    title: Rc<RefCell<String>>,
    quit: Rc<Cell<bool>>,
}

impl<R: HighlighterRegistry> TuiState<R> {
    pub fn new(book: Book, registry: R, config: &ResolvedConfig) -> Self {
        let ctx = Context::default();
        let title = Rc::new(RefCell::new(DEFAULT_TITLE.to_string()));
        let quit = Rc::new(Cell::new(false));

        let reset_title = title.clone();
        let exit = quit.clone();
        let menu = NavigationMenu::new(
            &ctx,
            move || *reset_title.borrow_mut() = DEFAULT_TITLE.to_string(),
            move || exit.set(true),
        );

        let mut state = Self {
            content: ContentRenderer::new(registry, &ctx),
            status: NotificationScheduler::from_config(&ctx, config),
            menu,
            ctx,
            book,
            sidebar_width: config.sidebar_width,
            notify_delay: config.notify_delay,
            title,
            quit,
        };
        let root = state.root_menu();
        state.menu.push(root);
        state.content.stack_mut().reset(None);
        state
    }

    /// The book's chapter list.
    fn root_menu(&self) -> MenuList {
        let items = self
            .book
            .chapters
            .iter()
            .enumerate()
            .map(|(i, chapter)| MenuItem {
                label: chapter.title.clone(),
                target: MenuTarget::Chapter(i),
            })
            .collect();
        let heading = if self.book.title.is_empty() {
            "Chapters".to_string()
        } else {
            self.book.title.clone()
        };
        self.menu.list(heading, items)
    }

    pub fn open(&mut self, target: MenuTarget) {
        match target {
            MenuTarget::Chapter(index) => {
                let Some(chapter) = self.book.chapter(index) else {
                    return;
                };
                let items = chapter
                    .section_labels()
                    .into_iter()
                    .enumerate()
                    .map(|(section, label)| MenuItem {
                        label,
                        target: MenuTarget::Section {
                            chapter: index,
                            section,
                        },
                    })
                    .collect();
                let title = chapter.title.clone();
                info!("Opening chapter '{}'", title);
                let list = self.menu.list(title.clone(), items);
                self.menu.push(list);
                *self.title.borrow_mut() = format!("{DEFAULT_TITLE} - {title}");
            }
            MenuTarget::Section { chapter, section } => {
                if let Some(node) = self.book.section(chapter, section) {
                    info!("Opening section {chapter}.{section}");
                    self.content.render_section(node);
                }
            }
        }
    }

    pub fn handle_event(&mut self, event: TuiEvent) {
        match event {
            TuiEvent::Quit => self.quit.set(true),
            TuiEvent::Resize => {}
            TuiEvent::Help => {
                self.status.notify(KEY_HINTS, self.notify_delay);
            }
            TuiEvent::FocusNext => self.cycle_focus(true),
            TuiEvent::FocusPrev => self.cycle_focus(false),
            _ if self.menu.has_focus() || self.ctx.focus.get().is_none() => {
                if let Some(MenuEvent::Open(target)) = self.menu.handle_event(&event) {
                    self.open(target);
                }
            }
            _ => {
                self.content
                    .stack_mut()
                    .current_mut()
                    .handle_event(&event);
            }
        }
    }

    /// Every focusable region in Tab order.
    pub fn focus_order(&self) -> Vec<FocusId> {
        let mut order = self.menu.focus_order();
        if let Some(id) = self.content.stack().current().first_focusable() {
            order.push(id);
        }
        order
    }

    fn cycle_focus(&mut self, forward: bool) {
        let order = self.focus_order();
        let position = self
            .ctx
            .focus
            .get()
            .and_then(|id| order.iter().position(|&o| o == id));
        let next = match position {
            Some(i) if forward => (i + 1) % order.len(),
            Some(i) => (i + order.len() - 1) % order.len(),
            None => 0,
        };
        debug!("Focus -> {:?}", order[next]);
        self.ctx.focus.focus(order[next]);
    }

    pub fn window_title(&self) -> String {
        self.title.borrow().clone()
    }

    pub fn should_quit(&self) -> bool {
        self.quit.get()
    }
}

pub fn run(config: ResolvedConfig, book: Book) -> std::io::Result<()> {
    let registry = SyntectRegistry::new(&config.syntax_theme);
    let mut tui = TuiState::new(book, registry, &config);

    let mut terminal = ratatui::init();
    let mut applied_title = String::new();
    let mut needs_redraw = true; // Force first frame

    loop {
        let title = tui.window_title();
        if title != applied_title {
            execute!(stdout(), SetTitle(&title))?;
            applied_title = title;
        }

        let requested = tui.ctx.redraw.take();
        if needs_redraw || requested {
            terminal.draw(|f| ui::draw_ui(f, &mut tui))?;
            needs_redraw = false;
        }

        // Process first event + drain ALL pending events before next draw
        let first_event = poll_event_timeout(Duration::from_millis(100));
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            needs_redraw = true;
            tui.handle_event(event);
        }

        if tui.should_quit() {
            break;
        }
    }

    info!("Exiting");
    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FixedRegistry, sample_book};

    fn state() -> TuiState<FixedRegistry> {
        TuiState::new(
            sample_book(),
            FixedRegistry::new("python"),
            &ResolvedConfig::default(),
        )
    }

    #[test]
    fn test_starts_at_root_with_welcome() {
        let tui = state();
        assert_eq!(tui.menu.depth(), 1);
        assert_eq!(tui.menu.current().title, "Sample");
        assert_eq!(tui.ctx.focus.get(), Some(FocusId::Menu));
        assert_eq!(tui.content.stack().depth(), 1);
        assert_eq!(tui.content.stack().current().first_focusable(), None);
        assert_eq!(tui.window_title(), DEFAULT_TITLE);
    }

    #[test]
    fn test_open_chapter_then_section() {
        let mut tui = state();
        tui.handle_event(TuiEvent::CursorDown);
        tui.handle_event(TuiEvent::Submit);
        assert_eq!(tui.menu.depth(), 2);
        assert_eq!(tui.menu.current().title, "Loops");
        assert_eq!(tui.window_title(), "Lira - Loops");

        tui.handle_event(TuiEvent::Submit);
        assert_eq!(tui.content.stack().current().spans()[0].text, "For");
        assert_eq!(tui.content.stack().depth(), 1);
    }

    #[test]
    fn test_back_restores_title() {
        let mut tui = state();
        tui.handle_event(TuiEvent::Submit);
        assert_eq!(tui.window_title(), "Lira - Basics");
        tui.handle_event(TuiEvent::Back);
        assert_eq!(tui.menu.depth(), 1);
        assert_eq!(tui.window_title(), DEFAULT_TITLE);
    }

    #[test]
    fn test_tab_cycles_through_visible_regions() {
        let mut tui = state();
        // Root level: no Back, welcome view not focusable
        tui.handle_event(TuiEvent::FocusNext);
        assert_eq!(tui.ctx.focus.get(), Some(FocusId::Exit));
        tui.handle_event(TuiEvent::FocusNext);
        assert_eq!(tui.ctx.focus.get(), Some(FocusId::Menu));

        tui.handle_event(TuiEvent::Submit); // chapter
        tui.handle_event(TuiEvent::Submit); // section
        assert_eq!(
            tui.focus_order(),
            vec![FocusId::Menu, FocusId::Back, FocusId::Exit, FocusId::Content]
        );
        tui.handle_event(TuiEvent::FocusPrev);
        assert_eq!(tui.ctx.focus.get(), Some(FocusId::Content));
    }

    #[test]
    fn test_exit_and_quit() {
        let mut tui = state();
        tui.handle_event(TuiEvent::FocusNext); // Exit
        tui.handle_event(TuiEvent::Submit);
        assert!(tui.should_quit());

        let mut tui = state();
        tui.handle_event(TuiEvent::Quit);
        assert!(tui.should_quit());
    }

    #[tokio::test(start_paused = true)]
    async fn test_help_flashes_key_hints() {
        let mut tui = state();
        tui.handle_event(TuiEvent::Help);
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(tui.status.current(), KEY_HINTS);
    }
}
