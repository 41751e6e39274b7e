//! # Sidebar Menu
//!
//! Navigation menu on the left of the screen: a [`ViewStack`] of
//! [`MenuList`]s with a Back button under it and an Exit button at the
//! bottom.
//!
//! ```text
//! ┌ Chapters ────────┐
//! │> Basics          │   list area (current MenuList)
//! │  Functions       │
//! └──────────────────┘
//!      < Back >         only while depth > 1
//!      < Exit >         always
//! ```
//!
//! Back, Backspace, and popping the stack are the same action. Whenever a
//! pop lands on the root list the host's title-reset callback fires.

use log::debug;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};

use crate::tui::component::{Component, EventHandler, View};
use crate::tui::components::view_stack::ViewStack;
use crate::tui::context::{Context, FocusHandle, FocusId};
use crate::tui::event::TuiEvent;

/// What a menu entry opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuTarget {
    Chapter(usize),
    Section { chapter: usize, section: usize },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    pub target: MenuTarget,
}

/// Events emitted by the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuEvent {
    Open(MenuTarget),
}

/// One level of the menu: a titled, selectable list.
pub struct MenuList {
    pub title: String,
    pub items: Vec<MenuItem>,
    pub list_state: ListState,
    focus: FocusHandle,
}

impl MenuList {
    pub fn new(title: impl Into<String>, items: Vec<MenuItem>, focus: FocusHandle) -> Self {
        let mut list_state = ListState::default();
        if !items.is_empty() {
            list_state.select(Some(0));
        }
        Self {
            title: title.into(),
            items,
            list_state,
            focus,
        }
    }

    pub fn selected(&self) -> Option<&MenuItem> {
        self.list_state.selected().and_then(|i| self.items.get(i))
    }
}

impl Component for MenuList {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let focused = self.focus.is_focused(FocusId::Menu);
        let border = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(format!(" {} ", self.title))
            .title_alignment(Alignment::Left);

        if self.items.is_empty() {
            let empty = Paragraph::new("Nothing here.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let items: Vec<ListItem> = self
            .items
            .iter()
            .map(|item| ListItem::new(Line::from(item.label.clone())))
            .collect();
        let highlight = if focused {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let list = List::new(items)
            .block(block)
            .highlight_style(highlight)
            .highlight_symbol("> ");
        frame.render_stateful_widget(list, area, &mut self.list_state);
    }
}

impl View for MenuList {
    fn first_focusable(&self) -> Option<FocusId> {
        Some(FocusId::Menu)
    }
}

impl EventHandler for MenuList {
    type Event = MenuEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<MenuEvent> {
        if self.items.is_empty() {
            return None;
        }
        let last = self.items.len() - 1;
        let selected = self.list_state.selected().unwrap_or(0).min(last);
        match event {
            TuiEvent::CursorUp => {
                self.list_state.select(Some(selected.saturating_sub(1)));
                None
            }
            TuiEvent::CursorDown => {
                self.list_state.select(Some((selected + 1).min(last)));
                None
            }
            TuiEvent::Submit => self.selected().map(|item| MenuEvent::Open(item.target)),
            _ => None,
        }
    }
}

pub struct NavigationMenu {
    stack: ViewStack<MenuList>,
    focus: FocusHandle,
    on_exit: Box<dyn FnMut()>,
}

impl NavigationMenu {
    /// `on_title_reset` runs whenever a pop returns to the root list;
    /// `on_exit` runs when the Exit button is activated.
    pub fn new(
        ctx: &Context,
        mut on_title_reset: impl FnMut() + 'static,
        on_exit: impl FnMut() + 'static,
    ) -> Self {
        let focus = ctx.focus.clone();
        let default_focus = focus.clone();
        let stack = ViewStack::new(
            move || MenuList::new("Menu", Vec::new(), default_focus.clone()),
            focus.clone(),
        )
        .with_pop_hook(move |depth| {
            if depth <= 1 {
                debug!("Menu back at root, resetting title");
                on_title_reset();
            }
        });
        Self {
            stack,
            focus,
            on_exit: Box::new(on_exit),
        }
    }

    /// Build a list view sharing this menu's focus handle.
    pub fn list(&self, title: impl Into<String>, items: Vec<MenuItem>) -> MenuList {
        MenuList::new(title, items, self.focus.clone())
    }

    pub fn push(&mut self, list: MenuList) {
        self.stack.push(list);
    }

    pub fn pop(&mut self) {
        self.stack.pop();
    }

    pub fn reset(&mut self, list: Option<MenuList>) {
        self.stack.reset(list);
    }

    pub fn current(&self) -> &MenuList {
        self.stack.current()
    }

    pub fn depth(&self) -> usize {
        self.stack.depth()
    }

    pub fn back_visible(&self) -> bool {
        self.stack.depth() > 1
    }

    pub fn activate_back(&mut self) {
        self.pop();
    }

    pub fn activate_exit(&mut self) {
        (self.on_exit)();
    }

    /// Focusable regions of the menu, top to bottom.
    pub fn focus_order(&self) -> Vec<FocusId> {
        let mut order = vec![FocusId::Menu];
        if self.back_visible() {
            order.push(FocusId::Back);
        }
        order.push(FocusId::Exit);
        order
    }

    /// Whether input focus currently sits somewhere in the menu.
    pub fn has_focus(&self) -> bool {
        matches!(
            self.focus.get(),
            Some(FocusId::Menu | FocusId::Back | FocusId::Exit)
        )
    }

    fn render_button(&self, frame: &mut Frame, area: Rect, label: &str, id: FocusId) {
        let style = if self.focus.is_focused(id) {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(Color::Gray)
        };
        let button = Paragraph::new(format!("<{label:^10}>"))
            .style(style)
            .alignment(Alignment::Center);
        frame.render_widget(button, area);
    }
}

impl Component for NavigationMenu {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let back_height = if self.back_visible() { 1 } else { 0 };
        let [list_area, back_area, exit_area] = Layout::vertical([
            Constraint::Min(1),
            Constraint::Length(back_height),
            Constraint::Length(1),
        ])
        .areas(area);

        self.stack.current_mut().render(frame, list_area);
        if self.back_visible() {
            self.render_button(frame, back_area, "Back", FocusId::Back);
        }
        self.render_button(frame, exit_area, "Exit", FocusId::Exit);
    }
}

impl EventHandler for NavigationMenu {
    type Event = MenuEvent;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<MenuEvent> {
        if matches!(event, TuiEvent::Back) {
            self.activate_back();
            return None;
        }
        match self.focus.get() {
            Some(FocusId::Back) if matches!(event, TuiEvent::Submit) => {
                self.activate_back();
                None
            }
            Some(FocusId::Exit) if matches!(event, TuiEvent::Submit) => {
                self.activate_exit();
                None
            }
            Some(FocusId::Menu) => self.stack.current_mut().handle_event(event),
            _ => None,
        }
    }
}
