//! # ViewStack
//!
//! LIFO navigation history shared by every navigable region (content area,
//! sidebar menu). The stack owns its views and knows nothing about them
//! beyond the [`View`] capability.
//!
//! ## Invariants
//!
//! - Once a `push` or `reset` has happened, depth is always ≥ 1. `pop` at
//!   depth ≤ 1 is a no-op.
//! - Before the first `push`/`reset`, [`ViewStack::current`] yields the
//!   region's default view.
//!
//! ## Region-specific behavior
//!
//! Regions differ in two ways only, both injected at construction:
//! - the default view (a factory, called on construction and on `reset(None)`)
//! - an optional pop hook, run after every pop that removed a view

use log::debug;

use crate::tui::component::View;
use crate::tui::context::FocusHandle;

/// Side effect run after a successful pop. Receives the new depth.
pub type PopHook = Box<dyn FnMut(usize)>;

pub struct ViewStack<V> {
    pages: Vec<V>,
    make_default: Box<dyn Fn() -> V>,
    fallback: V,
    on_pop: Option<PopHook>,
    focus: FocusHandle,
}

impl<V: View> ViewStack<V> {
    pub fn new(make_default: impl Fn() -> V + 'static, focus: FocusHandle) -> Self {
        let fallback = make_default();
        Self {
            pages: Vec::new(),
            make_default: Box::new(make_default),
            fallback,
            on_pop: None,
            focus,
        }
    }

    pub fn with_pop_hook(mut self, hook: impl FnMut(usize) + 'static) -> Self {
        self.on_pop = Some(Box::new(hook));
        self
    }

    /// Push `view` as the new top and move focus into it.
    pub fn push(&mut self, view: V) {
        self.pages.push(view);
        debug!("ViewStack push (depth={})", self.pages.len());
        self.focus_current();
    }

    /// Remove the top view. No-op when depth ≤ 1.
    pub fn pop(&mut self) {
        if self.pages.len() <= 1 {
            return;
        }
        self.pages.pop();
        let depth = self.pages.len();
        debug!("ViewStack pop (depth={})", depth);
        self.focus_current();
        if let Some(hook) = self.on_pop.as_mut() {
            hook(depth);
        }
    }

    /// Replace the whole history with a single view, or the default view
    /// when `view` is `None`.
    pub fn reset(&mut self, view: Option<V>) {
        let view = view.unwrap_or_else(|| (self.make_default)());
        self.pages.clear();
        self.pages.push(view);
    }

    pub fn current(&self) -> &V {
        self.pages.last().unwrap_or(&self.fallback)
    }

    pub fn current_mut(&mut self) -> &mut V {
        match self.pages.last_mut() {
            Some(view) => view,
            None => &mut self.fallback,
        }
    }

    pub fn depth(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Hand focus to the first focusable region of the current view. Focus
    /// is left alone when the view has none.
    fn focus_current(&self) {
        if let Some(id) = self.current().first_focusable() {
            self.focus.focus(id);
        }
    }
}
