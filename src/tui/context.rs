//! Explicit handles components use to talk back to the host loop.
//!
//! Components never reach for a global "current application". They are
//! handed a [`Context`] at construction and use it to move input focus or
//! ask for a repaint.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Focusable regions of the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusId {
    Menu,
    Back,
    Exit,
    Content,
}

/// Shared slot holding the region that currently receives key input.
///
/// Stacks and the event loop live on the same thread, so a `Cell` is enough.
#[derive(Debug, Clone, Default)]
pub struct FocusHandle {
    current: Rc<Cell<Option<FocusId>>>,
}

impl FocusHandle {
    pub fn get(&self) -> Option<FocusId> {
        self.current.get()
    }

    pub fn focus(&self, id: FocusId) {
        self.current.set(Some(id));
    }

    pub fn is_focused(&self, id: FocusId) -> bool {
        self.get() == Some(id)
    }
}

/// Repaint request flag. Cloneable and `Send` so background notification
/// tasks can set it; the event loop drains it with [`RedrawHandle::take`].
#[derive(Debug, Clone, Default)]
pub struct RedrawHandle {
    pending: Arc<AtomicBool>,
}

impl RedrawHandle {
    pub fn request(&self) {
        self.pending.store(true, Ordering::Release);
    }

    /// Returns whether a redraw was requested, clearing the request.
    pub fn take(&self) -> bool {
        self.pending.swap(false, Ordering::AcqRel)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Context {
    pub focus: FocusHandle,
    pub redraw: RedrawHandle,
}
