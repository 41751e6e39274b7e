use ratatui::Frame;
use ratatui::layout::Rect;

use super::context::FocusId;

/// A reusable UI component.
///
/// Components receive data via struct fields, may hold presentation state
/// (scroll offsets, list selection), and render into a `Frame` within a
/// given `Rect`.
///
/// `render` takes `&mut self` so components can update caches and
/// presentation state during the render pass, matching Ratatui's
/// `StatefulWidget` pattern.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

/// A component that can sit on a [`ViewStack`](super::components::ViewStack).
///
/// The stack never looks inside a view. All it needs is something to draw
/// and, optionally, a region that can take input focus.
pub trait View: Component {
    /// First focusable region reachable from this view, if any.
    fn first_focusable(&self) -> Option<FocusId> {
        None
    }
}

/// A component that handles terminal events.
pub trait EventHandler {
    /// The type of high-level event this component emits.
    type Event;

    /// Handle a low-level `TuiEvent` and optionally return a high-level event.
    fn handle_event(&mut self, event: &super::event::TuiEvent) -> Option<Self::Event>;
}
