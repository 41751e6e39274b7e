use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};

use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::StatusBar;
use crate::tui::highlight::HighlighterRegistry;

/// Split the frame into sidebar, content, and status regions.
fn split(area: Rect, sidebar_width: u16) -> (Rect, Rect, Rect) {
    use Constraint::{Length, Min};
    let [main_area, status_area] = Layout::vertical([Min(1), Length(1)]).areas(area);
    let [sidebar_area, content_area] =
        Layout::horizontal([Length(sidebar_width), Min(1)]).areas(main_area);
    (sidebar_area, content_area, status_area)
}

pub fn draw_ui<R: HighlighterRegistry>(frame: &mut Frame, tui: &mut TuiState<R>) {
    let (sidebar_area, content_area, status_area) = split(frame.area(), tui.sidebar_width);

    tui.menu.render(frame, sidebar_area);
    tui.content
        .stack_mut()
        .current_mut()
        .render(frame, content_area);
    StatusBar::new(tui.status.current()).render(frame, status_area);
}
