//! # TUI Components
//!
//! ## Navigable regions
//!
//! Both the content area and the sidebar menu are built on one generic
//! [`ViewStack`]. What differs per region is injected at construction
//! rather than inherited:
//!
//! - `ContentRenderer`: `ViewStack<ContentView>`, default view is the
//!   welcome text, every render `reset`s the stack to one document.
//! - `NavigationMenu`: `ViewStack<MenuList>`, default view is an empty
//!   list, pop hook resets the window title on return to the root.
//!
//! ## Status line
//!
//! `NotificationScheduler` owns the status text and is independent of the
//! stacks. `StatusBar` is a stateless renderer for it.
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── view_stack.rs    (generic navigation history)
//! ├── content_area.rs  (document → styled spans, content view)
//! ├── sidebar_menu.rs  (menu lists, Back/Exit buttons)
//! └── status_bar.rs    (status line, delayed-revert notifications)
//! ```

pub mod content_area;
pub mod sidebar_menu;
pub mod status_bar;
pub mod view_stack;

pub use content_area::{ContentRenderer, ContentView};
pub use sidebar_menu::{MenuEvent, MenuItem, MenuList, MenuTarget, NavigationMenu};
pub use status_bar::{NotificationEntry, NotificationScheduler, StatusBar, StatusRecord};
pub use view_stack::{PopHook, ViewStack};
