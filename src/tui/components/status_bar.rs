//! # Status Bar
//!
//! One-line status region at the bottom of the screen, plus the
//! [`NotificationScheduler`] that flashes transient text into it.
//!
//! ## Notification sequence
//!
//! ```text
//! notify("saved", 1.5s)
//!   ── warm-up (100ms) ──▶ show "saved", redraw
//!   ── 1.5s ────────────▶ show "",      redraw
//! ```
//!
//! Each sequence is a tokio task. With [`NotifyPolicy::Supersede`] a new
//! request aborts the one in flight, so the latest text wins and an older
//! sequence can never clear a newer message. [`NotifyPolicy::Overlap`] runs
//! every sequence independently; their updates interleave.
//!
//! Every status ever shown, including the cleared state, is appended to a
//! timestamped history for diagnostics.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use log::debug;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use tokio::task::{AbortHandle, JoinHandle};

use crate::core::config::{NotifyPolicy, ResolvedConfig};
use crate::tui::component::Component;
use crate::tui::context::{Context, RedrawHandle};

pub const STATUS_PROMPT: &str = ">>> ";

/// A request to flash `text` for `delay`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationEntry {
    pub text: String,
    pub delay: Duration,
}

/// A status that was shown, and when.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusRecord {
    pub text: String,
    pub shown_at: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct StatusLine {
    current: String,
    history: Vec<StatusRecord>,
}

impl StatusLine {
    fn set(&mut self, text: String) {
        self.history.push(StatusRecord {
            text: text.clone(),
            shown_at: Utc::now(),
        });
        self.current = text;
    }
}

fn lock(status: &Mutex<StatusLine>) -> MutexGuard<'_, StatusLine> {
    status.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Owns the status line and schedules delayed-revert notifications.
///
/// `notify` must be called from within a tokio runtime.
pub struct NotificationScheduler {
    status: Arc<Mutex<StatusLine>>,
    redraw: RedrawHandle,
    warmup: Duration,
    policy: NotifyPolicy,
    in_flight: Option<AbortHandle>,
}

impl NotificationScheduler {
    pub fn new(ctx: &Context, warmup: Duration, policy: NotifyPolicy) -> Self {
        Self {
            status: Arc::new(Mutex::new(StatusLine::default())),
            redraw: ctx.redraw.clone(),
            warmup,
            policy,
            in_flight: None,
        }
    }

    pub fn from_config(ctx: &Context, config: &ResolvedConfig) -> Self {
        Self::new(ctx, config.notify_warmup, config.notify_policy)
    }

    /// Show `text` after the warm-up pause, then clear it after `delay`.
    pub fn notify(&mut self, text: impl Into<String>, delay: Duration) -> JoinHandle<()> {
        self.schedule(NotificationEntry {
            text: text.into(),
            delay,
        })
    }

    pub fn schedule(&mut self, entry: NotificationEntry) -> JoinHandle<()> {
        if self.policy == NotifyPolicy::Supersede
            && let Some(previous) = self.in_flight.take()
        {
            debug!("Superseding in-flight notification");
            previous.abort();
        }

        let status = self.status.clone();
        let redraw = self.redraw.clone();
        let warmup = self.warmup;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(warmup).await;
            show(&status, &redraw, entry.text);
            tokio::time::sleep(entry.delay).await;
            show(&status, &redraw, String::new());
        });
        self.in_flight = Some(handle.abort_handle());
        handle
    }

    /// Replace the status line immediately.
    pub fn update_status(&self, text: impl Into<String>) {
        show(&self.status, &self.redraw, text.into());
    }

    pub fn current(&self) -> String {
        lock(&self.status).current.clone()
    }

    pub fn history(&self) -> Vec<StatusRecord> {
        lock(&self.status).history.clone()
    }

    pub fn history_texts(&self) -> Vec<String> {
        lock(&self.status)
            .history
            .iter()
            .map(|record| record.text.clone())
            .collect()
    }
}

fn show(status: &Mutex<StatusLine>, redraw: &RedrawHandle, text: String) {
    debug!("Status: {:?}", text);
    lock(status).set(text);
    redraw.request();
}

/// Stateless one-line renderer for the current status.
pub struct StatusBar {
    pub status: String,
}

impl StatusBar {
    pub fn new(status: String) -> Self {
        Self { status }
    }
}

impl Component for StatusBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(STATUS_PROMPT, Style::default().fg(Color::DarkGray)),
            Span::raw(self.status.clone()),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}
