//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::constants::{STATUS_HINT, STATUS_SAVING};
use crate::notification::{Toast, ToastLevel};

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the newest toast, the busy marker, or the key hint
    pub fn render(f: &mut Frame, area: Rect, toast: Option<&Toast>, busy: bool) {
        let (status_text, status_color) = match toast {
            Some(toast) => match toast.level {
                ToastLevel::Success => (format!("✅ {}", toast.message), Color::Green),
                ToastLevel::Error => (format!("❌ {}", toast.message), Color::Red),
            },
            None if busy => (STATUS_SAVING.to_string(), Color::Yellow),
            None => (STATUS_HINT.to_string(), Color::Gray),
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
