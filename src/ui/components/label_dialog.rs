//! Label / folder edit dialog component

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Wrap},
    Frame,
};

use super::common::{create_dialog_block, create_field_block, create_input_paragraph, create_instructions_paragraph, shortcuts};
use crate::constants::STATUS_SAVING;
use crate::modal::{FormField, LabelModal};
use crate::ui::layout::LayoutManager;
use crate::utils::color::swatch_to_color;

/// Total height of the dialog including borders
pub const DIALOG_HEIGHT: u16 = 14;

/// Label dialog component
pub struct LabelDialog;

impl LabelDialog {
    /// Render the dialog centered in `area`.
    ///
    /// Field errors are only drawn once `show_errors` is set, i.e. after the
    /// first submit attempt.
    pub fn render(f: &mut Frame, area: Rect, modal: &LabelModal, show_errors: bool) {
        let dialog_area = LayoutManager::centered_rect_lines(70, DIALOG_HEIGHT, area);
        f.render_widget(Clear, dialog_area);

        let title = if modal.is_submitting() || modal.is_busy() {
            format!(" {} {} ", modal.title(), STATUS_SAVING)
        } else {
            format!(" {} ", modal.title())
        };
        let main_block = create_dialog_block(&title, Color::Cyan);

        let inner_area = main_block.inner(dialog_area);
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(3), // Name input field (borders + content)
                Constraint::Length(1), // Name error
                Constraint::Length(3), // Color swatches
                Constraint::Length(1), // Notify toggle
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Instructions
            ])
            .split(inner_area);

        let form = modal.form();
        let focused = form.focused();

        let name_field = create_input_paragraph(&form.name, "Name", focused == Some(FormField::Name));

        let name_error = if show_errors {
            form.error_for(FormField::Name)
                .or_else(|| form.error_for(FormField::Color))
                .map(|e| e.to_string())
                .unwrap_or_default()
        } else {
            String::new()
        };
        let error_paragraph = Paragraph::new(name_error).style(Style::default().fg(Color::Red));

        let swatches = Paragraph::new(Self::swatch_line(modal))
            .block(create_field_block("Color", focused == Some(FormField::Color)))
            .wrap(Wrap { trim: false });

        let notify_style = if focused == Some(FormField::Notify) {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let notify_mark = if form.notify { "[x]" } else { "[ ]" };
        let notify_line = Paragraph::new(format!(" {} Notify", notify_mark)).style(notify_style);

        let instructions = create_instructions_paragraph(&[
            shortcuts::ENTER_SAVE,
            shortcuts::SEPARATOR,
            shortcuts::TAB_NEXT,
            shortcuts::SEPARATOR,
            shortcuts::ESC_CANCEL,
        ]);

        f.render_widget(main_block, dialog_area);
        f.render_widget(name_field, chunks[0]);
        f.render_widget(error_paragraph, chunks[1]);
        f.render_widget(swatches, chunks[2]);
        f.render_widget(notify_line, chunks[3]);
        f.render_widget(instructions, chunks[5]);
    }

    /// One block per swatch, the selected one bracketed. A color that is not
    /// part of the palette is shown first so editing keeps it visible.
    fn swatch_line(modal: &LabelModal) -> Line<'static> {
        let selected = &modal.form().color;
        let palette = modal.palette();
        let mut spans = Vec::with_capacity(palette.len() + 1);

        if !palette.contains(selected) {
            spans.push(Self::swatch_span(selected, true));
        }
        for color in palette.colors() {
            spans.push(Self::swatch_span(color, color.eq_ignore_ascii_case(selected)));
        }

        Line::from(spans)
    }

    fn swatch_span(color: &str, selected: bool) -> Span<'static> {
        let text = if selected { "[█]" } else { " █ " };
        let mut style = Style::default().fg(swatch_to_color(color));
        if selected {
            style = style.add_modifier(Modifier::BOLD);
        }
        Span::styled(text, style)
    }
}
