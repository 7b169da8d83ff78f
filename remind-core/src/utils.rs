use std::fmt::Write;

use chrono::{NaiveDate, NaiveDateTime};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;

use crate::app::AppState;
use crate::reminder::Reminder;
use crate::style;
use crate::types::Mode;

pub fn is_dialog_open(mode: &Mode) -> bool {
    matches!(
        mode,
        Mode::PickDate { .. } | Mode::ConfirmDelete { .. } | Mode::Notice { .. }
    )
}

pub fn get_block_style(is_focused: bool, mode: &Mode) -> Style {
    if !is_dialog_open(mode) && is_focused {
        Style::default().fg(style::BLUE)
    } else {
        Style::default()
    }
}

pub fn get_dimmed_style(mode: &Mode) -> Style {
    if is_dialog_open(mode) {
        Style::default().fg(style::GRAY_DIM)
    } else {
        Style::default()
    }
}

pub fn centered_rect_fixed_height(percent_x: u16, height: u16, r: Rect) -> Rect {
    let vertical_pad = r.height.saturating_sub(height) / 2;

    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(vertical_pad),
            Constraint::Length(height),
            Constraint::Length(vertical_pad),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// True if `format` renders a local date-time. Unknown specifiers and
/// offset/zone specifiers (`%z`, `%Z`) fail since there is no zone to print.
pub fn is_valid_time_format(format: &str) -> bool {
    if format.is_empty() {
        return false;
    }
    let Some(sample) = NaiveDate::from_ymd_opt(2000, 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0))
    else {
        return false;
    };
    write!(&mut String::new(), "{}", sample.format(format)).is_ok()
}

pub fn format_due(due_at: NaiveDateTime, format: &str) -> String {
    due_at.format(format).to_string()
}

pub fn due_label(due_at: Option<NaiveDateTime>, format: &str) -> String {
    due_at
        .map(|d| format_due(d, format))
        .unwrap_or_else(|| "No date selected".to_string())
}

pub fn selected_reminder(state: &AppState) -> Option<&Reminder> {
    state.store.get(state.selected)
}

/// Keeps the selection on an existing row after the list shrinks.
pub fn clamp_selection(state: &mut AppState) {
    state.selected = state.selected.min(state.store.len().saturating_sub(1));
}
