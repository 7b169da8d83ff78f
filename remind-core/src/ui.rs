use chrono::NaiveDateTime;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};

use crate::app::AppState;
use crate::picker::{DatePicker, PickerField};
use crate::reminder::Reminder;
use crate::style;
use crate::types::*;
use crate::utils::*;

// ── List rows ────────────────────────────────────────────────────────────

fn reminder_line(reminder: &Reminder, time_format: &str, highlighted: bool) -> Line<'static> {
    let mark = if reminder.is_complete() { "[x]" } else { "[ ]" };
    let mut text_style = if reminder.is_complete() {
        Style::default()
            .fg(style::GRAY_DIM)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default()
    };
    if highlighted {
        text_style = text_style.fg(style::BLUE).add_modifier(Modifier::BOLD);
    }

    Line::from(vec![
        Span::styled(format!("{mark} "), text_style),
        Span::styled(reminder.text().to_string(), text_style),
        Span::styled(
            format!("  {}", format_due(reminder.due_at(), time_format)),
            Style::default().fg(style::GRAY_DIM),
        ),
    ])
}

/// Hint for the selected row. "complete" disappears once the reminder is done.
fn action_hint(reminder: &Reminder) -> &'static str {
    if reminder.is_complete() {
        " (d: delete)"
    } else {
        " (c: complete • d: delete)"
    }
}

// ── Main UI ──────────────────────────────────────────────────────────────

/// Render the entire UI.
pub fn ui(f: &mut ratatui::Frame, state: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Draft form
            Constraint::Min(3),    // List
            Constraint::Length(1), // Help
        ])
        .split(f.area());

    let dimmed = get_dimmed_style(&state.mode);

    let header = Paragraph::new(Line::from(format!(
        "{} reminder(s), {} open",
        state.store.len(),
        state.store.list().iter().filter(|r| !r.is_complete()).count()
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title("Reminders")
            .style(dimmed),
    )
    .style(dimmed);
    f.render_widget(header, chunks[0]);

    render_draft_form(f, state, chunks[1]);
    render_reminder_list(f, state, chunks[2]);

    let help = match state.mode {
        Mode::EditText => "Enter: add reminder • Tab: select date • Esc: back to list",
        _ => "a: new reminder • t: select date • ↑↓ move • c: complete • d: delete • q: quit",
    };
    f.render_widget(
        Paragraph::new(help).style(Style::default().fg(style::GRAY_DIM)),
        chunks[3],
    );

    render_date_picker_dialog(f, state);
    render_confirm_delete_dialog(f, state);
    render_notice_dialog(f, state);
}

fn render_draft_form(f: &mut ratatui::Frame, state: &AppState, area: Rect) {
    let dimmed = get_dimmed_style(&state.mode);
    let editing = matches!(state.mode, Mode::EditText);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("New reminder")
        .style(dimmed)
        .border_style(get_block_style(editing, &state.mode));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(inner);

    let title_prefix = "Title: ";
    let title_cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(title_prefix.len() as u16),
            Constraint::Min(1),
        ])
        .split(rows[0]);
    f.render_widget(Paragraph::new(title_prefix).style(dimmed), title_cols[0]);
    if editing {
        f.render_widget(&state.text_input, title_cols[1]);
    } else if state.draft.text().is_empty() {
        f.render_widget(
            Paragraph::new("Enter reminder text").style(Style::default().fg(style::GRAY_DIM)),
            title_cols[1],
        );
    } else {
        f.render_widget(
            Paragraph::new(state.draft.text().to_string()).style(dimmed),
            title_cols[1],
        );
    }

    let due = due_label(state.draft.due_at(), &state.options.time_format);
    let due_style = if state.draft.due_at().is_some() {
        dimmed
    } else {
        Style::default().fg(style::GRAY_DIM)
    };
    let due_line = Line::from(vec![
        Span::styled("Date:  ", dimmed),
        Span::styled(due, due_style),
    ]);
    f.render_widget(Paragraph::new(due_line), rows[1]);
}

fn render_reminder_list(f: &mut ratatui::Frame, state: &AppState, area: Rect) {
    let dimmed = get_dimmed_style(&state.mode);
    let list_focused = matches!(state.mode, Mode::View);
    let block = Block::default()
        .borders(Borders::ALL)
        .title("List (↑↓ move)")
        .style(dimmed)
        .border_style(get_block_style(list_focused, &state.mode));

    let reminders = state.store.list();
    if reminders.is_empty() {
        let empty = Paragraph::new("No reminders yet (a: add)")
            .block(block)
            .style(Style::default().fg(style::GRAY_DIM));
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = reminders
        .iter()
        .enumerate()
        .map(|(i, reminder)| {
            let is_selected = i == state.selected;
            let mut line = reminder_line(
                reminder,
                &state.options.time_format,
                is_selected && list_focused,
            );
            if is_selected && list_focused {
                line.spans.push(Span::styled(
                    action_hint(reminder),
                    Style::default().fg(style::GRAY_DIM),
                ));
            }
            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(block).style(dimmed);
    let mut list_state = ListState::default();
    list_state.select(Some(state.selected.min(reminders.len() - 1)));
    f.render_stateful_widget(list, area, &mut list_state);
}

// ── Dialogs ──────────────────────────────────────────────────────────────

fn picker_spans(picker: &DatePicker) -> Vec<Span<'static>> {
    let value: NaiveDateTime = picker.value();
    let parts = [
        (PickerField::Year, value.format("%Y").to_string(), "-"),
        (PickerField::Month, value.format("%m").to_string(), "-"),
        (PickerField::Day, value.format("%d").to_string(), " "),
        (PickerField::Hour, value.format("%H").to_string(), ":"),
        (PickerField::Minute, value.format("%M").to_string(), ""),
    ];

    let mut spans = Vec::new();
    for (field, text, sep) in parts {
        let field_style = if field == picker.field() {
            Style::default()
                .fg(style::BLUE)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default()
        };
        spans.push(Span::styled(text, field_style));
        if !sep.is_empty() {
            spans.push(Span::raw(sep));
        }
    }
    spans
}

fn render_date_picker_dialog(f: &mut ratatui::Frame, state: &AppState) {
    if !matches!(state.mode, Mode::PickDate { .. }) {
        return;
    }
    let Some(picker) = &state.picker else {
        return;
    };

    let area = centered_rect_fixed_height(60, 5, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Select date and time")
        .border_style(Style::default().fg(style::BLUE));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Value
            Constraint::Length(1), // Spacer
            Constraint::Min(1),    // Help
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(Line::from(picker_spans(picker))).alignment(Alignment::Center),
        layout[0],
    );
    f.render_widget(
        Paragraph::new("←→ field • ↑↓ change • Enter: confirm • Esc: cancel")
            .style(Style::default().fg(style::GRAY_DIM)),
        layout[2],
    );
}

fn render_confirm_delete_dialog(f: &mut ratatui::Frame, state: &AppState) {
    let Mode::ConfirmDelete { id, ref text } = state.mode else {
        return;
    };

    let area = centered_rect_fixed_height(60, 6, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Delete Reminder")
        .border_style(Style::default().fg(style::RED));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Question
            Constraint::Length(1), // Reminder text
            Constraint::Min(1),    // Help
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new("Are you sure you want to delete this reminder?"),
        layout[0],
    );
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                format!("#{} ", id.short()),
                Style::default().fg(style::GRAY_DIM),
            ),
            Span::styled(text.clone(), Style::default().add_modifier(Modifier::BOLD)),
        ])),
        layout[1],
    );
    f.render_widget(
        Paragraph::new("y/Enter: delete • n/Esc: cancel")
            .style(Style::default().fg(style::GRAY_DIM)),
        layout[2],
    );
}

fn render_notice_dialog(f: &mut ratatui::Frame, state: &AppState) {
    let Mode::Notice { ref message } = state.mode else {
        return;
    };

    let area = centered_rect_fixed_height(50, 5, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title("Cannot add reminder")
        .border_style(Style::default().fg(style::YELLOW));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    f.render_widget(
        Paragraph::new(message.clone()).wrap(Wrap { trim: true }),
        layout[0],
    );
    f.render_widget(
        Paragraph::new("Press any key").style(Style::default().fg(style::GRAY_DIM)),
        layout[1],
    );
}
