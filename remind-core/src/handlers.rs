use crate::app::AppState;
use crate::key_event::{AppKeyCode, AppKeyEvent};
use crate::picker::DatePicker;
use crate::types::*;
use crate::utils::{clamp_selection, selected_reminder};

/// Returns true when the user asked to quit.
pub fn handle_view_key(state: &mut AppState, key: &AppKeyEvent) -> bool {
    match key.code {
        AppKeyCode::Char('q') => return true,
        AppKeyCode::Up | AppKeyCode::Char('k') => {
            state.selected = state.selected.saturating_sub(1);
        }
        AppKeyCode::Down | AppKeyCode::Char('j') => {
            let max_idx = state.store.len().saturating_sub(1);
            state.selected = state.selected.saturating_add(1).min(max_idx);
        }
        AppKeyCode::Char('c') => complete_selected(state),
        AppKeyCode::Char('d') => request_delete_selected(state),
        AppKeyCode::Char('a') | AppKeyCode::Char('i') | AppKeyCode::Tab => {
            state.mode = Mode::EditText;
        }
        AppKeyCode::Char('t') => open_date_picker(state),
        _ => {}
    }
    false
}

pub fn handle_edit_text_key(state: &mut AppState, key: &AppKeyEvent) {
    if handle_single_line_textarea_key(&mut state.text_input, key) {
        state
            .draft
            .set_text(single_line_textarea_value(&state.text_input));
        return;
    }
    match key.code {
        AppKeyCode::Esc => state.mode = Mode::View,
        AppKeyCode::Tab => open_date_picker(state),
        AppKeyCode::Enter => submit_draft(state),
        _ => {}
    }
}

/// Commits the draft. On success the reminder goes to the store and the draft
/// is reset; on failure the draft stays as typed and a notice is shown.
pub fn submit_draft(state: &mut AppState) {
    match state.draft.commit() {
        Ok(reminder) => {
            state.store.add(reminder);
            state.draft.reset();
            state.text_input = single_line_textarea();
            state.selected = state.store.len().saturating_sub(1);
            state.mode = Mode::View;
        }
        Err(err) => {
            state.mode = Mode::Notice {
                message: err.to_string(),
            };
        }
    }
}

pub fn open_date_picker(state: &mut AppState) {
    let step = state.options.minute_step;
    let picker = match state.draft.due_at() {
        Some(due_at) => DatePicker::new(due_at, step),
        None => DatePicker::starting_at(state.now(), step),
    };
    state.picker = Some(picker);
    let return_to = std::mem::take(&mut state.mode);
    state.mode = Mode::PickDate {
        return_to: Box::new(return_to),
    };
}

fn close_date_picker(state: &mut AppState) {
    state.picker = None;
    state.mode = match std::mem::take(&mut state.mode) {
        Mode::PickDate { return_to } => *return_to,
        other => other,
    };
}

pub fn handle_picker_key(state: &mut AppState, key: &AppKeyEvent) {
    let Some(picker) = state.picker.as_mut() else {
        close_date_picker(state);
        return;
    };
    match key.code {
        AppKeyCode::Left | AppKeyCode::BackTab | AppKeyCode::Char('h') => picker.prev_field(),
        AppKeyCode::Right | AppKeyCode::Tab | AppKeyCode::Char('l') => picker.next_field(),
        AppKeyCode::Up | AppKeyCode::Char('k') | AppKeyCode::Char('+') => picker.increment(),
        AppKeyCode::Down | AppKeyCode::Char('j') | AppKeyCode::Char('-') => picker.decrement(),
        AppKeyCode::Enter => {
            let value = picker.value();
            state.draft.set_due_at(value);
            close_date_picker(state);
        }
        AppKeyCode::Esc => {
            state.draft.clear_due_at();
            close_date_picker(state);
        }
        _ => {}
    }
}

pub fn complete_selected(state: &mut AppState) {
    if let Some(id) = selected_reminder(state).map(|r| r.id()) {
        state.store.complete(id);
    }
}

/// Opens the yes/no prompt; nothing is removed until it is answered.
pub fn request_delete_selected(state: &mut AppState) {
    let Some((id, text)) = selected_reminder(state).map(|r| (r.id(), r.text().to_string())) else {
        return;
    };
    state.mode = Mode::ConfirmDelete { id, text };
}

pub fn handle_confirm_delete_key(state: &mut AppState, key: &AppKeyEvent) {
    let Mode::ConfirmDelete { id, .. } = state.mode else {
        return;
    };
    match key.code {
        AppKeyCode::Char('y') | AppKeyCode::Char('Y') | AppKeyCode::Enter => {
            state.store.delete(id);
            clamp_selection(state);
            state.mode = Mode::View;
        }
        AppKeyCode::Char('n') | AppKeyCode::Char('N') | AppKeyCode::Esc => {
            state.mode = Mode::View;
        }
        _ => {}
    }
}

/// Any key dismisses the notice and puts the user back on the draft.
pub fn handle_notice_key(state: &mut AppState, _key: &AppKeyEvent) {
    state.mode = Mode::EditText;
}
