use tui_textarea::{Input, Key, TextArea};

use crate::key_event::{AppKeyCode, AppKeyEvent};
use crate::reminder::ReminderId;

// ── Single-line TextArea helpers ────────────────────────────────────────

pub fn single_line_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_placeholder_text("Enter reminder text");
    textarea.set_cursor_line_style(ratatui::style::Style::default());
    textarea
}

pub fn single_line_textarea_value(textarea: &TextArea<'_>) -> String {
    textarea.lines().join("")
}

/// Feeds an editing key to the field. Returns true if the key was consumed.
pub fn handle_single_line_textarea_key(
    textarea: &mut TextArea<'static>,
    key: &AppKeyEvent,
) -> bool {
    let Some(input) = app_key_to_textarea_input(key) else {
        return false;
    };

    let consumed = textarea.input(input);
    consumed
        || matches!(
            key.code,
            AppKeyCode::Left | AppKeyCode::Right | AppKeyCode::Home | AppKeyCode::End
        )
}

fn app_key_to_textarea_input(key: &AppKeyEvent) -> Option<Input> {
    // ctrl+backspace/delete edit by word
    if key.ctrl {
        let word_key = match key.code {
            AppKeyCode::Backspace => Key::Backspace,
            AppKeyCode::Delete => Key::Delete,
            _ => return None,
        };
        return Some(Input {
            key: word_key,
            ctrl: false,
            alt: true,
            shift: key.shift,
        });
    }

    let mapped = match key.code {
        AppKeyCode::Char(c) => Key::Char(c),
        AppKeyCode::Backspace => Key::Backspace,
        AppKeyCode::Delete => Key::Delete,
        AppKeyCode::Left => Key::Left,
        AppKeyCode::Right => Key::Right,
        AppKeyCode::Home => Key::Home,
        AppKeyCode::End => Key::End,
        _ => return None,
    };

    Some(Input {
        key: mapped,
        ctrl: false,
        alt: key.alt,
        shift: key.shift,
    })
}

// ── Enums ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    View,
    EditText,
    /// `return_to` is the mode restored once the picker closes.
    PickDate {
        return_to: Box<Mode>,
    },
    ConfirmDelete {
        id: ReminderId,
        text: String,
    },
    Notice {
        message: String,
    },
}
