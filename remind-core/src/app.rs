use chrono::{Local, NaiveDateTime};
use tui_textarea::TextArea;

use crate::draft::Draft;
use crate::handlers::*;
use crate::key_event::AppKeyEvent;
use crate::picker::DatePicker;
use crate::store::ReminderStore;
use crate::types::*;

pub const DEFAULT_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
pub const DEFAULT_MINUTE_STEP: u32 = 5;

/// Display and picker preferences, filled in from the binary's config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppOptions {
    pub time_format: String,
    pub minute_step: u32,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            time_format: DEFAULT_TIME_FORMAT.to_string(),
            minute_step: DEFAULT_MINUTE_STEP,
        }
    }
}

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Everything the session owns: the committed list, the draft and the UI mode.
pub struct AppState {
    pub store: ReminderStore,
    pub draft: Draft,
    pub mode: Mode,
    pub selected: usize,
    pub text_input: TextArea<'static>,
    pub picker: Option<DatePicker>,
    pub options: AppOptions,
    clock: fn() -> NaiveDateTime,
}

impl AppState {
    pub fn new(options: AppOptions) -> Self {
        Self::with_clock(options, local_now)
    }

    /// Same as [`AppState::new`] but reads "now" from `clock`.
    pub fn with_clock(options: AppOptions, clock: fn() -> NaiveDateTime) -> Self {
        Self {
            store: ReminderStore::new(),
            draft: Draft::new(),
            mode: Mode::View,
            selected: 0,
            text_input: single_line_textarea(),
            picker: None,
            options,
            clock,
        }
    }

    pub fn now(&self) -> NaiveDateTime {
        (self.clock)()
    }

    /// Dispatch a key event to the handler for the current mode.
    /// Returns true if the app should quit.
    pub fn handle_key(&mut self, key: AppKeyEvent) -> bool {
        if key.is_ctrl_c() {
            return true;
        }
        match self.mode {
            Mode::View => return handle_view_key(self, &key),
            Mode::EditText => handle_edit_text_key(self, &key),
            Mode::PickDate { .. } => handle_picker_key(self, &key),
            Mode::ConfirmDelete { .. } => handle_confirm_delete_key(self, &key),
            Mode::Notice { .. } => handle_notice_key(self, &key),
        }
        false
    }
}
