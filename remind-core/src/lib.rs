pub mod app;
pub mod draft;
pub mod handlers;
pub mod key_event;
pub mod picker;
pub mod reminder;
pub mod store;
pub mod style;
pub mod types;
pub mod ui;
pub mod utils;

pub use draft::{Draft, ValidationError};
pub use reminder::{Reminder, ReminderId};
pub use store::ReminderStore;
