/// Terminal-independent key press, converted from crossterm by the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppKeyEvent {
    pub code: AppKeyCode,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppKeyCode {
    Char(char),
    Backspace,
    Enter,
    Left,
    Right,
    Up,
    Down,
    Tab,
    BackTab,
    Delete,
    Home,
    End,
    Esc,
    Other,
}

impl AppKeyEvent {
    pub fn plain(code: AppKeyCode) -> Self {
        Self {
            code,
            ctrl: false,
            alt: false,
            shift: false,
        }
    }

    pub fn is_ctrl_c(&self) -> bool {
        self.ctrl && self.code == AppKeyCode::Char('c')
    }
}

impl From<AppKeyCode> for AppKeyEvent {
    fn from(code: AppKeyCode) -> Self {
        Self::plain(code)
    }
}
