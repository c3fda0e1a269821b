//! Keyboard input
//!
//! The host delivers key-down events as key names. Only the two arrow keys
//! mean anything; every other name is ignored.

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
}

impl Key {
    pub fn as_str(&self) -> &'static str {
        match self {
            Key::ArrowLeft => "arrow-left",
            Key::ArrowRight => "arrow-right",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "arrow-left" => Some(Key::ArrowLeft),
            "arrow-right" => Some(Key::ArrowRight),
            _ => None,
        }
    }
}
