use crate::keycodes::{
    KEY_A, KEY_C, KEY_D, KEY_ENTER, KEY_K, KEY_M, KEY_P, KEY_Q, KEY_R, KEY_V, KEY_W,
};
use serde::{Deserialize, Serialize};

pub const MATRIX_ROWS: u8 = 8;
pub const MATRIX_COLS: u8 = 12;

/// Matrix-position identifier for one physical key: `12 * row + column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScanCode(pub u8);

impl ScanCode {
    pub const fn new(row: u8, column: u8) -> Self {
        Self(MATRIX_COLS * row + column)
    }

    pub const fn row(self) -> u8 {
        self.0 / MATRIX_COLS
    }

    pub const fn column(self) -> u8 {
        self.0 % MATRIX_COLS
    }

    pub const fn index(self) -> u8 {
        self.0
    }
}

/// Transmission directive returned to the USB transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Xmit {
    /// Current state matches the last transmitted state; send nothing.
    None,
    /// The report buffer is populated and ready to send verbatim.
    Normal,
}

/// Highest valid OS-mode selector value.
pub const OS_MAX: u8 = 1;

/// Host OS personality, persisted across sessions. Each mode carries a
/// signature keystroke sequence typed into the next report so the paired
/// host utility can track the active personality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OsMode {
    Pc,
    Mac,
}

impl OsMode {
    pub fn from_byte(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Pc),
            1 => Some(Self::Mac),
            _ => None,
        }
    }

    pub fn as_byte(self) -> u8 {
        match self {
            Self::Pc => 0,
            Self::Mac => 1,
        }
    }

    pub fn cycle(self) -> Self {
        match self {
            Self::Pc => Self::Mac,
            Self::Mac => Self::Pc,
        }
    }

    pub fn signature(self) -> &'static [u8] {
        match self {
            Self::Pc => &[KEY_P, KEY_C, KEY_ENTER],
            Self::Mac => &[KEY_M, KEY_A, KEY_C, KEY_ENTER],
        }
    }
}

/// Base (Romaji-side) layout selector, persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BaseLayout {
    Qwerty,
    Dvorak,
}

impl BaseLayout {
    pub fn from_byte(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Qwerty),
            1 => Some(Self::Dvorak),
            _ => None,
        }
    }

    pub fn as_byte(self) -> u8 {
        match self {
            Self::Qwerty => 0,
            Self::Dvorak => 1,
        }
    }

    pub fn cycle(self) -> Self {
        match self {
            Self::Qwerty => Self::Dvorak,
            Self::Dvorak => Self::Qwerty,
        }
    }

    pub fn signature(self) -> &'static [u8] {
        match self {
            Self::Qwerty => &[KEY_Q, KEY_W, KEY_ENTER],
            Self::Dvorak => &[KEY_D, KEY_V, KEY_ENTER],
        }
    }
}

/// Input-method layout selector, persisted across sessions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum KanaLayout {
    Romaji,
    Kana,
}

impl KanaLayout {
    pub fn from_byte(value: u8) -> Option<Self> {
        match value {
            0 => Some(Self::Romaji),
            1 => Some(Self::Kana),
            _ => None,
        }
    }

    pub fn as_byte(self) -> u8 {
        match self {
            Self::Romaji => 0,
            Self::Kana => 1,
        }
    }

    pub fn cycle(self) -> Self {
        match self {
            Self::Romaji => Self::Kana,
            Self::Kana => Self::Romaji,
        }
    }

    pub fn signature(self) -> &'static [u8] {
        match self {
            Self::Romaji => &[KEY_R, KEY_ENTER],
            Self::Kana => &[KEY_K, KEY_ENTER],
        }
    }
}
