//! Static scan-code mapping tables for the 8x12 matrix: the Fn layer, the
//! NumLock keypad overlay, the two base grids and the kana grid.

use crate::keycodes::*;
use crate::types::{BaseLayout, MATRIX_COLS, MATRIX_ROWS};

pub const ROWS: usize = MATRIX_ROWS as usize;
pub const COLS: usize = MATRIX_COLS as usize;

/// Fn-layer cell: up to four key codes emitted together, zero-terminated.
/// Multi-key cells express chorded shortcuts (one physical key, one report).
pub type FnChord = [u8; 4];

const NONE: FnChord = [0; 4];

#[rustfmt::skip]
pub const MATRIX_FN: [[FnChord; COLS]; ROWS] = [
    // Row 0: mode switches and media keys
    [NONE, [KEY_KANA, 0, 0, 0], [KEY_OS, 0, 0, 0], NONE, NONE, NONE, NONE, NONE, NONE,
     [KEY_MUTE, 0, 0, 0], [KEY_VOLUME_DOWN, 0, 0, 0], [KEY_PAUSE, 0, 0, 0]],
    // Row 1
    [[KEY_INSERT, 0, 0, 0], [KEY_BASE, 0, 0, 0], NONE, NONE, NONE, NONE, NONE, NONE, NONE,
     NONE, [KEY_VOLUME_UP, 0, 0, 0], [KEYPAD_NUM_LOCK, 0, 0, 0]],
    // Row 2
    [[KEY_LEFTCONTROL, KEY_LEFTSHIFT, KEY_Z, 0], NONE, NONE, NONE, NONE, NONE, NONE, NONE,
     NONE, NONE, NONE, [KEY_PRINTSCREEN, 0, 0, 0]],
    // Row 3
    [[KEY_DELETE, 0, 0, 0], NONE, NONE, NONE, NONE, NONE, NONE, NONE,
     [KEY_LEFTCONTROL, KEY_LEFTSHIFT, KEY_LEFTARROW, 0], [KEY_LEFTSHIFT, KEY_UPARROW, 0, 0],
     [KEY_LEFTCONTROL, KEY_LEFTSHIFT, KEY_RIGHTARROW, 0], [KEY_SCROLL_LOCK, 0, 0, 0]],
    // Row 4: Ctrl shortcuts on the left hand, word navigation on the right
    [[KEY_LEFTCONTROL, KEY_Q, 0, 0], [KEY_LEFTCONTROL, KEY_W, 0, 0], [KEY_PAGEUP, 0, 0, 0],
     [KEY_LEFTCONTROL, KEY_R, 0, 0], [KEY_LEFTCONTROL, KEY_T, 0, 0], NONE, NONE,
     [KEY_LEFTCONTROL, KEY_HOME, 0, 0], [KEY_LEFTCONTROL, KEY_LEFTARROW, 0, 0],
     [KEY_UPARROW, 0, 0, 0], [KEY_LEFTCONTROL, KEY_RIGHTARROW, 0, 0],
     [KEY_LEFTCONTROL, KEY_END, 0, 0]],
    // Row 5: home row, cursor cluster on the right
    [[KEY_LEFTCONTROL, KEY_A, 0, 0], [KEY_LEFTCONTROL, KEY_S, 0, 0], [KEY_PAGEDOWN, 0, 0, 0],
     [KEY_LEFTCONTROL, KEY_F, 0, 0], [KEY_LEFTCONTROL, KEY_G, 0, 0], [KEY_ESCAPE, 0, 0, 0],
     [KEY_APPLICATION, 0, 0, 0], [KEY_HOME, 0, 0, 0], [KEY_LEFTARROW, 0, 0, 0],
     [KEY_DOWNARROW, 0, 0, 0], [KEY_RIGHTARROW, 0, 0, 0], [KEY_END, 0, 0, 0]],
    // Row 6: clipboard shortcuts, selection on the right; F13/F14 drive the
    // kana indicator
    [[KEY_LEFTCONTROL, KEY_Z, 0, 0], [KEY_LEFTCONTROL, KEY_X, 0, 0],
     [KEY_LEFTCONTROL, KEY_C, 0, 0], [KEY_LEFTCONTROL, KEY_V, 0, 0], [KEY_F14, 0, 0, 0],
     [KEY_TAB, 0, 0, 0], [KEY_ENTER, 0, 0, 0], [KEY_F13, 0, 0, 0],
     [KEY_LEFTSHIFT, KEY_LEFTARROW, 0, 0], [KEY_LEFTSHIFT, KEY_DOWNARROW, 0, 0],
     [KEY_LEFTSHIFT, KEY_RIGHTARROW, 0, 0], [KEY_LEFTSHIFT, KEY_END, 0, 0]],
    // Row 7: thumb row has no Fn meanings
    [NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE, NONE],
];

#[rustfmt::skip]
pub const MATRIX_NUMLOCK: [[u8; COLS]; ROWS] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, KEYPAD_DIVIDE, 0],
    [0, 0, 0, 0, 0, 0, 0, KEYPAD_EQUAL, KEYPAD_7, KEYPAD_8, KEYPAD_9, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, KEYPAD_4, KEYPAD_5, KEYPAD_6, KEYPAD_MULTIPLY],
    [0, 0, 0, 0, 0, 0, 0, 0, KEYPAD_1, KEYPAD_2, KEYPAD_3, KEYPAD_SUBTRACT],
    [0, 0, 0, 0, 0, 0, KEYPAD_ENTER, 0, KEYPAD_0, 0, KEYPAD_DOT, KEYPAD_ADD],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
];

#[rustfmt::skip]
pub const MATRIX_QWERTY: [[u8; COLS]; ROWS] = [
    [KEY_ESCAPE, KEY_F1, KEY_F2, KEY_F3, KEY_F4, KEY_F5, KEY_F6, KEY_F7, KEY_F8, KEY_F9,
     KEY_F10, KEY_F11],
    [KEY_F12, KEY_GRAVE_ACCENT, KEY_NONUS_BACKSLASH, 0, 0, 0, 0, 0, 0, 0,
     KEY_INTERNATIONAL3, KEY_CAPS_LOCK],
    [KEY_LEFTSHIFT, KEY_LANG2, KEY_LANG1, 0, 0, 0, 0, 0, 0, 0,
     KEY_INTERNATIONAL1, KEY_RIGHTSHIFT],
    [KEY_1, KEY_2, KEY_3, KEY_4, KEY_5, KEY_6, KEY_7, KEY_8, KEY_9, KEY_0,
     KEY_MINUS, KEY_EQUAL],
    [KEY_Q, KEY_W, KEY_E, KEY_R, KEY_T, KEY_LEFTBRACKET, KEY_RIGHTBRACKET, KEY_Y, KEY_U,
     KEY_I, KEY_O, KEY_P],
    [KEY_A, KEY_S, KEY_D, KEY_F, KEY_G, KEY_QUOTE, KEY_BACKSLASH, KEY_H, KEY_J, KEY_K,
     KEY_L, KEY_SEMICOLON],
    [KEY_Z, KEY_X, KEY_C, KEY_V, KEY_B, KEY_TAB, KEY_ENTER, KEY_N, KEY_M, KEY_COMMA,
     KEY_PERIOD, KEY_SLASH],
    [KEY_LEFTCONTROL, KEY_LEFT_GUI, KEY_LEFTALT, KEY_FN, KEY_LEFT_THUMBSHIFT, 0, 0,
     KEY_RIGHT_THUMBSHIFT, KEY_RIGHTALT, KEY_RIGHT_GUI, KEY_APPLICATION, KEY_RIGHTCONTROL],
];

// Dvorak differs from QWERTY only in the typing block (rows 4-6).
#[rustfmt::skip]
pub const MATRIX_DVORAK: [[u8; COLS]; ROWS] = [
    MATRIX_QWERTY[0],
    MATRIX_QWERTY[1],
    MATRIX_QWERTY[2],
    MATRIX_QWERTY[3],
    [KEY_QUOTE, KEY_COMMA, KEY_PERIOD, KEY_P, KEY_Y, KEY_SLASH, KEY_EQUAL, KEY_F, KEY_G,
     KEY_C, KEY_R, KEY_L],
    [KEY_A, KEY_O, KEY_E, KEY_U, KEY_I, KEY_LEFTBRACKET, KEY_RIGHTBRACKET, KEY_D, KEY_H,
     KEY_T, KEY_N, KEY_S],
    [KEY_SEMICOLON, KEY_Q, KEY_J, KEY_K, KEY_X, KEY_TAB, KEY_ENTER, KEY_B, KEY_M, KEY_W,
     KEY_V, KEY_Z],
    MATRIX_QWERTY[7],
];

// JIS-kana plane. Only the typing block is defined; zero cells fall back to
// the QWERTY grid so function and navigation keys keep working while kana
// input is selected.
#[rustfmt::skip]
pub const MATRIX_KANA: [[u8; COLS]; ROWS] = [
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
    [KEY_1, KEY_2, KEY_3, KEY_4, KEY_5, KEY_6, KEY_7, KEY_8, KEY_9, KEY_0,
     KEY_MINUS, KEY_INTERNATIONAL3],
    [KEY_Q, KEY_W, KEY_E, KEY_R, KEY_T, KEY_LEFTBRACKET, KEY_RIGHTBRACKET, KEY_Y, KEY_U,
     KEY_I, KEY_O, KEY_P],
    [KEY_A, KEY_S, KEY_D, KEY_F, KEY_G, KEY_QUOTE, KEY_BACKSLASH, KEY_H, KEY_J, KEY_K,
     KEY_L, KEY_SEMICOLON],
    [KEY_Z, KEY_X, KEY_C, KEY_V, KEY_B, KEY_TAB, KEY_ENTER, KEY_N, KEY_M, KEY_COMMA,
     KEY_PERIOD, KEY_INTERNATIONAL1],
    [0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0],
];

fn cell(code: u8) -> Option<(usize, usize)> {
    let row = (code / MATRIX_COLS) as usize;
    let col = (code % MATRIX_COLS) as usize;
    (row < ROWS).then_some((row, col))
}

/// Fn-layer lookup: the zero-terminated key-code sequence for a scan code.
pub fn get_key_fn(code: u8) -> &'static FnChord {
    match cell(code) {
        Some((row, col)) => &MATRIX_FN[row][col],
        None => &NONE,
    }
}

/// Raw NumLock-overlay cell; 0 when the position has no keypad meaning.
/// Callers gate this on the host's NumLock LED.
pub fn numpad_overlay(code: u8) -> u8 {
    match cell(code) {
        Some((row, col)) => MATRIX_NUMLOCK[row][col],
        None => 0,
    }
}

pub fn get_key_base(layout: BaseLayout, code: u8) -> u8 {
    let table = match layout {
        BaseLayout::Qwerty => &MATRIX_QWERTY,
        BaseLayout::Dvorak => &MATRIX_DVORAK,
    };
    match cell(code) {
        Some((row, col)) => table[row][col],
        None => 0,
    }
}

pub fn get_key_kana(code: u8) -> u8 {
    match cell(code) {
        Some((row, col)) => MATRIX_KANA[row][col],
        None => 0,
    }
}
