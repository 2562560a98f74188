//! HID keyboard usage IDs, modifier/LED bitmasks and the pseudo key codes
//! used by the layer tables.

// Letters
pub const KEY_A: u8 = 0x04;
pub const KEY_B: u8 = 0x05;
pub const KEY_C: u8 = 0x06;
pub const KEY_D: u8 = 0x07;
pub const KEY_E: u8 = 0x08;
pub const KEY_F: u8 = 0x09;
pub const KEY_G: u8 = 0x0A;
pub const KEY_H: u8 = 0x0B;
pub const KEY_I: u8 = 0x0C;
pub const KEY_J: u8 = 0x0D;
pub const KEY_K: u8 = 0x0E;
pub const KEY_L: u8 = 0x0F;
pub const KEY_M: u8 = 0x10;
pub const KEY_N: u8 = 0x11;
pub const KEY_O: u8 = 0x12;
pub const KEY_P: u8 = 0x13;
pub const KEY_Q: u8 = 0x14;
pub const KEY_R: u8 = 0x15;
pub const KEY_S: u8 = 0x16;
pub const KEY_T: u8 = 0x17;
pub const KEY_U: u8 = 0x18;
pub const KEY_V: u8 = 0x19;
pub const KEY_W: u8 = 0x1A;
pub const KEY_X: u8 = 0x1B;
pub const KEY_Y: u8 = 0x1C;
pub const KEY_Z: u8 = 0x1D;

// Number row
pub const KEY_1: u8 = 0x1E;
pub const KEY_2: u8 = 0x1F;
pub const KEY_3: u8 = 0x20;
pub const KEY_4: u8 = 0x21;
pub const KEY_5: u8 = 0x22;
pub const KEY_6: u8 = 0x23;
pub const KEY_7: u8 = 0x24;
pub const KEY_8: u8 = 0x25;
pub const KEY_9: u8 = 0x26;
pub const KEY_0: u8 = 0x27;

pub const KEY_ENTER: u8 = 0x28;
pub const KEY_ESCAPE: u8 = 0x29;
pub const KEY_BACKSPACE: u8 = 0x2A;
pub const KEY_TAB: u8 = 0x2B;
pub const KEY_SPACEBAR: u8 = 0x2C;
pub const KEY_MINUS: u8 = 0x2D;
pub const KEY_EQUAL: u8 = 0x2E;
pub const KEY_LEFTBRACKET: u8 = 0x2F;
pub const KEY_RIGHTBRACKET: u8 = 0x30;
pub const KEY_BACKSLASH: u8 = 0x31;
pub const KEY_SEMICOLON: u8 = 0x33;
pub const KEY_QUOTE: u8 = 0x34;
pub const KEY_GRAVE_ACCENT: u8 = 0x35;
pub const KEY_COMMA: u8 = 0x36;
pub const KEY_PERIOD: u8 = 0x37;
pub const KEY_SLASH: u8 = 0x38;
pub const KEY_CAPS_LOCK: u8 = 0x39;

pub const KEY_F1: u8 = 0x3A;
pub const KEY_F2: u8 = 0x3B;
pub const KEY_F3: u8 = 0x3C;
pub const KEY_F4: u8 = 0x3D;
pub const KEY_F5: u8 = 0x3E;
pub const KEY_F6: u8 = 0x3F;
pub const KEY_F7: u8 = 0x40;
pub const KEY_F8: u8 = 0x41;
pub const KEY_F9: u8 = 0x42;
pub const KEY_F10: u8 = 0x43;
pub const KEY_F11: u8 = 0x44;
pub const KEY_F12: u8 = 0x45;

pub const KEY_PRINTSCREEN: u8 = 0x46;
pub const KEY_SCROLL_LOCK: u8 = 0x47;
pub const KEY_PAUSE: u8 = 0x48;
pub const KEY_INSERT: u8 = 0x49;
pub const KEY_HOME: u8 = 0x4A;
pub const KEY_PAGEUP: u8 = 0x4B;
pub const KEY_DELETE: u8 = 0x4C;
pub const KEY_END: u8 = 0x4D;
pub const KEY_PAGEDOWN: u8 = 0x4E;
pub const KEY_RIGHTARROW: u8 = 0x4F;
pub const KEY_LEFTARROW: u8 = 0x50;
pub const KEY_DOWNARROW: u8 = 0x51;
pub const KEY_UPARROW: u8 = 0x52;

// Keypad
pub const KEYPAD_NUM_LOCK: u8 = 0x53;
pub const KEYPAD_DIVIDE: u8 = 0x54;
pub const KEYPAD_MULTIPLY: u8 = 0x55;
pub const KEYPAD_SUBTRACT: u8 = 0x56;
pub const KEYPAD_ADD: u8 = 0x57;
pub const KEYPAD_ENTER: u8 = 0x58;
pub const KEYPAD_1: u8 = 0x59;
pub const KEYPAD_2: u8 = 0x5A;
pub const KEYPAD_3: u8 = 0x5B;
pub const KEYPAD_4: u8 = 0x5C;
pub const KEYPAD_5: u8 = 0x5D;
pub const KEYPAD_6: u8 = 0x5E;
pub const KEYPAD_7: u8 = 0x5F;
pub const KEYPAD_8: u8 = 0x60;
pub const KEYPAD_9: u8 = 0x61;
pub const KEYPAD_0: u8 = 0x62;
pub const KEYPAD_DOT: u8 = 0x63;
pub const KEYPAD_EQUAL: u8 = 0x67;

pub const KEY_NONUS_BACKSLASH: u8 = 0x64;
pub const KEY_APPLICATION: u8 = 0x65;
pub const KEY_F13: u8 = 0x68;
pub const KEY_F14: u8 = 0x69;
pub const KEY_MUTE: u8 = 0x7F;
pub const KEY_VOLUME_UP: u8 = 0x80;
pub const KEY_VOLUME_DOWN: u8 = 0x81;
pub const KEY_INTERNATIONAL1: u8 = 0x87;
pub const KEY_INTERNATIONAL3: u8 = 0x89;
pub const KEY_LANG1: u8 = 0x90;
pub const KEY_LANG2: u8 = 0x91;

// Modifiers occupy a contiguous usage range; their report bit is
// 1 << (usage - KEY_LEFTCONTROL).
pub const KEY_LEFTCONTROL: u8 = 0xE0;
pub const KEY_LEFTSHIFT: u8 = 0xE1;
pub const KEY_LEFTALT: u8 = 0xE2;
pub const KEY_LEFT_GUI: u8 = 0xE3;
pub const KEY_RIGHTCONTROL: u8 = 0xE4;
pub const KEY_RIGHTSHIFT: u8 = 0xE5;
pub const KEY_RIGHTALT: u8 = 0xE6;
pub const KEY_RIGHT_GUI: u8 = 0xE7;

pub const MOD_LEFTCONTROL: u8 = 0x01;
pub const MOD_LEFTSHIFT: u8 = 0x02;
pub const MOD_LEFTALT: u8 = 0x04;
pub const MOD_LEFT_GUI: u8 = 0x08;
pub const MOD_RIGHTCONTROL: u8 = 0x10;
pub const MOD_RIGHTSHIFT: u8 = 0x20;
pub const MOD_RIGHTALT: u8 = 0x40;
pub const MOD_RIGHT_GUI: u8 = 0x80;
pub const MOD_SHIFT: u8 = MOD_LEFTSHIFT | MOD_RIGHTSHIFT;

// Pseudo key codes above the HID usage range. Fn and the two dual-role
// thumb-shift keys are contiguous so their flag bit is
// 1 << (code - KEY_FN).
pub const KEY_FN: u8 = 0xF0;
pub const KEY_LEFT_THUMBSHIFT: u8 = 0xF1;
pub const KEY_RIGHT_THUMBSHIFT: u8 = 0xF2;
pub const KEY_BASE: u8 = 0xF4;
pub const KEY_KANA: u8 = 0xF5;
pub const KEY_OS: u8 = 0xF6;

// Flag-byte bits written by the Fn-class pseudo keys. Bit 0 doubles as
// the ScrollLock indicator when the snapshot is finalized.
pub const FLAG_FN: u8 = 0x01;
pub const FLAG_LEFT_THUMBSHIFT: u8 = 0x02;
pub const FLAG_RIGHT_THUMBSHIFT: u8 = 0x04;
pub const FLAG_THUMBSHIFT: u8 = FLAG_LEFT_THUMBSHIFT | FLAG_RIGHT_THUMBSHIFT;

// Host LED/lock bits (boot-protocol output report).
pub const LED_NUM_LOCK: u8 = 0x01;
pub const LED_CAPS_LOCK: u8 = 0x02;
pub const LED_SCROLL_LOCK: u8 = 0x04;
pub const LED_COMPOSE: u8 = 0x08;
pub const LED_KANA: u8 = 0x10;

/// Sentinel padding value for unused snapshot key slots. Scan codes are
/// bounded by the 8x12 matrix (0..=95), so the sentinel cannot collide.
pub const VOID_KEY: u8 = 0xFF;

/// Report bit for a standard modifier usage, `None` for ordinary keys.
pub fn modifier_bit(key: u8) -> Option<u8> {
    if (KEY_LEFTCONTROL..=KEY_RIGHT_GUI).contains(&key) {
        Some(1 << (key - KEY_LEFTCONTROL))
    } else {
        None
    }
}

/// Flag-byte bit for an Fn-class pseudo key, `None` otherwise.
pub fn fn_flag_bit(key: u8) -> Option<u8> {
    if (KEY_FN..=KEY_RIGHT_THUMBSHIFT).contains(&key) {
        Some(1 << (key - KEY_FN))
    } else {
        None
    }
}
