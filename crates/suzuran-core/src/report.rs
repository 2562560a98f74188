use crate::keycodes::VOID_KEY;

/// Number of non-modifier key slots in a boot-protocol report.
pub const REPORT_KEYS: usize = 6;

/// Fixed 8-byte keyboard report.
///
/// The same shape serves as the outgoing report handed to the USB transport
/// and as the engine's `current` / `hold` / `processed` snapshots, so all of
/// them can be compared and copied wholesale. Unused key slots always hold
/// [`VOID_KEY`], which makes derived equality byte-exact; the occupied count
/// is tracked explicitly instead of scanning for the sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
    pub modifiers: u8,
    /// Fn/thumb-shift flag bits during intake; bit 0 doubles as the
    /// ScrollLock indicator once the snapshot is finalized.
    pub flags: u8,
    keys: [u8; REPORT_KEYS],
    len: u8,
}

impl Default for Report {
    fn default() -> Self {
        Self {
            modifiers: 0,
            flags: 0,
            keys: [VOID_KEY; REPORT_KEYS],
            len: 0,
        }
    }
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empties every byte of the report. Called before population on every
    /// transmit path so a "normal" directive never exposes stale slots.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Appends a key code to the next free slot. Returns false when all six
    /// slots are occupied; the key is silently dropped (HID report cap).
    pub fn push_key(&mut self, key: u8) -> bool {
        let len = self.len as usize;
        if len < REPORT_KEYS {
            self.keys[len] = key;
            self.len += 1;
            true
        } else {
            false
        }
    }

    /// Occupied key slots, in press order.
    pub fn keys(&self) -> &[u8] {
        &self.keys[..self.len as usize]
    }

    pub fn contains_key(&self, key: u8) -> bool {
        self.keys().contains(&key)
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the non-modifier key slots match, ignoring the modifier and
    /// flag bytes (the slots-2..7 comparison of the disambiguation logic).
    pub fn keys_eq(&self, other: &Report) -> bool {
        self.keys == other.keys
    }

    /// Wire form: modifiers, reserved byte, six key slots. Unused slots are
    /// rendered as 0 per the boot protocol.
    pub fn as_bytes(&self) -> [u8; 8] {
        let mut bytes = [0u8; 8];
        bytes[0] = self.modifiers;
        bytes[1] = self.flags;
        for (slot, &key) in bytes[2..].iter_mut().zip(self.keys.iter()) {
            *slot = if key == VOID_KEY { 0 } else { key };
        }
        bytes
    }
}
