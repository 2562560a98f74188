//! The two resolvable mapping layers (base and kana) behind a common
//! contract, selected by the engine according to the active input-method
//! mode.

use crate::keycodes::*;
use crate::matrix;
use crate::report::Report;
use crate::storage::{persist, Slot, Storage};
use crate::types::{BaseLayout, KanaLayout, Xmit};
use tracing::debug;

/// A mapping layer able to resolve a finalized snapshot into a report.
///
/// `process_keys` receives the report already cleared and the previous
/// processed snapshot for delta decisions; `switch` advances the layer's
/// persisted selector and types the new mode's signature keystrokes.
pub trait KeyLayer {
    fn get_key(&self, code: u8) -> u8;

    fn process_keys(
        &mut self,
        current: &Report,
        processed: &Report,
        report: &mut Report,
        led: u8,
    ) -> Xmit;

    fn switch(&mut self, report: &mut Report, storage: &mut dyn Storage, dedup: bool);
}

/// Tap meaning of a dual-role thumb-shift key, due when the flag was
/// released with no other key activity on either side of the release.
fn thumb_tap_key(current: &Report, processed: &Report) -> Option<u8> {
    if !current.is_empty() || !processed.is_empty() {
        return None;
    }
    if current.flags & FLAG_THUMBSHIFT != 0 {
        return None;
    }
    if processed.flags & FLAG_LEFT_THUMBSHIFT != 0 {
        Some(KEY_BACKSPACE)
    } else if processed.flags & FLAG_RIGHT_THUMBSHIFT != 0 {
        Some(KEY_SPACEBAR)
    } else {
        None
    }
}

/// Shift meaning of held thumb-shift flags. Only applied while ordinary
/// keys accompany the flag, so a lone press stays withheld until the tap
/// or hold resolves.
fn thumb_shift_mods(current: &Report) -> u8 {
    if current.is_empty() {
        return 0;
    }
    let mut mods = 0;
    if current.flags & FLAG_LEFT_THUMBSHIFT != 0 {
        mods |= MOD_LEFTSHIFT;
    }
    if current.flags & FLAG_RIGHT_THUMBSHIFT != 0 {
        mods |= MOD_RIGHTSHIFT;
    }
    mods
}

/// Base (Romaji/QWERTY-side) layer.
#[derive(Debug)]
pub struct BaseLayer {
    layout: BaseLayout,
}

impl BaseLayer {
    pub fn new(layout: BaseLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> BaseLayout {
        self.layout
    }
}

impl KeyLayer for BaseLayer {
    fn get_key(&self, code: u8) -> u8 {
        matrix::get_key_base(self.layout, code)
    }

    fn process_keys(
        &mut self,
        current: &Report,
        processed: &Report,
        report: &mut Report,
        led: u8,
    ) -> Xmit {
        let mut modifiers = current.modifiers | thumb_shift_mods(current);
        for &code in current.keys() {
            let overlay = if led & LED_NUM_LOCK != 0 {
                matrix::numpad_overlay(code)
            } else {
                0
            };
            let key = if overlay != 0 { overlay } else { self.get_key(code) };
            if key == 0 || fn_flag_bit(key).is_some() {
                continue;
            }
            if let Some(bit) = modifier_bit(key) {
                modifiers |= bit;
                continue;
            }
            report.push_key(key);
        }
        if let Some(tap) = thumb_tap_key(current, processed) {
            report.push_key(tap);
        }
        report.modifiers = modifiers;
        Xmit::Normal
    }

    fn switch(&mut self, report: &mut Report, storage: &mut dyn Storage, dedup: bool) {
        self.layout = self.layout.cycle();
        debug!(layout = ?self.layout, "switched base layout");
        persist(storage, Slot::Base, self.layout.as_byte(), dedup);
        for &key in self.layout.signature() {
            report.push_key(key);
        }
    }
}

/// Input-method (kana) layer. Holds the host-visible kana indicator state
/// alongside the layout selector.
#[derive(Debug)]
pub struct KanaLayer {
    layout: KanaLayout,
    indicator: bool,
}

impl KanaLayer {
    pub fn new(layout: KanaLayout) -> Self {
        Self {
            layout,
            indicator: false,
        }
    }

    pub fn layout(&self) -> KanaLayout {
        self.layout
    }

    /// Kana resolution applies only in kana layout and only while no
    /// non-shift modifier is held, so chords like Ctrl+C keep their base
    /// meaning in kana mode.
    pub fn is_active(&self, current: &Report) -> bool {
        self.layout == KanaLayout::Kana && current.modifiers & !MOD_SHIFT == 0
    }

    pub fn set_indicator(&mut self, on: bool) {
        self.indicator = on;
    }

    pub fn indicator(&self) -> bool {
        self.indicator
    }

    /// Folds the kana indicator into the host LED byte for the transport.
    pub fn control_led(&self, report: u8) -> u8 {
        if self.indicator {
            report | LED_KANA
        } else {
            report & !LED_KANA
        }
    }
}

impl KeyLayer for KanaLayer {
    fn get_key(&self, code: u8) -> u8 {
        let key = matrix::get_key_kana(code);
        if key != 0 {
            key
        } else {
            // Cells outside the kana typing block keep their QWERTY meaning.
            matrix::get_key_base(BaseLayout::Qwerty, code)
        }
    }

    fn process_keys(
        &mut self,
        current: &Report,
        processed: &Report,
        report: &mut Report,
        _led: u8,
    ) -> Xmit {
        // JIS kana reaches its shifted plane through the keyboard shift
        // bits, so held thumb flags fold into the modifier byte here too.
        let mut modifiers = current.modifiers | thumb_shift_mods(current);
        for &code in current.keys() {
            let key = self.get_key(code);
            if key == 0 || fn_flag_bit(key).is_some() {
                continue;
            }
            if let Some(bit) = modifier_bit(key) {
                modifiers |= bit;
                continue;
            }
            report.push_key(key);
        }
        if let Some(tap) = thumb_tap_key(current, processed) {
            report.push_key(tap);
        }
        report.modifiers = modifiers;
        Xmit::Normal
    }

    fn switch(&mut self, report: &mut Report, storage: &mut dyn Storage, dedup: bool) {
        self.layout = self.layout.cycle();
        debug!(layout = ?self.layout, "switched kana layout");
        persist(storage, Slot::Kana, self.layout.as_byte(), dedup);
        for &key in self.layout.signature() {
            report.push_key(key);
        }
    }
}
