//! Scan-cycle resolution engine.
//!
//! Each scan cycle the transport reports the pressed matrix positions
//! through [`Engine::on_pressed`] and then calls [`Engine::make_report`]
//! once. The engine accumulates the cycle into a snapshot, runs the
//! hold/tap disambiguation against the previous cycle, and resolves the
//! chosen snapshot through the Fn, kana or base layer into an 8-byte
//! boot-protocol report.

use lazy_static::lazy_static;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::keycodes::*;
use crate::layers::{BaseLayer, KanaLayer, KeyLayer};
use crate::matrix;
use crate::report::Report;
use crate::storage::{persist, MemStore, Slot, Storage};
use crate::types::{BaseLayout, KanaLayout, OsMode, ScanCode, Xmit};

/// Scan cycles a stable snapshot must survive before the quiescent path
/// resolves it.
pub const DEFAULT_TICK_THRESHOLD: u8 = 10;

fn default_tick_threshold() -> u8 {
    DEFAULT_TICK_THRESHOLD
}

/// Tunable engine parameters. Fields missing from a serialized profile
/// fall back to the defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default = "default_tick_threshold")]
    pub tick_threshold: u8,
    /// Skip selector writes whose stored value already matches.
    #[serde(default)]
    pub persist_dedup: bool,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            tick_threshold: DEFAULT_TICK_THRESHOLD,
            persist_dedup: false,
        }
    }
}

/// Relation of the finalized snapshot to the previous cycle's, driving the
/// hold/tap disambiguation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StateChange {
    /// Byte-exact match with the previous cycle.
    Quiescent,
    /// The ordinary key slots changed.
    KeysChanged,
    /// Key slots match; only modifiers or flag bits changed.
    ModifiersChanged,
}

impl StateChange {
    fn classify(current: &Report, hold: &Report) -> Self {
        if current == hold {
            Self::Quiescent
        } else if !current.keys_eq(hold) {
            Self::KeysChanged
        } else {
            Self::ModifiersChanged
        }
    }
}

/// Whether a snapshot carries state whose meaning is still open: a
/// dual-role flag or a shift that may yet turn out to be part of a tap.
fn undecided(snapshot: &Report) -> bool {
    snapshot.flags != 0 || snapshot.modifiers & MOD_SHIFT != 0
}

/// Whether the last resolved snapshot leaves room to treat new undecided
/// state as held. Only a resolution that already committed both a flag and
/// a shift closes that door.
fn accepts_holding(processed: &Report) -> bool {
    processed.flags == 0 || processed.modifiers & MOD_SHIFT == 0
}

pub struct Engine {
    profile: Profile,
    storage: Box<dyn Storage>,
    base: BaseLayer,
    kana: KanaLayer,
    os: OsMode,
    /// Modifier bits accumulated during the current intake cycle.
    modifiers: u8,
    current: Report,
    hold: Report,
    processed: Report,
    tick: u8,
    holding: bool,
    /// A tap key was injected into an otherwise idle state last resolution;
    /// the next pass must run even though the snapshots compare equal, so
    /// the tap key's release reaches the host.
    release_pending: bool,
    led: u8,
}

impl Engine {
    /// Builds an engine with the persisted mode selectors loaded from
    /// `storage`. Unreadable or out-of-range selectors fall back to the
    /// factory defaults.
    pub fn new(profile: Profile, mut storage: Box<dyn Storage>) -> Self {
        let base_layout = BaseLayout::from_byte(read_selector(&mut *storage, Slot::Base))
            .unwrap_or(BaseLayout::Qwerty);
        let kana_layout = KanaLayout::from_byte(read_selector(&mut *storage, Slot::Kana))
            .unwrap_or(KanaLayout::Romaji);
        let os =
            OsMode::from_byte(read_selector(&mut *storage, Slot::Os)).unwrap_or(OsMode::Pc);
        info!(?base_layout, ?kana_layout, ?os, "keyboard engine initialized");
        Self {
            profile,
            storage,
            base: BaseLayer::new(base_layout),
            kana: KanaLayer::new(kana_layout),
            os,
            modifiers: 0,
            current: Report::new(),
            hold: Report::new(),
            processed: Report::new(),
            tick: 0,
            holding: false,
            release_pending: false,
            led: 0,
        }
    }

    pub fn os(&self) -> OsMode {
        self.os
    }

    pub fn base_layout(&self) -> BaseLayout {
        self.base.layout()
    }

    pub fn kana_layout(&self) -> KanaLayout {
        self.kana.layout()
    }

    pub fn kana_indicator(&self) -> bool {
        self.kana.indicator()
    }

    pub fn led(&self) -> u8 {
        self.led
    }

    /// Records one pressed matrix position for the cycle in progress.
    ///
    /// Modifier positions accumulate into the modifier byte and dual-role
    /// positions set their flag bit; neither occupies a key slot. Ordinary
    /// positions are stored as raw scan codes and mapped only at
    /// resolution, so a layer switch mid-hold re-maps the held key.
    pub fn on_pressed(&mut self, code: ScanCode) {
        let key = self.base.get_key(code.index());
        if let Some(bit) = modifier_bit(key) {
            self.modifiers |= bit;
            return;
        }
        if let Some(flag) = fn_flag_bit(key) {
            self.current.flags = flag;
            return;
        }
        self.current.push_key(code.index());
    }

    /// Finalizes the cycle's snapshot and runs the disambiguation state
    /// machine. On [`Xmit::Normal`] the report is populated and ready for
    /// the transport; on [`Xmit::None`] it must not be sent.
    pub fn make_report(&mut self, report: &mut Report) -> Xmit {
        self.current.modifiers = self.modifiers;
        // ScrollLock borrows the Fn flag bit, turning the whole board
        // into the Fn plane while the host LED is lit.
        if self.led & LED_SCROLL_LOCK != 0 {
            self.current.flags |= FLAG_FN;
        }

        let xmit = match StateChange::classify(&self.current, &self.hold) {
            StateChange::Quiescent => self.on_quiescent(report),
            StateChange::KeysChanged => self.on_keys_changed(report),
            StateChange::ModifiersChanged => self.on_modifiers_changed(report),
        };

        self.current.clear();
        self.modifiers = 0;
        xmit
    }

    /// Nothing changed this cycle. A state held for a full threshold period
    /// is force-resolved, which is what finally commits a previously
    /// withheld ambiguous key.
    fn on_quiescent(&mut self, report: &mut Report) -> Xmit {
        self.tick += 1;
        if self.tick < self.profile.tick_threshold && !self.release_pending {
            return Xmit::None;
        }
        let snapshot = self.current;
        let xmit = self.process_keys(&snapshot, report);
        self.tick = 0;
        self.holding = false;
        xmit
    }

    /// The key set changed. An undecided flag or shift resolves as held;
    /// otherwise the previous cycle is committed before the new key set
    /// takes its place.
    fn on_keys_changed(&mut self, report: &mut Report) -> Xmit {
        if undecided(&self.current) {
            self.holding |= accepts_holding(&self.processed);
        }
        let snapshot = if self.holding { self.current } else { self.hold };
        let xmit = self.process_keys(&snapshot, report);
        self.holding = false;
        self.tick = 0;
        self.hold = self.current;
        xmit
    }

    /// Same key set, different modifiers or flags.
    fn on_modifiers_changed(&mut self, report: &mut Report) -> Xmit {
        self.tick = 0;
        self.hold = self.current;
        if undecided(&self.current) {
            self.holding = accepts_holding(&self.processed);
            let snapshot = self.current;
            return self.process_keys(&snapshot, report);
        }
        if (self.processed.flags != 0 && self.current.flags == 0)
            || (self.processed.modifiers & MOD_LEFTSHIFT != 0
                && self.current.modifiers & MOD_LEFTSHIFT == 0)
            || (self.processed.modifiers & MOD_RIGHTSHIFT != 0
                && self.current.modifiers & MOD_RIGHTSHIFT == 0)
        {
            // A flag or shift was released on its own; defer so the
            // quiescent path can resolve it as a tap.
            self.holding = true;
        }
        Xmit::None
    }

    fn process_keys(&mut self, current: &Report, report: &mut Report) -> Xmit {
        if *current == self.processed && !self.release_pending {
            return Xmit::None;
        }
        self.release_pending = false;
        report.clear();
        let xmit = if current.flags & FLAG_FN != 0 {
            self.process_keys_fn(current, report)
        } else if self.kana.is_active(current) {
            self.kana
                .process_keys(current, &self.processed, report, self.led)
        } else {
            self.base
                .process_keys(current, &self.processed, report, self.led)
        };
        if xmit == Xmit::Normal {
            self.processed = *current;
            // A tap key occupies the report without a backing key slot in
            // the snapshot, so its release needs one more pass.
            self.release_pending = current.is_empty() && !report.is_empty();
        }
        xmit
    }

    /// Fn-plane resolution: each held position expands to its chord of up
    /// to four key codes. Mode-switch pseudo keys fire once per press,
    /// gated on the position's absence from the last resolved snapshot.
    fn process_keys_fn(&mut self, current: &Report, report: &mut Report) -> Xmit {
        let mut modifiers = current.modifiers;
        for &code in current.keys() {
            let chord = matrix::get_key_fn(code);
            for &key in chord.iter().take_while(|&&key| key != 0) {
                match key {
                    KEY_BASE => {
                        if !self.processed.contains_key(code) {
                            self.base
                                .switch(report, &mut *self.storage, self.profile.persist_dedup);
                        }
                    }
                    KEY_KANA => {
                        if !self.processed.contains_key(code) {
                            self.kana
                                .switch(report, &mut *self.storage, self.profile.persist_dedup);
                        }
                    }
                    KEY_OS => {
                        if !self.processed.contains_key(code) {
                            self.switch_os(report);
                        }
                    }
                    KEY_F13 => self.kana.set_indicator(true),
                    KEY_F14 => self.kana.set_indicator(false),
                    KEY_LEFT_THUMBSHIFT => modifiers |= MOD_LEFTSHIFT,
                    KEY_RIGHT_THUMBSHIFT => modifiers |= MOD_RIGHTSHIFT,
                    _ => {
                        if let Some(bit) = modifier_bit(key) {
                            modifiers |= bit;
                        } else {
                            report.push_key(key);
                        }
                    }
                }
            }
        }
        report.modifiers = modifiers;
        Xmit::Normal
    }

    /// Advances the OS personality, persists it and types its signature.
    pub fn switch_os(&mut self, report: &mut Report) {
        self.os = self.os.cycle();
        info!(os = ?self.os, "switched OS mode");
        persist(
            &mut *self.storage,
            Slot::Os,
            self.os.as_byte(),
            self.profile.persist_dedup,
        );
        for &key in self.os.signature() {
            report.push_key(key);
        }
    }

    /// Accepts the host's LED output report and returns the byte for the
    /// indicator hardware, with the kana indicator folded in.
    pub fn control_led(&mut self, report: u8) -> u8 {
        self.led = report;
        self.kana.control_led(report)
    }

    /// Keypad-overlay mapping for a position, active only while the host
    /// NumLock LED is lit. Returns 0 for positions outside the overlay.
    pub fn get_key_num_lock(&self, code: ScanCode) -> u8 {
        if self.led & LED_NUM_LOCK != 0 {
            matrix::numpad_overlay(code.index())
        } else {
            0
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Profile::default(), Box::new(MemStore::default()))
    }
}

fn read_selector(storage: &mut dyn Storage, slot: Slot) -> u8 {
    match storage.read(slot) {
        Ok(value) => value,
        Err(err) => {
            warn!(?slot, %err, "failed to read mode selector, using default");
            0
        }
    }
}

lazy_static! {
    /// Shared engine instance for transports that cannot thread their own.
    pub static ref ENGINE: Mutex<Engine> = Mutex::new(Engine::default());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::StorageError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// In-memory store that counts writes, shared with the test body.
    struct CountingStore {
        bytes: [u8; 3],
        writes: Arc<AtomicUsize>,
    }

    impl CountingStore {
        fn new(writes: Arc<AtomicUsize>) -> Self {
            Self { bytes: [0; 3], writes }
        }
    }

    impl Storage for CountingStore {
        fn read(&mut self, slot: Slot) -> Result<u8, StorageError> {
            Ok(self.bytes[slot as usize])
        }

        fn write(&mut self, slot: Slot, value: u8) -> Result<(), StorageError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            self.bytes[slot as usize] = value;
            Ok(())
        }
    }

    fn engine() -> Engine {
        Engine::default()
    }

    /// One scan cycle: report the held positions, then finalize.
    fn scan(engine: &mut Engine, held: &[(u8, u8)]) -> (Xmit, Report) {
        for &(row, column) in held {
            engine.on_pressed(ScanCode::new(row, column));
        }
        let mut report = Report::new();
        let xmit = engine.make_report(&mut report);
        (xmit, report)
    }

    /// Repeats the scan until the quiescent path transmits, or gives up
    /// after two threshold periods.
    fn settle(engine: &mut Engine, held: &[(u8, u8)]) -> Option<Report> {
        for _ in 0..2 * DEFAULT_TICK_THRESHOLD as usize {
            let (xmit, report) = scan(engine, held);
            if xmit == Xmit::Normal {
                return Some(report);
            }
        }
        None
    }

    /// Drives the engine back to an idle resolved state.
    fn release_all(engine: &mut Engine) {
        let _ = settle(engine, &[]);
        for _ in 0..DEFAULT_TICK_THRESHOLD as usize {
            let (xmit, _) = scan(engine, &[]);
            assert_eq!(xmit, Xmit::None);
        }
    }

    const POS_A: (u8, u8) = (5, 0);
    const POS_LEFTSHIFT: (u8, u8) = (2, 0);
    const POS_LEFTCONTROL: (u8, u8) = (7, 0);
    const POS_FN: (u8, u8) = (7, 3);
    const POS_LEFT_THUMB: (u8, u8) = (7, 4);
    const POS_RIGHT_THUMB: (u8, u8) = (7, 7);
    const POS_FN_OS: (u8, u8) = (0, 2);
    const POS_FN_KANA: (u8, u8) = (0, 1);
    const POS_FN_BASE: (u8, u8) = (1, 1);
    const POS_FN_DELETE: (u8, u8) = (3, 0);
    const POS_FN_F13: (u8, u8) = (6, 7);
    const POS_FN_F14: (u8, u8) = (6, 4);

    #[test]
    fn state_change_classification() {
        let empty = Report::new();
        let mut keys = Report::new();
        keys.push_key(KEY_A);
        let mut mods = Report::new();
        mods.modifiers = MOD_LEFTSHIFT;

        assert_eq!(StateChange::classify(&empty, &empty), StateChange::Quiescent);
        assert_eq!(StateChange::classify(&keys, &empty), StateChange::KeysChanged);
        assert_eq!(
            StateChange::classify(&mods, &empty),
            StateChange::ModifiersChanged
        );
    }

    #[test]
    fn idle_cycles_transmit_nothing() {
        let mut engine = engine();
        for _ in 0..3 * DEFAULT_TICK_THRESHOLD as usize {
            let (xmit, _) = scan(&mut engine, &[]);
            assert_eq!(xmit, Xmit::None);
        }
    }

    #[test]
    fn held_key_resolves_at_the_quiescent_threshold() {
        let mut engine = engine();
        let (xmit, _) = scan(&mut engine, &[POS_A]);
        assert_eq!(xmit, Xmit::None);
        for _ in 1..DEFAULT_TICK_THRESHOLD {
            let (xmit, _) = scan(&mut engine, &[POS_A]);
            assert_eq!(xmit, Xmit::None);
        }
        let (xmit, report) = scan(&mut engine, &[POS_A]);
        assert_eq!(xmit, Xmit::Normal);
        assert_eq!(report.keys(), &[KEY_A]);
        assert_eq!(report.modifiers, 0);
    }

    #[test]
    fn quick_tap_commits_on_release() {
        let mut engine = engine();
        let (xmit, _) = scan(&mut engine, &[POS_A]);
        assert_eq!(xmit, Xmit::None);
        // Released before the threshold: the previous cycle is committed.
        let (xmit, report) = scan(&mut engine, &[]);
        assert_eq!(xmit, Xmit::Normal);
        assert_eq!(report.keys(), &[KEY_A]);
        // The release itself goes out once the empty state settles.
        let report = settle(&mut engine, &[]).unwrap();
        assert!(report.is_empty());
        assert_eq!(report.modifiers, 0);
    }

    #[test]
    fn seven_keys_in_one_cycle_truncate_to_six() {
        let mut engine = engine();
        let held = [
            (5, 0),
            (5, 1),
            (5, 2),
            (5, 3),
            (5, 4),
            (5, 7),
            (5, 8),
        ];
        let report = settle(&mut engine, &held).unwrap();
        assert_eq!(report.len(), crate::report::REPORT_KEYS);
        assert_eq!(report.keys(), &[KEY_A, KEY_S, KEY_D, KEY_F, KEY_G, KEY_H]);
    }

    #[test]
    fn shift_chord_resolves_immediately() {
        let mut engine = engine();
        let (xmit, report) = scan(&mut engine, &[POS_LEFTSHIFT, POS_A]);
        assert_eq!(xmit, Xmit::Normal);
        assert_eq!(report.modifiers, MOD_LEFTSHIFT);
        assert_eq!(report.keys(), &[KEY_A]);
    }

    #[test]
    fn lone_modifier_resolves_without_key_slots() {
        let mut engine = engine();
        let report = settle(&mut engine, &[POS_LEFTCONTROL]).unwrap();
        assert_eq!(report.modifiers, MOD_LEFTCONTROL);
        assert!(report.is_empty());
    }

    #[test]
    fn thumb_tap_emits_its_tap_key() {
        let mut engine = engine();
        // The press transmits an empty report while the decision is open.
        let report = settle(&mut engine, &[POS_LEFT_THUMB]).unwrap();
        assert!(report.is_empty());
        assert_eq!(report.modifiers, 0);
        // The release resolves as the tap meaning.
        let report = settle(&mut engine, &[]).unwrap();
        assert_eq!(report.keys(), &[KEY_BACKSPACE]);
    }

    #[test]
    fn thumb_tap_key_is_released_after_its_report() {
        let mut engine = engine();
        settle(&mut engine, &[POS_LEFT_THUMB]).unwrap();
        let report = settle(&mut engine, &[]).unwrap();
        assert_eq!(report.keys(), &[KEY_BACKSPACE]);
        // The very next pass transmits the release; the tap key must not
        // stay latched from the host's point of view.
        let release = settle(&mut engine, &[]).unwrap();
        assert!(release.is_empty());
        assert_eq!(release.modifiers, 0);
        // After that the idle stream stays silent.
        for _ in 0..3 * DEFAULT_TICK_THRESHOLD as usize {
            let (xmit, _) = scan(&mut engine, &[]);
            assert_eq!(xmit, Xmit::None);
        }
    }

    #[test]
    fn right_thumb_tap_is_space() {
        let mut engine = engine();
        settle(&mut engine, &[POS_RIGHT_THUMB]).unwrap();
        let report = settle(&mut engine, &[]).unwrap();
        assert_eq!(report.keys(), &[KEY_SPACEBAR]);
    }

    #[test]
    fn held_thumb_shifts_a_following_key() {
        let mut engine = engine();
        settle(&mut engine, &[POS_LEFT_THUMB]).unwrap();
        let (xmit, report) = scan(&mut engine, &[POS_LEFT_THUMB, POS_A]);
        assert_eq!(xmit, Xmit::Normal);
        assert_eq!(report.modifiers, MOD_LEFTSHIFT);
        assert_eq!(report.keys(), &[KEY_A]);
    }

    #[test]
    fn fn_chord_expands_to_its_sequence() {
        let mut engine = engine();
        let (xmit, report) = scan(&mut engine, &[POS_FN, POS_FN_DELETE]);
        assert_eq!(xmit, Xmit::Normal);
        assert_eq!(report.keys(), &[KEY_DELETE]);
    }

    #[test]
    fn fn_chord_merges_chord_modifiers() {
        let mut engine = engine();
        // (3, 8) carries Ctrl+Shift+LeftArrow on the Fn plane.
        let (xmit, report) = scan(&mut engine, &[POS_FN, (3, 8)]);
        assert_eq!(xmit, Xmit::Normal);
        assert_eq!(report.modifiers, MOD_LEFTCONTROL | MOD_LEFTSHIFT);
        assert_eq!(report.keys(), &[KEY_LEFTARROW]);
    }

    #[test]
    fn os_switch_cycles_persists_and_types_its_signature() {
        let writes = Arc::new(AtomicUsize::new(0));
        let store = CountingStore::new(Arc::clone(&writes));
        let mut engine = Engine::new(Profile::default(), Box::new(store));

        let (xmit, report) = scan(&mut engine, &[POS_FN, POS_FN_OS]);
        assert_eq!(xmit, Xmit::Normal);
        assert_eq!(engine.os(), OsMode::Mac);
        assert_eq!(report.keys(), OsMode::Mac.signature());
        assert_eq!(writes.load(Ordering::SeqCst), 1);

        release_all(&mut engine);

        // Second press wraps back around, with exactly one more write.
        scan(&mut engine, &[POS_FN, POS_FN_OS]);
        assert_eq!(engine.os(), OsMode::Pc);
        assert_eq!(writes.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn held_switch_key_fires_only_once() {
        let writes = Arc::new(AtomicUsize::new(0));
        let store = CountingStore::new(Arc::clone(&writes));
        let mut engine = Engine::new(Profile::default(), Box::new(store));

        scan(&mut engine, &[POS_FN, POS_FN_OS]);
        assert_eq!(writes.load(Ordering::SeqCst), 1);
        // Still held while another Fn key joins: the switch position is in
        // the resolved snapshot, so it must not re-fire.
        let (xmit, report) = scan(&mut engine, &[POS_FN, POS_FN_OS, POS_FN_DELETE]);
        assert_eq!(xmit, Xmit::Normal);
        assert_eq!(writes.load(Ordering::SeqCst), 1);
        assert_eq!(engine.os(), OsMode::Mac);
        assert_eq!(report.keys(), &[KEY_DELETE]);
    }

    #[test]
    fn base_switch_toggles_dvorak_and_remaps_held_positions() {
        let mut engine = engine();
        scan(&mut engine, &[POS_FN, POS_FN_BASE]);
        assert_eq!(engine.base_layout(), BaseLayout::Dvorak);
        release_all(&mut engine);

        // QWERTY home-row A position carries A in Dvorak too, so probe the
        // S position, which becomes O.
        let report = settle(&mut engine, &[(5, 1)]).unwrap();
        assert_eq!(report.keys(), &[KEY_O]);
    }

    #[test]
    fn kana_mode_resolves_through_the_kana_grid() {
        let mut engine = engine();
        scan(&mut engine, &[POS_FN, POS_FN_KANA]);
        assert_eq!(engine.kana_layout(), KanaLayout::Kana);
        release_all(&mut engine);

        // The minus-row position becomes the yen key in JIS kana.
        let report = settle(&mut engine, &[(3, 11)]).unwrap();
        assert_eq!(report.keys(), &[KEY_INTERNATIONAL3]);

        release_all(&mut engine);

        // A non-shift modifier suspends kana resolution.
        let (xmit, _) = scan(&mut engine, &[POS_LEFTCONTROL, (3, 11)]);
        assert_eq!(xmit, Xmit::None);
        let report = settle(&mut engine, &[POS_LEFTCONTROL, (3, 11)]).unwrap();
        assert_eq!(report.modifiers, MOD_LEFTCONTROL);
        assert_eq!(report.keys(), &[KEY_EQUAL]);
    }

    #[test]
    fn indicator_keys_toggle_the_kana_led_without_reporting() {
        let mut engine = engine();
        let (xmit, report) = scan(&mut engine, &[POS_FN, POS_FN_F13]);
        assert_eq!(xmit, Xmit::Normal);
        assert!(report.is_empty());
        assert!(engine.kana_indicator());
        assert_eq!(engine.control_led(0), LED_KANA);

        release_all(&mut engine);

        scan(&mut engine, &[POS_FN, POS_FN_F14]);
        assert!(!engine.kana_indicator());
        assert_eq!(engine.control_led(0), 0);
    }

    #[test]
    fn scroll_lock_led_forces_the_fn_plane() {
        let mut engine = engine();
        engine.control_led(LED_SCROLL_LOCK);
        let report = settle(&mut engine, &[POS_FN_DELETE]).unwrap();
        assert_eq!(report.keys(), &[KEY_DELETE]);
    }

    #[test]
    fn num_lock_led_gates_the_keypad_overlay() {
        let mut engine = engine();
        assert_eq!(engine.get_key_num_lock(ScanCode::new(3, 8)), 0);
        engine.control_led(LED_NUM_LOCK);
        assert_eq!(engine.get_key_num_lock(ScanCode::new(3, 8)), KEYPAD_7);

        let report = settle(&mut engine, &[(3, 8)]).unwrap();
        assert_eq!(report.keys(), &[KEYPAD_7]);
    }

    #[test]
    fn selectors_load_from_storage_at_startup() {
        let store = MemStore::with_bytes([1, 1, 1]);
        let engine = Engine::new(Profile::default(), Box::new(store));
        assert_eq!(engine.base_layout(), BaseLayout::Dvorak);
        assert_eq!(engine.kana_layout(), KanaLayout::Kana);
        assert_eq!(engine.os(), OsMode::Mac);
    }

    #[test]
    fn out_of_range_selectors_fall_back_to_defaults() {
        let store = MemStore::with_bytes([7, 9, 0xFF]);
        let engine = Engine::new(Profile::default(), Box::new(store));
        assert_eq!(engine.base_layout(), BaseLayout::Qwerty);
        assert_eq!(engine.kana_layout(), KanaLayout::Romaji);
        assert_eq!(engine.os(), OsMode::Pc);
    }

    #[test]
    fn profile_deserializes_with_defaults() {
        let profile: Profile = serde_json::from_str("{}").unwrap();
        assert_eq!(profile.tick_threshold, DEFAULT_TICK_THRESHOLD);
        assert!(!profile.persist_dedup);

        let profile: Profile =
            serde_json::from_str(r#"{"tick_threshold": 4, "persist_dedup": true}"#).unwrap();
        assert_eq!(profile.tick_threshold, 4);
        assert!(profile.persist_dedup);
    }
}
