pub mod engine;
pub mod keycodes;
pub mod layers;
pub mod matrix;
pub mod report;
pub mod storage;
pub mod types;

pub use engine::{Engine, Profile, DEFAULT_TICK_THRESHOLD, ENGINE};
pub use report::{Report, REPORT_KEYS};
pub use storage::{FileStore, MemStore, Slot, Storage, StorageError};
pub use types::{BaseLayout, KanaLayout, OsMode, ScanCode, Xmit};
