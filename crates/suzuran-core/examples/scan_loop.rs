use suzuran_core::engine::{Engine, Profile, DEFAULT_TICK_THRESHOLD};
use suzuran_core::{FileStore, Report, ScanCode, Xmit};

/// Feeds a scripted sequence of scan cycles through the engine and prints
/// every transmitted report, the way a USB transport would see them.
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let store = FileStore::open(std::env::temp_dir().join("suzuran-modes.bin"))?;
    let mut engine = Engine::new(Profile::default(), Box::new(store));

    // Each entry is one scan cycle: the matrix positions held during it.
    // Spell out "hi": H, then I with a quick rollover, then a shifted A
    // via the left thumb key, then a lone thumb tap (Backspace).
    let mut script: Vec<Vec<(u8, u8)>> = vec![
        vec![(5, 7)],
        vec![(5, 7), (4, 9)],
        vec![(4, 9)],
        vec![],
        vec![(7, 4), (5, 0)],
        vec![],
        vec![(7, 4)],
        vec![],
    ];
    // Let the final state settle so the trailing release goes out.
    for _ in 0..=DEFAULT_TICK_THRESHOLD {
        script.push(vec![]);
    }

    for (cycle, held) in script.iter().enumerate() {
        for &(row, column) in held {
            engine.on_pressed(ScanCode::new(row, column));
        }
        let mut report = Report::new();
        if engine.make_report(&mut report) == Xmit::Normal {
            println!("cycle {cycle:3}: {:02x?}", report.as_bytes());
        }
    }

    Ok(())
}
