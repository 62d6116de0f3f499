//! Integration tests for what a run reports through the `log` facade at `info`.

mod common;

use common::{scripted_bracket, ALICE_CHAMPION_SCORES};
use log::{Level, LevelFilter, Log, Metadata, Record};
use std::sync::Mutex;

/// Keeps every info-or-louder message emitted in this test binary.
struct CapturingLogger {
    lines: Mutex<Vec<String>>,
}

impl Log for CapturingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.lines.lock().unwrap().push(record.args().to_string());
        }
    }

    fn flush(&self) {}
}

static LOGGER: CapturingLogger = CapturingLogger {
    lines: Mutex::new(Vec::new()),
};

#[test]
fn seeding_and_every_match_are_logged_at_info() {
    log::set_logger(&LOGGER).unwrap();
    log::set_max_level(LevelFilter::Info);

    scripted_bracket(&ALICE_CHAMPION_SCORES);

    let lines = LOGGER.lines.lock().unwrap();
    assert!(lines.contains(
        &"Random player order: Bob, Alice, Carol, David, Eva, Frank, Grace, Henry".to_string()
    ));
    assert!(lines.contains(&"QF1: Bob (3) vs Alice (8) -> winner Alice".to_string()));
    assert!(lines.contains(&"QF2: Carol (5) vs David (5) -> winner Carol".to_string()));
    assert!(lines.contains(&"FINAL: Alice (9) vs Grace (9) -> winner Alice".to_string()));
    assert!(lines.iter().any(|l| l.ends_with("champion Alice (score 9)")));
    let match_lines = lines.iter().filter(|l| l.contains(" -> winner ")).count();
    assert_eq!(match_lines, 7);
}
