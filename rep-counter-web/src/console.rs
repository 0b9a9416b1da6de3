//! Console logging backend for the `log` facade
//!
//! On wasm32 records go to the browser console at the matching severity.
//! Native builds (tests, tools) print to stderr instead.

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            emit(record.level(), &format_record(record));
        }
    }

    fn flush(&self) {}
}

/// Install the console logger; returns false if a logger was already set
pub fn init(level: LevelFilter) -> bool {
    let installed = log::set_logger(&LOGGER).is_ok();
    if installed {
        log::set_max_level(level);
    }
    installed
}

fn format_record(record: &Record) -> String {
    format!("[{}] {}: {}", record.level(), record.target(), record.args())
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_record() {
        let line = format_record(
            &Record::builder()
                .level(Level::Warn)
                .target("rep_counter_web::bridge")
                .args(format_args!("bad frame: {}", 7))
                .build(),
        );
        assert_eq!(line, "[WARN] rep_counter_web::bridge: bad frame: 7");
    }
}
