use log::{Level, LevelFilter, Log, Metadata, Record};

/// Writes log records to stderr at or below a level taken from `RUST_LOG`.
struct StderrLogger {
    level: LevelFilter,
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", format_record(record));
        }
    }

    fn flush(&self) {}
}

fn format_record(record: &Record) -> String {
    let glyph = match record.level() {
        Level::Error => "❌",
        Level::Warn => "⚠️",
        Level::Info => "ℹ️",
        Level::Debug | Level::Trace => "🔎",
    };
    format!("{} [{}] {}", glyph, record.target(), record.args())
}

/// Level named by `RUST_LOG` (`error`, `warn`, `info`, `debug`, `trace`, `off`),
/// `Warn` when unset or unrecognised.
pub fn level_from_env(value: Option<&str>) -> LevelFilter {
    value
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(LevelFilter::Warn)
}

/// Install the stderr logger. Safe to call more than once.
pub fn init() {
    let level = level_from_env(std::env::var("RUST_LOG").ok().as_deref());
    let logger = Box::new(StderrLogger { level });
    if log::set_boxed_logger(logger).is_ok() {
        log::set_max_level(level);
    }
}
