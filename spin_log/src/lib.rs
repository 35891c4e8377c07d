use chrono::{DateTime, Utc};
use log::{Level, Metadata, Record};

pub struct SpinLogger;
pub static SPIN_LOGGER: SpinLogger = SpinLogger;

impl log::Log for SpinLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Info
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let now: DateTime<Utc> = Utc::now();
        let line = format!(
            "[{}] {} - {}",
            now.to_rfc3339(),
            record.level(),
            record.args()
        );
        #[cfg(target_family = "wasm")]
        gloo_console::log!(line);
        #[cfg(not(target_family = "wasm"))]
        println!("{}", line);
    }
    fn flush(&self) {}
}
