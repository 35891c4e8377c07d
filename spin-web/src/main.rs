use log::{info, LevelFilter};
use spin_log::SPIN_LOGGER;

#[cfg(target_family = "wasm")]
mod web;

/// Invoked once by the hosting page when the wasm module loads, which is
/// after the initial markup has been parsed.
fn main() {
    log::set_logger(&SPIN_LOGGER).unwrap();
    log::set_max_level(LevelFilter::Info);
    #[cfg(target_family = "wasm")]
    match web::WebDocument::attach() {
        Some(document) => {
            let wired = spin_core::bind_busy_overlay(&document);
            let log_string = format!("{} forms wired to the busy overlay", wired);
            info!("{}", log_string);
        }
        None => {
            info!("window document object not found.");
        }
    }
    #[cfg(not(target_family = "wasm"))]
    info!("spin-web targets the browser; build for wasm32-unknown-unknown");
}
