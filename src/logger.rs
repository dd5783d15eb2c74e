use log::LevelFilter;
use simple_logger::SimpleLogger;

/// Install the process-wide logger, honoring `RUST_LOG` when set.
///
/// Calling this more than once is harmless; later calls are no-ops.
pub fn init() {
    let _ = SimpleLogger::new().with_level(LevelFilter::Info).env().init();
}
