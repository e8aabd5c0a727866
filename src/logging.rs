//! Logger setup for the binary and for tests.
//!
//! Log lines go to stderr as `LEVEL [target] - file:line - message`.

use std::io::Write;

use log::LevelFilter;

/// Install the process-wide logger.
///
/// `RUST_LOG` still wins when set; otherwise `level` applies to this crate
/// and everything else only reports errors.
pub fn init_logger(level: LevelFilter) {
    let _ = env_logger::builder()
        .filter_level(LevelFilter::Error)
        .filter_module("pagesim", level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "{} [{}] - {}:{} - {}",
                record.level(),
                record.target(),
                record.file().unwrap_or("<unknown>"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .try_init();
}

#[cfg(test)]
pub fn init_test_logger() {
    let _ = env_logger::builder()
        .is_test(true)
        .filter_level(LevelFilter::Info)
        .filter_module("pagesim::simulation", LevelFilter::Trace)
        .try_init();
}
