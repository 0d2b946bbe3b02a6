//! Logger setup for binaries. Library crates only use the `log` macros.

use log::LevelFilter;

/// Maps a `-v` count onto a level filter.
pub fn level_for_verbosity(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Installs `env_logger` with the verbosity-derived default. `RUST_LOG`
/// still overrides per module. Safe to call more than once.
pub fn init(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level_for_verbosity(verbosity));
    builder.parse_default_env();
    builder.format_timestamp(None);
    let _ = builder.try_init();
}
