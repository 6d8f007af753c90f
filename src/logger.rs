//! Logging setup. Logs go to stderr so that stdout only carries diffs and
//! the report.

use log::LevelFilter;

pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose { LevelFilter::Debug } else { LevelFilter::Warn })
        .format_target(false)
        .format_timestamp(None)
        .init();
}
