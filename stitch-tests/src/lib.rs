mod binding;
mod connection;
mod driver;
mod prepared;

pub use binding::*;
pub use connection::*;
pub use driver::*;
use log::LevelFilter;
pub use prepared::*;
use std::env;

pub fn init_logs() {
    let mut logger = env_logger::builder();
    logger
        .is_test(true)
        .format_file(true)
        .format_line_number(true);
    if env::var("RUST_LOG").is_err() {
        logger.filter_level(LevelFilter::Warn);
    }
    let _ = logger.try_init();
}
