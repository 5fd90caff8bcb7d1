#![doc = include_str!("../README.md")]

use lazy_static::lazy_static;

#[cfg(test)]
#[macro_use]
pub mod test_util;

#[macro_use]
pub mod router;
pub mod config;
pub mod report;
pub use crate::config::Config;
pub use crate::router::{dispatch, Dispatch, Router, RouterError};

lazy_static! {
    /// Initialized log4rs handle
    static ref LOG_HANDLE: Option<log4rs::Handle> = {
        // Set up basic logger to make sure we can write to stdout
        let stdout = log4rs::append::console::ConsoleAppender::builder()
            .encoder(Box::new(log4rs::encode::pattern::PatternEncoder::new(
                "{d(%Y-%m-%d %H:%M:%S)} | {I} | {h({l}):5.5} | {f}:{L} | {m}{n}",
            )))
            .build();
        match log4rs::config::Config::builder()
            .appender(log4rs::config::Appender::builder().build("stdout", Box::new(stdout)))
            .build(
                log4rs::config::Root::builder()
                    .appender("stdout")
                    .build(log::LevelFilter::Debug),
            ) {
            Ok(config) => log4rs::init_config(config).ok(),
            Err(_) => None,
        }
    };
}

pub(crate) fn get_log_handle() -> Option<log4rs::Handle> {
    (*LOG_HANDLE).clone()
}

/// Initialize a log4rs logger with provided configuration file path
pub fn load_logger_config_from_file(config_file: &str) -> Result<(), String> {
    let log_handle = get_log_handle()
        .ok_or("(load_logger_config_from_file) Could not get the log handle.")?;
    match log4rs::config::load_config_file(config_file, Default::default()) {
        Ok(config) => {
            log_handle.set_config(config);
            Ok(())
        }
        Err(e) => Err(format!(
            "(logger) Could not parse log config file [{}]: {}.",
            config_file, e,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_logger_config_missing_file() {
        get_log_handle();

        let Err(e) = load_logger_config_from_file("does_not_exist.yaml") else {
            panic!("loading a missing file should fail");
        };
        assert!(e.contains("does_not_exist.yaml"));
    }
}
