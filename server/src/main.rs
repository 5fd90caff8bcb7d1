//! Dispatch an ambulance over the reference network

use anyhow::Context;
use log::info;
use svc_dispatch::router::router_utils::mock;
use svc_dispatch::router::{Network, Router};
use svc_dispatch::*;

#[cfg(not(tarpaulin_include))]
fn main() -> anyhow::Result<()> {
    // Will use default config settings if no environment vars are found.
    let config =
        Config::try_from_env().context("Failed to load configuration from environment")?;

    info!("(main) Loading config.");

    // Try to load log configuration from the provided log file.
    // Will default to stdout debug logging if the file can not be loaded.
    if let Err(e) = load_logger_config_from_file(config.log_config.as_str()) {
        log::error!("(main) {}", e);
    }

    info!("(main) Building the reference network.");
    let network = Network::new(&mock::tunis_adjacency()).context("Invalid reference network")?;
    let router = Router::new(network, config.weights());

    match router.dispatch(mock::EMERGENCY_SITE, &mock::HOSPITALS) {
        Ok(dispatch) => {
            let report = report::format_dispatch(&dispatch, router.weights())
                .context("Could not format the dispatch report")?;
            for line in report.lines() {
                info!("(main) {}", line);
            }
        }
        Err(e) => log::error!("(main) dispatch to {} failed: {}", mock::EMERGENCY_SITE, e),
    }

    // Make sure all log message are written/ displayed before shutdown
    log::logger().flush();

    Ok(())
}
