//! test utilities. Provides log macros and fixtures for unit tests.
use crate::router::router_utils::mock;
use crate::router::{Network, Router, Weights};

/// Writes a debug! message to the app::ut logger
macro_rules! ut_debug {
    ($($arg:tt)+) => {
        log::debug!(target: "app::ut", $($arg)+)
    };
}

/// Writes an info! message to the app::ut logger
macro_rules! ut_info {
    ($($arg:tt)+) => {
        log::info!(target: "app::ut", $($arg)+)
    };
}

/// Writes an error! message to the app::ut logger
#[allow(unused_macros)]
macro_rules! ut_error {
    ($($arg:tt)+) => {
        log::error!(target: "app::ut", $($arg)+)
    };
}

/// The reference Tunis network.
pub fn tunis_network() -> Network {
    let network = Network::new(&mock::tunis_adjacency()).expect("reference network is valid");
    ut_debug!(
        "(tunis_network) {} vertices, {} segments.",
        network.get_node_count(),
        network.get_edge_count()
    );
    network
}

/// A router over the reference network with the default weights.
pub fn tunis_router() -> Router {
    Router::new(tunis_network(), Weights::default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixtures_match_reference_data() {
        crate::get_log_handle();
        ut_info!("(test_fixtures_match_reference_data) Start.");

        let router = tunis_router();
        assert_eq!(router.network().get_node_count(), 10);
        assert_eq!(router.network().get_edge_count(), 11);
        assert_eq!(*router.weights(), Weights::default());

        ut_info!("(test_fixtures_match_reference_data) Success.");
    }
}
