//! # Config
//!
//! Define and implement config options for module

use config::{ConfigError, Environment};
use dotenv::dotenv;
use serde::Deserialize;

use crate::router::Weights;

/// struct holding configuration options
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// weight of travel time in the composite cost
    pub weight_time: f64,

    /// weight of the IT risk composite in the composite cost
    pub weight_risk: f64,

    /// weight of monetary cost in the composite cost
    pub weight_cost: f64,

    /// network reliability sub-weight of the IT risk composite
    pub weight_risk_network: f64,

    /// GPS accuracy sub-weight of the IT risk composite
    pub weight_risk_gps: f64,

    /// data integrity sub-weight of the IT risk composite
    pub weight_risk_data: f64,

    /// path to log configuration YAML file
    pub log_config: String,
}

impl Default for Config {
    fn default() -> Self {
        log::warn!("(default) Creating Config object with default values.");
        Self::new()
    }
}

impl Config {
    /// Default values for Config
    pub fn new() -> Self {
        let weights = Weights::default();
        Config {
            weight_time: weights.time,
            weight_risk: weights.risk,
            weight_cost: weights.cost,
            weight_risk_network: weights.risk_network,
            weight_risk_gps: weights.risk_gps,
            weight_risk_data: weights.risk_data,
            log_config: String::from("log4rs.yaml"),
        }
    }

    /// Create a new `Config` object using environment variables
    pub fn try_from_env() -> Result<Self, ConfigError> {
        // read .env file if present
        dotenv().ok();
        let default_config = Config::default();

        config::Config::builder()
            .set_default("weight_time", default_config.weight_time)?
            .set_default("weight_risk", default_config.weight_risk)?
            .set_default("weight_cost", default_config.weight_cost)?
            .set_default("weight_risk_network", default_config.weight_risk_network)?
            .set_default("weight_risk_gps", default_config.weight_risk_gps)?
            .set_default("weight_risk_data", default_config.weight_risk_data)?
            .set_default("log_config", default_config.log_config)?
            .add_source(Environment::default().separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Coefficients of the composite weight
    pub fn weights(&self) -> Weights {
        Weights {
            time: self.weight_time,
            risk: self.weight_risk,
            cost: self.weight_cost,
            risk_network: self.weight_risk_network,
            risk_gps: self.weight_risk_gps,
            risk_data: self.weight_risk_data,
        }
    }
}
