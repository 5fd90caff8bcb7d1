//! Composite weight function.
//!
//! A segment carries three criteria: time, cost and IT risk (itself
//! split into network, GPS and data scores). [`Weights`] collapses them
//! into one scalar. The coefficients are pre-normalized business
//! weights obtained by AHP and are not re-validated here.
use serde::{Deserialize, Serialize};

use super::segment::{Risk, Segment};

/// Coefficients of the composite weight.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    /// Weight of travel time (`w_T`).
    pub time: f64,

    /// Weight of the IT risk composite (`w_R`).
    pub risk: f64,

    /// Weight of monetary cost (`w_C`).
    pub cost: f64,

    /// Sub-weight of network reliability inside the risk composite.
    pub risk_network: f64,

    /// Sub-weight of GPS accuracy inside the risk composite.
    pub risk_gps: f64,

    /// Sub-weight of data integrity inside the risk composite.
    pub risk_data: f64,
}

impl Default for Weights {
    fn default() -> Self {
        Weights {
            time: 0.619,
            risk: 0.284,
            cost: 0.096,
            risk_network: 0.623,
            risk_gps: 0.239,
            risk_data: 0.137,
        }
    }
}

/// Weighted risk contributions, each already scaled by `w_R` and its
/// sub-weight.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskComponents {
    /// `w_R * v_net * network`
    pub network: f64,

    /// `w_R * v_gps * gps`
    pub gps: f64,

    /// `w_R * v_data * data`
    pub data: f64,
}

impl RiskComponents {
    /// Sum of all components.
    pub fn total(&self) -> f64 {
        self.network + self.gps + self.data
    }

    /// Accumulate another set of components into this one.
    pub fn add(&mut self, other: &RiskComponents) {
        self.network += other.network;
        self.gps += other.gps;
        self.data += other.data;
    }
}

impl Weights {
    /// Weighted risk contributions of a single set of risk scores.
    ///
    /// Both the search and the metrics aggregation go through this
    /// function, so a route's decomposed metrics always add up to the
    /// distance the search assigned to it.
    pub fn risk_components(&self, risk: &Risk) -> RiskComponents {
        RiskComponents {
            network: self.risk * self.risk_network * risk.network,
            gps: self.risk * self.risk_gps * risk.gps,
            data: self.risk * self.risk_data * risk.data,
        }
    }

    /// Combine time, cost and risk totals into the composite cost.
    pub fn combine(&self, time: f64, cost: f64, risk: &RiskComponents) -> f64 {
        self.time * time + risk.total() + self.cost * cost
    }

    /// Composite weight of a segment:
    /// `w_T*time + w_R*(v_net*network + v_gps*gps + v_data*data) + w_C*cost`.
    pub fn composite(&self, segment: &Segment) -> f64 {
        self.combine(
            segment.time,
            segment.cost,
            &self.risk_components(&segment.risk),
        )
    }
}
