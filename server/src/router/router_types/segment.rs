//! Definition of the [`Segment`] type, the payload carried by every
//! road segment (edge) of a dispatch network.
//!
//! Callers describe segments with [`SegmentAttributes`], whose fields
//! are all optional so that incomplete input can be reported instead of
//! silently defaulted. [`Segment::try_from_attributes`] turns the loose
//! form into the validated one used by the router.
use serde::{Deserialize, Serialize};

use crate::router::RouterError;

/// IT risk scores of a segment. Each score is expected on a bounded
/// scale such as `[0, 1]`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Risk {
    /// Network reliability risk.
    pub network: f64,

    /// GPS accuracy risk.
    pub gps: f64,

    /// Data integrity risk.
    pub data: f64,
}

/// A validated segment payload.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    /// Travel time in minutes.
    pub time: f64,

    /// Monetary cost of traversing the segment.
    pub cost: f64,

    /// IT risk scores.
    pub risk: Risk,
}

/// Risk scores as supplied by the caller.
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAttributes {
    /// Network reliability risk.
    pub network: Option<f64>,

    /// GPS accuracy risk.
    pub gps: Option<f64>,

    /// Data integrity risk.
    pub data: Option<f64>,
}

/// Segment payload as supplied by the caller. Every field is required
/// by [`Segment::try_from_attributes`].
#[derive(Debug, Default, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentAttributes {
    /// Travel time in minutes.
    pub time: Option<f64>,

    /// Monetary cost.
    pub cost: Option<f64>,

    /// IT risk scores.
    #[serde(alias = "it_risk")]
    pub risk: Option<RiskAttributes>,
}

impl SegmentAttributes {
    /// Complete attributes from plain values.
    pub fn new(time: f64, cost: f64, (network, gps, data): (f64, f64, f64)) -> Self {
        Self {
            time: Some(time),
            cost: Some(cost),
            risk: Some(RiskAttributes {
                network: Some(network),
                gps: Some(gps),
                data: Some(data),
            }),
        }
    }
}

impl Segment {
    /// Validate caller supplied attributes for the segment `from -> to`.
    ///
    /// # Errors
    /// [`RouterError::MalformedEdge`] naming the first field that is
    /// missing, negative or not finite.
    pub fn try_from_attributes(
        from: &str,
        to: &str,
        attributes: &SegmentAttributes,
    ) -> Result<Self, RouterError> {
        let field = |name: &'static str, value: Option<f64>| -> Result<f64, RouterError> {
            match value {
                Some(value) if value.is_finite() && value >= 0.0 => Ok(value),
                _ => {
                    router_error!(
                        "(try_from_attributes) segment {} -> {} has an invalid '{}': {:?}",
                        from,
                        to,
                        name,
                        value
                    );

                    Err(RouterError::MalformedEdge {
                        from: from.to_string(),
                        to: to.to_string(),
                        field: name,
                    })
                }
            }
        };

        let time = field("time", attributes.time)?;
        let cost = field("cost", attributes.cost)?;
        let Some(risk) = attributes.risk else {
            return Err(RouterError::MalformedEdge {
                from: from.to_string(),
                to: to.to_string(),
                field: "risk",
            });
        };

        Ok(Segment {
            time,
            cost,
            risk: Risk {
                network: field("risk.network", risk.network)?,
                gps: field("risk.gps", risk.gps)?,
                data: field("risk.data", risk.data)?,
            },
        })
    }
}
