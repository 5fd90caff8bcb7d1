//! Reference network: ambulance dispatch around Tunis.
//!
//! Hospitals are the candidate origins, `Tunisia_Mall` is the emergency
//! site. Times are in minutes, costs in TND.
use crate::router::router_types::{network::Adjacency, segment::SegmentAttributes};

/// The emergency site every ambulance must reach.
pub const EMERGENCY_SITE: &str = "Tunisia_Mall";

/// Hospitals that may dispatch an ambulance.
pub const HOSPITALS: [&str; 4] = ["Mongi_Slim", "Charles_Nicolle", "Habib_Thamer", "Rabta"];

/// (from, to, time, cost, (network, gps, data))
const SEGMENTS: [(&str, &str, f64, f64, (f64, f64, f64)); 11] = [
    // hospitals
    ("Mongi_Slim", "Ain_Zaghouan", 3.0, 0.76, (0.4, 0.5, 0.3)),
    ("Mongi_Slim", "Jardin_Carthage", 5.0, 1.77, (0.3, 0.4, 0.2)),
    ("Charles_Nicolle", "Bab_Sadoun", 2.0, 0.88, (0.5, 0.6, 0.4)),
    ("Charles_Nicolle", "Beb_Bhar", 9.0, 1.89, (0.4, 0.5, 0.3)),
    ("Habib_Thamer", "Avenue_Moncef_Bey", 5.0, 1.07, (0.3, 0.4, 0.2)),
    ("Rabta", "Bab_Sadoun", 5.0, 0.88, (0.4, 0.5, 0.4)),
    // intermediate nodes
    ("Ain_Zaghouan", "Tunisia_Mall", 6.0, 1.83, (0.6, 0.7, 0.5)),
    ("Jardin_Carthage", "Tunisia_Mall", 9.0, 1.96, (0.2, 0.3, 0.1)),
    ("Avenue_Moncef_Bey", "Tunisia_Mall", 19.0, 7.575, (0.3, 0.4, 0.2)),
    ("Bab_Sadoun", "Tunisia_Mall", 22.0, 8.21, (0.5, 0.6, 0.4)),
    ("Beb_Bhar", "Tunisia_Mall", 22.0, 8.21, (0.4, 0.5, 0.3)),
];

/// Adjacency of the reference network.
pub fn tunis_adjacency() -> Adjacency {
    let mut adjacency = Adjacency::new();
    for (from, to, time, cost, risk) in SEGMENTS {
        adjacency
            .entry(from.to_string())
            .or_default()
            .insert(to.to_string(), SegmentAttributes::new(time, cost, risk));
    }

    // the emergency site has no outgoing segments
    adjacency.entry(EMERGENCY_SITE.to_string()).or_default();
    adjacency
}
