//! Plain text rendering of a [`Dispatch`].

use std::fmt::{self, Write};

use crate::router::{Dispatch, Weights};

/// Routes longer than this are abbreviated in the candidate table.
const MAX_FULL_ROUTE: usize = 3;

/// Join a route with arrows.
pub fn route_to_string(route: &[String]) -> String {
    route.join(" → ")
}

/// Join a route with arrows, keeping only both ends of long routes.
pub fn abbreviate_route(route: &[String]) -> String {
    match route {
        [first, .., last] if route.len() > MAX_FULL_ROUTE => format!("{first} → ... → {last}"),
        _ => route_to_string(route),
    }
}

/// Render `dispatch` as a multi-line report.
///
/// The composite cost of the selected route is recomputed from its
/// metrics with `weights` and printed next to the cost found by the
/// search, so the two can be compared at a glance.
///
/// # Errors
/// Propagates [`fmt::Error`] from the underlying writer.
pub fn format_dispatch(dispatch: &Dispatch, weights: &Weights) -> Result<String, fmt::Error> {
    let mut out = String::new();

    writeln!(out, "Destination: {}", dispatch.destination)?;
    writeln!(out, "Selected: {}", dispatch.selected)?;
    writeln!(out, "Composite cost: {:.4}", dispatch.cost)?;
    writeln!(out, "Route: {}", route_to_string(&dispatch.route))?;

    let well_formed = dispatch.route.first() == Some(&dispatch.selected)
        && dispatch.route.last() == Some(&dispatch.destination);
    writeln!(
        out,
        "Route check: {}",
        if well_formed {
            "starts at the selected candidate and ends at the destination"
        } else {
            "INVALID, route endpoints do not match the query"
        }
    )?;

    if let Some(detail) = dispatch.selected_detail() {
        let recomputed = weights.combine(detail.total_time, detail.total_cost, &detail.risk_components);
        writeln!(out, "Total time: {:.2}", detail.total_time)?;
        writeln!(out, "Total cost: {:.2}", detail.total_cost)?;
        writeln!(
            out,
            "Risk: network {:.4}, gps {:.4}, data {:.4}",
            detail.risk_components.network, detail.risk_components.gps, detail.risk_components.data
        )?;
        writeln!(
            out,
            "Composite check: recomputed {:.4}, search {:.4}",
            recomputed, dispatch.cost
        )?;
    }

    writeln!(out, "Candidates (increasing cost):")?;
    for (candidate, detail) in dispatch.ranked() {
        let marker = if *candidate == dispatch.selected { '*' } else { ' ' };
        writeln!(
            out,
            "{} {:<17} | {:.4} | {}",
            marker,
            candidate,
            detail.cost,
            abbreviate_route(&detail.route)
        )?;
    }

    Ok(out)
}
