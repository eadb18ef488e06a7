// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use serde::Serialize;
use tracing::warn;

use crate::math::Point;

/// Finite `(x, y)` output for a plotting front end.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Handoff<T> {
    /// Converted items, in orbit order.
    pub items: Vec<T>,
    /// `∞` points left out of `items`.
    pub dropped: usize,
}

/// Converts an orbit of points, dropping `∞`.
pub fn to_plot_points(points: &[Point]) -> Handoff<(f64, f64)> {
    let items: Vec<(f64, f64)> = points.iter().filter_map(Point::to_pair).collect();
    let dropped = points.len() - items.len();
    report(dropped);
    Handoff { items, dropped }
}

/// Converts an orbit of polylines, dropping `∞` points and then any polyline
/// left empty.
pub fn to_plot_polylines(polylines: &[Vec<Point>]) -> Handoff<Vec<(f64, f64)>> {
    let mut dropped = 0;
    let items = polylines
        .iter()
        .filter_map(|line| {
            let finite: Vec<(f64, f64)> = line.iter().filter_map(Point::to_pair).collect();
            dropped += line.len() - finite.len();
            (!finite.is_empty()).then_some(finite)
        })
        .collect();
    report(dropped);
    Handoff { items, dropped }
}

fn report(dropped: usize) {
    if dropped > 0 {
        warn!(dropped, "dropping points at infinity from plot handoff");
    }
}
