//! Path model: weighted named polylines that enemies march along.

use serde::{Deserialize, Serialize};

use crate::types::Position;

/// An ordered sequence of at least two waypoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Path {
    pub name: String,
    pub points: Vec<Position>,
}

impl Path {
    pub fn new(name: impl Into<String>, points: Vec<Position>) -> Self {
        debug_assert!(points.len() >= 2, "a path needs at least two points");
        Self {
            name: name.into(),
            points,
        }
    }

    /// Waypoint at `index`, or None past the final waypoint.
    pub fn point(&self, index: usize) -> Option<Position> {
        self.points.get(index).copied()
    }

    /// Index of the final waypoint.
    pub fn last_index(&self) -> usize {
        self.points.len() - 1
    }

    /// Minimum distance from `p` to any segment of this path.
    pub fn min_distance_to(&self, p: &Position) -> f64 {
        self.points
            .windows(2)
            .map(|seg| distance_to_segment(p, &seg[0], &seg[1]))
            .fold(f64::MAX, f64::min)
    }
}

/// All paths for a map, with per-path selection weights.
/// Weights need not sum to 1; they are normalized at selection time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathSet {
    pub paths: Vec<Path>,
    pub weights: Vec<f64>,
}

impl PathSet {
    pub fn new(paths: Vec<Path>, weights: Vec<f64>) -> Self {
        debug_assert_eq!(paths.len(), weights.len());
        Self { paths, weights }
    }

    pub fn get(&self, index: usize) -> &Path {
        &self.paths[index]
    }

    /// Pick a path index proportionally to the weights, given a uniform
    /// roll in [0, 1). Non-positive weights never win.
    pub fn pick(&self, roll: f64) -> usize {
        let total: f64 = self.weights.iter().filter(|w| **w > 0.0).sum();
        if total <= 0.0 {
            return 0;
        }
        let mut remaining = roll.clamp(0.0, 1.0) * total;
        for (i, &w) in self.weights.iter().enumerate() {
            if w <= 0.0 {
                continue;
            }
            if remaining < w {
                return i;
            }
            remaining -= w;
        }
        self.weights.len() - 1
    }

    /// Minimum distance from `p` to any segment of any path.
    /// Placement validity must consult every path, not just one.
    pub fn min_distance_to(&self, p: &Position) -> f64 {
        self.paths
            .iter()
            .map(|path| path.min_distance_to(p))
            .fold(f64::MAX, f64::min)
    }
}

/// Distance from `p` to the segment `a`-`b`.
pub fn distance_to_segment(p: &Position, a: &Position, b: &Position) -> f64 {
    let ab = b.to_vec2() - a.to_vec2();
    let ap = p.to_vec2() - a.to_vec2();
    let len_sq = ab.length_squared();
    if len_sq <= f64::EPSILON {
        return p.distance_to(a);
    }
    let t = (ap.dot(ab) / len_sq).clamp(0.0, 1.0);
    let closest = a.to_vec2() + ab * t;
    (p.to_vec2() - closest).length()
}

/// Project `p` onto the segment `a`-`b`, returning the closest point.
pub fn project_onto_segment(p: &Position, a: &Position, b: &Position) -> Position {
    let ab = b.to_vec2() - a.to_vec2();
    let len_sq = ab.length_squared();
    if len_sq <= f64::EPSILON {
        return *a;
    }
    let t = ((p.to_vec2() - a.to_vec2()).dot(ab) / len_sq).clamp(0.0, 1.0);
    Position::from_vec2(a.to_vec2() + ab * t)
}
