//! Incremental snail packer.
//!
//! Circles are placed one at a time in input order. The first sits at the origin, the second
//! touches it on the configured start side, and every later circle is tangent to the previously
//! placed one while orbiting the current *central* circle. Once a circle no longer touches the
//! central circle, the next circle in placement order becomes the center of the orbit.

use crate::config::SnailOptions;
use crate::direction::StartPosition;
use crate::error::{Error, GeometryFailure, Result};
use crate::geom::{Circle, Point, TOLERANCE};
use crate::intersect::{Intersection, intersect};
use serde::{Deserialize, Serialize};

/// A positioned circle together with the item it was computed from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedNode<T> {
    pub data: T,
    #[serde(flatten)]
    pub circle: Circle,
}

impl<T> PlacedNode<T> {
    pub fn x(&self) -> f64 {
        self.circle.x
    }

    pub fn y(&self) -> f64 {
        self.circle.y
    }

    pub fn r(&self) -> f64 {
        self.circle.r
    }
}

/// Circles placed so far plus the index of the circle currently used as orbit center.
///
/// `central_index` starts at 0, never decreases, and stays below `nodes.len()` once a circle has
/// been placed.
#[derive(Debug, Clone)]
pub struct PackerState<T> {
    nodes: Vec<PlacedNode<T>>,
    central_index: usize,
}

impl<T> Default for PackerState<T> {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            central_index: 0,
        }
    }
}

impl<T> PackerState<T> {
    pub fn nodes(&self) -> &[PlacedNode<T>] {
        &self.nodes
    }

    pub fn central_index(&self) -> usize {
        self.central_index
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn circle(&self, index: usize) -> Circle {
        self.nodes[index].circle
    }
}

const PAIRS_OF_TWO: &[(usize, usize)] = &[(0, 1)];
const PAIRS_OF_THREE: &[(usize, usize)] = &[(0, 1), (0, 2), (1, 2)];

#[derive(Debug, Clone)]
pub struct Packer<T> {
    start_position: StartPosition,
    clockwise: bool,
    state: PackerState<T>,
}

impl<T> Packer<T> {
    pub fn new(start_position: StartPosition, clockwise: bool) -> Self {
        Self {
            start_position,
            clockwise,
            state: PackerState::default(),
        }
    }

    pub fn from_options(options: &SnailOptions) -> Self {
        Self::new(options.start_position, options.clockwise)
    }

    pub fn state(&self) -> &PackerState<T> {
        &self.state
    }

    pub fn into_nodes(self) -> Vec<PlacedNode<T>> {
        self.state.nodes
    }

    /// Places the next item as a circle of the given radius.
    ///
    /// On error the state is left as it was before the call, apart from a central index
    /// advancement that the gap check may already have applied.
    pub fn step(&mut self, data: T, radius: f64) -> Result<&PlacedNode<T>> {
        let index = self.state.len();
        let circle = match index {
            0 => Circle::new(0.0, 0.0, radius),
            1 => {
                let first = self.state.circle(0);
                let offset = self.start_position.second_offset(first.r, radius);
                Circle::at(first.center() + offset, radius)
            }
            _ => self.place_next(index, radius)?,
        };

        tracing::trace!(
            index,
            x = circle.x,
            y = circle.y,
            r = circle.r,
            central = self.state.central_index,
            "placed circle"
        );
        self.state.nodes.push(PlacedNode { data, circle });
        Ok(&self.state.nodes[index])
    }

    fn place_next(&mut self, index: usize, radius: f64) -> Result<Circle> {
        self.advance_if_gap_too_narrow(index, radius);

        let central = self.state.central_index;
        let last = index - 1;

        let mut adjacent: Vec<usize> = Vec::with_capacity(3);
        adjacent.push(central);
        if last != central {
            adjacent.push(last);
        }
        let next_to_central = central + 1;
        if next_to_central < last {
            adjacent.push(next_to_central);
        }
        debug_assert!(adjacent.len() <= 3);

        let pairs = match adjacent.len() {
            2 => PAIRS_OF_TWO,
            3 => PAIRS_OF_THREE,
            _ => return Err(self.fail(index, GeometryFailure::TooFewAdjacentCircles)),
        };

        let enlarged: Vec<Circle> = adjacent
            .iter()
            .map(|&i| self.state.circle(i).enlarged(radius))
            .collect();

        let mut candidates: Vec<Point> = Vec::with_capacity(2 * pairs.len());
        for &(i, j) in pairs {
            match intersect(&enlarged[i], &enlarged[j], TOLERANCE) {
                Intersection::Coincident => {
                    return Err(self.fail(index, GeometryFailure::CoincidentCenters));
                }
                hit => candidates.extend(hit.points()),
            }
        }
        let found = candidates.len();

        // Candidates come from the adjacency set only, but must clear every placed circle.
        let last_circle = self.state.circle(last);
        candidates.retain(|p| {
            let placed = Circle::at(*p, radius);
            placed.is_tangent_to(&last_circle)
                && !self.state.nodes.iter().any(|n| placed.overlaps(&n.circle))
        });
        tracing::debug!(
            index,
            central,
            adjacent = adjacent.len(),
            found,
            kept = candidates.len(),
            "filtered candidate positions"
        );

        let chosen = if index == 2 {
            self.pick_initial_direction(index, &candidates)?
        } else {
            let before_last = self.state.circle(index - 2).center();
            farthest_from(&candidates, before_last)
                .ok_or_else(|| self.fail(index, GeometryFailure::NoCandidate))?
        };

        let circle = Circle::at(chosen, radius);
        if !circle.is_tangent_to(&self.state.circle(central)) {
            self.state.central_index += 1;
            tracing::debug!(
                index,
                central = self.state.central_index,
                "circle left the orbit, advancing central circle"
            );
        }
        Ok(circle)
    }

    /// Moves the orbit center forward when the new circle cannot fit between the circle two
    /// places after the center and the last placed circle.
    fn advance_if_gap_too_narrow(&mut self, index: usize, radius: f64) {
        let central = self.state.central_index;
        if central == 0 {
            return;
        }
        let Some(second_next) = self.state.nodes.get(central + 2) else {
            return;
        };
        let last = self.state.circle(index - 1);
        if second_next.circle.gap_to(&last) + TOLERANCE <= 2.0 * radius {
            self.state.central_index += 1;
            tracing::debug!(
                index,
                central = self.state.central_index,
                "gap too narrow, advancing central circle"
            );
        }
    }

    fn pick_initial_direction(&self, index: usize, candidates: &[Point]) -> Result<Point> {
        let second = self.state.circle(1);
        let matching: Vec<Point> = candidates
            .iter()
            .copied()
            .filter(|p| {
                self.start_position
                    .accepts_third(self.clockwise, &second, *p)
            })
            .collect();
        match matching.as_slice() {
            [p] => Ok(*p),
            [] => Err(self.fail(index, GeometryFailure::NoCandidate)),
            many => Err(self.fail(
                index,
                GeometryFailure::AmbiguousCandidates { count: many.len() },
            )),
        }
    }

    fn fail(&self, index: usize, reason: GeometryFailure) -> Error {
        tracing::warn!(
            index,
            central = self.state.central_index,
            %reason,
            "snail layout failed"
        );
        Error::GeometryContract { index, reason }
    }
}

/// First point with the largest distance to `from`.
fn farthest_from(points: &[Point], from: Point) -> Option<Point> {
    let mut best: Option<(Point, f64)> = None;
    for &p in points {
        let d = p.distance_to(from);
        if best.is_none_or(|(_, best_d)| d > best_d) {
            best = Some((p, d));
        }
    }
    best.map(|(p, _)| p)
}
