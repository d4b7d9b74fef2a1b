//! Rejection-sampling placement of boxes and obstacles.
//!
//! Each entity is drawn uniformly from the coordinate range that keeps its footprint inside the
//! arena and redrawn until [`AcceptedSet::admits`] it. Categories are placed in a fixed order:
//! movable boxes, moving obstacles, static obstacles. The accepted set is threaded through every
//! step by value, so each category can be driven on its own.
//!
//! With unbounded [`PlacementLimits`] an infeasible density never terminates. A bound turns that
//! stall into [`PlacementError::PlacementFailed`].

use rand::Rng;
use thiserror::Error;
use tracing::{debug, info};

use super::{
    AcceptedSet, BoxPosition, Category, GridPoint, HasCollision, MovableBox, MovingObstacle,
    RobotGeometry, StaticObstacle, ARENA_SIZE,
};

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct EntityCounts {
    pub moving_boxes: usize,
    pub moving_obstacles: usize,
    pub static_obstacles: usize,
}

impl EntityCounts {
    pub const fn new(moving_boxes: usize, moving_obstacles: usize, static_obstacles: usize) -> Self {
        Self {
            moving_boxes,
            moving_obstacles,
            static_obstacles,
        }
    }
}

/// Upper bound on the draws spent on a single entity.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct PlacementLimits {
    max_attempts: Option<u64>,
}

impl PlacementLimits {
    pub fn unbounded() -> Self {
        Self { max_attempts: None }
    }

    /// Every entity gets at least one draw, so a bound of 0 behaves like 1.
    pub fn bounded(max_attempts: u64) -> Self {
        Self {
            max_attempts: Some(max_attempts),
        }
    }

    pub fn max_attempts(&self) -> Option<u64> {
        self.max_attempts
    }

    fn is_exhausted(&self, attempts: u64) -> bool {
        self.max_attempts.is_some_and(|max| attempts >= max)
    }
}

#[derive(Error, Debug, Eq, PartialEq)]
pub enum PlacementError {
    #[error("failed to place {category} #{index} after {attempts} attempts")]
    PlacementFailed {
        category: Category,
        index: usize,
        attempts: u64,
    },
}

/// Place every category in order, starting from an empty set.
pub fn place_all<R: Rng + ?Sized>(
    counts: EntityCounts,
    geometry: &RobotGeometry,
    limits: PlacementLimits,
    rng: &mut R,
) -> Result<AcceptedSet, PlacementError> {
    let accepted = AcceptedSet::new();
    let accepted = place_boxes(accepted, counts.moving_boxes, geometry, limits, rng)?;
    let accepted =
        place_moving_obstacles(accepted, counts.moving_obstacles, geometry, limits, rng)?;
    place_static_obstacles(accepted, counts.static_obstacles, geometry, limits, rng)
}

/// Initial and goal positions are drawn independently: an initial position only has to clear
/// the other initial positions, a goal only the other goals.
pub fn place_boxes<R: Rng + ?Sized>(
    mut accepted: AcceptedSet,
    count: usize,
    geometry: &RobotGeometry,
    limits: PlacementLimits,
    rng: &mut R,
) -> Result<AcceptedSet, PlacementError> {
    let margin = Category::BoxInitial.half_extent(geometry);

    for index in 0..count {
        let initial = sample_until_admitted(&accepted, index, geometry, limits, rng, |rng| {
            BoxPosition::initial(draw_point(rng, margin))
        })?;
        let goal = sample_until_admitted(&accepted, index, geometry, limits, rng, |rng| {
            BoxPosition::goal(draw_point(rng, margin))
        })?;
        accepted.push_box(MovableBox::new(initial.point(), goal.point()));
    }

    info!(count, "placed movable boxes");
    Ok(accepted)
}

pub fn place_moving_obstacles<R: Rng + ?Sized>(
    mut accepted: AcceptedSet,
    count: usize,
    geometry: &RobotGeometry,
    limits: PlacementLimits,
    rng: &mut R,
) -> Result<AcceptedSet, PlacementError> {
    // Keep obstacle centres inside the box range as well as their own footprint in the arena.
    let margin = Category::MovingObstacle
        .half_extent(geometry)
        .max(Category::BoxInitial.half_extent(geometry));

    for index in 0..count {
        let obstacle = sample_until_admitted(&accepted, index, geometry, limits, rng, |rng| {
            MovingObstacle::new(draw_point(rng, margin))
        })?;
        accepted.push_moving_obstacle(obstacle);
    }

    info!(count, "placed moving obstacles");
    Ok(accepted)
}

pub fn place_static_obstacles<R: Rng + ?Sized>(
    mut accepted: AcceptedSet,
    count: usize,
    geometry: &RobotGeometry,
    limits: PlacementLimits,
    rng: &mut R,
) -> Result<AcceptedSet, PlacementError> {
    for index in 0..count {
        let obstacle = sample_until_admitted(&accepted, index, geometry, limits, rng, |rng| {
            let x_1 = rng.random_range(0..ARENA_SIZE);
            let y_1 = rng.random_range(0..ARENA_SIZE);
            let x_2 = rng.random_range(x_1..ARENA_SIZE);
            let y_2 = rng.random_range(y_1..ARENA_SIZE);
            StaticObstacle::new(GridPoint::new(x_1, y_1), GridPoint::new(x_2, y_2))
        })?;
        accepted.push_static_obstacle(obstacle);
    }

    info!(count, "placed static obstacles");
    Ok(accepted)
}

/// Uniform point with both coordinates in `[margin, ARENA_SIZE - margin)`.
fn draw_point<R: Rng + ?Sized>(rng: &mut R, margin: i32) -> GridPoint {
    GridPoint::new(
        rng.random_range(margin..ARENA_SIZE - margin),
        rng.random_range(margin..ARENA_SIZE - margin),
    )
}

fn sample_until_admitted<T, R, F>(
    accepted: &AcceptedSet,
    index: usize,
    geometry: &RobotGeometry,
    limits: PlacementLimits,
    rng: &mut R,
    mut draw: F,
) -> Result<T, PlacementError>
where
    T: HasCollision,
    R: Rng + ?Sized,
    F: FnMut(&mut R) -> T,
{
    let mut attempts: u64 = 0;
    loop {
        let candidate = draw(&mut *rng);
        attempts += 1;

        if accepted.admits(&candidate, geometry) {
            debug!(category = %candidate.category(), index, attempts, "accepted candidate");
            return Ok(candidate);
        }

        if limits.is_exhausted(attempts) {
            return Err(PlacementError::PlacementFailed {
                category: candidate.category(),
                index,
                attempts,
            });
        }
    }
}
