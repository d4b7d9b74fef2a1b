//! Resolution of command-line arguments into generator parameters.
//!
//! A wrong number of placement counts is not an error: the defaults are used and a notice is
//! logged. An unknown race level is.

use rand::Rng;
use thiserror::Error;
use tracing::info;

use crate::domain::{EntityCounts, PlacementLimits, RaceParameters, RobotError, RobotGeometry};

pub const DEFAULT_COUNTS: EntityCounts = EntityCounts::new(10, 7, 12);
pub const DEFAULT_ROBOT_LENGTH: i32 = 5;
/// Moving obstacle half-width is drawn from this range unless given explicitly.
pub const OBSTACLE_WIDTH_RANGE: std::ops::Range<i32> = 5..7;
pub const DEFAULT_LEVEL: &str = "4";
pub const DEFAULT_OUTPUT: &str = "input0.txt";

pub const BOXES_USAGE: &str =
    "usage: scenario-gen boxes MOVING_BOXES MOVING_OBSTACLES STATIC_OBSTACLES";
pub const RACE_USAGE: &str = "usage: scenario-gen race LEVEL [FILE]";

#[derive(Error, Debug, Eq, PartialEq)]
pub enum ConfigError {
    #[error("level out of range: {0:?} (expected 1, 2, 3 or 4)")]
    InvalidLevel(String),
    #[error(transparent)]
    InvalidGeometry(#[from] RobotError),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PlacementParameters {
    pub counts: EntityCounts,
    pub geometry: RobotGeometry,
    pub limits: PlacementLimits,
}

/// Counts given as `MOVING_BOXES MOVING_OBSTACLES STATIC_OBSTACLES`, or the defaults.
pub fn resolve_counts(counts: &[usize]) -> EntityCounts {
    match *counts {
        [moving_boxes, moving_obstacles, static_obstacles] => {
            EntityCounts::new(moving_boxes, moving_obstacles, static_obstacles)
        }
        _ => {
            info!("Default parameter used");
            info!("{BOXES_USAGE}");
            DEFAULT_COUNTS
        }
    }
}

pub fn resolve_placement<R: Rng + ?Sized>(
    counts: &[usize],
    robot_length: Option<i32>,
    obstacle_width: Option<i32>,
    max_attempts: Option<u64>,
    rng: &mut R,
) -> Result<PlacementParameters, ConfigError> {
    let counts = resolve_counts(counts);
    let length = robot_length.unwrap_or(DEFAULT_ROBOT_LENGTH);
    let obstacle_width = obstacle_width.unwrap_or_else(|| rng.random_range(OBSTACLE_WIDTH_RANGE));
    let geometry = RobotGeometry::new(length, obstacle_width)?;
    let limits = match max_attempts {
        Some(max) => PlacementLimits::bounded(max),
        None => PlacementLimits::unbounded(),
    };

    info!(
        moving_boxes = counts.moving_boxes,
        moving_obstacles = counts.moving_obstacles,
        static_obstacles = counts.static_obstacles,
        robot_length = length,
        obstacle_width,
        max_attempts,
        "resolved placement parameters"
    );

    Ok(PlacementParameters {
        counts,
        geometry,
        limits,
    })
}

/// Look up the race level table. `None` selects [`DEFAULT_LEVEL`] and logs a notice.
pub fn resolve_level(level: Option<&str>) -> Result<RaceParameters, ConfigError> {
    let level = level.unwrap_or_else(|| {
        info!("No level input - Default parameter used");
        info!("{RACE_USAGE}");
        DEFAULT_LEVEL
    });

    let (level_number, car_types, driver_types, terrain_types, total_length) = match level {
        "1" => (1, 2, 2, 2, 10),
        "2" => (2, 3, 2, 4, 10),
        "3" => (3, 5, 5, 8, 30),
        "4" => (4, 5, 5, 8, 30),
        _ => return Err(ConfigError::InvalidLevel(level.to_owned())),
    };

    Ok(RaceParameters {
        level: level_number,
        car_types,
        driver_types,
        terrain_types,
        total_length,
        max_time: 3 * total_length,
    })
}
