//! Robot footprint and starting pose.
//!
//! The robot itself is never placed against other entities, but its footprint defines the margin
//! that keeps boxes apart and clear of obstacles.

use rand::Rng;
use thiserror::Error;

use super::{Angle, GridPoint, Position, ARENA_SIZE};

/// Heading is drawn in hundredths of a radian from `[0, floor(200 * PI))`.
const HEADING_LIMIT: i32 = 628;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct RobotGeometry {
    length: i32,
    obstacle_width: i32,
}

impl RobotGeometry {
    /// Both values are half-extents in grid units. The arena must leave room for at least one
    /// coordinate once shrunk by the larger of the two.
    pub fn new(length: i32, obstacle_width: i32) -> Result<Self, RobotError> {
        if length <= 0 || obstacle_width <= 0 {
            return Err(RobotError::NonPositiveExtent {
                length,
                obstacle_width,
            });
        }
        if length.max(obstacle_width) >= ARENA_SIZE / 2 {
            return Err(RobotError::ExtentExceedsArena {
                length,
                obstacle_width,
            });
        }
        Ok(Self {
            length,
            obstacle_width,
        })
    }

    pub fn length(&self) -> i32 {
        self.length
    }

    pub fn obstacle_width(&self) -> i32 {
        self.obstacle_width
    }
}

#[derive(Error, Debug, Eq, PartialEq)]
pub enum RobotError {
    #[error("robot length {length} and obstacle width {obstacle_width} must be positive")]
    NonPositiveExtent { length: i32, obstacle_width: i32 },
    #[error(
        "robot length {length} and obstacle width {obstacle_width} leave no room in an arena of size {arena}",
        arena = ARENA_SIZE
    )]
    ExtentExceedsArena { length: i32, obstacle_width: i32 },
}

/// Initial position and heading of the robot. Not checked against any other entity.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct RobotPose {
    position: GridPoint,
    heading: i32,
}

impl RobotPose {
    pub fn new(position: GridPoint, heading: i32) -> Self {
        Self { position, heading }
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            position: GridPoint::new(
                rng.random_range(0..ARENA_SIZE),
                rng.random_range(0..ARENA_SIZE),
            ),
            heading: rng.random_range(0..HEADING_LIMIT),
        }
    }

    pub fn position(&self) -> Position {
        self.position.into()
    }

    pub fn heading(&self) -> Angle {
        Angle::from_grid(self.heading)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::PI;

    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case::default_geometry(5, 6)]
    #[case::small(1, 1)]
    #[case::largest(49, 10)]
    fn test_robot_geometry_valid(#[case] length: i32, #[case] obstacle_width: i32) {
        let geometry = RobotGeometry::new(length, obstacle_width).unwrap();
        assert_eq!(geometry.length(), length);
        assert_eq!(geometry.obstacle_width(), obstacle_width);
    }

    #[rstest]
    #[case::zero_length(0, 5, RobotError::NonPositiveExtent { length: 0, obstacle_width: 5 })]
    #[case::negative_width(5, -1, RobotError::NonPositiveExtent { length: 5, obstacle_width: -1 })]
    #[case::length_too_large(50, 5, RobotError::ExtentExceedsArena { length: 50, obstacle_width: 5 })]
    #[case::width_too_large(5, 60, RobotError::ExtentExceedsArena { length: 5, obstacle_width: 60 })]
    #[case::length_max(i32::MAX, 6, RobotError::ExtentExceedsArena { length: i32::MAX, obstacle_width: 6 })]
    #[case::width_max(5, i32::MAX, RobotError::ExtentExceedsArena { length: 5, obstacle_width: i32::MAX })]
    #[case::length_wraps_when_doubled(1_500_000_000, 6, RobotError::ExtentExceedsArena { length: 1_500_000_000, obstacle_width: 6 })]
    fn test_robot_geometry_invalid(
        #[case] length: i32,
        #[case] obstacle_width: i32,
        #[case] expected: RobotError,
    ) {
        assert_eq!(RobotGeometry::new(length, obstacle_width), Err(expected));
    }

    #[test]
    fn test_robot_pose_random_within_arena() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..1000 {
            let pose = RobotPose::random(&mut rng);
            let position = pose.position();
            assert!((0.0..1.0).contains(&position.x()));
            assert!((0.0..1.0).contains(&position.y()));
            assert!((0.0..2.0 * PI).contains(&f64::from(pose.heading())));
        }
    }
}
