//! Basic building blocks.
//!
//! Generation works on an integer grid; the consumer reads fixed-point values, so every grid
//! quantity is divided by [`SCALE`] on its way out.

use std::fmt;

/// Number of grid units per output unit.
pub const SCALE: f64 = 100.0;

/// Side length of the square arena in grid units.
pub const ARENA_SIZE: i32 = 100;

pub fn to_output(value: i32) -> f64 {
    value as f64 / SCALE
}

/// Point on the arena grid.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct GridPoint {
    x: i32,
    y: i32,
}

impl GridPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }
}

/// Point in output units.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Position {
    x: f64,
    y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }
}

impl From<GridPoint> for Position {
    fn from(value: GridPoint) -> Self {
        Position::new(to_output(value.x), to_output(value.y))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd)]
pub struct Angle(f64);

impl Angle {
    /// Angle given in hundredths of a radian, the unit the robot heading is drawn in.
    pub fn from_grid(hundredths: i32) -> Self {
        Self(to_output(hundredths))
    }
}

impl From<Angle> for f64 {
    fn from(value: Angle) -> Self {
        value.0
    }
}

impl fmt::Display for Angle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, AbsDiffEq};
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_grid_point() {
        let point = GridPoint::new(1, 2);
        assert_eq!(point.x(), 1);
        assert_eq!(point.y(), 2);
    }

    #[rstest]
    #[case(GridPoint::new(0, 0), Position::new(0.0, 0.0))]
    #[case(GridPoint::new(5, 95), Position::new(0.05, 0.95))]
    #[case(GridPoint::new(37, 12), Position::new(0.37, 0.12))]
    fn test_position_from_grid_point(#[case] point: GridPoint, #[case] expected: Position) {
        assert_abs_diff_eq!(Position::from(point), expected);
    }

    #[rstest]
    #[case(GridPoint::new(5, 95), "0.05 0.95")]
    #[case(GridPoint::new(37, 12), "0.37 0.12")]
    #[case(GridPoint::new(10, 50), "0.1 0.5")]
    fn test_position_display(#[case] point: GridPoint, #[case] expected: &str) {
        assert_eq!(Position::from(point).to_string(), expected);
    }

    #[test]
    fn test_angle_from_grid() {
        assert_abs_diff_eq!(f64::from(Angle::from_grid(250)), 2.5);
        assert_eq!(Angle::from_grid(627).to_string(), "6.27");
    }

    impl AbsDiffEq for Position {
        type Epsilon = f64;

        fn default_epsilon() -> f64 {
            f64::EPSILON
        }

        fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
            f64::abs_diff_eq(&self.x, &other.x, epsilon)
                && f64::abs_diff_eq(&self.y, &other.y, epsilon)
        }
    }
}
