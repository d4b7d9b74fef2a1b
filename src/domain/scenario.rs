//! Assembled placement scenario in output units and its text layout.

use std::fmt;

use rand::Rng;

use super::{
    place_all, to_output, AcceptedSet, Angle, EntityCounts, PlacementError, PlacementLimits,
    Position, RobotGeometry, RobotPose,
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoxRecord {
    pub initial: Position,
    pub goal: Position,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ObstacleRecord {
    pub center: Position,
    pub half_width: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectangleRecord {
    pub bottom_left: Position,
    pub top_right: Position,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scenario {
    robot_length: f64,
    robot_position: Position,
    robot_heading: Angle,
    boxes: Vec<BoxRecord>,
    moving_obstacles: Vec<ObstacleRecord>,
    static_obstacles: Vec<RectangleRecord>,
}

impl Scenario {
    /// Convert the accepted entities to output units, keeping acceptance order.
    pub fn assemble(geometry: &RobotGeometry, pose: RobotPose, accepted: AcceptedSet) -> Self {
        let half_width = to_output(geometry.obstacle_width());
        Self {
            robot_length: to_output(geometry.length()),
            robot_position: pose.position(),
            robot_heading: pose.heading(),
            boxes: accepted
                .boxes()
                .iter()
                .map(|b| BoxRecord {
                    initial: b.initial().point().into(),
                    goal: b.goal().point().into(),
                })
                .collect(),
            moving_obstacles: accepted
                .moving_obstacles()
                .iter()
                .map(|o| ObstacleRecord {
                    center: o.center().into(),
                    half_width,
                })
                .collect(),
            static_obstacles: accepted
                .static_obstacles()
                .iter()
                .map(|o| RectangleRecord {
                    bottom_left: o.bottom_left_corner().into(),
                    top_right: o.top_right_corner().into(),
                })
                .collect(),
        }
    }

    pub fn boxes(&self) -> &[BoxRecord] {
        &self.boxes
    }

    pub fn moving_obstacles(&self) -> &[ObstacleRecord] {
        &self.moving_obstacles
    }

    pub fn static_obstacles(&self) -> &[RectangleRecord] {
        &self.static_obstacles
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} {} {}",
            self.robot_length, self.robot_position, self.robot_heading
        )?;
        writeln!(
            f,
            "{} {} {}",
            self.boxes.len(),
            self.moving_obstacles.len(),
            self.static_obstacles.len()
        )?;
        for b in &self.boxes {
            writeln!(f, "{} {}", b.initial, b.goal)?;
        }
        for o in &self.moving_obstacles {
            writeln!(f, "{} {}", o.center, o.half_width)?;
        }
        for o in &self.static_obstacles {
            writeln!(f, "{} {}", o.bottom_left, o.top_right)?;
        }
        writeln!(f)
    }
}

/// Draw the robot pose, place every entity and assemble the result.
pub fn generate_scenario<R: Rng + ?Sized>(
    counts: EntityCounts,
    geometry: &RobotGeometry,
    limits: PlacementLimits,
    rng: &mut R,
) -> Result<Scenario, PlacementError> {
    let pose = RobotPose::random(rng);
    let accepted = place_all(counts, geometry, limits, rng)?;
    Ok(Scenario::assemble(geometry, pose, accepted))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::super::{GridPoint, MovableBox, MovingObstacle, StaticObstacle};
    use super::*;

    fn geometry() -> RobotGeometry {
        RobotGeometry::new(5, 6).unwrap()
    }

    #[test]
    fn test_scenario_display() {
        let mut accepted = AcceptedSet::new();
        accepted.push_box(MovableBox::new(GridPoint::new(10, 20), GridPoint::new(80, 90)));
        accepted.push_box(MovableBox::new(GridPoint::new(40, 20), GridPoint::new(55, 65)));
        accepted.push_moving_obstacle(MovingObstacle::new(GridPoint::new(50, 50)));
        accepted.push_static_obstacle(StaticObstacle::new(
            GridPoint::new(0, 0),
            GridPoint::new(3, 4),
        ));
        let pose = RobotPose::new(GridPoint::new(37, 12), 250);

        let scenario = Scenario::assemble(&geometry(), pose, accepted);

        assert_eq!(
            scenario.to_string(),
            "0.05 0.37 0.12 2.5\n\
             2 1 1\n\
             0.1 0.2 0.8 0.9\n\
             0.4 0.2 0.55 0.65\n\
             0.5 0.5 0.06\n\
             0 0 0.03 0.04\n\
             \n"
        );
    }

    #[test]
    fn test_empty_scenario_display() {
        let scenario = Scenario::assemble(
            &geometry(),
            RobotPose::new(GridPoint::new(0, 99), 0),
            AcceptedSet::new(),
        );
        insta::assert_snapshot!(scenario.to_string().trim_end(), @r"
        0.05 0 0.99 0
        0 0 0
        ");
    }

    #[test]
    fn test_generate_scenario_counts() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let scenario = generate_scenario(
            EntityCounts::new(10, 7, 12),
            &geometry(),
            PlacementLimits::unbounded(),
            &mut rng,
        )
        .unwrap();

        assert_eq!(scenario.boxes().len(), 10);
        assert_eq!(scenario.moving_obstacles().len(), 7);
        assert_eq!(scenario.static_obstacles().len(), 12);

        let lines = scenario.to_string().lines().map(str::to_owned).collect::<Vec<_>>();
        assert_eq!(lines.len(), 2 + 10 + 7 + 12 + 1);
        assert_eq!(lines[1], "10 7 12");
        assert_eq!(lines.last().map(String::as_str), Some(""));
        for o in scenario.moving_obstacles() {
            assert!(o.center.x() >= 0.06 && o.center.x() < 0.94);
            assert!(o.center.y() >= 0.06 && o.center.y() < 0.94);
        }
        for o in scenario.static_obstacles() {
            assert!(o.bottom_left.x() <= o.top_right.x());
            assert!(o.bottom_left.y() <= o.top_right.y());
        }
    }

    #[test]
    fn test_generate_scenario_is_reproducible() {
        let generate = |seed| {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            generate_scenario(
                EntityCounts::new(10, 7, 12),
                &geometry(),
                PlacementLimits::unbounded(),
                &mut rng,
            )
            .unwrap()
            .to_string()
        };
        assert_eq!(generate(5), generate(5));
        assert_ne!(generate(5), generate(6));
    }
}
