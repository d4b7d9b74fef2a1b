//! Entities placed in the arena and the set of entities accepted so far.

use super::{Aabb, Category, GridPoint, HasCollision, RobotGeometry};

/// One end of a movable box: where it starts or where it has to be pushed to.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct BoxPosition {
    point: GridPoint,
    category: Category,
}

impl BoxPosition {
    pub fn initial(point: GridPoint) -> Self {
        Self {
            point,
            category: Category::BoxInitial,
        }
    }

    pub fn goal(point: GridPoint) -> Self {
        Self {
            point,
            category: Category::BoxGoal,
        }
    }

    pub fn point(&self) -> GridPoint {
        self.point
    }
}

impl HasCollision for BoxPosition {
    fn category(&self) -> Category {
        self.category
    }

    fn core(&self) -> Aabb {
        Aabb::point(self.point.x(), self.point.y())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct MovableBox {
    initial: GridPoint,
    goal: GridPoint,
}

impl MovableBox {
    pub fn new(initial: GridPoint, goal: GridPoint) -> Self {
        Self { initial, goal }
    }

    pub fn initial(&self) -> BoxPosition {
        BoxPosition::initial(self.initial)
    }

    pub fn goal(&self) -> BoxPosition {
        BoxPosition::goal(self.goal)
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct MovingObstacle {
    center: GridPoint,
}

impl MovingObstacle {
    pub fn new(center: GridPoint) -> Self {
        Self { center }
    }

    pub fn center(&self) -> GridPoint {
        self.center
    }
}

impl HasCollision for MovingObstacle {
    fn category(&self) -> Category {
        Category::MovingObstacle
    }

    fn core(&self) -> Aabb {
        Aabb::point(self.center.x(), self.center.y())
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct StaticObstacle {
    bounds: Aabb,
}

impl StaticObstacle {
    pub fn new(corner_1: GridPoint, corner_2: GridPoint) -> Self {
        Self {
            bounds: Aabb::from_corners(corner_1.x(), corner_1.y(), corner_2.x(), corner_2.y()),
        }
    }

    pub fn bottom_left_corner(&self) -> GridPoint {
        GridPoint::new(self.bounds.x_min(), self.bounds.y_min())
    }

    pub fn top_right_corner(&self) -> GridPoint {
        GridPoint::new(self.bounds.x_max(), self.bounds.y_max())
    }
}

impl HasCollision for StaticObstacle {
    fn category(&self) -> Category {
        Category::StaticObstacle
    }

    fn core(&self) -> Aabb {
        self.bounds
    }
}

/// Accepted entities per category, in acceptance order. Only ever appended to.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct AcceptedSet {
    boxes: Vec<MovableBox>,
    moving_obstacles: Vec<MovingObstacle>,
    static_obstacles: Vec<StaticObstacle>,
}

impl AcceptedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn boxes(&self) -> &[MovableBox] {
        &self.boxes
    }

    pub fn moving_obstacles(&self) -> &[MovingObstacle] {
        &self.moving_obstacles
    }

    pub fn static_obstacles(&self) -> &[StaticObstacle] {
        &self.static_obstacles
    }

    pub fn push_box(&mut self, movable_box: MovableBox) {
        self.boxes.push(movable_box);
    }

    pub fn push_moving_obstacle(&mut self, obstacle: MovingObstacle) {
        self.moving_obstacles.push(obstacle);
    }

    pub fn push_static_obstacle(&mut self, obstacle: StaticObstacle) {
        self.static_obstacles.push(obstacle);
    }

    /// True if the candidate is clear of every accepted entity it has to avoid.
    pub fn admits(&self, candidate: &dyn HasCollision, geometry: &RobotGeometry) -> bool {
        self.boxes.iter().all(|b| {
            candidate.is_clear_of(&b.initial(), geometry) && candidate.is_clear_of(&b.goal(), geometry)
        }) && self
            .moving_obstacles
            .iter()
            .all(|o| candidate.is_clear_of(o, geometry))
            && self
                .static_obstacles
                .iter()
                .all(|o| candidate.is_clear_of(o, geometry))
    }
}
