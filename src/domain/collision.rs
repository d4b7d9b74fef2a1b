//! Collision detection based on axis-aligned rectangles.
//!
//! Every entity has a core rectangle: a single point for boxes and moving obstacles, the literal
//! corners for static obstacles. Whether two entities collide is decided by expanding one core by
//! the margin of the category pair and running a strict separating-axis test against the other.

use super::RobotGeometry;

pub trait HasCollision {
    fn category(&self) -> Category;

    fn core(&self) -> Aabb;

    /// True if `other` does not have to be avoided, or if both footprints are disjoint.
    fn is_clear_of(&self, other: &dyn HasCollision, geometry: &RobotGeometry) -> bool {
        match pair_margin(self.category(), other.category(), geometry) {
            Some(margin) => self.core().expanded(margin).is_separated_from(&other.core()),
            None => true,
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Category {
    BoxInitial,
    BoxGoal,
    MovingObstacle,
    StaticObstacle,
}

impl Category {
    /// Distance from the entity's core to the edge of its footprint.
    pub fn half_extent(self, geometry: &RobotGeometry) -> i32 {
        match self {
            Category::BoxInitial | Category::BoxGoal => geometry.length(),
            Category::MovingObstacle => geometry.obstacle_width(),
            Category::StaticObstacle => 0,
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Category::BoxInitial => "box initial position",
            Category::BoxGoal => "box goal position",
            Category::MovingObstacle => "moving obstacle",
            Category::StaticObstacle => "static obstacle",
        })
    }
}

/// Margin separating the cores of two categories, or `None` if the pair is never checked.
///
/// The table is symmetric. Goal positions are only checked against other goals and static
/// obstacles; moving obstacles ignore goal positions.
pub fn pair_margin(a: Category, b: Category, geometry: &RobotGeometry) -> Option<i32> {
    use Category::*;

    let length = geometry.length();
    let width = geometry.obstacle_width();

    match (a, b) {
        (BoxInitial, BoxInitial) | (BoxGoal, BoxGoal) => Some(length + length),
        (BoxInitial, MovingObstacle) | (MovingObstacle, BoxInitial) => Some(length + width),
        (MovingObstacle, MovingObstacle) => Some(width + width),
        (StaticObstacle, BoxInitial | BoxGoal) | (BoxInitial | BoxGoal, StaticObstacle) => {
            Some(length)
        }
        (StaticObstacle, MovingObstacle) | (MovingObstacle, StaticObstacle) => Some(width),
        (StaticObstacle, StaticObstacle) => Some(0),
        (BoxInitial, BoxGoal) | (BoxGoal, BoxInitial) => None,
        (BoxGoal, MovingObstacle) | (MovingObstacle, BoxGoal) => None,
    }
}

/// Axis-aligned rectangle on the arena grid, bounds inclusive.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct Aabb {
    x_min: i32,
    y_min: i32,
    x_max: i32,
    y_max: i32,
}

impl Aabb {
    /// Rectangle spanned by two opposite corners given in any order.
    pub fn from_corners(x_1: i32, y_1: i32, x_2: i32, y_2: i32) -> Self {
        Self {
            x_min: x_1.min(x_2),
            y_min: y_1.min(y_2),
            x_max: x_1.max(x_2),
            y_max: y_1.max(y_2),
        }
    }

    pub fn point(x: i32, y: i32) -> Self {
        Self::from_corners(x, y, x, y)
    }

    pub fn x_min(&self) -> i32 {
        self.x_min
    }

    pub fn y_min(&self) -> i32 {
        self.y_min
    }

    pub fn x_max(&self) -> i32 {
        self.x_max
    }

    pub fn y_max(&self) -> i32 {
        self.y_max
    }

    pub fn expanded(&self, margin: i32) -> Self {
        Self {
            x_min: self.x_min - margin,
            y_min: self.y_min - margin,
            x_max: self.x_max + margin,
            y_max: self.y_max + margin,
        }
    }

    /// Strict separating-axis test: touching edges count as overlap.
    pub fn is_separated_from(&self, other: &Aabb) -> bool {
        self.x_max < other.x_min
            || other.x_max < self.x_min
            || self.y_max < other.y_min
            || other.y_max < self.y_min
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    struct Probe(Category, Aabb);

    impl HasCollision for Probe {
        fn category(&self) -> Category {
            self.0
        }

        fn core(&self) -> Aabb {
            self.1
        }
    }

    fn geometry() -> RobotGeometry {
        RobotGeometry::new(5, 6).unwrap()
    }

    #[rstest]
    #[case::left(Aabb::from_corners(0, 0, 1, 1), Aabb::from_corners(2, 0, 3, 1), true)]
    #[case::above(Aabb::from_corners(0, 5, 1, 6), Aabb::from_corners(0, 0, 1, 4), true)]
    #[case::touching_edge(Aabb::from_corners(0, 0, 2, 2), Aabb::from_corners(2, 0, 4, 2), false)]
    #[case::touching_corner(Aabb::from_corners(0, 0, 2, 2), Aabb::from_corners(2, 2, 4, 4), false)]
    #[case::contained(Aabb::from_corners(0, 0, 10, 10), Aabb::from_corners(4, 4, 5, 5), false)]
    #[case::crossing(Aabb::from_corners(0, 4, 10, 5), Aabb::from_corners(4, 0, 5, 10), false)]
    #[case::diagonal(Aabb::from_corners(0, 0, 2, 2), Aabb::from_corners(3, 3, 4, 4), true)]
    fn test_aabb_is_separated_from(#[case] a: Aabb, #[case] b: Aabb, #[case] expected: bool) {
        assert_eq!(a.is_separated_from(&b), expected);
        assert_eq!(b.is_separated_from(&a), expected);
    }

    #[test]
    fn test_aabb_from_corners_orders_bounds() {
        let aabb = Aabb::from_corners(7, 9, 3, 1);
        assert_eq!(
            (aabb.x_min(), aabb.y_min(), aabb.x_max(), aabb.y_max()),
            (3, 1, 7, 9)
        );
        assert_eq!(aabb.expanded(2), Aabb::from_corners(1, -1, 9, 11));
    }

    #[rstest]
    #[case(Category::BoxInitial, Category::BoxInitial, Some(10))]
    #[case(Category::BoxGoal, Category::BoxGoal, Some(10))]
    #[case(Category::BoxInitial, Category::BoxGoal, None)]
    #[case(Category::MovingObstacle, Category::BoxInitial, Some(11))]
    #[case(Category::MovingObstacle, Category::BoxGoal, None)]
    #[case(Category::MovingObstacle, Category::MovingObstacle, Some(12))]
    #[case(Category::StaticObstacle, Category::BoxInitial, Some(5))]
    #[case(Category::StaticObstacle, Category::BoxGoal, Some(5))]
    #[case(Category::StaticObstacle, Category::MovingObstacle, Some(6))]
    #[case(Category::StaticObstacle, Category::StaticObstacle, Some(0))]
    fn test_pair_margin(#[case] a: Category, #[case] b: Category, #[case] expected: Option<i32>) {
        assert_eq!(pair_margin(a, b, &geometry()), expected);
        assert_eq!(pair_margin(b, a, &geometry()), expected);
    }

    #[rstest]
    // Box squares of half-extent 5 need centres more than 10 apart on one axis.
    #[case::boxes_apart(Category::BoxInitial, Aabb::point(10, 10), Category::BoxInitial, Aabb::point(21, 10), true)]
    #[case::boxes_touching(Category::BoxInitial, Aabb::point(10, 10), Category::BoxInitial, Aabb::point(20, 10), false)]
    #[case::initial_ignores_goal(Category::BoxInitial, Aabb::point(10, 10), Category::BoxGoal, Aabb::point(10, 10), true)]
    #[case::obstacle_near_box(Category::MovingObstacle, Aabb::point(30, 30), Category::BoxInitial, Aabb::point(41, 30), false)]
    #[case::obstacle_clear_of_box(Category::MovingObstacle, Aabb::point(30, 30), Category::BoxInitial, Aabb::point(42, 30), true)]
    #[case::obstacle_ignores_goal(Category::MovingObstacle, Aabb::point(30, 30), Category::BoxGoal, Aabb::point(30, 30), true)]
    #[case::static_near_goal(Category::StaticObstacle, Aabb::from_corners(0, 0, 10, 10), Category::BoxGoal, Aabb::point(15, 5), false)]
    #[case::static_clear_of_goal(Category::StaticObstacle, Aabb::from_corners(0, 0, 10, 10), Category::BoxGoal, Aabb::point(16, 5), true)]
    #[case::static_near_obstacle(Category::StaticObstacle, Aabb::from_corners(0, 0, 10, 10), Category::MovingObstacle, Aabb::point(5, 16), false)]
    #[case::static_clear_of_obstacle(Category::StaticObstacle, Aabb::from_corners(0, 0, 10, 10), Category::MovingObstacle, Aabb::point(5, 17), true)]
    #[case::statics_sharing_edge(Category::StaticObstacle, Aabb::from_corners(0, 0, 10, 10), Category::StaticObstacle, Aabb::from_corners(10, 0, 20, 10), false)]
    #[case::statics_apart(Category::StaticObstacle, Aabb::from_corners(0, 0, 10, 10), Category::StaticObstacle, Aabb::from_corners(11, 0, 20, 10), true)]
    fn test_is_clear_of(
        #[case] category: Category,
        #[case] core: Aabb,
        #[case] other_category: Category,
        #[case] other_core: Aabb,
        #[case] expected: bool,
    ) {
        let a = Probe(category, core);
        let b = Probe(other_category, other_core);
        assert_eq!(a.is_clear_of(&b, &geometry()), expected);
        assert_eq!(b.is_clear_of(&a, &geometry()), expected);
    }
}
