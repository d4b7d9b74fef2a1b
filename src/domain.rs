//! The domain module holds the generators themselves: the entities placed in the arena, the
//! collision rules between them, the rejection-sampling placement engine and the race profile
//! sampler.
//!
//! Nothing in here parses arguments or touches the file system.

mod basis;
mod collision;
mod environment;
mod placement;
mod profile;
mod robot;
mod scenario;

pub use basis::{to_output, Angle, GridPoint, Position, ARENA_SIZE, SCALE};
pub use collision::{pair_margin, Aabb, Category, HasCollision};
pub use environment::{AcceptedSet, BoxPosition, MovableBox, MovingObstacle, StaticObstacle};
pub use placement::{
    place_all, place_boxes, place_moving_obstacles, place_static_obstacles, EntityCounts,
    PlacementError, PlacementLimits,
};
pub use profile::{
    FlatDirichlet, NamedProfile, RaceParameters, RaceProfile, SimplexSampler, TerrainMap,
    CAR_NAMES, DRIVER_NAMES, OUTCOMES, TERRAIN_NAMES, TYRE_NAMES,
};
pub use robot::{RobotError, RobotGeometry, RobotPose};
pub use scenario::{generate_scenario, BoxRecord, ObstacleRecord, RectangleRecord, Scenario};
