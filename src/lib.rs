//! Randomized test-scenario generation for motion-planning and racing consumers.
//!
//! Two generators live here. `boxes` places movable boxes, moving obstacles and static obstacles
//! in a square arena so that nothing overlaps. `race` draws terrain, car, driver and tyre
//! probability profiles for a race of a given level.


pub mod domain;
pub mod error;
pub mod params;

pub use error::{Error, Result};
