//! Race profiles: terrain layout, car/driver/tyre outcome probabilities, fuel costs and slip
//! probabilities.
//!
//! Nothing here is rejected; every draw is accepted as is.

use std::fmt;

use rand::Rng;
use tracing::info;

use super::SCALE;

/// Number of outcomes each car, driver and tyre profile distributes its probability over.
pub const OUTCOMES: usize = 12;

pub const TERRAIN_NAMES: [&str; 8] = [
    "dirt-straight-hilly",
    "dirt-straight-flat",
    "dirt-slalom-hilly",
    "dirt-slalom-flat",
    "asphalt-straight-hilly",
    "asphalt-straight-flat",
    "asphalt-slalom-hilly",
    "asphalt-slalom-flat",
];

pub const CAR_NAMES: [&str; 5] = ["mazda", "toyota", "ferarri", "humvee", "go-kart"];

pub const DRIVER_NAMES: [&str; 5] = ["stig", "schumacher", "anakin", "mushroom", "crash"];

pub const TYRE_NAMES: [&str; 4] = ["all-terrain", "mud", "low-profile", "performance"];

/// Discount factor in hundredths, drawn from `[50, 100)`.
const DISCOUNT_RANGE: std::ops::Range<u32> = 50..100;
const RECOVERY_TIME_RANGE: std::ops::Range<u32> = 1..3;
const FUEL_RANGE: std::ops::RangeInclusive<u32> = 1..=5;

/// Source of probability vectors.
pub trait SimplexSampler {
    /// Vector of `dimension` non-negative components summing to one.
    fn sample<R: Rng + ?Sized>(&self, dimension: usize, rng: &mut R) -> Vec<f64>;
}

/// Symmetric Dirichlet distribution with unit concentration, i.e. uniform over the simplex.
///
/// Normalized unit-exponential draws follow exactly this distribution.
#[derive(Clone, Copy, Debug, Default)]
pub struct FlatDirichlet;

impl SimplexSampler for FlatDirichlet {
    fn sample<R: Rng + ?Sized>(&self, dimension: usize, rng: &mut R) -> Vec<f64> {
        if dimension == 0 {
            return Vec::new();
        }
        loop {
            let draws = (0..dimension)
                .map(|_| (1.0 - rng.random::<f64>()).ln().abs())
                .collect::<Vec<_>>();
            let total: f64 = draws.iter().sum();
            if total > 0.0 {
                return draws.into_iter().map(|d| d / total).collect();
            }
        }
    }
}

/// Counts selected by the race level.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct RaceParameters {
    pub level: u8,
    pub car_types: usize,
    pub driver_types: usize,
    pub terrain_types: usize,
    pub total_length: usize,
    pub max_time: usize,
}

/// Terrain type of every track segment.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TerrainMap {
    terrain_types: usize,
    segments: Vec<usize>,
}

impl TerrainMap {
    pub fn random<R: Rng + ?Sized>(terrain_types: usize, total_length: usize, rng: &mut R) -> Self {
        let segments = if terrain_types == 0 {
            Vec::new()
        } else {
            (0..total_length)
                .map(|_| rng.random_range(0..terrain_types))
                .collect()
        };
        Self {
            terrain_types,
            segments,
        }
    }

    pub fn terrain_types(&self) -> usize {
        self.terrain_types
    }

    /// 1-indexed numbers of the segments with the given terrain, in track order.
    pub fn segments_of(&self, terrain: usize) -> impl Iterator<Item = usize> + '_ {
        self.segments
            .iter()
            .enumerate()
            .filter(move |(_, t)| **t == terrain)
            .map(|(i, _)| i + 1)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct NamedProfile {
    pub name: &'static str,
    pub probabilities: Vec<f64>,
}

impl fmt::Display for NamedProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.name)?;
        write_separated(f, &self.probabilities, " ")
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct RaceProfile {
    pub parameters: RaceParameters,
    /// Hundredths.
    pub discount_factor: u32,
    pub slip_recover_time: u32,
    pub repair_time: u32,
    pub terrain: TerrainMap,
    pub cars: Vec<NamedProfile>,
    pub drivers: Vec<NamedProfile>,
    pub tyres: Vec<NamedProfile>,
    /// Row-major `cars x terrains`.
    pub fuel: Vec<u32>,
    pub slip: Vec<f64>,
}

impl RaceProfile {
    pub fn generate<S, R>(parameters: &RaceParameters, sampler: &S, rng: &mut R) -> Self
    where
        S: SimplexSampler,
        R: Rng + ?Sized,
    {
        let discount_factor = rng.random_range(DISCOUNT_RANGE);
        let slip_recover_time = rng.random_range(RECOVERY_TIME_RANGE);
        let repair_time = rng.random_range(RECOVERY_TIME_RANGE);
        let terrain = TerrainMap::random(parameters.terrain_types, parameters.total_length, rng);

        let mut profiles = |names: &[&'static str], count: usize| {
            names
                .iter()
                .take(count)
                .map(|&name| NamedProfile {
                    name,
                    probabilities: sampler.sample(OUTCOMES, rng),
                })
                .collect::<Vec<_>>()
        };
        let cars = profiles(&CAR_NAMES, parameters.car_types);
        let drivers = profiles(&DRIVER_NAMES, parameters.driver_types);
        let tyres = profiles(&TYRE_NAMES, TYRE_NAMES.len());

        let fuel = (0..cars.len() * parameters.terrain_types)
            .map(|_| rng.random_range(FUEL_RANGE))
            .collect();
        let slip = sampler.sample(parameters.terrain_types, rng);

        info!(
            level = parameters.level,
            cars = cars.len(),
            drivers = drivers.len(),
            terrains = parameters.terrain_types,
            "generated race profile"
        );

        Self {
            parameters: *parameters,
            discount_factor,
            slip_recover_time,
            repair_time,
            terrain,
            cars,
            drivers,
            tyres,
            fuel,
            slip,
        }
    }
}

impl fmt::Display for RaceProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.parameters.level)?;
        writeln!(
            f,
            "{} {} {}",
            f64::from(self.discount_factor) / SCALE,
            self.slip_recover_time,
            self.repair_time
        )?;
        writeln!(
            f,
            "{} {}",
            self.parameters.total_length, self.parameters.max_time
        )?;

        for (terrain, name) in TERRAIN_NAMES
            .iter()
            .take(self.terrain.terrain_types())
            .enumerate()
        {
            write!(f, "{name}:")?;
            write_separated(f, self.terrain.segments_of(terrain), ",")?;
            writeln!(f)?;
        }

        writeln!(f, "{}", self.cars.len())?;
        for car in &self.cars {
            writeln!(f, "{car}")?;
        }
        writeln!(f, "{}", self.drivers.len())?;
        for driver in &self.drivers {
            writeln!(f, "{driver}")?;
        }
        for tyre in &self.tyres {
            writeln!(f, "{tyre}")?;
        }

        write_separated(f, &self.fuel, " ")?;
        writeln!(f)?;
        write_separated(f, &self.slip, " ")?;
        writeln!(f)
    }
}

fn write_separated<I>(f: &mut fmt::Formatter<'_>, items: I, separator: &str) -> fmt::Result
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    for (i, item) in items.into_iter().enumerate() {
        if i > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
