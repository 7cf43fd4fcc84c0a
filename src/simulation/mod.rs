//! Standalone invasion simulation module
//!
//! Map generation, the textual map format and the turn-based invasion
//! engine. Nothing here touches the filesystem or the command line; callers
//! hand in readers, writers and a random source.

mod city;
mod city_map;
mod error;
mod map_format;
mod mask;
mod names;
mod random;
mod types;
mod world;

pub use city::City;
pub use city_map::CityMap;
pub use error::{InvasionError, Result};
pub use map_format::{format_city_map, read_city_map, write_city_map};
pub use mask::DirectionMask;
pub use names::{
    allocate_alien_names, allocate_city_names, allocate_names, ALIEN_NAMES, CITY_NAMES,
};
pub use random::{RandomSource, ThreadRandom};
pub use types::{Direction, EAST, NORTH, SOUTH, WEST};
pub use world::{Destruction, InvasionSummary, InvasionWorld};

/// Generate a random `x` by `y` city map labelled from [`CITY_NAMES`]
pub fn generate_city_map<R: RandomSource>(x: usize, y: usize, rng: &mut R) -> Result<CityMap> {
    let mask = DirectionMask::generate(x, y, rng)?;
    let names = allocate_city_names(rng, x * y)?;
    Ok(CityMap::from_mask(&mask, &names))
}
