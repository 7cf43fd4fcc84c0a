//! City map graph
//!
//! Cities live in a name-keyed arena. Roads are neighbor names, so removing
//! a city only needs the key removed and every road to it scrubbed.

use std::collections::BTreeMap;

use super::city::City;
use super::mask::DirectionMask;
use super::types::Direction;

/// All cities of the map, keyed and ordered by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CityMap {
    cities: BTreeMap<String, City>,
}

impl CityMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from a direction mask, labelling cells with `names`
    ///
    /// Cell `(i, j)` is named `names[(i - 1) * y + (j - 1)]`. Returns an empty
    /// map when the mask has no real cells or there are fewer names than
    /// cells. Every direction bit is wired on its own, so an asymmetric mask
    /// yields one-way roads. Bits pointing off the grid are ignored.
    pub fn from_mask(mask: &DirectionMask, names: &[String]) -> Self {
        let (x, y) = (mask.rows(), mask.columns());
        if x == 0 || y == 0 || names.len() < x * y {
            log::debug!(
                "Mask of {}x{} cells with {} names yields an empty map",
                x,
                y,
                names.len()
            );
            return Self::new();
        }

        let mut map = Self::new();
        for name in &names[..x * y] {
            map.add_city(name.clone());
        }

        for i in 1..=x {
            for j in 1..=y {
                if mask.get(i, j) == 0 {
                    continue;
                }
                let index = (i - 1) * y + (j - 1);

                let targets = [
                    (Direction::East, (j < y).then(|| index + 1)),
                    (Direction::West, (j > 1).then(|| index - 1)),
                    (Direction::North, (i > 1).then(|| index - y)),
                    (Direction::South, (i < x).then(|| index + y)),
                ];
                for (direction, target) in targets {
                    if !mask.has(i, j, direction) {
                        continue;
                    }
                    if let Some(target) = target {
                        map.connect(&names[index], direction, &names[target]);
                    }
                }
            }
        }

        map
    }

    /// Add a city without roads, keeping an existing one with the same name
    pub fn add_city(&mut self, name: impl Into<String>) -> &mut City {
        let name = name.into();
        self.cities
            .entry(name.clone())
            .or_insert_with(|| City::new(name))
    }

    /// Add a one-way road from `from` to `to`, creating either city if needed
    pub fn connect(&mut self, from: &str, direction: Direction, to: &str) {
        self.add_city(to);
        self.add_city(from).set_neighbor(direction, to);
    }

    /// Add a road in both directions between two cities
    pub fn connect_both(&mut self, from: &str, direction: Direction, to: &str) {
        self.connect(from, direction, to);
        self.connect(to, direction.opposite(), from);
    }

    pub fn get(&self, name: &str) -> Option<&City> {
        self.cities.get(name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut City> {
        self.cities.get_mut(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.cities.contains_key(name)
    }

    /// City names in stable (sorted) order
    pub fn city_names(&self) -> Vec<String> {
        self.cities.keys().cloned().collect()
    }

    pub fn cities(&self) -> impl Iterator<Item = &City> {
        self.cities.values()
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Number of one-way roads in the map
    pub fn road_count(&self) -> usize {
        self.cities.values().map(|city| city.roads().count()).sum()
    }

    /// Remove a city and every road leading into it
    ///
    /// Roads are scrubbed from every city, not only the four neighbors, so
    /// one-way roads read from a map file cannot dangle either.
    pub fn remove_city(&mut self, name: &str) -> Option<City> {
        let removed = self.cities.remove(name)?;

        for city in self.cities.values_mut() {
            for direction in Direction::ALL {
                if city.neighbor(direction) == Some(name) {
                    city.clear_neighbor(direction);
                }
            }
        }

        Some(removed)
    }
}
