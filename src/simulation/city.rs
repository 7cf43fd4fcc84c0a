//! A single city in the invasion map

use super::types::Direction;

/// A city node with up to four roads and the aliens currently in it
///
/// Roads are stored as neighbor names; the owning [`CityMap`](super::CityMap)
/// resolves them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    pub name: String,
    neighbors: [Option<String>; 4],
    /// Aliens currently in the city; order carries no meaning
    pub aliens: Vec<String>,
}

impl City {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            neighbors: Default::default(),
            aliens: Vec::new(),
        }
    }

    /// Name of the city reached by the road in `direction`, if any
    pub fn neighbor(&self, direction: Direction) -> Option<&str> {
        self.neighbors[direction.index()].as_deref()
    }

    pub fn set_neighbor(&mut self, direction: Direction, city: impl Into<String>) {
        self.neighbors[direction.index()] = Some(city.into());
    }

    /// Remove the road in `direction`, returning where it led
    pub fn clear_neighbor(&mut self, direction: Direction) -> Option<String> {
        self.neighbors[direction.index()].take()
    }

    /// Directions with a road, in East, West, North, South order
    pub fn open_directions(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|direction| self.neighbor(*direction).is_some())
            .collect()
    }

    /// Roads leaving this city as `(direction, neighbor)` pairs
    pub fn roads(&self) -> impl Iterator<Item = (Direction, &str)> + '_ {
        Direction::ALL
            .into_iter()
            .filter_map(move |direction| self.neighbor(direction).map(|name| (direction, name)))
    }

    /// Whether no road leaves this city
    pub fn is_isolated(&self) -> bool {
        self.neighbors.iter().all(Option::is_none)
    }

    pub fn add_alien(&mut self, alien: impl Into<String>) {
        self.aliens.push(alien.into());
    }

    /// Remove one occurrence of `alien`, returning whether it was present
    pub fn remove_alien(&mut self, alien: &str) -> bool {
        match self.aliens.iter().position(|a| a == alien) {
            Some(index) => {
                self.aliens.swap_remove(index);
                true
            }
            None => false,
        }
    }
}
