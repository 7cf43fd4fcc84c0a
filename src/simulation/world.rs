//! Main invasion world that ties everything together
//!
//! Owns the city map, the alien location index and the random source, and
//! advances the invasion turn by turn: every alien moves, then every city
//! holding two or more aliens is destroyed together with them.

use std::collections::BTreeMap;

use log::{debug, info, warn};

use super::city_map::CityMap;
use super::random::RandomSource;
use super::types::Direction;

/// A city destroyed during collision resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destruction {
    pub city: String,
    /// Aliens that died with the city
    pub aliens: Vec<String>,
}

/// Counters describing the state of an invasion
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvasionSummary {
    pub turns: usize,
    pub cities_remaining: usize,
    pub cities_destroyed: usize,
    pub aliens_remaining: usize,
    pub aliens_destroyed: usize,
}

/// The main simulation world
pub struct InvasionWorld<R: RandomSource> {
    /// The map being invaded, mutated as cities are destroyed
    pub city_map: CityMap,

    /// Current city of every surviving alien
    pub alien_locations: BTreeMap<String, String>,

    rng: R,

    /// Turns executed by `run` so far
    turns: usize,

    /// Every destruction so far, in order
    destroyed: Vec<Destruction>,
}

impl<R: RandomSource> InvasionWorld<R> {
    /// Place every alien in a uniformly random city
    ///
    /// Several aliens may start in the same city; that only counts as a
    /// collision once they have moved. With an empty map nobody can land and
    /// the aliens are dropped.
    pub fn new<S: AsRef<str>>(aliens: &[S], city_map: CityMap, rng: R) -> Self {
        let mut world = Self {
            city_map,
            alien_locations: BTreeMap::new(),
            rng,
            turns: 0,
            destroyed: Vec::new(),
        };

        let city_names = world.city_map.city_names();
        if city_names.is_empty() {
            if !aliens.is_empty() {
                warn!("No cities to land in, {} aliens dropped", aliens.len());
            }
            return world;
        }

        for alien in aliens {
            let alien = alien.as_ref();
            let index = world.rng.generate_num(city_names.len());
            let Some(city_name) = city_names.get(index) else {
                continue;
            };
            world.place_alien(alien, city_name);
        }

        world
    }

    /// Register `alien` in `city`, returning false if the city doesn't exist
    pub fn place_alien(&mut self, alien: &str, city: &str) -> bool {
        if !self.city_map.contains(city) {
            return false;
        }
        if let Some(previous) = self.alien_locations.insert(alien.to_string(), city.to_string()) {
            if let Some(old) = self.city_map.get_mut(&previous) {
                old.remove_alien(alien);
            }
        }
        if let Some(node) = self.city_map.get_mut(city) {
            node.add_alien(alien);
        }
        debug!("{} landed in {}", alien, city);
        true
    }

    /// Current city of an alien, `None` once it has been destroyed
    pub fn alien_location(&self, alien: &str) -> Option<&str> {
        self.alien_locations.get(alien).map(String::as_str)
    }

    pub fn alien_count(&self) -> usize {
        self.alien_locations.len()
    }

    /// Cities destroyed so far, in order
    pub fn destroyed(&self) -> &[Destruction] {
        &self.destroyed
    }

    /// Apply one move per alien
    ///
    /// `None` means the alien stays. A move along a missing road (map edge,
    /// destroyed neighbor) also leaves the alien where it is. Unknown aliens
    /// are ignored.
    pub fn step(&mut self, moves: &BTreeMap<String, Option<Direction>>) {
        for (alien, direction) in moves {
            let Some(direction) = direction else {
                continue;
            };
            let Some(current) = self.alien_locations.get(alien).cloned() else {
                continue;
            };
            let Some(target) = self
                .city_map
                .get(&current)
                .and_then(|city| city.neighbor(*direction))
                .map(str::to_string)
            else {
                continue;
            };
            if !self.city_map.contains(&target) {
                continue;
            }

            if let Some(origin) = self.city_map.get_mut(&current) {
                origin.remove_alien(alien);
            }
            if let Some(destination) = self.city_map.get_mut(&target) {
                destination.add_alien(alien.as_str());
            }
            debug!("{} moved {} from {} to {}", alien, direction, current, target);
            self.alien_locations.insert(alien.clone(), target);
        }
    }

    /// Destroy every city holding two or more aliens
    ///
    /// The aliens die with the city and every road into it is removed.
    /// Destruction does not spread past the city itself.
    pub fn resolve_collisions(&mut self) -> Vec<Destruction> {
        let doomed: Vec<String> = self
            .city_map
            .cities()
            .filter(|city| city.aliens.len() >= 2)
            .map(|city| city.name.clone())
            .collect();

        let mut destructions = Vec::with_capacity(doomed.len());
        for city_name in doomed {
            let Some(city) = self.city_map.remove_city(&city_name) else {
                continue;
            };
            for alien in &city.aliens {
                self.alien_locations.remove(alien);
            }

            let mut aliens = city.aliens;
            aliens.sort();
            info!("{} has been destroyed by {}!", city_name, aliens.join(", "));

            destructions.push(Destruction {
                city: city_name,
                aliens,
            });
        }

        self.destroyed.extend(destructions.iter().cloned());
        destructions
    }

    /// Pick a random open road for every surviving alien
    ///
    /// Aliens in a city with no roads are trapped and stay put.
    fn choose_moves(&mut self) -> BTreeMap<String, Option<Direction>> {
        let mut moves = BTreeMap::new();
        for (alien, city_name) in &self.alien_locations {
            let open = self
                .city_map
                .get(city_name)
                .map(|city| city.open_directions())
                .unwrap_or_default();

            let direction = if open.is_empty() {
                None
            } else {
                open.get(self.rng.generate_num(open.len())).copied()
            };
            moves.insert(alien.clone(), direction);
        }
        moves
    }

    /// Run up to `max_steps` turns, stopping early once every alien is dead
    ///
    /// Returns the number of turns executed.
    pub fn run(&mut self, max_steps: usize) -> usize {
        let mut executed = 0;
        while executed < max_steps && !self.alien_locations.is_empty() {
            let moves = self.choose_moves();
            self.step(&moves);
            self.resolve_collisions();

            executed += 1;
            self.turns += 1;

            if self.alien_locations.is_empty() {
                info!("Every alien has been destroyed after {} turns", self.turns);
            }
        }
        executed
    }

    /// Snapshot of the invasion counters
    pub fn summary(&self) -> InvasionSummary {
        InvasionSummary {
            turns: self.turns,
            cities_remaining: self.city_map.len(),
            cities_destroyed: self.destroyed.len(),
            aliens_remaining: self.alien_locations.len(),
            aliens_destroyed: self.destroyed.iter().map(|d| d.aliens.len()).sum(),
        }
    }

    /// Write the invasion counters to the log
    pub fn log_summary(&self) {
        let summary = self.summary();
        info!("=== INVASION COMPLETE ===");
        info!("Turns played: {}", summary.turns);
        info!("Cities remaining: {}", summary.cities_remaining);
        info!("Cities destroyed: {}", summary.cities_destroyed);
        info!("Aliens remaining: {}", summary.aliens_remaining);
        info!("Aliens destroyed: {}", summary.aliens_destroyed);
        info!("Roads remaining: {}", self.city_map.road_count());
    }
}
