//! Shared fakes and fixtures for the integration tests

#![allow(dead_code)]

use std::collections::VecDeque;

use alien_invasion::simulation::{
    CityMap, DirectionMask, RandomSource, EAST, NORTH, SOUTH, WEST,
};

/// Always returns the same number (clamped into range) and identity permutations
pub struct FixedRandom(pub usize);

impl RandomSource for FixedRandom {
    fn generate_num(&mut self, n: usize) -> usize {
        self.0.min(n.saturating_sub(1))
    }

    fn generate_permutation(&mut self, n: usize) -> Vec<usize> {
        (0..n).collect()
    }
}

/// Returns scripted numbers in order, then zeros
pub struct ScriptedRandom(pub VecDeque<usize>);

impl ScriptedRandom {
    pub fn new(values: &[usize]) -> Self {
        Self(values.iter().copied().collect())
    }
}

impl RandomSource for ScriptedRandom {
    fn generate_num(&mut self, n: usize) -> usize {
        let value = self.0.pop_front().unwrap_or(0);
        if n == 0 {
            0
        } else {
            value % n
        }
    }

    fn generate_permutation(&mut self, n: usize) -> Vec<usize> {
        (0..n).collect()
    }
}

pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|name| name.to_string()).collect()
}

/// 2x2 fully connected grid:
///
/// ```text
/// A - B
/// |   |
/// C - D
/// ```
pub fn square_mask() -> DirectionMask {
    DirectionMask::from_rows(vec![
        vec![0, 0, 0],
        vec![0, EAST | SOUTH, WEST | SOUTH],
        vec![0, EAST | NORTH, WEST | NORTH],
    ])
}

pub fn square_map() -> CityMap {
    CityMap::from_mask(&square_mask(), &names(&["A", "B", "C", "D"]))
}

/// Single row `A - B - C`
pub fn line_map() -> CityMap {
    let mask = DirectionMask::from_rows(vec![
        vec![0, 0, 0, 0],
        vec![0, EAST, EAST | WEST, WEST],
    ]);
    CityMap::from_mask(&mask, &names(&["A", "B", "C"]))
}
