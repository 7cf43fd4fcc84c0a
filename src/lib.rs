//! Alien Invasion Library
//!
//! Generates grid-shaped city maps and simulates wandering aliens that
//! destroy any city where two or more of them meet.

pub mod simulation;
