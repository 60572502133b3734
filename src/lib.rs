//! Simulation engine for a grid box-pushing puzzle: the map model, the level file codec,
//! move resolution, win and deadlock analysis, and the level manager that sequences levels
//! from a directory.

pub mod config;
pub mod core;
#[cfg(test)]
mod test;
