// src/geometry/mod.rs

pub mod lattice;
pub mod molecule;
