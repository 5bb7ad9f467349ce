pub mod atoms;
pub mod calculator;
pub mod lattice;
pub mod thermo;
pub mod units;
pub mod velocities;
