//! eV / Angstrom / amu / Kelvin unit system.

/// Boltzmann constant in eV/K.
pub const KB: f64 = 8.617330337217213e-5;

/// One femtosecond in internal time units (Angstrom * sqrt(amu/eV)).
pub const FS: f64 = 9.822694788464063e-2;
