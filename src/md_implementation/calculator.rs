use crate::md_implementation::atoms::Atoms;
use ndarray::Array2;

/// Seam for the external energy/force evaluator attached to an `Atoms` system.
pub trait Calculator {
    fn potential_energy(&self, atoms: &Atoms) -> f64;
    fn forces(&self, atoms: &Atoms) -> Array2<f64>;
}
