use crate::md_implementation::atoms::Atoms;
use crate::md_implementation::units;
use log::debug;
use ndarray_rand::rand_distr::StandardNormal;
use rand::{Rng, SeedableRng};
use rand_isaac::isaac64::Isaac64Rng;

/// Draws velocities from a Maxwell-Boltzmann distribution at the given
/// temperature. Each component is normal with stddev sqrt(kB*T/m).
/// Deterministic for a fixed seed.
pub fn maxwell_boltzmann_distribution(atoms: &mut Atoms, temperature_k: f64, seed: u64) {
    let mut rng = Isaac64Rng::seed_from_u64(seed);
    for i in 0..atoms.nb_atoms() {
        let sigma = (units::KB * temperature_k / atoms.masses[i]).sqrt();
        for dim in 0..3 {
            let gaussian: f64 = rng.sample(StandardNormal);
            atoms.velocities[[dim, i]] = sigma * gaussian;
        }
    }
    debug!(
        "initialized Maxwell-Boltzmann velocities for {} atoms at T = {} K",
        atoms.nb_atoms(),
        temperature_k
    );
}

#[cfg(test)]
mod tests {
    use crate::md_implementation::calculator::Calculator;
    use crate::md_implementation::{atoms::Atoms, lattice, velocities};
    use ndarray::Array2;

    struct ZeroPotential;

    impl Calculator for ZeroPotential {
        fn potential_energy(&self, _atoms: &Atoms) -> f64 {
            return 0.0;
        }

        fn forces(&self, atoms: &Atoms) -> Array2<f64> {
            return Array2::zeros(atoms.positions.raw_dim());
        }
    }

    #[test]
    fn test_deterministic_for_fixed_seed() {
        let mut first = lattice::face_centered_cubic("Cu", (2, 2, 2), None).unwrap();
        let mut second = lattice::face_centered_cubic("Cu", (2, 2, 2), None).unwrap();
        velocities::maxwell_boltzmann_distribution(&mut first, 300.0, 42);
        velocities::maxwell_boltzmann_distribution(&mut second, 300.0, 42);
        assert_eq!(first.velocities, second.velocities);
    }

    #[test]
    fn test_zero_temperature_leaves_atoms_at_rest() {
        let mut atoms = lattice::face_centered_cubic("Cu", (2, 2, 2), None).unwrap();
        velocities::maxwell_boltzmann_distribution(&mut atoms, 0.0, 42);
        assert_eq!(atoms.velocities.sum(), 0.0);
        assert_eq!(atoms.kinetic_energy(), 0.0);
    }

    #[test]
    fn test_sampled_temperature_near_target() {
        // 500 atoms: relative stddev of the instantaneous temperature is
        // sqrt(2/(3N)) ~ 3.7%, so 20% is a comfortable bound.
        let mut atoms = lattice::face_centered_cubic("Cu", (5, 5, 5), None).unwrap();
        atoms.set_calculator(Box::new(ZeroPotential));
        velocities::maxwell_boltzmann_distribution(&mut atoms, 300.0, 42);

        let report = atoms.calcenergy().unwrap();
        assert!(
            (report.temperature - 300.0).abs() < 60.0,
            "instantaneous temperature {} K too far from 300 K",
            report.temperature
        );
    }
}
