use crate::md_implementation::atoms::{Atoms, InvalidSystemState};
use crate::md_implementation::units;
use ndarray::{s, Array1};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EnergyReport {
    pub epot: f64,
    pub ekin: f64,
    pub temperature: f64,
    pub etot: f64,
}

impl Atoms {
    pub fn kinetic_energy(&self) -> f64 {
        let v_squared: Array1<f64> = &self.velocities.slice(s![0, ..])
            * &self.velocities.slice(s![0, ..])
            + &self.velocities.slice(s![1, ..]) * &self.velocities.slice(s![1, ..])
            + &self.velocities.slice(s![2, ..]) * &self.velocities.slice(s![2, ..]);
        return 0.5 * v_squared.dot(&self.masses);
    }

    /// Per-atom energies and instantaneous temperature via equipartition.
    pub fn calcenergy(&self) -> Result<EnergyReport, InvalidSystemState> {
        let nb_atoms = self.nb_atoms();
        if nb_atoms == 0 {
            return Err(InvalidSystemState::Empty);
        }
        let epot = self.get_potential_energy()? / nb_atoms as f64;
        let ekin = self.kinetic_energy() / nb_atoms as f64;
        let temperature = ekin / (1.5 * units::KB);
        let etot = epot + ekin;
        return Ok(EnergyReport {
            epot,
            ekin,
            temperature,
            etot,
        });
    }
}
