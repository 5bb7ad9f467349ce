use crate::md_implementation::calculator::Calculator;
use ndarray::{Array1, Array2};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidSystemState {
    #[error("system contains no atoms")]
    Empty,
    #[error("no calculator attached to the system")]
    MissingCalculator,
    #[error("unknown element symbol \"{0}\"")]
    UnknownElement(String),
}

pub struct Atoms {
    pub masses: Array1<f64>,
    pub positions: Array2<f64>,
    pub velocities: Array2<f64>,
    pub forces: Array2<f64>,
    pub calc: Option<Box<dyn Calculator>>,
}

impl Atoms {
    pub fn new(nb_atoms: usize) -> Self {
        let masses = Array1::ones(nb_atoms);
        let positions = Array2::zeros((3, nb_atoms));
        let velocities = Array2::zeros((3, nb_atoms));
        let forces = Array2::zeros((3, nb_atoms));
        Self {
            masses,
            positions,
            velocities,
            forces,
            calc: None,
        }
    }

    pub fn nb_atoms(&self) -> usize {
        return self.positions.ncols();
    }

    pub fn set_calculator(&mut self, calc: Box<dyn Calculator>) {
        self.calc = Some(calc);
    }

    pub fn get_potential_energy(&self) -> Result<f64, InvalidSystemState> {
        let calc = self
            .calc
            .as_ref()
            .ok_or(InvalidSystemState::MissingCalculator)?;
        return Ok(calc.potential_energy(self));
    }

    pub fn get_forces(&self) -> Result<Array2<f64>, InvalidSystemState> {
        let calc = self
            .calc
            .as_ref()
            .ok_or(InvalidSystemState::MissingCalculator)?;
        return Ok(calc.forces(self));
    }
}
