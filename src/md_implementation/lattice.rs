use crate::md_implementation::atoms::{Atoms, InvalidSystemState};
use itertools::iproduct;
use log::debug;
use ndarray::Array1;

// Conventional-cell basis of the fcc lattice, in fractions of the lattice
// constant.
const FCC_BASIS: [[f64; 3]; 4] = [
    [0.0, 0.0, 0.0],
    [0.0, 0.5, 0.5],
    [0.5, 0.0, 0.5],
    [0.5, 0.5, 0.0],
];

// Atomic mass in amu and cubic lattice constant in Angstrom.
fn fcc_metal(symbol: &str) -> Option<(f64, f64)> {
    match symbol {
        "Cu" => Some((63.546, 3.615)),
        "Ag" => Some((107.8682, 4.085)),
        "Au" => Some((196.966569, 4.078)),
        "Ni" => Some((58.6934, 3.524)),
        "Pd" => Some((106.42, 3.889)),
        "Pt" => Some((195.084, 3.924)),
        "Al" => Some((26.9815385, 4.046)),
        _ => None,
    }
}

/// Builds a block of fcc crystal of the given element, `size` conventional
/// cells along each axis. The lattice constant defaults to the tabulated
/// value for the element.
pub fn face_centered_cubic(
    symbol: &str,
    size: (usize, usize, usize),
    lattice_constant_opt: Option<f64>,
) -> Result<Atoms, InvalidSystemState> {
    let (mass, tabulated_constant) = fcc_metal(symbol)
        .ok_or_else(|| InvalidSystemState::UnknownElement(symbol.to_string()))?;
    let lattice_constant = lattice_constant_opt.unwrap_or(tabulated_constant);

    let (nx, ny, nz) = size;
    let nb_atoms = 4 * nx * ny * nz;
    let mut atoms = Atoms::new(nb_atoms);

    let mut i = 0;
    for (cx, cy, cz) in iproduct!(0..nx, 0..ny, 0..nz) {
        for basis in FCC_BASIS.iter() {
            atoms.positions[[0, i]] = (cx as f64 + basis[0]) * lattice_constant;
            atoms.positions[[1, i]] = (cy as f64 + basis[1]) * lattice_constant;
            atoms.positions[[2, i]] = (cz as f64 + basis[2]) * lattice_constant;
            i += 1;
        }
    }
    atoms.masses = Array1::from_elem(nb_atoms, mass);

    debug!(
        "built fcc {} lattice: {} atoms, a = {} A",
        symbol, nb_atoms, lattice_constant
    );
    Ok(atoms)
}
