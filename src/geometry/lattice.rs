// src/geometry/lattice.rs

use crate::config;
use crate::model::{Atom, Bond, SiteKey, Species, StructureModel};
use nalgebra::Point3;
use std::collections::HashSet;

/// Build the 3x3x3 rock salt block.
///
/// Each cell contributes four Na and four Cl sites. A site that lands on a
/// position some earlier cell already produced is skipped, keyed on the
/// quantized position. Bonds join every Na-Cl pair at nearest neighbour
/// distance, one bond per unordered pair.
///
/// Deterministic: cells are walked in i, j, k order and sites in table
/// order, so repeated calls produce identical output.
pub fn generate() -> StructureModel {
    let mut atoms: Vec<Atom> = Vec::new();
    let mut occupied: HashSet<SiteKey> = HashSet::new();

    for i in 0..config::LATTICE_CELLS {
        for j in 0..config::LATTICE_CELLS {
            for k in 0..config::LATTICE_CELLS {
                for (species, frac) in config::CELL_SITES {
                    let position = site_position([i, j, k], frac);
                    if occupied.insert(SiteKey::from_position(&position)) {
                        atoms.push(Atom { species, position });
                    }
                }
            }
        }
    }

    let bonds = nearest_neighbour_bonds(&atoms);
    StructureModel { atoms, bonds }
}

/// Cartesian position of one fractional site of one cell.
///
/// The cell block is centered on the origin, and the site pattern inside a
/// cell is pulled back by a quarter edge so the whole block stays symmetric
/// around it.
fn site_position(cell: [i32; 3], frac: [f64; 3]) -> Point3<f64> {
    let half_grid = config::LATTICE_CELLS as f64 / 2.0;
    let offset = |c: i32| (c as f64 - half_grid + 0.5) * config::CELL_EDGE;

    Point3::new(
        offset(cell[0]) + (frac[0] - config::SITE_CENTER_SHIFT) * config::CELL_EDGE,
        offset(cell[1]) + (frac[1] - config::SITE_CENTER_SHIFT) * config::CELL_EDGE,
        offset(cell[2]) + (frac[2] - config::SITE_CENTER_SHIFT) * config::CELL_EDGE,
    )
}

/// All-pairs scan for opposite-species contacts.
///
/// A pair bonds when its separation falls within BOND_TOLERANCE of the
/// nearest neighbour distance. The canonical ordered key pair guards
/// against emitting the same bond twice.
fn nearest_neighbour_bonds(atoms: &[Atom]) -> Vec<Bond> {
    let mut bonds = Vec::new();
    let mut created: HashSet<(SiteKey, SiteKey)> = HashSet::new();

    for (i, a) in atoms.iter().enumerate() {
        for b in atoms.iter().skip(i + 1) {
            if a.species == b.species {
                continue;
            }

            let distance = (b.position - a.position).norm();
            if (distance - config::LATTICE_BOND_DISTANCE).abs() >= config::BOND_TOLERANCE {
                continue;
            }

            let key = SiteKey::pair(
                SiteKey::from_position(&a.position),
                SiteKey::from_position(&b.position),
            );
            if created.insert(key) {
                bonds.push(Bond {
                    a: a.position,
                    b: b.position,
                });
            }
        }
    }

    bonds
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_no_duplicate_atoms() {
        let model = generate();
        let mut keys = HashSet::new();
        for atom in &model.atoms {
            assert!(
                keys.insert(SiteKey::from_position(&atom.position)),
                "duplicate atom at {:?}",
                atom.position
            );
        }
    }

    #[test]
    fn test_atom_counts_match_deduplicated_enumeration() {
        let model = generate();

        // Re-run the raw cell x site enumeration and deduplicate it here,
        // so the expected counts are derived instead of hardcoded.
        let mut seen = HashSet::new();
        let mut expected_na = 0usize;
        let mut expected_cl = 0usize;
        for i in 0..config::LATTICE_CELLS {
            for j in 0..config::LATTICE_CELLS {
                for k in 0..config::LATTICE_CELLS {
                    for (species, frac) in config::CELL_SITES {
                        let p = site_position([i, j, k], frac);
                        let rounded = (
                            (p.x * 100.0).round() as i64,
                            (p.y * 100.0).round() as i64,
                            (p.z * 100.0).round() as i64,
                        );
                        if seen.insert(rounded) {
                            match species {
                                Species::Na => expected_na += 1,
                                Species::Cl => expected_cl += 1,
                                Species::P => unreachable!(),
                            }
                        }
                    }
                }
            }
        }

        let na = model
            .atoms
            .iter()
            .filter(|a| a.species == Species::Na)
            .count();
        let cl = model
            .atoms
            .iter()
            .filter(|a| a.species == Species::Cl)
            .count();

        assert_eq!(na, expected_na);
        assert_eq!(cl, expected_cl);
        assert_eq!(model.atoms.len(), expected_na + expected_cl);
    }

    #[test]
    fn test_bonds_join_opposite_species_at_contact_distance() {
        let model = generate();
        let species_at: HashMap<SiteKey, Species> = model
            .atoms
            .iter()
            .map(|a| (SiteKey::from_position(&a.position), a.species))
            .collect();

        assert!(!model.bonds.is_empty());
        for bond in &model.bonds {
            let sa = species_at[&SiteKey::from_position(&bond.a)];
            let sb = species_at[&SiteKey::from_position(&bond.b)];
            assert_ne!(sa, sb, "bond joins two {} atoms", sa.symbol());

            let distance = (bond.b - bond.a).norm();
            assert!(
                (distance - config::LATTICE_BOND_DISTANCE).abs() < config::BOND_TOLERANCE,
                "bond length {} outside tolerance",
                distance
            );
        }
    }

    #[test]
    fn test_no_duplicate_bonds() {
        let model = generate();
        let mut keys = HashSet::new();
        for bond in &model.bonds {
            let key = SiteKey::pair(
                SiteKey::from_position(&bond.a),
                SiteKey::from_position(&bond.b),
            );
            assert!(keys.insert(key), "duplicate bond {:?}", key);
        }
    }

    #[test]
    fn test_generation_is_deterministic() {
        let first = generate();
        let second = generate();

        assert_eq!(first.counts(), second.counts());
        for (a, b) in first.atoms.iter().zip(&second.atoms) {
            assert_eq!(a.species, b.species);
            assert!((a.position - b.position).norm() < 1e-12);
        }
        for (x, y) in first.bonds.iter().zip(&second.bonds) {
            assert!((x.a - y.a).norm() < 1e-12);
            assert!((x.b - y.b).norm() < 1e-12);
        }
    }
}
