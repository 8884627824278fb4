// src/geometry/molecule.rs

use crate::config;
use crate::model::{Atom, Bond, Species, StructureModel};
use nalgebra::{point, Point3};
use std::f64::consts::PI;

/// Build the PCl5 trigonal bipyramid.
///
/// One phosphorus at the origin, three equatorial chlorines 120 degrees
/// apart in the z = 0 plane, two axial chlorines on ±z. Every chlorine is
/// bonded to the center; the axial bonds are slightly longer than the
/// equatorial ones, as in the real molecule.
///
/// Output order is fixed: P, the three equatorial Cl, then +z and -z axial.
pub fn generate() -> StructureModel {
    let center: Point3<f64> = Point3::origin();
    let mut atoms = vec![Atom {
        species: Species::P,
        position: center,
    }];
    let mut bonds = Vec::new();

    for i in 0..3 {
        let angle = i as f64 * 2.0 * PI / 3.0 + config::EQUATORIAL_START_ANGLE;
        let position = point![
            config::EQUATORIAL_BOND_LENGTH * angle.cos(),
            config::EQUATORIAL_BOND_LENGTH * angle.sin(),
            0.0
        ];
        atoms.push(Atom {
            species: Species::Cl,
            position,
        });
        bonds.push(Bond {
            a: center,
            b: position,
        });
    }

    for z in [config::AXIAL_BOND_LENGTH, -config::AXIAL_BOND_LENGTH] {
        let position = point![0.0, 0.0, z];
        atoms.push(Atom {
            species: Species::Cl,
            position,
        });
        bonds.push(Bond {
            a: center,
            b: position,
        });
    }

    StructureModel { atoms, bonds }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigonal_bipyramid_layout() {
        let model = generate();
        assert_eq!(model.atoms.len(), 6);
        assert_eq!(model.bonds.len(), 5);

        let p = &model.atoms[0];
        assert_eq!(p.species, Species::P);
        assert!(p.position.coords.norm() < 1e-12);

        // Three equatorial chlorines in the z = 0 plane at bond length
        for atom in &model.atoms[1..4] {
            assert_eq!(atom.species, Species::Cl);
            assert!(atom.position.z.abs() < 1e-12);
            let r = atom.position.coords.norm();
            assert!((r - config::EQUATORIAL_BOND_LENGTH).abs() < 1e-9);
        }

        // 120 degrees between successive equatorial directions
        for i in 1..3 {
            let u = model.atoms[i].position.coords.normalize();
            let v = model.atoms[i + 1].position.coords.normalize();
            assert!((u.dot(&v) - (-0.5)).abs() < 1e-9);
        }

        // Axial chlorines straight up and down
        let up = &model.atoms[4];
        let down = &model.atoms[5];
        assert!((up.position - point![0.0, 0.0, config::AXIAL_BOND_LENGTH]).norm() < 1e-12);
        assert!((down.position - point![0.0, 0.0, -config::AXIAL_BOND_LENGTH]).norm() < 1e-12);
    }

    #[test]
    fn test_every_bond_is_incident_to_the_center() {
        let model = generate();
        for (bond, atom) in model.bonds.iter().zip(&model.atoms[1..]) {
            assert!(bond.a.coords.norm() < 1e-12, "bond does not start at P");
            assert!((bond.b - atom.position).norm() < 1e-12);
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
    }
}
