// src/model/structure.rs

use super::species::Species;
use nalgebra::Point3;

/// Positions are quantized to two decimals when used as keys.
const KEY_SCALE: f64 = 100.0;

#[derive(Clone, Debug, PartialEq)]
pub struct Atom {
    pub species: Species,
    pub position: Point3<f64>,
}

/// A bond between two generated atom positions of different species.
#[derive(Clone, Debug, PartialEq)]
pub struct Bond {
    pub a: Point3<f64>,
    pub b: Point3<f64>,
}

/// What a generator returns: plain geometry, no render handles.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StructureModel {
    pub atoms: Vec<Atom>,
    pub bonds: Vec<Bond>,
}

impl StructureModel {
    pub fn counts(&self) -> (usize, usize) {
        (self.atoms.len(), self.bonds.len())
    }
}

/// A position rounded to a grid of 0.01, usable as a hash/order key.
///
/// Two positions that agree to two decimals collapse onto the same key,
/// which is how duplicate lattice sites and duplicate bonds are detected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SiteKey(pub i64, pub i64, pub i64);

impl SiteKey {
    pub fn from_position(p: &Point3<f64>) -> Self {
        SiteKey(
            (p.x * KEY_SCALE).round() as i64,
            (p.y * KEY_SCALE).round() as i64,
            (p.z * KEY_SCALE).round() as i64,
        )
    }

    /// Canonical key for an unordered atom pair.
    pub fn pair(a: SiteKey, b: SiteKey) -> (SiteKey, SiteKey) {
        if a <= b {
            (a, b)
        } else {
            (b, a)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_key_absorbs_float_noise() {
        let a = SiteKey::from_position(&Point3::new(1.5, -0.5, 2.5));
        let b = SiteKey::from_position(&Point3::new(1.5 + 1e-9, -0.5 - 1e-9, 2.5));
        assert_eq!(a, b);
    }

    #[test]
    fn test_site_key_separates_neighbour_sites() {
        // Adjacent lattice sites are a full cell half-edge apart
        let a = SiteKey::from_position(&Point3::new(0.5, 0.5, 0.5));
        let b = SiteKey::from_position(&Point3::new(1.5, 0.5, 0.5));
        assert_ne!(a, b);
    }

    #[test]
    fn test_site_key_signed_rounding() {
        let a = SiteKey::from_position(&Point3::new(-2.5, 0.0, 2.5));
        assert_eq!(a, SiteKey(-250, 0, 250));
    }

    #[test]
    fn test_pair_key_is_order_independent() {
        let a = SiteKey(10, 0, -10);
        let b = SiteKey(-10, 0, 10);
        assert_eq!(SiteKey::pair(a, b), SiteKey::pair(b, a));
    }
}
