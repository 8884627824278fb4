// src/model/species.rs

/// The three chemical species that appear in the built-in models.
///
/// Radii are display radii in model units, not covalent radii; colors match
/// the legend swatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Species {
    Na,
    Cl,
    P,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Na, Species::Cl, Species::P];

    pub fn symbol(&self) -> &'static str {
        match self {
            Species::Na => "Na",
            Species::Cl => "Cl",
            Species::P => "P",
        }
    }

    pub fn radius(&self) -> f64 {
        match self {
            Species::Na => 0.4,
            Species::Cl => 0.5,
            Species::P => 0.6,
        }
    }

    pub fn color(&self) -> (f64, f64, f64) {
        match self {
            Species::Na => (0.608, 0.349, 0.714), // Violet (#9b59b6)
            Species::Cl => (0.180, 0.800, 0.443), // Green (#2ecc71)
            Species::P => (0.902, 0.404, 0.133),  // Orange (#e67e22)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radii_ordering() {
        // P is the largest sphere, Na the smallest
        assert!(Species::P.radius() > Species::Cl.radius());
        assert!(Species::Cl.radius() > Species::Na.radius());
    }

    #[test]
    fn test_colors_in_range() {
        for species in Species::ALL {
            let (r, g, b) = species.color();
            for c in [r, g, b] {
                assert!((0.0..=1.0).contains(&c), "{} channel out of range", species.symbol());
            }
        }
    }
}
