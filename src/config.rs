// src/config.rs
//
// Every tunable of the application lives here as a compile-time constant.
// The two models are fixed, so there is no settings file to load or save.

use crate::model::species::Species;

// --- NaCl rock salt lattice ---

/// Edge length of one cubic unit cell (model units).
pub const CELL_EDGE: f64 = 2.0;

/// Number of unit cells repeated along each axis.
pub const LATTICE_CELLS: i32 = 3;

/// Fractional coordinates of the eight sites in one rock salt cell.
/// Na occupies the corner and face-center positions, Cl the edge and body
/// centers.
pub const CELL_SITES: [(Species, [f64; 3]); 8] = [
    (Species::Na, [0.0, 0.0, 0.0]),
    (Species::Na, [0.5, 0.5, 0.0]),
    (Species::Na, [0.5, 0.0, 0.5]),
    (Species::Na, [0.0, 0.5, 0.5]),
    (Species::Cl, [0.5, 0.0, 0.0]),
    (Species::Cl, [0.0, 0.5, 0.0]),
    (Species::Cl, [0.0, 0.0, 0.5]),
    (Species::Cl, [0.5, 0.5, 0.5]),
];

/// Fractional shift that centers a cell's site block on the cell origin.
pub const SITE_CENTER_SHIFT: f64 = 0.25;

/// Na-Cl nearest neighbour distance: half a cell edge.
pub const LATTICE_BOND_DISTANCE: f64 = CELL_EDGE / 2.0;

/// Window around the nearest neighbour distance that still counts as a bond.
/// The next coordination shell sits at sqrt(2) cell half-edges, so 0.2 can
/// never pick up a second-neighbour pair.
pub const BOND_TOLERANCE: f64 = 0.2;

pub const LATTICE_BOND_RADIUS: f64 = 0.15;

// --- PCl5 trigonal bipyramid ---

pub const EQUATORIAL_BOND_LENGTH: f64 = 2.0;

/// Axial P-Cl bonds are slightly longer than equatorial ones.
pub const AXIAL_BOND_LENGTH: f64 = 2.1;

pub const MOLECULE_BOND_RADIUS: f64 = 0.12;

/// Start angle of the first equatorial chlorine in the z = 0 plane.
pub const EQUATORIAL_START_ANGLE: f64 = -std::f64::consts::PI / 6.0;

// --- Camera presets (position; both models look at the origin) ---

pub const LATTICE_CAMERA: [f64; 3] = [15.0, 15.0, 15.0];
pub const MOLECULE_CAMERA: [f64; 3] = [10.0, 10.0, 10.0];

/// Camera distance at which the fitted model fills the viewport margin
/// exactly. Closer presets render proportionally larger.
pub const BASE_VIEW_DISTANCE: f64 = 26.0;

// --- Painter ---

/// Deep near-black, matches 0x0a0a0a.
pub const BACKGROUND_COLOR: (f64, f64, f64) = (0.039, 0.039, 0.039);

pub const BOND_COLOR: (f64, f64, f64) = (0.533, 0.533, 0.533);

/// Fraction of the viewport the fitted model may occupy.
pub const FIT_MARGIN: f64 = 0.8;

// --- Interaction ---

/// Radians of orbit per pixel of drag.
pub const ROTATE_STEP: f64 = 0.01;

pub const ZOOM_STEP: f64 = 1.1;
pub const ZOOM_MIN: f64 = 0.15;
pub const ZOOM_MAX: f64 = 8.0;
