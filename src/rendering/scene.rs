// src/rendering/scene.rs

use crate::config;
use crate::model::Species;
use crate::rendering::primitives::{CylinderPrimitive, PrimitiveId, SpherePrimitive};
use crate::state::ViewState;
use nalgebra::Point3;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// Camera position plus look-at target. Presets are presentation
/// parameters; the projection consumes only the distance and uses the
/// target as orbit center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Point3<f64>,
    pub target: Point3<f64>,
}

impl CameraPose {
    pub fn distance(&self) -> f64 {
        (self.position - self.target).norm()
    }
}

impl Default for CameraPose {
    fn default() -> Self {
        Self {
            position: Point3::new(0.0, 0.0, config::BASE_VIEW_DISTANCE),
            target: Point3::origin(),
        }
    }
}

/// The display contract. The session registers and releases geometry
/// exclusively through this trait and never touches GTK or Cairo.
pub trait SceneHost {
    fn add_sphere(&mut self, sphere: SpherePrimitive) -> PrimitiveId;
    fn add_cylinder(&mut self, cylinder: CylinderPrimitive) -> PrimitiveId;
    /// Returns false when the handle is unknown (already removed).
    fn remove(&mut self, id: PrimitiveId) -> bool;
    fn set_camera(&mut self, camera: CameraPose);
}

/// In-process scene store; the draw callback projects it every frame.
///
/// Primitives are kept in id order, so draw order is stable even for
/// primitives at equal depth.
pub struct RetainedScene {
    spheres: BTreeMap<PrimitiveId, SpherePrimitive>,
    cylinders: BTreeMap<PrimitiveId, CylinderPrimitive>,
    camera: CameraPose,
    next_id: u64,
}

impl RetainedScene {
    pub fn new() -> Self {
        Self {
            spheres: BTreeMap::new(),
            cylinders: BTreeMap::new(),
            camera: CameraPose::default(),
            next_id: 0,
        }
    }

    fn allocate_id(&mut self) -> PrimitiveId {
        let id = PrimitiveId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn camera(&self) -> CameraPose {
        self.camera
    }

    pub fn primitive_count(&self) -> usize {
        self.spheres.len() + self.cylinders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spheres.is_empty() && self.cylinders.is_empty()
    }
}

impl Default for RetainedScene {
    fn default() -> Self {
        Self::new()
    }
}

impl SceneHost for RetainedScene {
    fn add_sphere(&mut self, sphere: SpherePrimitive) -> PrimitiveId {
        let id = self.allocate_id();
        self.spheres.insert(id, sphere);
        id
    }

    fn add_cylinder(&mut self, cylinder: CylinderPrimitive) -> PrimitiveId {
        let id = self.allocate_id();
        self.cylinders.insert(id, cylinder);
        id
    }

    fn remove(&mut self, id: PrimitiveId) -> bool {
        self.spheres.remove(&id).is_some() || self.cylinders.remove(&id).is_some()
    }

    fn set_camera(&mut self, camera: CameraPose) {
        self.camera = camera;
    }
}

// Screen-space output of the projection. x, y are pixels; z stays as depth
// for the painter's algorithm.

pub struct RenderSphere {
    pub screen_pos: [f64; 3],
    pub radius: f64,
    pub species: Species,
}

pub struct RenderCylinder {
    pub start: [f64; 3],
    pub end: [f64; 3],
    pub radius: f64,
}

/// Project the retained scene to screen space.
///
/// Rotates every primitive around the camera target (view X, then Y), fits
/// the rotated bounds into the viewport, applies zoom and the camera
/// distance framing factor, then pan. Both lists come back sorted far to
/// near.
pub fn project(
    scene: &RetainedScene,
    view: &ViewState,
    win_w: f64,
    win_h: f64,
) -> (Vec<RenderCylinder>, Vec<RenderSphere>) {
    if scene.is_empty() {
        return (Vec::new(), Vec::new());
    }

    let (sin_x, cos_x) = view.rot_x.sin_cos();
    let (sin_y, cos_y) = view.rot_y.sin_cos();
    let center = scene.camera.target;

    // Rotation closure: X then Y, about the orbit center
    let rotate = |p: Point3<f64>| -> [f64; 3] {
        let x = p.x - center.x;
        let y = p.y - center.y;
        let z = p.z - center.z;

        // Rotate around X
        let y1 = y * cos_x - z * sin_x;
        let z1 = y * sin_x + z * cos_x;

        // Rotate around Y
        let x2 = x * cos_y - z1 * sin_y;
        let z2 = x * sin_y + z1 * cos_y;

        [x2, y1, z2]
    };

    let mut min_x = f64::MAX;
    let mut max_x = f64::MIN;
    let mut min_y = f64::MAX;
    let mut max_y = f64::MIN;

    let mut rotated: Vec<[f64; 3]> =
        Vec::with_capacity(scene.spheres.len() + 2 * scene.cylinders.len());
    let mut spheres: Vec<RenderSphere> = Vec::with_capacity(scene.spheres.len());
    for sphere in scene.spheres.values() {
        let r = rotate(sphere.center);
        rotated.push(r);
        spheres.push(RenderSphere {
            screen_pos: r,
            radius: sphere.radius,
            species: sphere.species,
        });
    }

    let mut cylinders: Vec<RenderCylinder> = Vec::with_capacity(scene.cylinders.len());
    for cylinder in scene.cylinders.values() {
        let (a, b) = cylinder.endpoints();
        let ra = rotate(a);
        let rb = rotate(b);
        rotated.push(ra);
        rotated.push(rb);
        cylinders.push(RenderCylinder {
            start: ra,
            end: rb,
            radius: cylinder.radius,
        });
    }

    for r in &rotated {
        if r[0] < min_x {
            min_x = r[0];
        }
        if r[0] > max_x {
            max_x = r[0];
        }
        if r[1] < min_y {
            min_y = r[1];
        }
        if r[1] > max_y {
            max_y = r[1];
        }
    }

    // Fit the rotated bounds into the viewport
    let model_w = (max_x - min_x).max(1.0);
    let model_h = (max_y - min_y).max(1.0);
    let scale_x = (win_w * config::FIT_MARGIN) / model_w;
    let scale_y = (win_h * config::FIT_MARGIN) / model_h;
    let framing = config::BASE_VIEW_DISTANCE / scene.camera.distance().max(1e-6);
    let scale = scale_x.min(scale_y) * view.zoom * framing;

    let box_cx = (min_x + max_x) / 2.0;
    let box_cy = (min_y + max_y) / 2.0;
    let win_cx = win_w / 2.0 + view.pan_x;
    let win_cy = win_h / 2.0 + view.pan_y;

    let to_screen = |p: [f64; 3]| -> [f64; 3] {
        [
            (p[0] - box_cx) * scale + win_cx,
            (p[1] - box_cy) * scale + win_cy,
            p[2],
        ]
    };

    for sphere in &mut spheres {
        sphere.screen_pos = to_screen(sphere.screen_pos);
        sphere.radius *= scale;
    }
    for cylinder in &mut cylinders {
        cylinder.start = to_screen(cylinder.start);
        cylinder.end = to_screen(cylinder.end);
        cylinder.radius *= scale;
    }

    // Depth sort far to near for the painter (NaN-safe)
    spheres.sort_by(|a, b| {
        b.screen_pos[2]
            .partial_cmp(&a.screen_pos[2])
            .unwrap_or(Ordering::Equal)
    });
    cylinders.sort_by(|a, b| {
        let za = (a.start[2] + a.end[2]) / 2.0;
        let zb = (b.start[2] + b.end[2]) / 2.0;
        zb.partial_cmp(&za).unwrap_or(Ordering::Equal)
    });

    (cylinders, spheres)
}
