// src/rendering/primitives.rs

use crate::model::Species;
use nalgebra::{Point3, Rotation3, Unit, Vector3};
use std::f64::consts::PI;

/// Opaque handle for a primitive registered with a scene host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PrimitiveId(pub u64);

#[derive(Clone, Copy, Debug)]
pub struct SpherePrimitive {
    pub center: Point3<f64>,
    pub radius: f64,
    pub species: Species,
}

/// A unit cylinder posed onto a segment: translated to the segment midpoint,
/// rotated from the canonical +z axis onto the segment direction, scaled by
/// the segment length.
#[derive(Clone, Debug)]
pub struct CylinderPrimitive {
    pub center: Point3<f64>,
    pub rotation: Rotation3<f64>,
    pub length: f64,
    pub radius: f64,
}

/// Cross products shorter than this mean the segment is (anti)parallel to
/// the canonical axis and the axis-angle construction would be unstable.
const AXIS_EPS: f64 = 1e-3;

impl CylinderPrimitive {
    pub fn between(start: Point3<f64>, end: Point3<f64>, radius: f64) -> Self {
        let direction = end - start;
        let length = direction.norm();
        let center = Point3::from((start.coords + end.coords) / 2.0);

        if length < f64::EPSILON {
            // Degenerate segment: keep the identity pose, draw nothing
            return Self {
                center,
                rotation: Rotation3::identity(),
                length: 0.0,
                radius,
            };
        }

        let dir = direction / length;
        let axis = Vector3::z().cross(&dir);

        let rotation = if axis.norm() > AXIS_EPS {
            let angle = Vector3::z().dot(&dir).clamp(-1.0, 1.0).acos();
            Rotation3::from_axis_angle(&Unit::new_normalize(axis), angle)
        } else if dir.z < 0.0 {
            // Anti-parallel to the canonical axis: flip around x
            Rotation3::from_axis_angle(&Vector3::x_axis(), PI)
        } else {
            Rotation3::identity()
        };

        Self {
            center,
            rotation,
            length,
            radius,
        }
    }

    /// Recover the segment this cylinder was posed onto.
    pub fn endpoints(&self) -> (Point3<f64>, Point3<f64>) {
        let half = self.rotation * Vector3::new(0.0, 0.0, self.length / 2.0);
        (self.center - half, self.center + half)
    }
}
