/// Parametric torus surface and the per-frame sample sweep
use nalgebra::{Point3, Rotation3, Vector3};
use std::f32::consts::TAU;

use crate::config::DonutConfig;
use crate::transform::RotationState;

/// A surface point with its outward unit normal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSample {
    pub position: Point3<f32>,
    pub normal: Vector3<f32>,
}

impl SurfaceSample {
    pub fn new(x: f32, y: f32, z: f32, nx: f32, ny: f32, nz: f32) -> Self {
        Self {
            position: Point3::new(x, y, z),
            normal: Vector3::new(nx, ny, nz),
        }
    }

    pub fn rotated(&self, rotation: &Rotation3<f32>) -> Self {
        Self {
            position: rotation * self.position,
            normal: rotation * self.normal,
        }
    }
}

/// Torus around the object-space y axis
#[derive(Debug, Clone, Copy)]
pub struct Torus {
    /// Radius of the tube (R1)
    pub tube_radius: f32,
    /// Distance from the center to the middle of the tube (R2)
    pub center_distance: f32,
}

impl Torus {
    pub fn new(tube_radius: f32, center_distance: f32) -> Self {
        Self {
            tube_radius,
            center_distance,
        }
    }

    pub fn from_config(config: &DonutConfig) -> Self {
        Self::new(config.tube_radius, config.center_distance)
    }

    /// Object-space sample at `circle` around the tube and `torus` around the axis.
    pub fn sample(&self, circle: f32, torus: f32) -> SurfaceSample {
        let (sin_c, cos_c) = circle.sin_cos();
        let (sin_t, cos_t) = torus.sin_cos();
        let ring = self.center_distance + self.tube_radius * cos_c;

        SurfaceSample::new(
            ring * cos_t,
            self.tube_radius * sin_c,
            ring * sin_t,
            cos_c * cos_t,
            sin_c,
            cos_c * sin_t,
        )
    }

    /// Distance of `point` from the axis the torus revolves around after `rotation`.
    pub fn axis_distance(point: &Point3<f32>, rotation: &Rotation3<f32>) -> f32 {
        let axis = rotation * Vector3::y();
        let v = point.coords;
        (v - axis * v.dot(&axis)).norm()
    }

    /// All view-space samples for one frame.
    pub fn sweep(&self, rotation: &RotationState, circle_steps: usize, torus_steps: usize) -> Sweep {
        Sweep {
            torus: *self,
            rotation: rotation.rotation(),
            circle_steps,
            torus_steps,
            index: 0,
        }
    }
}

/// Iterator over the surface for one rotation, circle angle in the outer loop.
pub struct Sweep {
    torus: Torus,
    rotation: Rotation3<f32>,
    circle_steps: usize,
    torus_steps: usize,
    index: usize,
}

impl Iterator for Sweep {
    type Item = SurfaceSample;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.circle_steps * self.torus_steps {
            return None;
        }
        let c = self.index / self.torus_steps;
        let t = self.index % self.torus_steps;
        self.index += 1;

        let circle = TAU * c as f32 / self.circle_steps as f32;
        let torus = TAU * t as f32 / self.torus_steps as f32;
        Some(self.torus.sample(circle, torus).rotated(&self.rotation))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.circle_steps * self.torus_steps).saturating_sub(self.index);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Sweep {}
