/// Rotation state carried between frames
use nalgebra::{Rotation3, Vector3};
use std::f32::consts::TAU;

/// Tilt around the x axis and spin around the z axis (in radians).
///
/// Both angles are kept in `[0, 2π)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RotationState {
    pub x: f32,
    pub z: f32,
}

impl RotationState {
    pub fn new(x: f32, z: f32) -> Self {
        Self {
            x: wrap_angle(x),
            z: wrap_angle(z),
        }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, z: 0.0 }
    }

    /// Advance by delta amounts, wrapping modulo 2π
    pub fn advance(&mut self, dx: f32, dz: f32) {
        self.x = wrap_angle(self.x + dx);
        self.z = wrap_angle(self.z + dz);
    }

    /// Object-to-view rotation: x tilt first, then z spin.
    pub fn rotation(&self) -> Rotation3<f32> {
        let rx = Rotation3::from_axis_angle(&Vector3::x_axis(), self.x);
        let rz = Rotation3::from_axis_angle(&Vector3::z_axis(), self.z);
        rz * rx
    }
}

impl Default for RotationState {
    fn default() -> Self {
        Self::zero()
    }
}

fn wrap_angle(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs
    if wrapped >= TAU {
        0.0
    } else {
        wrapped
    }
}
