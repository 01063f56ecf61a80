/// Tunable constants for the torus, camera, shading and animation
use nalgebra::{Unit, Vector3};
use std::f32::consts::TAU;
use std::time::Duration;

use crate::error::DonutError;

/// Glyphs from sparsest to densest
pub const DEFAULT_GLYPHS: &str = ".,-~:;=!*#$@";

/// Every knob the render pipeline reads.
///
/// The defaults reproduce the classic spinning donut: a tube of radius 1
/// swept at distance 2 from the center, seen from 10 units away and lit
/// from the upper front.
#[derive(Debug, Clone)]
pub struct DonutConfig {
    /// Radius of the tube (R1)
    pub tube_radius: f32,
    /// Distance from the torus center to the tube center (R2)
    pub center_distance: f32,
    /// Distance from the viewer to the object-space origin (D2)
    pub viewer_distance: f32,
    /// Fraction of the smaller canvas dimension kept clear around the torus
    pub padding: f32,
    pub light: Unit<Vector3<f32>>,
    pub glyphs: Vec<char>,
    pub blank: char,
    /// Samples per revolution around the tube
    pub circle_steps: usize,
    /// Samples per revolution around the major axis
    pub torus_steps: usize,
    /// Per-frame increment of the x-axis tilt, radians
    pub x_step: f32,
    /// Per-frame increment of the z-axis spin, radians
    pub z_step: f32,
    pub frame_delay: Duration,
}

impl Default for DonutConfig {
    fn default() -> Self {
        Self {
            tube_radius: 1.0,
            center_distance: 2.0,
            viewer_distance: 10.0,
            padding: 0.2,
            light: Unit::new_normalize(Vector3::new(0.0, 1.0, -1.0)),
            glyphs: DEFAULT_GLYPHS.chars().collect(),
            blank: ' ',
            circle_steps: 500,
            torus_steps: 500,
            x_step: TAU / 150.0,
            z_step: TAU / 250.0,
            frame_delay: Duration::from_millis(10),
        }
    }
}

impl DonutConfig {
    /// Replace the light direction, normalizing it.
    pub fn with_light(mut self, x: f32, y: f32, z: f32) -> Self {
        self.light = Unit::new_normalize(Vector3::new(x, y, z));
        self
    }

    pub fn with_glyphs(mut self, glyphs: &str) -> Self {
        self.glyphs = glyphs.chars().collect();
        self
    }

    pub fn with_steps(mut self, circle_steps: usize, torus_steps: usize) -> Self {
        self.circle_steps = circle_steps;
        self.torus_steps = torus_steps;
        self
    }

    /// Reject values that would make the projection or shading meaningless.
    pub fn validate(&self) -> Result<(), DonutError> {
        let invalid = |msg: &str| Err(DonutError::InvalidConfig(msg.to_string()));

        if !(self.tube_radius > 0.0 && self.center_distance > 0.0) {
            return invalid("tube radius and center distance must be positive");
        }
        if self.tube_radius >= self.center_distance {
            return invalid("tube radius must be smaller than the center distance");
        }
        // The nearest point of the torus must stay in front of the viewer
        if !(self.viewer_distance > self.tube_radius + self.center_distance) {
            return invalid("viewer distance must exceed tube radius plus center distance");
        }
        if !(0.0..1.0).contains(&self.padding) {
            return invalid("padding must be in [0, 1)");
        }
        if !self.light.iter().all(|c| c.is_finite()) {
            return invalid("light direction must be a finite, non-zero vector");
        }
        if self.glyphs.is_empty() {
            return invalid("glyph ramp must not be empty");
        }
        if self.circle_steps == 0 || self.torus_steps == 0 {
            return invalid("step counts must be non-zero");
        }
        if !(self.x_step.is_finite() && self.z_step.is_finite()) {
            return invalid("rotation steps must be finite");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = DonutConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.glyphs.len(), 12);
        assert!((config.light.norm() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_rejects_fat_tube() {
        let config = DonutConfig {
            tube_radius: 2.0,
            ..DonutConfig::default()
        };
        assert!(matches!(config.validate(), Err(DonutError::InvalidConfig(_))));
    }

    #[test]
    fn test_rejects_viewer_inside_torus() {
        let config = DonutConfig {
            viewer_distance: 2.5,
            ..DonutConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_zero_light() {
        let config = DonutConfig::default().with_light(0.0, 0.0, 0.0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_empty_ramp_and_zero_steps() {
        assert!(DonutConfig::default().with_glyphs("").validate().is_err());
        assert!(DonutConfig::default().with_steps(0, 10).validate().is_err());
    }

    #[test]
    fn test_rejects_padding_out_of_range() {
        let config = DonutConfig {
            padding: 1.0,
            ..DonutConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
