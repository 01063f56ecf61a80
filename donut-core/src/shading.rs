/// Lambertian shading onto a discrete glyph ramp
use nalgebra::{Unit, Vector3};

use crate::config::DonutConfig;
use crate::error::DonutError;

/// Light direction plus the ordered glyphs used to express intensity
#[derive(Debug, Clone)]
pub struct Shader {
    light: Unit<Vector3<f32>>,
    glyphs: Vec<char>,
}

impl Shader {
    /// `glyphs` are ordered sparsest to densest and must not be empty.
    pub fn new(light: Unit<Vector3<f32>>, glyphs: Vec<char>) -> Result<Self, DonutError> {
        if glyphs.is_empty() {
            return Err(DonutError::InvalidConfig(
                "glyph ramp must not be empty".to_string(),
            ));
        }
        Ok(Self { light, glyphs })
    }

    pub fn from_config(config: &DonutConfig) -> Result<Self, DonutError> {
        Self::new(config.light, config.glyphs.clone())
    }

    /// Ramp index for a unit normal.
    ///
    /// The cosine in [-1, 1] is spread evenly over the ramp; a cosine of
    /// exactly 1 would land one past the end and is clamped onto the last glyph.
    pub fn index(&self, normal: &Vector3<f32>) -> usize {
        let len = self.glyphs.len();
        let cos_angle = self.light.dot(normal);
        let scaled = ((cos_angle + 1.0) * len as f32 / 2.0).floor();
        if scaled.is_nan() || scaled < 0.0 {
            0
        } else {
            (scaled as usize).min(len.saturating_sub(1))
        }
    }

    pub fn glyph(&self, normal: &Vector3<f32>) -> char {
        self.glyphs[self.index(normal)]
    }

    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Rotation3;

    fn default_shader() -> Shader {
        Shader::from_config(&DonutConfig::default()).unwrap()
    }

    #[test]
    fn test_facing_away_is_sparsest() {
        let shader = default_shader();
        let normal = -shader.light.into_inner();
        assert_eq!(shader.index(&normal), 0);
        assert_eq!(shader.glyph(&normal), '.');
    }

    #[test]
    fn test_facing_light_is_densest() {
        let shader = default_shader();
        let normal = shader.light.into_inner();
        assert_eq!(shader.index(&normal), 11);
        assert_eq!(shader.glyph(&normal), '@');
    }

    #[test]
    fn test_perpendicular_is_middle() {
        let shader = default_shader();
        // (1, 0, 0) is perpendicular to (0, 1, -1)
        assert_eq!(shader.index(&Vector3::new(1.0, 0.0, 0.0)), 6);
    }

    #[test]
    fn test_index_in_range_for_any_unit_normal() {
        let shader = default_shader();
        for i in 0..64 {
            for j in 0..64 {
                let r = Rotation3::from_euler_angles(i as f32 * 0.1, j as f32 * 0.1, 0.0);
                let normal = r * Vector3::z();
                assert!(shader.index(&normal) <= 11);
            }
        }
    }

    #[test]
    fn test_alternate_ramp_and_light() {
        let config = DonutConfig::default()
            .with_glyphs("ab")
            .with_light(0.0, 0.0, -1.0);
        let shader = Shader::from_config(&config).unwrap();
        assert_eq!(shader.glyph(&Vector3::new(0.0, 0.0, -1.0)), 'b');
        assert_eq!(shader.glyph(&Vector3::new(0.0, 0.0, 1.0)), 'a');
        assert_eq!(shader.glyphs(), &['a', 'b']);
    }

    #[test]
    fn test_empty_ramp_is_rejected() {
        let light = Unit::new_normalize(Vector3::new(0.0, 1.0, -1.0));
        assert!(matches!(
            Shader::new(light, Vec::new()),
            Err(DonutError::InvalidConfig(_))
        ));
    }
}
