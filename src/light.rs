//! Lighting types for the renderer.

use crate::math::vec3::Vec3;

/// A directional light that illuminates the scene uniformly from a direction.
///
/// Directional lights are ideal for simulating distant light sources like
/// the sun, where all rays are effectively parallel.
#[derive(Clone, Copy, Debug)]
pub struct DirectionalLight {
    /// Unit direction of the light.
    pub direction: Vec3,
}

impl DirectionalLight {
    /// Create a new directional light. The direction is normalized
    /// automatically; a zero direction yields zero intensity everywhere.
    pub fn new(direction: Vec3) -> Self {
        DirectionalLight {
            direction: direction.normalize(),
        }
    }

    /// Flat-shading brightness for a unit face normal.
    ///
    /// Returns `max(0, normal . direction)`, so faces turned away from the
    /// light get zero and a degenerate (zero) normal contributes nothing.
    pub fn intensity(&self, normal: Vec3) -> f32 {
        self.direction.dot(normal).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn aligned_normal_is_fully_lit() {
        let light = DirectionalLight::new(Vec3::new(0.0, 0.0, -1.0));
        assert_relative_eq!(light.intensity(Vec3::new(0.0, 0.0, -1.0)), 1.0);
    }

    #[test]
    fn opposed_normal_is_dark() {
        let light = DirectionalLight::new(Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(light.intensity(Vec3::new(0.0, 0.0, 1.0)), 0.0);
    }

    #[test]
    fn angled_normal_follows_cosine() {
        let light = DirectionalLight::new(Vec3::new(0.0, -1.0, 0.0));
        let normal = Vec3::new(0.0, -1.0, 1.0).normalize();
        assert_relative_eq!(light.intensity(normal), 0.707, epsilon = 0.01);
    }

    #[test]
    fn zero_normal_contributes_nothing() {
        let light = DirectionalLight::new(Vec3::new(-1.0, 0.0, -0.5));
        assert_eq!(light.intensity(Vec3::ZERO), 0.0);
    }
}
