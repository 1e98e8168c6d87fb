use cgmath::{Angle, Deg, Vector2};

pub trait Lerpable: Clone + Copy {
    fn lerp(&self, other: &Self, factor: f32) -> Self;
}

/// Same as GLSL `mix`, written as `a + (b - a) * t` so that equal endpoints give back exactly
/// that endpoint.
impl Lerpable for f32 {
    fn lerp(&self, other: &Self, factor: f32) -> Self {
        self + (other - self) * factor
    }
}

impl Lerpable for Vector2<f32> {
    fn lerp(&self, other: &Self, factor: f32) -> Self {
        Vector2::new(self.x.lerp(&other.x, factor), self.y.lerp(&other.y, factor))
    }
}

/// GLSL `clamp(x, 0.0, 1.0)`. NaN maps to 0.
pub fn saturate(x: f32) -> f32 {
    if x.is_nan() {
        return 0.0;
    }

    x.clamp(0.0, 1.0)
}

/// Shear coefficient for a slant of `angle` from the vertical.
pub fn skew_from_angle(angle: Deg<f32>) -> f32 {
    angle.tan()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(0.0_f32.lerp(&1.0, 0.0), 0.0);
        assert_eq!(0.0_f32.lerp(&1.0, 1.0), 1.0);
        assert_eq!(2.0_f32.lerp(&0.0, 1.0), 0.0);
        assert_eq!(2.0_f32.lerp(&0.0, 0.25), 1.5);

        for i in 0..=100 {
            let t = i as f32 / 100.0;
            assert_eq!(1.0_f32.lerp(&1.0, t), 1.0);
        }
    }

    #[test]
    fn lerp_vec2() {
        let a = Vector2::new(0.0, 4.0);
        let b = Vector2::new(2.0, 0.0);

        assert_eq!(a.lerp(&b, 0.5), Vector2::new(1.0, 2.0));
    }

    #[test]
    fn saturate_range() {
        assert_eq!(saturate(-3.0), 0.0);
        assert_eq!(saturate(0.3), 0.3);
        assert_eq!(saturate(7.0), 1.0);
        assert_eq!(saturate(f32::NAN), 0.0);
        assert_eq!(saturate(f32::INFINITY), 1.0);
    }

    #[test]
    fn skew_angles() {
        assert!((skew_from_angle(Deg(45.0)) - 1.0).abs() < 1e-6);
        assert_eq!(skew_from_angle(Deg(0.0)), 0.0);
        assert!(skew_from_angle(Deg(-30.0)) < 0.0);
    }
}
