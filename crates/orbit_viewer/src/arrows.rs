use bevy::gizmos::gizmos::Gizmos;
use bevy::render::color::Color;
use glam::{Quat, Vec3};

const HEAD_FRACTION: f32 = 0.08;
const HEAD_ANGLE: f32 = std::f32::consts::PI / 6.0;

/// Gizmo arrows whose heads are turned towards the camera.
pub struct Arrows<'a, 'g> {
    gizmos: &'a mut Gizmos<'g>,
    eye: Vec3,
}

impl<'a, 'g> Arrows<'a, 'g> {
    pub fn new(gizmos: &'a mut Gizmos<'g>, eye: Vec3) -> Self {
        Self { gizmos, eye }
    }

    pub fn draw(&mut self, from: Vec3, to: Vec3, color: Color) {
        self.gizmos.line(from, to, color);

        let shaft = to - from;
        let length = shaft.length();
        if length <= f32::EPSILON {
            return;
        }

        let back = -shaft / length;
        let facing = (self.eye - nearest_on_segment(self.eye, from, to))
            .try_normalize()
            .unwrap_or(Vec3::Y);
        let head = length * HEAD_FRACTION;

        for angle in [HEAD_ANGLE, -HEAD_ANGLE] {
            let wing = Quat::from_axis_angle(facing, angle) * back;
            self.gizmos.line(to, to + wing * head, color);
        }
    }
}

fn nearest_on_segment(p: Vec3, a: Vec3, b: Vec3) -> Vec3 {
    let ab = b - a;
    let t = ((p - a).dot(ab) / ab.dot(ab)).clamp(0.0, 1.0);

    a + ab * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearest_point_is_clamped_to_the_segment() {
        let a = Vec3::ZERO;
        let b = Vec3::X;

        assert_eq!(nearest_on_segment(Vec3::new(0.5, 1.0, 0.0), a, b), Vec3::new(0.5, 0.0, 0.0));
        assert_eq!(nearest_on_segment(Vec3::new(-3.0, 1.0, 0.0), a, b), a);
        assert_eq!(nearest_on_segment(Vec3::new(7.0, 0.0, 2.0), a, b), b);
    }
}
