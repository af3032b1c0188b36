// Animation drivers - the per-frame heart of the portfolio
//
// Each driver is a pure function from (elapsed time, interaction state)
// to a snapshot of visual properties. Drivers never touch the terminal;
// the TUI layer consumes snapshots during rendering. Discrete input
// events (pointer enter/leave, swipe gestures) mutate the small state
// structs between frames, and the next tick picks up the latest values.

pub mod carousel;
pub mod constellation;
pub mod explosion;
pub mod gaze;

/// Linear interpolation between `a` and `b`.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Clamp `v` into `[min, max]`.
pub fn clamp(v: f32, min: f32, max: f32) -> f32 {
    v.max(min).min(max)
}

/// A point in the scene's 3D space.
///
/// Scenes are laid out in an abstract unit space and projected onto
/// the terminal canvas at render time.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    pub fn scale(self, s: f32) -> Self {
        Self::new(self.x * s, self.y * s, self.z * s)
    }

    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    pub fn distance(self, other: Self) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }

    /// Point at parameter `t` on the segment from `self` to `other`.
    pub fn along(self, other: Self, t: f32) -> Self {
        Self::new(
            lerp(self.x, other.x, t),
            lerp(self.y, other.y, t),
            lerp(self.z, other.z, t),
        )
    }

    /// Rotate around the X, then Y, then Z axis.
    pub fn rotated(self, rx: f32, ry: f32, rz: f32) -> Self {
        let (sx, cx) = rx.sin_cos();
        let (y1, z1) = (self.y * cx - self.z * sx, self.y * sx + self.z * cx);
        let (sy, cy) = ry.sin_cos();
        let (x2, z2) = (self.x * cy + z1 * sy, -self.x * sy + z1 * cy);
        let (sz, cz) = rz.sin_cos();
        Self::new(x2 * cz - y1 * sz, x2 * sz + y1 * cz, z2)
    }

    /// Rotate around the Y axis (yaw), then the X axis (pitch), and
    /// drop Z for an orthographic screen position.
    pub fn project(self, yaw: f32, pitch: f32) -> (f32, f32) {
        let (sy, cy) = yaw.sin_cos();
        let x1 = self.x * cy + self.z * sy;
        let z1 = -self.x * sy + self.z * cy;
        let (sp, cp) = pitch.sin_cos();
        let y1 = self.y * cp - z1 * sp;
        (x1, y1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(lerp(2.0, 10.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(2.0, 10.0, 0.5), 6.0);
    }

    #[test]
    fn clamp_bounds() {
        assert_eq!(clamp(0.5, -0.08, 0.08), 0.08);
        assert_eq!(clamp(-0.5, -0.08, 0.08), -0.08);
        assert_eq!(clamp(0.03, -0.08, 0.08), 0.03);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(-2.0, 0.0, 1.0);
        assert_eq!(a.distance(b), b.distance(a));
    }

    #[test]
    fn rotation_preserves_length() {
        let p = Vec3::new(0.3, -0.4, 0.5);
        let r = p.rotated(0.7, -1.2, 2.1);
        let origin = Vec3::default();
        assert!((origin.distance(p) - origin.distance(r)).abs() < 1e-5);
        // Zero angles are the identity.
        assert_eq!(p.rotated(0.0, 0.0, 0.0), p);
    }

    #[test]
    fn project_identity_at_zero_angles() {
        let p = Vec3::new(1.5, -0.5, 2.0);
        let (x, y) = p.project(0.0, 0.0);
        assert!((x - 1.5).abs() < 1e-6);
        assert!((y + 0.5).abs() < 1e-6);
    }
}
