// Explosive skill node - hover-triggered fragment animation
//
// Each constellation node carries a small phase machine:
//
//   Idle -> (pointer enter) -> Exploding -> (pointer leave) ->
//   Cooling (500ms) -> Idle
//
// While Exploding (and during the cooldown tail), twelve fragments
// radiate outward along directions rolled once at node creation. The
// ramp repeats every 2 seconds of scene time, so a held hover produces
// a continuously looping explosion rather than a one-shot burst.

use super::Vec3;
use rand::Rng;
use std::f32::consts::PI;

/// Number of explosion fragments per node.
pub const FRAGMENT_COUNT: usize = 12;

/// How long fragments keep animating after the pointer leaves.
pub const COOLDOWN_SECS: f32 = 0.5;

/// Explosion phase per node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    Idle,
    Exploding,
    /// Pointer left at the contained scene time; fragments keep
    /// animating until the cooldown expires.
    Cooling { since: f32 },
}

/// Snapshot of one fragment for the current frame.
#[derive(Debug, Clone, Copy)]
pub struct Fragment {
    pub offset: Vec3,
    pub scale: f32,
}

/// Per-node interaction state plus the immutable fragment geometry.
#[derive(Debug, Clone)]
pub struct ExplosionNode {
    /// Position of this node in the data table; offsets the pulse and
    /// glow phases so nodes don't throb in lockstep.
    pub index: usize,
    pub hovered: bool,
    phase: Phase,
    /// Eased ring scale, moving toward 1.4 while hovered.
    ring_scale: f32,
    /// Unit directions rolled once at creation, never regenerated.
    directions: [Vec3; FRAGMENT_COUNT],
}

impl ExplosionNode {
    pub fn new(index: usize, rng: &mut impl Rng) -> Self {
        let mut directions = [Vec3::default(); FRAGMENT_COUNT];
        for (i, dir) in directions.iter_mut().enumerate() {
            let theta = (i as f32 / FRAGMENT_COUNT as f32) * PI * 2.0;
            let phi: f32 = rng.gen::<f32>() * PI;
            *dir = Vec3::new(
                phi.sin() * theta.cos(),
                phi.sin() * theta.sin(),
                phi.cos(),
            );
        }
        Self {
            index,
            hovered: false,
            phase: Phase::Idle,
            ring_scale: 1.0,
            directions,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Pointer entered the node.
    pub fn pointer_enter(&mut self) {
        self.hovered = true;
        self.phase = Phase::Exploding;
    }

    /// Pointer left the node at scene time `time`.
    pub fn pointer_leave(&mut self, time: f32) {
        self.hovered = false;
        if self.phase == Phase::Exploding {
            self.phase = Phase::Cooling { since: time };
        }
    }

    /// Advance the phase machine and the eased ring scale. Call once
    /// per frame.
    pub fn update(&mut self, time: f32) {
        if let Phase::Cooling { since } = self.phase {
            if time - since >= COOLDOWN_SECS {
                self.phase = Phase::Idle;
            }
        }
        let target = if self.hovered { 1.4 } else { 1.0 };
        self.ring_scale += (target - self.ring_scale) * 0.1;
    }

    /// Whether fragments should be drawn this frame.
    pub fn fragments_visible(&self) -> bool {
        !matches!(self.phase, Phase::Idle)
    }

    /// Repeating explosion ramp: 0 at each 2-second period start,
    /// saturating at 1 halfway through the period.
    pub fn progress(time: f32) -> f32 {
        ((time % 2.0) * 2.0).min(1.0)
    }

    /// Fragment positions and scales for the current frame.
    pub fn fragments(&self, time: f32) -> [Fragment; FRAGMENT_COUNT] {
        let progress = Self::progress(time);
        let scale = 1.0 - progress * 0.5;
        let mut out = [Fragment {
            offset: Vec3::default(),
            scale,
        }; FRAGMENT_COUNT];
        for (frag, dir) in out.iter_mut().zip(self.directions.iter()) {
            frag.offset = dir.scale(progress * 1.5);
        }
        out
    }

    /// Core scale: a slow pulse offset by the node index, boosted
    /// while hovered.
    pub fn core_scale(&self, time: f32) -> f32 {
        let pulse = 1.0 + (time * 3.0 + self.index as f32).sin() * 0.15;
        if self.hovered {
            pulse * 1.3
        } else {
            pulse
        }
    }

    /// Glow opacity driver.
    pub fn glow_opacity(&self, time: f32) -> f32 {
        if self.hovered {
            0.6 + (time * 5.0).sin() * 0.2
        } else {
            0.2 + (time * 2.0 + self.index as f32).sin() * 0.1
        }
    }

    /// Glow radius driver (in node-local units).
    pub fn glow_scale(&self, time: f32) -> f32 {
        if self.hovered {
            2.0 + (time * 4.0).sin() * 0.3
        } else {
            1.5 + (time * 2.0).sin() * 0.2
        }
    }

    /// Expanding pulse-wave ring shown while hovered: scale grows from
    /// 1 to 3 as opacity fades to 0, once per half second.
    pub fn pulse_wave(&self, time: f32) -> Option<(f32, f32)> {
        if !self.hovered {
            return None;
        }
        let wave = (time * 2.0) % 1.0;
        Some((1.0 + wave * 2.0, 0.5 * (1.0 - wave)))
    }

    /// Eased scale shared by both rings.
    pub fn ring_scale(&self) -> f32 {
        self.ring_scale
    }

    /// Outer ring rotation (x, y, z Euler angles).
    pub fn outer_ring_rotation(time: f32) -> (f32, f32, f32) {
        (time * 0.3, time * 0.5, time * 0.2)
    }

    /// Inner ring counter-rotation.
    pub fn inner_ring_rotation(time: f32) -> (f32, f32, f32) {
        (-time * 0.4, 0.0, time * 0.6)
    }

    /// Positions of the three orbiting mini particles.
    pub fn orbiters(&self, time: f32) -> [Vec3; 3] {
        let mut out = [Vec3::default(); 3];
        for (i, p) in out.iter_mut().enumerate() {
            let radius = 0.55 + i as f32 * 0.1;
            let speed = 1.0 + i as f32 * 0.5;
            let t = time * speed + i as f32 * (PI * 2.0 / 3.0);
            *p = Vec3::new(
                t.cos() * radius,
                (t * 0.7).sin() * radius * 0.3,
                t.sin() * radius,
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn node() -> ExplosionNode {
        ExplosionNode::new(0, &mut StdRng::seed_from_u64(7))
    }

    #[test]
    fn enter_leave_cooldown_cycle() {
        let mut n = node();
        assert_eq!(n.phase(), Phase::Idle);
        assert!(!n.fragments_visible());

        n.pointer_enter();
        assert_eq!(n.phase(), Phase::Exploding);
        assert!(n.hovered);

        n.pointer_leave(10.0);
        assert_eq!(n.phase(), Phase::Cooling { since: 10.0 });
        assert!(n.fragments_visible());

        // Still cooling just before the deadline.
        n.update(10.4);
        assert!(n.fragments_visible());

        n.update(10.5);
        assert_eq!(n.phase(), Phase::Idle);
        assert!(!n.fragments_visible());
    }

    #[test]
    fn reenter_during_cooldown_resumes_exploding() {
        let mut n = node();
        n.pointer_enter();
        n.pointer_leave(5.0);
        n.pointer_enter();
        assert_eq!(n.phase(), Phase::Exploding);
        n.update(20.0);
        assert_eq!(n.phase(), Phase::Exploding);
    }

    #[test]
    fn leave_while_idle_stays_idle() {
        let mut n = node();
        n.pointer_leave(3.0);
        assert_eq!(n.phase(), Phase::Idle);
    }

    #[test]
    fn progress_repeats_every_two_seconds() {
        assert_eq!(ExplosionNode::progress(0.0), 0.0);
        assert_eq!(ExplosionNode::progress(0.25), 0.5);
        assert_eq!(ExplosionNode::progress(0.5), 1.0);
        // Saturated through the rest of the period.
        assert_eq!(ExplosionNode::progress(1.9), 1.0);
        // Resets at the next period boundary.
        assert!(ExplosionNode::progress(2.0).abs() < 1e-6);
        assert!((ExplosionNode::progress(2.25) - 0.5).abs() < 1e-5);
    }

    #[test]
    fn fragment_scale_non_increasing_within_period() {
        let n = node();
        let mut prev = f32::INFINITY;
        let mut t = 2.0;
        while t < 4.0 {
            let scale = n.fragments(t)[0].scale;
            assert!(scale <= prev + 1e-6, "scale grew within a period at t={t}");
            assert!((0.5..=1.0).contains(&scale));
            prev = scale;
            t += 0.05;
        }
        // Next period starts back at full scale.
        assert!((n.fragments(4.0)[0].scale - 1.0).abs() < 1e-5);
    }

    #[test]
    fn fragment_directions_are_unit_length_and_stable() {
        let n = node();
        let a = n.fragments(0.25);
        let b = n.fragments(2.25);
        for (fa, fb) in a.iter().zip(b.iter()) {
            // Same directions on every period: geometry is rolled once.
            assert!((fa.offset.x - fb.offset.x).abs() < 1e-5);
            assert!((fa.offset.y - fb.offset.y).abs() < 1e-5);
            assert!((fa.offset.z - fb.offset.z).abs() < 1e-5);
            // Offset magnitude = progress * 1.5 for a unit direction.
            let len = Vec3::default().distance(fa.offset);
            assert!((len - 0.75).abs() < 1e-4);
        }
    }

    #[test]
    fn ring_scale_eases_toward_hover_target() {
        let mut n = node();
        assert_eq!(n.ring_scale(), 1.0);
        n.pointer_enter();
        // Each frame closes 10% of the remaining gap to 1.4.
        n.update(0.0);
        assert!((n.ring_scale() - 1.04).abs() < 1e-5);
        for _ in 0..100 {
            n.update(0.0);
        }
        assert!((n.ring_scale() - 1.4).abs() < 1e-3);
        n.pointer_leave(0.0);
        for _ in 0..100 {
            n.update(10.0);
        }
        assert!((n.ring_scale() - 1.0).abs() < 1e-3);
    }

    #[test]
    fn hover_boosts_core_and_glow() {
        let mut n = node();
        let t = 1.3;
        let idle_core = n.core_scale(t);
        let idle_glow = n.glow_opacity(t);
        n.pointer_enter();
        assert!(n.core_scale(t) > idle_core);
        assert!(n.glow_opacity(t) > idle_glow);
        assert!(n.pulse_wave(t).is_some());
        n.pointer_leave(t);
        assert!(n.pulse_wave(t).is_none());
    }
}
