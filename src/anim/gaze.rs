// Gaze tracking for the eyes scene
//
// The pupils follow the pointer through an exponentially smoothed
// target, clamped to stay inside the sclera. Blinks run on their own
// randomized timer, independent of pointer input.
//
// Two smoothing modes: `FrameBound` uses a fixed per-frame
// coefficient, which couples the apparent tracking speed to the
// achieved frame rate; `TimeNormalized` derives the coefficient from
// real elapsed time so the speed holds at any frame rate.

use super::clamp;
use rand::Rng;
use std::f32::consts::PI;

/// Pupil travel limits inside the eye (scene units).
pub const PUPIL_CLAMP_X: f32 = 0.08;
pub const PUPIL_CLAMP_Y: f32 = 0.05;

/// Pointer-to-gaze scale factors.
const GAZE_SCALE_X: f32 = 0.15;
const GAZE_SCALE_Y: f32 = 0.10;

/// Per-frame smoothing coefficient used by `FrameBound`.
const FRAME_SMOOTHING: f32 = 0.05;

/// Blink amplitude decay per frame.
const BLINK_DECAY: f32 = 0.15;

/// How the smoothing coefficient is derived each frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Smoothing {
    /// Fixed 0.05 per rendered frame. Tracking speed varies with the
    /// frame rate.
    FrameBound,
    /// `1 - exp(-dt / tau)`: identical visual speed at any frame rate.
    TimeNormalized { tau: f32 },
}

impl Smoothing {
    /// Coefficient for a frame that took `dt` seconds.
    fn coefficient(self, dt: f32) -> f32 {
        match self {
            Smoothing::FrameBound => FRAME_SMOOTHING,
            Smoothing::TimeNormalized { tau } => 1.0 - (-dt / tau).exp(),
        }
    }
}

/// Visual properties of the eyes for one frame.
#[derive(Debug, Clone, Copy)]
pub struct GazeSnapshot {
    /// Clamped pupil offset from the eye center.
    pub pupil: (f32, f32),
    /// Vertical eyelid scale; 1.0 fully open, ~0.1 mid-blink.
    pub eyelid_scale: f32,
    /// Eye rotation following the gaze (pitch, yaw).
    pub rotation: (f32, f32),
    /// Whole-group breathing offset and roll.
    pub breathe_y: f32,
    pub breathe_roll: f32,
    /// Accent glow opacity.
    pub glow_opacity: f32,
    /// Accent pattern rotation angle.
    pub pattern_angle: f32,
}

/// Mutable gaze and blink state for the eyes scene.
#[derive(Debug, Clone)]
pub struct GazeState {
    smoothing: Smoothing,
    target: (f32, f32),
    rotation: (f32, f32),
    blink_amplitude: f32,
    next_blink: f32,
}

impl GazeState {
    pub fn new(smoothing: Smoothing, rng: &mut impl Rng) -> Self {
        Self {
            smoothing,
            target: (0.0, 0.0),
            rotation: (0.0, 0.0),
            blink_amplitude: 0.0,
            // First blink lands 2-5 seconds in.
            next_blink: rng.gen::<f32>() * 3.0 + 2.0,
        }
    }

    pub fn blink_amplitude(&self) -> f32 {
        self.blink_amplitude
    }

    /// Advance one frame.
    ///
    /// `pointer` is the raw input position in [-1, 1] on both axes,
    /// `time` the scene clock, `dt` the seconds since the last frame.
    pub fn update(&mut self, pointer: (f32, f32), time: f32, dt: f32, rng: &mut impl Rng) {
        let k = self.smoothing.coefficient(dt);

        // Exponential smoothing toward the scaled pointer position.
        self.target.0 += (pointer.0 * GAZE_SCALE_X - self.target.0) * k;
        self.target.1 += (pointer.1 * GAZE_SCALE_Y - self.target.1) * k;

        // Blink scheduling: fire when the clock passes the schedule,
        // then draw the next one 2-6 seconds out.
        if time > self.next_blink {
            self.blink_amplitude = 1.0;
            self.next_blink = time + rng.gen::<f32>() * 4.0 + 2.0;
        }
        if self.blink_amplitude > 0.0 {
            self.blink_amplitude = (self.blink_amplitude - BLINK_DECAY).max(0.0);
        }

        // Eye rotation eases toward the gaze with the same coefficient.
        let rot_x = self.target.1 * 0.1;
        let rot_y = self.target.0 * 0.15;
        self.rotation.0 += (rot_x - self.rotation.0) * k;
        self.rotation.1 += (rot_y - self.rotation.1) * k;
    }

    /// Snapshot of all eye properties for the current frame.
    pub fn snapshot(&self, time: f32) -> GazeSnapshot {
        GazeSnapshot {
            pupil: (
                clamp(self.target.0, -PUPIL_CLAMP_X, PUPIL_CLAMP_X),
                clamp(self.target.1, -PUPIL_CLAMP_Y, PUPIL_CLAMP_Y),
            ),
            eyelid_scale: 1.0 - (self.blink_amplitude * PI).sin() * 0.9,
            rotation: self.rotation,
            breathe_y: (time * 0.5).sin() * 0.02,
            breathe_roll: (time * 0.3).sin() * 0.01,
            glow_opacity: 0.3 + (time * 2.0).sin() * 0.2,
            pattern_angle: time * 0.05,
        }
    }

    /// Accent pattern: 8 points on a circle, rotating slowly, each
    /// shimmering with its own phase.
    pub fn pattern_points(&self, time: f32) -> [(f32, f32, f32); 8] {
        let angle = time * 0.05;
        let mut out = [(0.0, 0.0, 0.0); 8];
        for (i, p) in out.iter_mut().enumerate() {
            let a = (i as f32 / 8.0) * PI * 2.0 + angle;
            let opacity = 0.1 + (time + i as f32 * 0.5).sin() * 0.05;
            *p = (a.cos() * 0.08, a.sin() * 0.08, opacity);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn state(smoothing: Smoothing) -> (GazeState, StdRng) {
        let mut rng = StdRng::seed_from_u64(42);
        let s = GazeState::new(smoothing, &mut rng);
        (s, rng)
    }

    #[test]
    fn gaze_converges_to_clamp_bound_under_held_input() {
        let (mut s, mut rng) = state(Smoothing::FrameBound);
        // Pointer held hard right/up, far beyond the clamp bounds.
        for frame in 0..400 {
            let time = frame as f32 / 60.0;
            s.update((1.0, 1.0), time, 1.0 / 60.0, &mut rng);
        }
        let snap = s.snapshot(0.0);
        // Raw target converges to (0.15, 0.10); pupil sits pinned at
        // the clamp bounds.
        assert!((snap.pupil.0 - PUPIL_CLAMP_X).abs() < 1e-4);
        assert!((snap.pupil.1 - PUPIL_CLAMP_Y).abs() < 1e-4);
    }

    #[test]
    fn smoothing_is_geometric_with_ratio_095() {
        let (mut s, mut rng) = state(Smoothing::FrameBound);
        // Schedule the blink far away so it can't interfere.
        s.next_blink = f32::MAX;
        let goal = 1.0 * 0.15;
        let mut residual = goal;
        for _ in 0..10 {
            s.update((1.0, 0.0), 0.0, 1.0 / 60.0, &mut rng);
            residual *= 0.95;
            assert!((goal - s.target.0 - residual).abs() < 1e-5);
        }
    }

    #[test]
    fn time_normalized_matches_frame_bound_at_60fps() {
        // tau = 0.325s gives k ~= 0.05 at 60 FPS.
        let k = Smoothing::TimeNormalized { tau: 0.325 }.coefficient(1.0 / 60.0);
        assert!((k - 0.05).abs() < 0.002);
        // Bigger steps at lower frame rates.
        let k30 = Smoothing::TimeNormalized { tau: 0.325 }.coefficient(1.0 / 30.0);
        assert!(k30 > k);
    }

    #[test]
    fn blink_fires_and_decays_within_seven_frames() {
        let (mut s, mut rng) = state(Smoothing::FrameBound);
        // Force the schedule and step past it.
        s.next_blink = 1.0;
        s.update((0.0, 0.0), 1.5, 1.0 / 60.0, &mut rng);
        // Amplitude was set to 1 then decayed once within the frame.
        assert!((s.blink_amplitude() - 0.85).abs() < 1e-6);
        assert!(s.next_blink > 3.5 && s.next_blink <= 7.5);

        let mut frames = 1;
        while s.blink_amplitude() > 0.0 {
            s.update((0.0, 0.0), 1.5, 1.0 / 60.0, &mut rng);
            frames += 1;
            assert!(s.blink_amplitude() >= 0.0, "amplitude went negative");
            assert!(frames <= 7, "blink did not finish within 7 frames");
        }
    }

    #[test]
    fn eyelid_scale_dips_during_blink() {
        let (mut s, _) = state(Smoothing::FrameBound);
        assert!((s.snapshot(0.0).eyelid_scale - 1.0).abs() < 1e-6);
        s.blink_amplitude = 0.5; // sin(pi/2) = 1 -> fully shut
        assert!((s.snapshot(0.0).eyelid_scale - 0.1).abs() < 1e-6);
    }

    #[test]
    fn pattern_points_sit_on_the_accent_circle() {
        let (s, _) = state(Smoothing::FrameBound);
        for (x, y, opacity) in s.pattern_points(3.0) {
            assert!(((x * x + y * y).sqrt() - 0.08).abs() < 1e-5);
            assert!((0.05..=0.15).contains(&opacity));
        }
    }
}
