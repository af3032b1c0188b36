// Connection-line graph for the skill constellation
//
// Built once at scene creation: every pair of skill nodes closer than
// 3.5 units gets an edge, and each edge carries 5 evenly spaced sample
// points for the flowing-particle visual. The node list is small and
// fixed, so the O(n^2) pass runs exactly once.

use super::Vec3;

/// Maximum node separation for a connection line.
pub const EDGE_DISTANCE: f32 = 3.5;

/// Flow particles sampled per edge.
pub const PARTICLES_PER_EDGE: usize = 5;

/// An undirected connection between two nodes, stored as data-table
/// indices with `a < b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub a: usize,
    pub b: usize,
}

/// Immutable graph geometry plus the scene's rotation driver.
#[derive(Debug, Clone)]
pub struct Constellation {
    positions: Vec<Vec3>,
    edges: Vec<Edge>,
    particles: Vec<Vec3>,
}

impl Constellation {
    pub fn new(positions: Vec<Vec3>) -> Self {
        let mut edges = Vec::new();
        let mut particles = Vec::new();
        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                if positions[i].distance(positions[j]) < EDGE_DISTANCE {
                    edges.push(Edge { a: i, b: j });
                    for k in 0..PARTICLES_PER_EDGE {
                        let t = k as f32 / (PARTICLES_PER_EDGE - 1) as f32;
                        particles.push(positions[i].along(positions[j], t));
                    }
                }
            }
        }
        Self {
            positions,
            edges,
            particles,
        }
    }

    pub fn positions(&self) -> &[Vec3] {
        &self.positions
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn particles(&self) -> &[Vec3] {
        &self.particles
    }

    /// Slow group rotation: yaw drifts steadily, pitch sways.
    pub fn rotation(time: f32) -> (f32, f32) {
        (time * 0.03, (time * 0.02).sin() * 0.1)
    }

    /// Connection line opacity driver.
    pub fn edge_opacity(time: f32) -> f32 {
        0.15 + time.sin() * 0.1
    }

    /// Vertical shimmer applied to flow particle `i`.
    pub fn particle_shimmer(time: f32, i: usize) -> f32 {
        (time * 2.0 + i as f32 * 0.5).sin() * 0.0005
    }

    /// Node position projected to screen coordinates under the
    /// current rotation.
    pub fn projected(&self, index: usize, time: f32) -> (f32, f32) {
        let (yaw, pitch) = Self::rotation(time);
        self.positions[index].project(yaw, pitch)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::SKILLS;

    fn skill_positions() -> Vec<Vec3> {
        SKILLS.iter().map(|s| s.position).collect()
    }

    #[test]
    fn edge_set_is_deterministic_over_the_skill_table() {
        let a = Constellation::new(skill_positions());
        let b = Constellation::new(skill_positions());
        assert_eq!(a.edges(), b.edges());
        assert!(!a.edges().is_empty());
        assert_eq!(
            a.particles().len(),
            a.edges().len() * PARTICLES_PER_EDGE
        );
    }

    #[test]
    fn edges_are_normalized_and_unique() {
        let c = Constellation::new(skill_positions());
        for (n, e) in c.edges().iter().enumerate() {
            assert!(e.a < e.b, "edge indices not ordered");
            for other in &c.edges()[n + 1..] {
                assert_ne!(e, other, "duplicate edge");
            }
        }
    }

    #[test]
    fn edges_respect_the_distance_cutoff() {
        let positions = skill_positions();
        let c = Constellation::new(positions.clone());
        for e in c.edges() {
            assert!(positions[e.a].distance(positions[e.b]) < EDGE_DISTANCE);
        }
        // And every qualifying pair is present.
        let mut expected = 0;
        for i in 0..positions.len() {
            for j in (i + 1)..positions.len() {
                if positions[i].distance(positions[j]) < EDGE_DISTANCE {
                    expected += 1;
                }
            }
        }
        assert_eq!(c.edges().len(), expected);
    }

    #[test]
    fn particles_sample_edge_endpoints() {
        let positions = vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 1.0, 0.0)];
        let c = Constellation::new(positions.clone());
        assert_eq!(c.edges().len(), 1);
        let p = c.particles();
        assert_eq!(p.len(), PARTICLES_PER_EDGE);
        assert_eq!(p[0], positions[0]);
        assert_eq!(p[PARTICLES_PER_EDGE - 1], positions[1]);
        // Midpoint lands halfway.
        assert!((p[2].x - 0.5).abs() < 1e-6);
    }

    #[test]
    fn distant_nodes_stay_disconnected() {
        let positions = vec![Vec3::new(0.0, 0.0, 0.0), Vec3::new(10.0, 0.0, 0.0)];
        let c = Constellation::new(positions);
        assert!(c.edges().is_empty());
        assert!(c.particles().is_empty());
    }
}
