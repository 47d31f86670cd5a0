use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Per-axis rotation motion. Linear spins wind forever; sway stays bounded.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub enum Motion {
    #[default]
    None,
    /// angle = speed * t
    Linear(f32),
    /// angle = sin(t * frequency + phase) * amplitude
    Sway {
        frequency: f32,
        amplitude: f32,
        phase: f32,
    },
}

impl Motion {
    pub fn angle(&self, t: f32) -> f32 {
        match *self {
            Motion::None => 0.0,
            Motion::Linear(speed) => speed * t,
            Motion::Sway {
                frequency,
                amplitude,
                phase,
            } => (t * frequency + phase).sin() * amplitude,
        }
    }
}

/// Cosmetic vertical bobbing added on top of the orbital plane.
/// Not orbital mechanics, just visual life.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Oscillation {
    pub frequency: f32,
    pub amplitude: f32,
}

impl Oscillation {
    pub fn offset(&self, t: f32) -> f32 {
        (t * self.frequency).sin() * self.amplitude
    }
}

/// Self-rotation configuration, one motion per Euler axis
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Spin {
    pub x: Motion,
    pub y: Motion,
    pub z: Motion,
}

/// Static configuration for one animated object.
///
/// Everything the per-tick evaluation needs lives here; there is no
/// per-body code path. Bodies with a `parent` orbit that body's
/// current-tick position instead of the origin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrbitingBody {
    pub id: String,
    #[serde(default)]
    pub parent: Option<String>,
    pub orbit_radius: f32,
    pub orbit_speed: f32,
    #[serde(default)]
    pub bob: Oscillation,
    #[serde(default)]
    pub spin: Spin,
}

impl OrbitingBody {
    pub fn new(id: &str, orbit_radius: f32, orbit_speed: f32) -> Self {
        Self {
            id: id.to_string(),
            parent: None,
            orbit_radius,
            orbit_speed,
            bob: Oscillation::default(),
            spin: Spin::default(),
        }
    }

    /// Fixed object: no orbit, animated only by bob/spin
    pub fn fixed(id: &str) -> Self {
        Self::new(id, 0.0, 0.0)
    }

    pub fn around(mut self, parent: &str) -> Self {
        self.parent = Some(parent.to_string());
        self
    }

    pub fn bobbing(mut self, frequency: f32, amplitude: f32) -> Self {
        self.bob = Oscillation {
            frequency,
            amplitude,
        };
        self
    }

    pub fn spinning(mut self, x: Motion, y: Motion, z: Motion) -> Self {
        self.spin = Spin { x, y, z };
        self
    }
}

/// Per-tick output for one body. Recomputed from scratch every tick;
/// never accumulated, so there is no drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformSample {
    pub position: Vec3,
    pub rotation: Vec3,
}

/// Pure transform evaluation. Output depends only on `t`, the body's
/// configuration and the parent's same-tick position - never on wall-clock
/// time or on a previous sample.
pub fn compute_transform(body: &OrbitingBody, t: f32, parent: Vec3) -> TransformSample {
    let angle = t * body.orbit_speed;
    let position = parent
        + Vec3::new(
            angle.cos() * body.orbit_radius,
            body.bob.offset(t),
            angle.sin() * body.orbit_radius,
        );
    let rotation = Vec3::new(
        body.spin.x.angle(t),
        body.spin.y.angle(t),
        body.spin.z.angle(t),
    );
    TransformSample { position, rotation }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_motion_winds_with_time() {
        let spin = Motion::Linear(1.5);
        assert_eq!(spin.angle(0.0), 0.0);
        assert_eq!(spin.angle(2.0), 3.0);
    }

    #[test]
    fn sway_motion_stays_bounded() {
        let sway = Motion::Sway {
            frequency: 2.0,
            amplitude: 0.05,
            phase: 1.0,
        };
        let mut t = 0.0;
        while t < 50.0 {
            assert!(sway.angle(t).abs() <= 0.05 + 1e-6);
            t += 0.37;
        }
    }

    #[test]
    fn transform_is_relative_to_parent() {
        let moon = OrbitingBody::new("moon", 2.0, 0.0);
        let origin_sample = compute_transform(&moon, 0.0, Vec3::ZERO);
        let offset_sample = compute_transform(&moon, 0.0, Vec3::new(10.0, 1.0, -3.0));

        assert_eq!(
            offset_sample.position - origin_sample.position,
            Vec3::new(10.0, 1.0, -3.0)
        );
    }
}
