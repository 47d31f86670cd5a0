use std::collections::{HashMap, HashSet};

use anyhow::{bail, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::body::{compute_transform, OrbitingBody, TransformSample};
use crate::clock::{SimClock, SpeedLimits};
use crate::daynight::{DayNightConfig, DayNightCycle, DayNightState};

/// Everything needed to build an animator: the data-driven body table plus
/// clock and lighting configuration. Plain data, so scenes can live in
/// source or in a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneConfig {
    pub bodies: Vec<OrbitingBody>,
    pub speed_limits: SpeedLimits,
    #[serde(default)]
    pub start_time: f32,
    #[serde(default = "default_running")]
    pub start_running: bool,
    #[serde(default)]
    pub day_night: Option<DayNightConfig>,
}

fn default_running() -> bool {
    true
}

impl SceneConfig {
    pub fn new(bodies: Vec<OrbitingBody>, speed_limits: SpeedLimits) -> Self {
        Self {
            bodies,
            speed_limits,
            start_time: 0.0,
            start_running: true,
            day_night: None,
        }
    }
}

/// The per-tick orchestrator. Owns the clock, the validated body table in
/// parent-before-child order, the current tick's samples and the optional
/// day/night cycle. All animation state lives here; nothing is ambient.
#[derive(Debug)]
pub struct Animator {
    clock: SimClock,
    bodies: Vec<OrbitingBody>,
    index: HashMap<String, usize>,
    samples: Vec<TransformSample>,
    day_night: Option<DayNightCycle>,
    labels_visible: bool,
    trails_visible: bool,
}

impl Animator {
    /// Validate the configuration and build the animator. Duplicate ids,
    /// unknown parents, parent cycles and malformed day/night tables are
    /// fatal here; there are no runtime error paths after construction.
    pub fn new(config: SceneConfig) -> Result<Self> {
        let bodies = topological_order(config.bodies)?;
        let index: HashMap<String, usize> = bodies
            .iter()
            .enumerate()
            .map(|(i, body)| (body.id.clone(), i))
            .collect();
        let day_night = config.day_night.map(DayNightCycle::new).transpose()?;

        log::debug!(
            "animator: {} bodies, day/night cycle: {}",
            bodies.len(),
            day_night.is_some()
        );

        let mut animator = Self {
            clock: SimClock::new(config.start_time, config.speed_limits, config.start_running),
            samples: Vec::with_capacity(bodies.len()),
            bodies,
            index,
            day_night,
            labels_visible: true,
            trails_visible: true,
        };
        animator.recompute();
        Ok(animator)
    }

    /// One frame: integrate the clock, then rebuild every sample and the
    /// lighting state from the new simulation time. Parents are evaluated
    /// before children, so a moon orbits its planet's current-tick position.
    pub fn tick(&mut self, real_delta: f32) {
        let before = self.clock.elapsed();
        self.clock.advance(real_delta);
        let sim_delta = self.clock.elapsed() - before;

        self.recompute();
        if let Some(cycle) = &mut self.day_night {
            cycle.advance(sim_delta);
        }
    }

    fn recompute(&mut self) {
        let t = self.clock.elapsed();
        self.samples.clear();
        for body in &self.bodies {
            let parent = match &body.parent {
                // Parent slots precede child slots, so the sample exists
                Some(id) => self.samples[self.index[id]].position,
                None => Vec3::ZERO,
            };
            self.samples.push(compute_transform(body, t, parent));
        }
    }

    /// Bodies in evaluation order, aligned with `samples()`
    pub fn bodies(&self) -> &[OrbitingBody] {
        &self.bodies
    }

    /// This tick's transforms, aligned with `bodies()`
    pub fn samples(&self) -> &[TransformSample] {
        &self.samples
    }

    pub fn sample(&self, id: &str) -> Option<&TransformSample> {
        self.index.get(id).map(|&i| &self.samples[i])
    }

    /// Current lighting state, if this scene runs a day/night cycle
    pub fn sky(&self) -> Option<DayNightState> {
        self.day_night.as_ref().map(|cycle| cycle.state())
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    // Command surface for whatever interaction layer is attached:
    // buttons, a test harness, or the headless driver.

    pub fn toggle_pause(&mut self) {
        self.clock.toggle_pause();
    }

    pub fn set_speed(&mut self, speed: f32) {
        self.clock.set_speed(speed);
    }

    pub fn speed_up(&mut self) {
        self.clock.speed_up();
    }

    pub fn slow_down(&mut self) {
        self.clock.slow_down();
    }

    /// Rewind simulation time and cycle phase to their start values,
    /// leaving speed and the running flag alone
    pub fn reset(&mut self) {
        self.clock.reset();
        if let Some(cycle) = &mut self.day_night {
            cycle.reset();
        }
        self.recompute();
    }

    pub fn toggle_labels(&mut self) {
        self.labels_visible = !self.labels_visible;
    }

    pub fn toggle_trails(&mut self) {
        self.trails_visible = !self.trails_visible;
    }

    /// Pass-through flag for the presentation layer; the math ignores it
    pub fn labels_visible(&self) -> bool {
        self.labels_visible
    }

    pub fn trails_visible(&self) -> bool {
        self.trails_visible
    }
}

/// Reorder bodies so every parent precedes its children, rejecting
/// duplicate ids, unknown parents and cycles. The relation is static, so
/// the order is computed once; positions are still rebuilt every tick.
fn topological_order(bodies: Vec<OrbitingBody>) -> Result<Vec<OrbitingBody>> {
    let mut ids: HashSet<&str> = HashSet::new();
    for body in &bodies {
        if !ids.insert(&body.id) {
            bail!("duplicate body id '{}'", body.id);
        }
    }
    for body in &bodies {
        if let Some(parent) = &body.parent {
            if !ids.contains(parent.as_str()) {
                bail!("body '{}' references unknown parent '{}'", body.id, parent);
            }
        }
    }

    let mut placed: HashSet<String> = HashSet::new();
    let mut remaining = bodies;
    let mut ordered = Vec::with_capacity(remaining.len());
    while !remaining.is_empty() {
        let before = remaining.len();
        remaining.retain(|body| {
            let ready = match &body.parent {
                Some(parent) => placed.contains(parent),
                None => true,
            };
            if ready {
                placed.insert(body.id.clone());
                ordered.push(body.clone());
            }
            !ready
        });
        if remaining.len() == before {
            let stuck: Vec<&str> = remaining.iter().map(|b| b.id.as_str()).collect();
            bail!("parent cycle among bodies: {}", stuck.join(", "));
        }
    }
    Ok(ordered)
}
