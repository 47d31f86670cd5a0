use std::f32::consts::{PI, TAU};

use anyhow::{bail, Result};
use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::math::{lerp_rgb, rgb_hex};

pub type Rgb = [f32; 3];

const NIGHT_SKY: Rgb = rgb_hex(0x1a1a2e);
const SUNRISE_SKY: Rgb = rgb_hex(0xff6b35);
const DAY_SKY: Rgb = rgb_hex(0x87ceeb);
const SUNSET_SKY: Rgb = rgb_hex(0xff4500);

/// One piece of the piecewise-linear sky gradient. Color ramps from `from`
/// at `start` to `to` at `end`; flat segments use the same color twice.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SkySegment {
    pub start: f32,
    pub end: f32,
    pub from: Rgb,
    pub to: Rgb,
}

impl SkySegment {
    pub fn ramp(start: f32, end: f32, from: Rgb, to: Rgb) -> Self {
        Self {
            start,
            end,
            from,
            to,
        }
    }

    pub fn flat(start: f32, end: f32, color: Rgb) -> Self {
        Self::ramp(start, end, color, color)
    }
}

/// Named phase range for the on-screen time-of-day caption
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PhaseBand {
    pub start: f32,
    pub end: f32,
    pub name: String,
}

impl PhaseBand {
    pub fn new(start: f32, end: f32, name: &str) -> Self {
        Self {
            start,
            end,
            name: name.to_string(),
        }
    }
}

/// Full configuration for one day/night cycle. Every threshold the cycle
/// math uses is a named field here; nothing is hardcoded in the evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayNightConfig {
    /// Fraction of a full day per simulation second
    pub cycle_speed: f32,
    pub start_phase: f32,

    /// Sun orbit radius in world units
    pub sun_distance: f32,
    /// Vertical scale of the sun arc
    pub sun_height: f32,
    /// Elevation floor for the light. Keeps shadow maps stable while the
    /// sun is below the horizon; deliberately not physical.
    pub min_sun_height: f32,

    /// Day window bounds in phase space
    pub day_start: f32,
    pub day_end: f32,
    /// Sun intensity at the day-window edges
    pub sun_floor: f32,
    /// Sun intensity at the day-window midpoint
    pub sun_peak: f32,
    /// Fixed sun intensity outside the day window
    pub sun_night: f32,
    pub ambient_floor: f32,
    pub ambient_peak: f32,
    pub ambient_night: f32,

    pub sky: Vec<SkySegment>,
    pub bands: Vec<PhaseBand>,
}

impl DayNightConfig {
    /// The garden scene's cycle: sunrise at phase 0.25, a 12-hour day
    /// window, and the garden sky palette.
    ///
    /// The label bands and the color segments intentionally diverge: the
    /// morning color ramp ends at 0.3 while the "Morning" caption runs to
    /// 0.5. They are kept as two independent tables.
    pub fn garden() -> Self {
        Self {
            cycle_speed: 0.06,
            start_phase: 0.25,
            sun_distance: 25.0,
            sun_height: 15.0,
            min_sun_height: 0.5,
            day_start: 0.2,
            day_end: 0.8,
            sun_floor: 0.3,
            sun_peak: 1.0,
            sun_night: 0.1,
            ambient_floor: 0.4,
            ambient_peak: 0.8,
            ambient_night: 0.2,
            sky: vec![
                SkySegment::flat(0.0, 0.15, NIGHT_SKY),
                SkySegment::ramp(0.15, 0.25, NIGHT_SKY, SUNRISE_SKY),
                SkySegment::ramp(0.25, 0.30, SUNRISE_SKY, DAY_SKY),
                SkySegment::flat(0.30, 0.70, DAY_SKY),
                SkySegment::ramp(0.70, 0.80, DAY_SKY, SUNSET_SKY),
                // The evening ramp must end on the night color or the sky
                // pops at phase 0.9; validate() enforces this.
                SkySegment::ramp(0.80, 0.90, SUNSET_SKY, NIGHT_SKY),
                SkySegment::flat(0.90, 1.0, NIGHT_SKY),
            ],
            bands: vec![
                PhaseBand::new(0.0, 0.15, "Night"),
                PhaseBand::new(0.15, 0.30, "Sunrise"),
                PhaseBand::new(0.30, 0.50, "Morning"),
                PhaseBand::new(0.50, 0.70, "Afternoon"),
                PhaseBand::new(0.70, 0.90, "Sunset"),
                PhaseBand::new(0.90, 1.0, "Night"),
            ],
        }
    }

    /// Check the static tables once at construction. The data never changes
    /// afterwards, so a violation here is a fatal configuration error.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.start_phase) {
            bail!("start_phase {} outside [0,1)", self.start_phase);
        }
        if !(0.0 <= self.day_start && self.day_start < self.day_end && self.day_end <= 1.0) {
            bail!(
                "day window [{}, {}] is not an ordered range within [0,1]",
                self.day_start,
                self.day_end
            );
        }

        check_coverage(
            "sky",
            self.sky.iter().map(|s| (s.start, s.end)),
            self.sky.len(),
        )?;
        check_coverage(
            "bands",
            self.bands.iter().map(|b| (b.start, b.end)),
            self.bands.len(),
        )?;

        // Color must match at every join, wrap included, or the sky pops
        for window in self.sky.windows(2) {
            check_join(window[0].to, window[1].from, window[1].start)?;
        }
        if let (Some(first), Some(last)) = (self.sky.first(), self.sky.last()) {
            check_join(last.to, first.from, first.start)?;
        }

        Ok(())
    }

    /// Sky color at a phase, linear within the segment containing it
    pub fn sky_color(&self, phase: f32) -> Rgb {
        for segment in &self.sky {
            if phase >= segment.start && phase < segment.end {
                let progress = (phase - segment.start) / (segment.end - segment.start);
                return lerp_rgb(segment.from, segment.to, progress);
            }
        }
        // Validated tables cover [0,1); only phase == 1.0 can land here
        self.sky.last().map(|s| s.to).unwrap_or(NIGHT_SKY)
    }

    /// Sun intensity: sine arch across the day window, flat floor at night
    pub fn sun_intensity(&self, phase: f32) -> f32 {
        match self.day_progress(phase) {
            Some(p) => self.sun_floor + (p * PI).sin() * (self.sun_peak - self.sun_floor),
            None => self.sun_night,
        }
    }

    pub fn ambient_intensity(&self, phase: f32) -> f32 {
        match self.day_progress(phase) {
            Some(p) => self.ambient_floor + (p * PI).sin() * (self.ambient_peak - self.ambient_floor),
            None => self.ambient_night,
        }
    }

    /// Light position on the sun arc, floored at `min_sun_height`
    pub fn sun_direction(&self, phase: f32) -> Vec3 {
        let angle = phase * TAU;
        Vec3::new(
            angle.cos() * self.sun_distance,
            (angle.sin() * self.sun_height).max(self.min_sun_height),
            angle.sin() * self.sun_distance,
        )
    }

    /// Caption for the band containing this phase
    pub fn band(&self, phase: f32) -> &str {
        for band in &self.bands {
            if phase >= band.start && phase < band.end {
                return &band.name;
            }
        }
        self.bands.last().map(|b| b.name.as_str()).unwrap_or("")
    }

    fn day_progress(&self, phase: f32) -> Option<f32> {
        if phase >= self.day_start && phase <= self.day_end {
            Some((phase - self.day_start) / (self.day_end - self.day_start))
        } else {
            None
        }
    }
}

const JOIN_TOLERANCE: f32 = 1e-4;

fn check_coverage(
    what: &str,
    ranges: impl Iterator<Item = (f32, f32)>,
    len: usize,
) -> Result<()> {
    if len == 0 {
        bail!("{what} table is empty");
    }
    let mut cursor = 0.0_f32;
    for (i, (start, end)) in ranges.enumerate() {
        if (start - cursor).abs() > JOIN_TOLERANCE {
            bail!("{what} table has a gap or overlap at entry {i}: expected start {cursor}, got {start}");
        }
        if end <= start {
            bail!("{what} entry {i} is empty or reversed: [{start}, {end}]");
        }
        cursor = end;
    }
    if (cursor - 1.0).abs() > JOIN_TOLERANCE {
        bail!("{what} table ends at {cursor}, must cover [0,1)");
    }
    Ok(())
}

fn check_join(a: Rgb, b: Rgb, at: f32) -> Result<()> {
    for c in 0..3 {
        if (a[c] - b[c]).abs() > JOIN_TOLERANCE {
            bail!("sky color discontinuity at phase {at}: {a:?} vs {b:?}");
        }
    }
    Ok(())
}

/// Per-tick lighting output, pure in `phase`
#[derive(Debug, Clone, PartialEq)]
pub struct DayNightState {
    pub phase: f32,
    pub sun_direction: Vec3,
    pub sun_intensity: f32,
    pub ambient_intensity: f32,
    pub sky_color: Rgb,
    pub band: String,
}

/// Cyclic phase plus the configuration that derives everything else from it
#[derive(Debug, Clone)]
pub struct DayNightCycle {
    phase: f32,
    config: DayNightConfig,
}

impl DayNightCycle {
    pub fn new(config: DayNightConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            phase: config.start_phase,
            config,
        })
    }

    pub fn phase(&self) -> f32 {
        self.phase
    }

    pub fn config(&self) -> &DayNightConfig {
        &self.config
    }

    /// Advance the cycle by a slice of simulation time, wrapping into [0,1).
    /// Reverse time wraps the other way and stays in range.
    pub fn advance(&mut self, sim_delta: f32) {
        self.phase = (self.phase + sim_delta * self.config.cycle_speed).rem_euclid(1.0);
    }

    /// Rewind phase to the configured start
    pub fn reset(&mut self) {
        self.phase = self.config.start_phase;
    }

    pub fn state(&self) -> DayNightState {
        DayNightState {
            phase: self.phase,
            sun_direction: self.config.sun_direction(self.phase),
            sun_intensity: self.config.sun_intensity(self.phase),
            ambient_intensity: self.config.ambient_intensity(self.phase),
            sky_color: self.config.sky_color(self.phase),
            band: self.config.band(self.phase).to_string(),
        }
    }
}
