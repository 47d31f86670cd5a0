use serde::{Deserialize, Serialize};

/// Clamp bounds and increment step for the speed multiplier.
///
/// The two shipped scenes are two configurations of the same abstraction:
/// the solar system uses a signed multiplier with half-step increments, the
/// garden a discrete positive multiplier with a separate running flag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SpeedLimits {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl SpeedLimits {
    /// Signed multiplier in [-5, +5], half-step increments
    pub fn signed() -> Self {
        Self {
            min: -5.0,
            max: 5.0,
            step: 0.5,
        }
    }

    /// Discrete positive multiplier, 1x to 10x
    pub fn discrete() -> Self {
        Self {
            min: 1.0,
            max: 10.0,
            step: 1.0,
        }
    }
}

/// Simulation clock - integrates real frame deltas into simulation time.
///
/// `advance` is the only per-tick mutation; everything else is an explicit
/// command from the interaction layer. Speed is always clamped, never
/// rejected, so there is no error path here.
#[derive(Debug, Clone)]
pub struct SimClock {
    elapsed: f32,
    speed: f32,
    running: bool,
    start: f32,
    limits: SpeedLimits,
}

impl SimClock {
    pub fn new(start: f32, limits: SpeedLimits, running: bool) -> Self {
        Self {
            elapsed: start,
            speed: 1.0_f32.clamp(limits.min, limits.max),
            running,
            start,
            limits,
        }
    }

    /// Current simulation time in simulation seconds
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Integrate one frame of real time. Call at most once per tick.
    /// No-op while paused.
    pub fn advance(&mut self, real_delta: f32) {
        if self.running {
            self.elapsed += real_delta * self.speed;
        }
    }

    /// Set the speed multiplier, clamped to the configured limits
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed.clamp(self.limits.min, self.limits.max);
    }

    /// Increase speed by one step, clamped
    pub fn speed_up(&mut self) {
        self.set_speed(self.speed + self.limits.step);
    }

    /// Decrease speed by one step, clamped
    pub fn slow_down(&mut self) {
        self.set_speed(self.speed - self.limits.step);
    }

    /// Flip running without touching elapsed time
    pub fn toggle_pause(&mut self) {
        self.running = !self.running;
    }

    /// Rewind elapsed time to the configured start value.
    /// Speed and the running flag are untouched.
    pub fn reset(&mut self) {
        self.elapsed = self.start;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_advances_scaled_by_speed() {
        let mut clock = SimClock::new(0.0, SpeedLimits::signed(), true);
        clock.set_speed(2.0);

        clock.advance(0.5);

        assert_eq!(clock.elapsed(), 1.0);
    }

    #[test]
    fn clock_frozen_while_paused() {
        let mut clock = SimClock::new(3.0, SpeedLimits::signed(), true);
        clock.toggle_pause();

        clock.advance(1.0);
        clock.advance(1.0);

        assert_eq!(clock.elapsed(), 3.0);
    }

    #[test]
    fn clock_runs_backward_under_negative_speed() {
        let mut clock = SimClock::new(10.0, SpeedLimits::signed(), true);
        clock.set_speed(-1.0);

        clock.advance(2.0);

        assert_eq!(clock.elapsed(), 8.0);
    }

    #[test]
    fn speed_clamped_at_limits() {
        let mut clock = SimClock::new(0.0, SpeedLimits::signed(), true);

        for _ in 0..100 {
            clock.speed_up();
        }
        assert_eq!(clock.speed(), 5.0);

        for _ in 0..100 {
            clock.slow_down();
        }
        assert_eq!(clock.speed(), -5.0);

        clock.set_speed(99.0);
        assert_eq!(clock.speed(), 5.0);
    }

    #[test]
    fn discrete_limits_stay_positive() {
        let mut clock = SimClock::new(0.0, SpeedLimits::discrete(), false);

        clock.slow_down();
        assert_eq!(clock.speed(), 1.0);

        for _ in 0..20 {
            clock.speed_up();
        }
        assert_eq!(clock.speed(), 10.0);
    }

    #[test]
    fn reset_rewinds_time_only() {
        let mut clock = SimClock::new(0.25, SpeedLimits::discrete(), true);
        clock.set_speed(3.0);
        clock.advance(1.0);
        assert!(clock.elapsed() > 0.25);

        clock.reset();

        assert_eq!(clock.elapsed(), 0.25);
        assert_eq!(clock.speed(), 3.0);
        assert!(clock.is_running());
    }
}
