use chrono::{Duration, NaiveDate};

use crate::clock::SimClock;

/// Calendar mapping for the on-screen date: a fixed epoch advanced by
/// elapsed simulation days.
#[derive(Debug, Clone, Copy)]
pub struct Calendar {
    pub epoch: NaiveDate,
    /// Simulation seconds per calendar day
    pub units_per_day: f32,
}

impl Calendar {
    pub fn new(epoch: NaiveDate, units_per_day: f32) -> Self {
        Self {
            epoch,
            units_per_day,
        }
    }

    /// Format the current simulation date, e.g. "April 27, 4057".
    /// Negative elapsed time (reverse playback) walks the calendar backward.
    pub fn date_string(&self, sim_time: f32) -> String {
        let days = (sim_time / self.units_per_day).floor() as i64;
        let date = self.epoch + Duration::days(days);
        date.format("%B %-d, %Y").to_string()
    }
}

/// Speed caption matching the clock's mode: "Paused", "2.5x Forward",
/// "1.0x Reverse".
pub fn speed_string(clock: &SimClock) -> String {
    if !clock.is_running() || clock.speed() == 0.0 {
        "Paused".to_string()
    } else if clock.speed() > 0.0 {
        format!("{:.1}x Forward", clock.speed())
    } else {
        format!("{:.1}x Reverse", clock.speed().abs())
    }
}

/// Discrete-multiplier caption used by the garden controls: "3x" / "Stopped"
pub fn multiplier_string(clock: &SimClock) -> String {
    if clock.is_running() {
        format!("{}x", clock.speed().round() as i32)
    } else {
        "Stopped".to_string()
    }
}
