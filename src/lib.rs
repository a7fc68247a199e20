//! Jimokwang - a spin-the-wheel party question game
//!
//! Core modules:
//! - `sim`: Game state machine, spin selector and round timer
//! - `roster`: Registered players with persistence side effects
//! - `prompts`: Prompt bank with seeded random draws
//! - `persistence`: Roster storage boundary (JSON file, in-memory)
//! - `settings`: Session configuration

pub mod persistence;
pub mod prompts;
pub mod roster;
pub mod settings;
pub mod sim;

pub use prompts::PromptBank;
pub use roster::Roster;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Minimum roster size before a round can start
    pub const MIN_PLAYERS_TO_START: usize = 2;

    /// Initial spin velocity range (degrees per tick)
    pub const SPIN_MIN_VELOCITY: f64 = 10.0;
    pub const SPIN_MAX_VELOCITY: f64 = 20.0;
    /// Velocity multiplier applied every tick while spinning
    pub const SPIN_FRICTION: f64 = 0.98;
    /// Spin stops once velocity drops below this
    pub const SPIN_STOP_VELOCITY: f64 = 0.1;

    /// Time a player has to answer (seconds)
    pub const ANSWER_DURATION_SECS: f32 = 10.0;
    /// Longest answer time a session may configure
    pub const MAX_ANSWER_SECS: f32 = 3600.0;
    /// Remaining time at or below which the countdown is shown as urgent
    pub const LOW_TIME_SECS: f32 = 3.0;

    /// Default frontend tick rate
    pub const DEFAULT_TICK_HZ: u32 = 60;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if normalized >= 360.0 { 0.0 } else { normalized }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert!(normalize_degrees(-1e-20) < 360.0);
    }
}
