//! User-tunable configuration.

use std::fmt;
use std::ops::RangeInclusive;

use follow_core::grid::DEFAULT_CELL_SIZE;

use crate::mover::DEFAULT_SPEED;

/// Accepted follower speeds, in cells per second.
pub const SPEED_RANGE: RangeInclusive<f64> = 1.0..=40.0;
/// Accepted cell edge lengths, in pixels.
pub const CELL_SIZE_RANGE: RangeInclusive<i32> = 10..=50;
/// Accepted per-cell obstacle probabilities for the random generator.
pub const OBSTACLE_PROBABILITY_RANGE: RangeInclusive<f64> = 0.05..=0.6;

/// What to do with the current path when the target becomes unreachable.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnreachablePolicy {
    /// Keep following the last path that was found.
    #[default]
    KeepLast,
    /// Drop the path and stand still.
    Clear,
}

/// Session configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Settings {
    /// Follower speed in cells per second.
    pub speed: f64,
    /// Cell edge length in pixels.
    pub cell_size: i32,
    /// Probability of each cell being blocked by the random generator.
    pub obstacle_probability: f64,
    /// Whether drags start with the axis lock engaged.
    pub axis_lock: bool,
    pub unreachable: UnreachablePolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            speed: DEFAULT_SPEED,
            cell_size: DEFAULT_CELL_SIZE,
            obstacle_probability: 0.2,
            axis_lock: false,
            unreachable: UnreachablePolicy::default(),
        }
    }
}

impl Settings {
    pub fn with_speed(mut self, speed: f64) -> Self {
        self.speed = speed;
        self
    }

    pub fn with_cell_size(mut self, cell_size: i32) -> Self {
        self.cell_size = cell_size;
        self
    }

    pub fn with_obstacle_probability(mut self, p: f64) -> Self {
        self.obstacle_probability = p;
        self
    }

    pub fn with_axis_lock(mut self, on: bool) -> Self {
        self.axis_lock = on;
        self
    }

    pub fn with_unreachable(mut self, policy: UnreachablePolicy) -> Self {
        self.unreachable = policy;
        self
    }

    /// Check every field against its accepted range. The first offending
    /// field is reported.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !SPEED_RANGE.contains(&self.speed) {
            return Err(SettingsError::Speed(self.speed));
        }
        if !CELL_SIZE_RANGE.contains(&self.cell_size) {
            return Err(SettingsError::CellSize(self.cell_size));
        }
        if !OBSTACLE_PROBABILITY_RANGE.contains(&self.obstacle_probability) {
            return Err(SettingsError::ObstacleProbability(
                self.obstacle_probability,
            ));
        }
        Ok(())
    }

    /// A copy with every field brought into its accepted range. NaN fields
    /// fall back to their defaults.
    pub fn clamped(&self) -> Self {
        let d = Self::default();
        Self {
            speed: clamp_f64(self.speed, &SPEED_RANGE, d.speed),
            cell_size: self
                .cell_size
                .clamp(*CELL_SIZE_RANGE.start(), *CELL_SIZE_RANGE.end()),
            obstacle_probability: clamp_f64(
                self.obstacle_probability,
                &OBSTACLE_PROBABILITY_RANGE,
                d.obstacle_probability,
            ),
            ..self.clone()
        }
    }
}

fn clamp_f64(v: f64, range: &RangeInclusive<f64>, fallback: f64) -> f64 {
    if v.is_nan() {
        fallback
    } else {
        v.clamp(*range.start(), *range.end())
    }
}

/// A [`Settings`] field outside its accepted range.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsError {
    Speed(f64),
    CellSize(i32),
    ObstacleProbability(f64),
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Speed(v) => write!(
                f,
                "speed {v} is outside {}..={} cells/s",
                SPEED_RANGE.start(),
                SPEED_RANGE.end()
            ),
            Self::CellSize(v) => write!(
                f,
                "cell size {v} is outside {}..={} px",
                CELL_SIZE_RANGE.start(),
                CELL_SIZE_RANGE.end()
            ),
            Self::ObstacleProbability(v) => write!(
                f,
                "obstacle probability {v} is outside {}..={}",
                OBSTACLE_PROBABILITY_RANGE.start(),
                OBSTACLE_PROBABILITY_RANGE.end()
            ),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let s = Settings::default();
        assert_eq!(s.validate(), Ok(()));
        assert_eq!(s.speed, 5.0);
        assert_eq!(s.cell_size, 20);
        assert_eq!(s.unreachable, UnreachablePolicy::KeepLast);
        assert_eq!(s.clamped(), s);
    }

    #[test]
    fn validate_reports_first_bad_field() {
        let s = Settings::default().with_speed(0.5).with_cell_size(4);
        assert_eq!(s.validate(), Err(SettingsError::Speed(0.5)));
        let s = s.with_speed(40.0);
        assert_eq!(s.validate(), Err(SettingsError::CellSize(4)));
        let s = s.with_cell_size(50).with_obstacle_probability(0.9);
        assert_eq!(s.validate(), Err(SettingsError::ObstacleProbability(0.9)));
        assert!(
            Settings::default()
                .with_speed(f64::INFINITY)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn clamped_brings_fields_into_range() {
        let s = Settings::default()
            .with_speed(f64::NAN)
            .with_cell_size(400)
            .with_obstacle_probability(0.0)
            .with_axis_lock(true)
            .clamped();
        assert_eq!(s.speed, DEFAULT_SPEED);
        assert_eq!(s.cell_size, 50);
        assert_eq!(s.obstacle_probability, 0.05);
        assert!(s.axis_lock);
        assert_eq!(s.validate(), Ok(()));
    }

    #[test]
    fn error_messages() {
        assert_eq!(
            SettingsError::CellSize(4).to_string(),
            "cell size 4 is outside 10..=50 px"
        );
        assert_eq!(
            SettingsError::Speed(0.5).to_string(),
            "speed 0.5 is outside 1..=40 cells/s"
        );
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn roundtrip_and_partial_input() {
        let s = Settings::default()
            .with_speed(12.0)
            .with_unreachable(UnreachablePolicy::Clear);
        let json = serde_json::to_string(&s).unwrap();
        let back: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(back, s);

        let partial: Settings = serde_json::from_str(r#"{"speed": 3.0}"#).unwrap();
        assert_eq!(partial, Settings::default().with_speed(3.0));
    }
}
