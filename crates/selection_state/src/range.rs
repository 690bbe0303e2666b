//! Bounded multi-thumb slider values with step snapping and minimum separation.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Steps moved by PageUp/PageDown.
pub const PAGE_STEPS: i32 = 10;

const SEPARATION_TOLERANCE: f64 = 1e-9;
const MAX_DECIMALS: usize = 12;

#[derive(Debug, Error, Clone, PartialEq)]
/// Reasons bounds or thumb positions are rejected.
pub enum RangeBoundsError {
    /// A bound, step, separation, or thumb is NaN or infinite.
    #[error("range values must be finite")]
    NonFinite,
    /// `min` is greater than `max`.
    #[error("range min {min} exceeds max {max}")]
    InvertedBounds {
        /// Lower bound.
        min: f64,
        /// Upper bound.
        max: f64,
    },
    /// `step` is zero or negative.
    #[error("range step must be positive, got {step}")]
    InvalidStep {
        /// Rejected step.
        step: f64,
    },
    /// Minimum separation is negative.
    #[error("minimum separation must not be negative, got {min_separation}")]
    NegativeSeparation {
        /// Rejected separation.
        min_separation: f64,
    },
    /// Both `min_separation` and `min_steps_between_thumbs` were configured.
    #[error("configure either min_separation or min_steps_between_thumbs, not both")]
    ConflictingSeparation,
    /// A range needs at least one thumb.
    #[error("range requires at least one thumb")]
    NoThumbs,
    /// A thumb lies outside `[min, max]`.
    #[error("thumb {index} value {value} is outside the track")]
    ThumbOutOfBounds {
        /// Thumb position.
        index: usize,
        /// Rejected value.
        value: f64,
    },
    /// A thumb is closer to its predecessor than the minimum separation, or out of order.
    #[error("thumb {index} is out of order or closer than the minimum separation to its predecessor")]
    ThumbsTooClose {
        /// Index of the later thumb in the offending pair.
        index: usize,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
/// Range configuration as supplied by callers.
///
/// Separation may be given in value units (`min_separation`) or in steps
/// (`min_steps_between_thumbs`), which converts as `steps * step`.
pub struct RangeBoundsConfig {
    /// Lower bound of the track.
    pub min: f64,
    /// Upper bound of the track.
    pub max: f64,
    /// Snap interval, measured from `min`.
    pub step: f64,
    /// Minimum distance between adjacent thumbs, in value units.
    #[serde(default)]
    pub min_separation: Option<f64>,
    /// Minimum distance between adjacent thumbs, in steps.
    #[serde(default)]
    pub min_steps_between_thumbs: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RangeBoundsConfig")]
/// Validated track bounds.
pub struct RangeBounds {
    min: f64,
    max: f64,
    step: f64,
    min_separation: f64,
}

impl RangeBounds {
    /// Validates and builds bounds with separation in value units.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeBoundsError`] for non-finite input, `min > max`, a non-positive step,
    /// or a negative separation.
    pub fn new(min: f64, max: f64, step: f64, min_separation: f64) -> Result<Self, RangeBoundsError> {
        if ![min, max, step, min_separation].iter().all(|value| value.is_finite()) {
            return Err(RangeBoundsError::NonFinite);
        }
        if min > max {
            return Err(RangeBoundsError::InvertedBounds { min, max });
        }
        if step <= 0.0 {
            return Err(RangeBoundsError::InvalidStep { step });
        }
        if min_separation < 0.0 {
            return Err(RangeBoundsError::NegativeSeparation { min_separation });
        }
        Ok(Self {
            min,
            max,
            step,
            min_separation,
        })
    }

    /// Builds bounds whose separation is expressed as a number of steps.
    ///
    /// # Errors
    ///
    /// Same as [`RangeBounds::new`].
    pub fn with_min_steps_between_thumbs(
        min: f64,
        max: f64,
        step: f64,
        min_steps: u32,
    ) -> Result<Self, RangeBoundsError> {
        Self::new(min, max, step, f64::from(min_steps) * step)
    }

    /// Lower bound.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Snap interval.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Minimum distance between adjacent thumbs.
    pub fn min_separation(&self) -> f64 {
        self.min_separation
    }

    fn decimals(&self) -> usize {
        decimal_places(self.step)
            .max(decimal_places(self.min))
            .max(decimal_places(self.min_separation))
    }

    /// Clamps to the track, then snaps to the nearest step from `min`.
    ///
    /// When `max` is not on the step grid, a value that would round past it snaps down instead.
    fn clamp_and_snap(&self, raw: f64) -> f64 {
        let clamped = raw.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        let decimals = self.decimals();
        let snapped = round_to(self.min + steps * self.step, decimals);
        if snapped > self.max {
            round_to(self.min + (steps - 1.0) * self.step, decimals)
        } else {
            snapped
        }
    }
}

impl TryFrom<RangeBoundsConfig> for RangeBounds {
    type Error = RangeBoundsError;

    fn try_from(config: RangeBoundsConfig) -> Result<Self, Self::Error> {
        match (config.min_separation, config.min_steps_between_thumbs) {
            (Some(_), Some(_)) => Err(RangeBoundsError::ConflictingSeparation),
            (_, Some(steps)) => {
                Self::with_min_steps_between_thumbs(config.min, config.max, config.step, steps)
            }
            (separation, None) => Self::new(
                config.min,
                config.max,
                config.step,
                separation.unwrap_or(0.0),
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
/// Serialized form of a [`RangeState`], validated on load.
pub struct RangeStateConfig {
    /// Track bounds.
    pub bounds: RangeBounds,
    /// Initial thumb positions.
    pub thumbs: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RangeStateConfig")]
/// Ordered thumb positions on a bounded track.
///
/// Thumbs never cross: dragging one stops at the minimum separation from its neighbours.
pub struct RangeState {
    bounds: RangeBounds,
    thumbs: Vec<f64>,
}

impl RangeState {
    /// Builds a range from already-valid thumb positions.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeBoundsError`] when `thumbs` is empty, leaves the track, is out of order,
    /// or violates the minimum separation.
    pub fn new(bounds: RangeBounds, thumbs: Vec<f64>) -> Result<Self, RangeBoundsError> {
        validate_thumbs(&bounds, &thumbs)?;
        Ok(Self { bounds, thumbs })
    }

    /// Track bounds.
    pub fn bounds(&self) -> &RangeBounds {
        &self.bounds
    }

    /// Thumb positions in track order.
    pub fn value(&self) -> &[f64] {
        &self.thumbs
    }

    /// Number of thumbs.
    pub fn len(&self) -> usize {
        self.thumbs.len()
    }

    /// Always false; a range has at least one thumb.
    pub fn is_empty(&self) -> bool {
        self.thumbs.is_empty()
    }

    /// Moves one thumb toward `raw`.
    ///
    /// The value is clamped to the track, snapped to the step grid, then held off its
    /// neighbours by the minimum separation, in that order. Other thumbs do not move.
    /// Unknown indexes and non-finite input are ignored.
    pub fn set_thumb(&mut self, index: usize, raw: f64) -> bool {
        if !raw.is_finite() || index >= self.thumbs.len() {
            return false;
        }

        let separation = self.bounds.min_separation;
        let floor = index
            .checked_sub(1)
            .map(|lower| self.thumbs[lower] + separation);
        let ceiling = self.thumbs.get(index + 1).map(|upper| upper - separation);

        let mut next = self.bounds.clamp_and_snap(raw);
        if let Some(floor) = floor {
            next = next.max(floor);
        }
        if let Some(ceiling) = ceiling {
            next = next.min(ceiling);
        }
        let mut next = round_to(next, self.bounds.decimals());
        // Neighbours set through `set_all` may carry more decimals than the grid.
        if let Some(floor) = floor.filter(|floor| next < floor - SEPARATION_TOLERANCE) {
            next = floor;
        }
        if let Some(ceiling) = ceiling.filter(|ceiling| next > ceiling + SEPARATION_TOLERANCE) {
            next = ceiling;
        }

        if next == self.thumbs[index] {
            return false;
        }
        self.thumbs[index] = next;
        true
    }

    /// Moves a thumb by a signed number of steps (arrow keys, PageUp/PageDown).
    pub fn step_thumb(&mut self, index: usize, steps: i32) -> bool {
        let Some(current) = self.thumbs.get(index).copied() else {
            return false;
        };
        self.set_thumb(index, current + f64::from(steps) * self.bounds.step)
    }

    /// Sends a thumb as far down as its lower neighbour allows (Home).
    pub fn set_thumb_to_min(&mut self, index: usize) -> bool {
        self.set_thumb(index, self.bounds.min)
    }

    /// Sends a thumb as far up as its upper neighbour allows (End).
    pub fn set_thumb_to_max(&mut self, index: usize) -> bool {
        self.set_thumb(index, self.bounds.max)
    }

    /// Replaces every thumb at once.
    ///
    /// The thumb count may change. Values that break the bounds, ordering, or separation
    /// invariants are rejected as a whole; nothing is partially applied.
    pub fn set_all(&mut self, values: Vec<f64>) -> bool {
        if validate_thumbs(&self.bounds, &values).is_err() || values == self.thumbs {
            return false;
        }
        self.thumbs = values;
        true
    }

    /// Index of the thumb nearest to a track position, used for track clicks.
    ///
    /// When two thumbs are equally close, the later one wins if `raw` lies above it so that
    /// stacked thumbs can still be pulled apart.
    pub fn closest_thumb(&self, raw: f64) -> usize {
        let mut closest = 0;
        let mut best = f64::INFINITY;
        for (index, thumb) in self.thumbs.iter().enumerate() {
            let distance = (thumb - raw).abs();
            if distance < best || (distance == best && raw > *thumb) {
                closest = index;
                best = distance;
            }
        }
        closest
    }

    /// Thumb position as a percentage of the track, for rendering.
    pub fn percent(&self, index: usize) -> f64 {
        let span = self.bounds.max - self.bounds.min;
        match self.thumbs.get(index) {
            Some(value) if span > 0.0 => ((value - self.bounds.min) / span * 100.0).clamp(0.0, 100.0),
            _ => 0.0,
        }
    }
}

impl TryFrom<RangeStateConfig> for RangeState {
    type Error = RangeBoundsError;

    fn try_from(config: RangeStateConfig) -> Result<Self, Self::Error> {
        Self::new(config.bounds, config.thumbs)
    }
}

fn validate_thumbs(bounds: &RangeBounds, thumbs: &[f64]) -> Result<(), RangeBoundsError> {
    if thumbs.is_empty() {
        return Err(RangeBoundsError::NoThumbs);
    }
    for (index, value) in thumbs.iter().copied().enumerate() {
        if !value.is_finite() {
            return Err(RangeBoundsError::NonFinite);
        }
        if value < bounds.min || value > bounds.max {
            return Err(RangeBoundsError::ThumbOutOfBounds { index, value });
        }
        if index > 0 && value - thumbs[index - 1] < bounds.min_separation - SEPARATION_TOLERANCE {
            return Err(RangeBoundsError::ThumbsTooClose { index });
        }
    }
    Ok(())
}

fn decimal_places(value: f64) -> usize {
    format!("{value}")
        .split_once('.')
        .map(|(_, fraction)| fraction.len())
        .unwrap_or(0)
        .min(MAX_DECIMALS)
}

fn round_to(value: f64, decimals: usize) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
