//! Rating configuration: bounds, granularity, minimum icon size, editability.
//!
//! `RatingConfig` is the host-facing description of a control. It can be
//! built in code or loaded from JSON (the shape a property inspector or a
//! settings file would produce). Out-of-order bounds are normalized rather
//! than rejected; only malformed input is an error.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_MAX_RATING, DEFAULT_MIN_ICON_SIZE, DEFAULT_MIN_RATING};
use crate::geom::Size;

/// Error returned by [`RatingConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The input was not valid JSON for a rating config.
    #[error("failed to parse rating config: {0}")]
    Parse(#[from] serde_json::Error),
    /// The minimum icon size had a negative or non-finite dimension.
    #[error("invalid minimum icon size: {width}x{height}")]
    InvalidMinIconSize { width: f64, height: f64 },
}

/// How a pointer position is quantized into a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// Whole icons only.
    #[default]
    Whole,
    /// Half-icon steps.
    Half,
    /// Unquantized fraction of the icon under the pointer.
    Continuous,
}

impl Granularity {
    /// Resolve a pair of inspector-style flags. Half takes priority over float.
    #[must_use]
    pub fn from_flags(half_ratings: bool, float_ratings: bool) -> Self {
        if half_ratings {
            Self::Half
        } else if float_ratings {
            Self::Continuous
        } else {
            Self::Whole
        }
    }

    /// Whether the pointer's position inside an icon contributes a fraction.
    #[must_use]
    pub fn is_fractional(self) -> bool {
        matches!(self, Self::Half | Self::Continuous)
    }
}

/// Configuration for one rating control.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Lowest rating a user can set.
    pub min_rating: u32,
    /// Highest rating; also the number of icons.
    pub max_rating: u32,
    /// Quantization rule for pointer-driven ratings.
    pub granularity: Granularity,
    /// Floor for each icon's laid-out width and height.
    pub min_icon_size: Size,
    /// When false, pointer input is ignored and the rating is only settable
    /// programmatically.
    pub editable: bool,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            min_rating: DEFAULT_MIN_RATING,
            max_rating: DEFAULT_MAX_RATING,
            granularity: Granularity::Whole,
            min_icon_size: Size::new(DEFAULT_MIN_ICON_SIZE, DEFAULT_MIN_ICON_SIZE),
            editable: true,
        }
    }
}

impl RatingConfig {
    /// Parse a config from JSON. Missing fields take their defaults and the
    /// result is normalized.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and
    /// [`ConfigError::InvalidMinIconSize`] for a negative or non-finite
    /// minimum icon size.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        let Size { width, height } = config.min_icon_size;
        if !(width.is_finite() && height.is_finite() && width >= 0.0 && height >= 0.0) {
            return Err(ConfigError::InvalidMinIconSize { width, height });
        }
        Ok(config.normalized())
    }

    /// Return a copy with `max_rating` raised to `min_rating` when the bounds
    /// are out of order.
    #[must_use]
    pub fn normalized(mut self) -> Self {
        if self.min_rating > self.max_rating {
            tracing::warn!(
                min_rating = self.min_rating,
                max_rating = self.max_rating,
                "min rating exceeds max rating; raising max rating"
            );
            self.max_rating = self.min_rating;
        }
        self
    }

    /// Number of icons in the row.
    #[must_use]
    pub fn icon_count(&self) -> usize {
        self.max_rating as usize
    }

    /// Clamp a rating into `[min_rating, max_rating]`.
    #[must_use]
    pub fn clamp(&self, rating: f64) -> f64 {
        rating.clamp(f64::from(self.min_rating), f64::from(self.max_rating.max(self.min_rating)))
    }
}
