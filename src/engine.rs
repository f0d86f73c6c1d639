//! Rating engine: pointer position to rating, and rating to per-icon fill.
//!
//! Both functions are pure. The control calls [`compute_rating`] on every
//! pointer-down/move while tracking, and [`compute_fill_fractions`] whenever
//! the rating changes.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use crate::config::{Granularity, RatingConfig};
use crate::consts::{HALF_LOWER_THRESHOLD, HALF_UPPER_THRESHOLD};
use crate::geom::Point;
use crate::layout::IconGeometry;

/// Snap a local fraction in `[0, 1]` to `0.0`, `0.5` or `1.0`.
///
/// Both thresholds are exclusive: exactly `0.75` gives `0.5` and exactly
/// `0.25` gives `0.0`.
#[must_use]
pub fn quantize_half(fraction: f64) -> f64 {
    if fraction > HALF_UPPER_THRESHOLD {
        1.0
    } else if fraction > HALF_LOWER_THRESHOLD {
        0.5
    } else {
        0.0
    }
}

/// Map a pointer position to a rating.
///
/// Icons are scanned right to left; the first one whose left edge is at or
/// before `pointer.x` decides the result. If the pointer is inside that icon
/// and the granularity is fractional, the rating is the icon index plus the
/// (possibly half-snapped) fraction of the icon covered. Otherwise the whole
/// icon is claimed. A pointer left of every icon yields `0`.
///
/// The result is floored at `min_rating` but not ceiled at `max_rating`.
#[must_use]
pub fn compute_rating(pointer: Point, icons: &[IconGeometry], config: &RatingConfig) -> f64 {
    let raw = icons
        .iter()
        .rev()
        .find(|icon| icon.frame.x <= pointer.x)
        .map_or(0.0, |icon| rating_within(icon, pointer, config.granularity));

    raw.max(f64::from(config.min_rating))
}

fn rating_within(icon: &IconGeometry, pointer: Point, granularity: Granularity) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let base = icon.index as f64;
    let local = icon.frame.to_local(pointer);

    if granularity.is_fractional() && icon.frame.contains_local(local) {
        let fraction = local.x / icon.frame.width;
        if granularity == Granularity::Half { base + quantize_half(fraction) } else { base + fraction }
    } else {
        base + 1.0
    }
}

/// Fill fraction for each of `icon_count` icons at `rating`.
///
/// Icon `i` is full when `rating >= i + 1`, empty when `rating <= i`, and
/// otherwise filled to `rating - i`.
#[must_use]
pub fn compute_fill_fractions(rating: f64, icon_count: usize) -> Vec<f64> {
    (0..icon_count).map(|i| fill_fraction(rating, i)).collect()
}

/// Fill fraction of the single icon at `index`.
#[must_use]
pub fn fill_fraction(rating: f64, index: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let lower = index as f64;
    if rating >= lower + 1.0 {
        1.0
    } else if rating <= lower {
        0.0
    } else {
        rating - lower
    }
}
