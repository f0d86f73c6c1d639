//! Icon layout: sizing each icon inside the container and spacing the row.
//!
//! Every icon gets the same size: the icon's native aspect ratio fitted into a
//! box of `container.width / n` by `container.height`, each dimension floored
//! at the configured minimum. Icons are spread so the first sits at `x = 0`
//! and the last ends at the container's right edge.
//!
//! [`LayoutCache`] memoizes the result so the control only re-plans when the
//! container, icon count, minimum size, or icon aspect actually changes.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::geom::{Point, Rect, Size};

/// Position of one icon in the row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconGeometry {
    /// Zero-based position in the row, left to right.
    pub index: usize,
    /// Frame in control-local coordinates.
    pub frame: Rect,
}

/// Fit an icon with the given aspect ratio inside `bounds`, preserving its
/// proportions.
///
/// Degenerate inputs (a non-positive or non-finite aspect, or a box with no
/// usable height) return `bounds` unchanged.
#[must_use]
pub fn fit_aspect(icon_aspect: f64, bounds: Size) -> Size {
    let Some(box_aspect) = bounds.aspect_ratio() else {
        return bounds;
    };
    if !(icon_aspect.is_finite() && icon_aspect > 0.0) {
        return bounds;
    }

    if icon_aspect < box_aspect {
        // Height-constrained.
        Size::new(bounds.height * icon_aspect, bounds.height)
    } else {
        // Width-constrained.
        Size::new(bounds.width, bounds.width / icon_aspect)
    }
}

/// Lay out `icon_count` icons across `container`.
#[must_use]
pub fn compute_layout(container: Size, icon_aspect: f64, icon_count: usize, min_icon_size: Size) -> Vec<IconGeometry> {
    if icon_count == 0 {
        return Vec::new();
    }

    #[allow(clippy::cast_precision_loss)]
    let n = icon_count as f64;
    let desired_width = container.width / n;
    let bounds = Size::new(
        min_icon_size.width.max(desired_width),
        min_icon_size.height.max(container.height),
    );
    let icon_size = fit_aspect(icon_aspect, bounds);

    // A single icon has no gaps to distribute.
    let offset = if icon_count > 1 { (container.width - icon_size.width * n) / (n - 1.0) } else { 0.0 };
    let stride = offset + icon_size.width;

    (0..icon_count)
        .map(|index| {
            #[allow(clippy::cast_precision_loss)]
            let x = if index == 0 { 0.0 } else { index as f64 * stride };
            IconGeometry { index, frame: Rect::from_origin_size(Point::new(x, 0.0), icon_size) }
        })
        .collect()
}

/// Inputs that determine a layout. Two equal keys always produce the same
/// geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutKey {
    pub container: Size,
    pub icon_count: usize,
    pub min_icon_size: Size,
    pub icon_aspect: f64,
}

/// Memoized [`compute_layout`] result.
#[derive(Debug, Clone, Default)]
pub struct LayoutCache {
    key: Option<LayoutKey>,
    icons: Vec<IconGeometry>,
}

impl LayoutCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the layout for `key`, recomputing only if it differs from the
    /// cached key.
    pub fn get_or_compute(&mut self, key: LayoutKey) -> &[IconGeometry] {
        if self.key != Some(key) {
            tracing::trace!(
                width = key.container.width,
                height = key.container.height,
                icon_count = key.icon_count,
                "recomputing icon layout"
            );
            self.icons = compute_layout(key.container, key.icon_aspect, key.icon_count, key.min_icon_size);
            self.key = Some(key);
        }
        &self.icons
    }

    /// The last computed layout (empty before the first computation or after
    /// [`clear`](Self::clear)).
    #[must_use]
    pub fn icons(&self) -> &[IconGeometry] {
        &self.icons
    }

    /// The key the cached layout was computed for, if any.
    #[must_use]
    pub fn key(&self) -> Option<LayoutKey> {
        self.key
    }

    /// Drop the cached layout entirely.
    pub fn clear(&mut self) {
        self.key = None;
        self.icons.clear();
    }
}
