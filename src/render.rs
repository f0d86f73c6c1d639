//! Render model: what the host should draw for each icon.
//!
//! Each icon is drawn as the empty image with the full image stacked on top.
//! The full image is hidden for an empty icon, shown unclipped for a full
//! icon, and clipped to the left `fill × width` for a partial one. This module
//! only describes that; drawing and clipping happen in the host.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::engine::fill_fraction;
use crate::geom::Rect;
use crate::layout::IconGeometry;

/// How the full-state image of one icon is presented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FullImage {
    /// Not drawn.
    Hidden,
    /// Drawn over the whole frame.
    Full,
    /// Drawn through a mask, in icon-local coordinates.
    Clipped(Rect),
}

/// Draw instructions for one icon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IconVisual {
    pub index: usize,
    /// Frame shared by the empty and full images.
    pub frame: Rect,
    /// Fill fraction in `[0, 1]`.
    pub fill: f64,
    pub full_image: FullImage,
}

/// Build draw instructions for every laid-out icon at `rating`.
#[must_use]
pub fn icon_visuals(icons: &[IconGeometry], rating: f64) -> Vec<IconVisual> {
    icons
        .iter()
        .map(|icon| {
            let fill = fill_fraction(rating, icon.index);
            IconVisual { index: icon.index, frame: icon.frame, fill, full_image: full_image_for(fill, icon.frame) }
        })
        .collect()
}

fn full_image_for(fill: f64, frame: Rect) -> FullImage {
    if fill >= 1.0 {
        FullImage::Full
    } else if fill > 0.0 {
        FullImage::Clipped(Rect::new(0.0, 0.0, fill * frame.width, frame.height))
    } else {
        FullImage::Hidden
    }
}
