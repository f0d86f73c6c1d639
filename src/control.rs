//! The rating control: config, current rating, cached layout, and the
//! pointer state machine, with no dependency on any UI toolkit.
//!
//! The host forwards container sizes, the icon image size, and pointer events;
//! each handler returns the [`Action`]s the host should carry out (redraw,
//! notify its delegate). Programmatic changes never produce `Updating` or
//! `Committed`; those come only from pointer interaction.

#[cfg(test)]
#[path = "control_test.rs"]
mod control_test;

use crate::config::{Granularity, RatingConfig};
use crate::engine::{compute_fill_fractions, compute_rating};
use crate::geom::{Point, Size};
use crate::input::{InputState, PointerId};
use crate::layout::{IconGeometry, LayoutCache, LayoutKey};
use crate::render::{IconVisual, icon_visuals};

/// Actions returned from control handlers for the host to process.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    None,
    /// The rating changed during a pointer interaction.
    Updating(f64),
    /// A pointer interaction ended with this rating.
    Committed(f64),
    /// Geometry or fill changed; redraw.
    RenderNeeded,
}

impl Action {
    /// Forward a notification action to `delegate`. Returns whether the
    /// action was a notification.
    pub fn dispatch<D: RatingDelegate + ?Sized>(&self, delegate: &mut D) -> bool {
        match *self {
            Self::Updating(rating) => {
                delegate.updating(rating);
                true
            }
            Self::Committed(rating) => {
                delegate.committed(rating);
                true
            }
            Self::None | Self::RenderNeeded => false,
        }
    }
}

/// Forward every notification in `actions` to `delegate`, in order.
pub fn dispatch_all<D: RatingDelegate + ?Sized>(actions: &[Action], delegate: &mut D) {
    for action in actions {
        action.dispatch(delegate);
    }
}

/// Receiver for rating notifications.
pub trait RatingDelegate {
    /// Called once when a pointer interaction ends (release or cancel).
    fn committed(&mut self, rating: f64);

    /// Called after every pointer-driven recompute while tracking.
    fn updating(&mut self, _rating: f64) {}
}

/// A single rating control.
#[derive(Debug, Clone, Default)]
pub struct RatingControl {
    config: RatingConfig,
    rating: f64,
    icon_size: Option<Size>,
    container: Size,
    layout: LayoutCache,
    input: InputState,
}

impl RatingControl {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_config(config: RatingConfig) -> Self {
        let config = config.normalized();
        Self { rating: config.clamp(0.0), config, ..Self::default() }
    }

    // --- Configuration ---

    /// Replace the whole config. The rating is re-clamped and the layout
    /// re-planned if the icon count or minimum icon size changed.
    pub fn set_config(&mut self, config: RatingConfig) -> Action {
        let config = config.normalized();
        if config == self.config {
            return Action::None;
        }
        self.config = config;

        let clamped = config.clamp(self.rating);
        let rating_changed = clamped != self.rating;
        self.rating = clamped;
        let layout_changed = self.relayout();

        if rating_changed || layout_changed { Action::RenderNeeded } else { Action::None }
    }

    pub fn set_min_rating(&mut self, min_rating: u32) -> Action {
        self.set_config(RatingConfig { min_rating, ..self.config })
    }

    pub fn set_max_rating(&mut self, max_rating: u32) -> Action {
        self.set_config(RatingConfig { max_rating, ..self.config })
    }

    pub fn set_granularity(&mut self, granularity: Granularity) -> Action {
        self.set_config(RatingConfig { granularity, ..self.config })
    }

    pub fn set_editable(&mut self, editable: bool) -> Action {
        self.set_config(RatingConfig { editable, ..self.config })
    }

    pub fn set_min_icon_size(&mut self, min_icon_size: Size) -> Action {
        self.set_config(RatingConfig { min_icon_size, ..self.config })
    }

    /// Set the native size of the icon images (empty and full share it).
    /// `None` means no image is loaded; nothing is laid out.
    pub fn set_icon_size(&mut self, icon_size: Option<Size>) -> Action {
        self.icon_size = icon_size;
        if self.relayout() { Action::RenderNeeded } else { Action::None }
    }

    /// Layout pass: the host reports the control's current bounds.
    pub fn set_container_size(&mut self, container: Size) -> Action {
        self.container = container;
        if self.relayout() { Action::RenderNeeded } else { Action::None }
    }

    /// Set the rating programmatically. Clamped to `[min_rating, max_rating]`;
    /// non-finite values are ignored.
    pub fn set_rating(&mut self, rating: f64) -> Action {
        if !rating.is_finite() {
            tracing::warn!(rating, "ignoring non-finite rating");
            return Action::None;
        }
        let clamped = self.config.clamp(rating);
        if clamped == self.rating {
            return Action::None;
        }
        self.rating = clamped;
        Action::RenderNeeded
    }

    // --- Pointer input ---

    /// Start tracking `pointer` and rate at `pt`. Ignored when read-only or
    /// when another pointer is already being tracked.
    pub fn on_pointer_down(&mut self, pointer: PointerId, pt: Point) -> Vec<Action> {
        if !self.config.editable || self.input.is_tracking() {
            return Vec::new();
        }
        self.input = InputState::Tracking { pointer };
        tracing::debug!(pointer = pointer.0, x = pt.x, "rating interaction started");
        self.rate_at(pt)
    }

    /// Re-rate at `pt` while tracking `pointer`. Moves are ignored once the
    /// control is read-only, but the interaction still commits on release.
    pub fn on_pointer_move(&mut self, pointer: PointerId, pt: Point) -> Vec<Action> {
        if !self.config.editable || !self.input.is_tracking_pointer(pointer) {
            return Vec::new();
        }
        self.rate_at(pt)
    }

    /// Finish the interaction and commit the current rating.
    pub fn on_pointer_up(&mut self, pointer: PointerId) -> Vec<Action> {
        self.finish(pointer, "released")
    }

    /// Cancellation commits exactly like a release.
    pub fn on_pointer_cancel(&mut self, pointer: PointerId) -> Vec<Action> {
        self.finish(pointer, "cancelled")
    }

    fn rate_at(&mut self, pt: Point) -> Vec<Action> {
        let rating = compute_rating(pt, self.layout.icons(), &self.config);
        let mut actions = Vec::with_capacity(2);
        if rating != self.rating {
            self.rating = rating;
            actions.push(Action::RenderNeeded);
        }
        actions.push(Action::Updating(self.rating));
        actions
    }

    fn finish(&mut self, pointer: PointerId, how: &str) -> Vec<Action> {
        if !self.input.is_tracking_pointer(pointer) {
            return Vec::new();
        }
        self.input = InputState::Idle;
        tracing::debug!(pointer = pointer.0, rating = self.rating, how, "rating committed");
        vec![Action::Committed(self.rating)]
    }

    /// Re-plan the layout if any of its inputs changed. Returns whether the
    /// geometry is different from before.
    fn relayout(&mut self) -> bool {
        let Some(icon_aspect) = self.icon_size.and_then(Size::aspect_ratio) else {
            let had_icons = !self.layout.icons().is_empty();
            self.layout.clear();
            return had_icons;
        };
        let key = LayoutKey {
            container: self.container,
            icon_count: self.config.icon_count(),
            min_icon_size: self.config.min_icon_size,
            icon_aspect,
        };
        let changed = self.layout.key() != Some(key);
        self.layout.get_or_compute(key);
        changed
    }

    // --- Queries ---

    #[must_use]
    pub fn rating(&self) -> f64 {
        self.rating
    }

    #[must_use]
    pub fn config(&self) -> &RatingConfig {
        &self.config
    }

    #[must_use]
    pub fn input(&self) -> InputState {
        self.input
    }

    #[must_use]
    pub fn is_tracking(&self) -> bool {
        self.input.is_tracking()
    }

    #[must_use]
    pub fn container_size(&self) -> Size {
        self.container
    }

    #[must_use]
    pub fn icon_size(&self) -> Option<Size> {
        self.icon_size
    }

    /// Current icon frames (empty until an icon size is set).
    #[must_use]
    pub fn icons(&self) -> &[IconGeometry] {
        self.layout.icons()
    }

    /// Fill fraction per icon at the current rating.
    #[must_use]
    pub fn fill_fractions(&self) -> Vec<f64> {
        compute_fill_fractions(self.rating, self.config.icon_count())
    }

    /// Draw instructions per laid-out icon at the current rating.
    #[must_use]
    pub fn visuals(&self) -> Vec<IconVisual> {
        icon_visuals(self.layout.icons(), self.rating)
    }
}
