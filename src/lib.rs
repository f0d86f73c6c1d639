//! Rating control engine: a row of icons (stars, hearts, ...) that shows a
//! numeric rating and lets the user set it by tapping or dragging.
//!
//! The crate holds everything that is not drawing: mapping a pointer position
//! to a rating under whole, half, or continuous granularity, laying out the
//! icons inside the control's bounds, deriving each icon's partial fill, and
//! tracking the pointer interaction that produces live and committed ratings.
//! The host toolkit is responsible only for forwarding bounds and pointer
//! events and for acting on the returned [`control::Action`]s.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`control`] | [`control::RatingControl`], actions, and the delegate trait |
//! | [`engine`] | Pointer-to-rating mapping and fill fractions |
//! | [`layout`] | Icon sizing, spacing, and the memoized layout cache |
//! | [`render`] | Per-icon draw instructions (full, clipped, hidden) |
//! | [`config`] | Bounds, granularity, editability, JSON loading |
//! | [`input`] | Pointer ids and the Idle/Tracking state machine |
//! | [`geom`] | `Point`, `Size`, `Rect` |
//! | [`consts`] | Defaults and half-step thresholds |

pub mod config;
pub mod consts;
pub mod control;
pub mod engine;
pub mod geom;
pub mod input;
pub mod layout;
pub mod render;

pub use config::{ConfigError, Granularity, RatingConfig};
pub use control::{Action, RatingControl, RatingDelegate, dispatch_all};
pub use input::PointerId;
