//! Input model: pointer identity and the tracking state machine.
//!
//! The control is `Idle` until a pointer goes down, then `Tracking` that one
//! pointer until it is released or cancelled. Other pointers that touch the
//! control while it is tracking are ignored.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

/// Host-assigned identifier for a pointer (mouse, pen, or one touch).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointerId(pub u64);

/// State of the pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputState {
    /// No pointer engaged.
    #[default]
    Idle,
    /// A pointer is down and driving live updates.
    Tracking {
        /// The pointer that started the interaction.
        pointer: PointerId,
    },
}

impl InputState {
    /// Whether a pointer interaction is in progress.
    #[must_use]
    pub fn is_tracking(self) -> bool {
        matches!(self, Self::Tracking { .. })
    }

    /// Whether `pointer` is the one being tracked.
    #[must_use]
    pub fn is_tracking_pointer(self, pointer: PointerId) -> bool {
        self == Self::Tracking { pointer }
    }
}
