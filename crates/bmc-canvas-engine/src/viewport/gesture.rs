//! Pan/pinch gesture tracking as an explicit state machine.
//!
//! [`GestureState::transition`] decides which gesture is active after an
//! input event; [`GestureState::transform_for`] computes the transform a
//! move event produces under the active gesture. Both are pure: the
//! controller owns the current state and transform and feeds them in.

use bmc_canvas_config::ScaleRange;
use kurbo::Point;

use super::transform::{Transform, pinch_center, pinch_distance, zoom_to};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Auxiliary,
}

/// Input delivered by the host, in viewport-relative coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    PointerDown {
        button: PointerButton,
        position: Point,
    },
    PointerMove {
        position: Point,
    },
    PointerUp,
    /// `touches` lists every finger currently on the surface
    TouchStart {
        touches: Vec<Point>,
    },
    TouchMove {
        touches: Vec<Point>,
    },
    /// `remaining` lists the fingers still down after the lift
    TouchEnd {
        remaining: Vec<Point>,
    },
    Wheel {
        delta_y: f64,
        position: Point,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum GestureState {
    #[default]
    Idle,
    Panning {
        anchor_pointer: Point,
        transform_at_start: Transform,
    },
    Pinching {
        initial_distance: f64,
        initial_scale: f64,
        transform_at_start: Transform,
    },
}

impl GestureState {
    /// State after `event`, given the transform current when it arrived.
    #[must_use]
    pub fn transition(self, event: &InputEvent, current: Transform) -> Self {
        match event {
            InputEvent::PointerDown {
                button: PointerButton::Primary,
                position,
            } if !self.is_pinching() => Self::Panning {
                anchor_pointer: *position,
                transform_at_start: current,
            },
            InputEvent::PointerUp if self.is_panning() => Self::Idle,
            InputEvent::TouchStart { touches } => match touches.as_slice() {
                [only] => Self::Panning {
                    anchor_pointer: *only,
                    transform_at_start: current,
                },
                [a, b] => Self::Pinching {
                    initial_distance: pinch_distance(*a, *b),
                    initial_scale: current.scale,
                    transform_at_start: current,
                },
                _ => self,
            },
            InputEvent::TouchEnd { remaining } if remaining.len() < 2 => Self::Idle,
            _ => self,
        }
    }

    /// Transform produced by a move event under this gesture, if any.
    ///
    /// Pinch updates are computed from the state captured at pinch start
    /// rather than the previous frame, so long pinches do not drift.
    pub fn transform_for(&self, event: &InputEvent, pinch_bounds: ScaleRange) -> Option<Transform> {
        match (self, event) {
            (
                Self::Panning {
                    anchor_pointer,
                    transform_at_start,
                },
                InputEvent::PointerMove { position },
            ) => Some(transform_at_start.translated(*position - *anchor_pointer)),
            (
                Self::Panning {
                    anchor_pointer,
                    transform_at_start,
                },
                InputEvent::TouchMove { touches },
            ) if touches.len() == 1 => {
                Some(transform_at_start.translated(touches[0] - *anchor_pointer))
            }
            (
                Self::Pinching {
                    initial_distance,
                    initial_scale,
                    transform_at_start,
                },
                InputEvent::TouchMove { touches },
            ) if touches.len() == 2 => {
                if *initial_distance <= 0.0 {
                    return None;
                }
                let ratio = pinch_distance(touches[0], touches[1]) / initial_distance;
                let new_scale = pinch_bounds.clamp(initial_scale * ratio);
                let center = pinch_center(touches[0], touches[1]);
                Some(zoom_to(*transform_at_start, center, new_scale))
            }
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    pub fn is_pinching(&self) -> bool {
        matches!(self, Self::Pinching { .. })
    }
}
