//! Infinite-canvas viewport: a translate + uniform-scale transform driven by
//! mouse drag, wheel zoom, touch pan, two-finger pinch and the fit/reset
//! commands.
//!
//! - **`transform`**: the `Transform` value and pure anchored-zoom math
//! - **`gesture`**: input events and the `Idle | Panning | Pinching` machine
//! - **`controller`**: `ViewportController`, the single writer of the transform

pub mod controller;
pub mod gesture;
pub mod transform;

pub use controller::{ViewMode, ViewportController};
pub use gesture::{GestureState, InputEvent, PointerButton};
pub use transform::{Transform, anchored_zoom, fit_scale, pinch_center, pinch_distance, zoom_to};
