use bmc_canvas_config::{ModeConfig, ViewportConfig};
use kurbo::{Point, Size};

use super::gesture::{GestureState, InputEvent};
use super::transform::{Transform, anchored_zoom, fit_scale};

/// Layout mode chosen from the viewport width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Desktop,
    Compact,
}

/// Owns the canvas transform and the active gesture.
///
/// The controller is the only writer of the transform. All operations run
/// to completion synchronously; the host must deliver input events in the
/// order it received them.
#[derive(Debug, Clone)]
pub struct ViewportController {
    config: ViewportConfig,
    mode: ViewMode,
    transform: Transform,
    gesture: GestureState,
    viewport: Size,
    content: Size,
}

impl ViewportController {
    /// Create a controller for a viewport `viewport_width` wide, starting
    /// at that mode's default transform.
    pub fn new(config: ViewportConfig, viewport_width: f64) -> Self {
        let mode = Self::mode_for(&config, viewport_width);
        let transform = Self::mode_config(&config, mode).default_view.into();
        Self {
            config,
            mode,
            transform,
            gesture: GestureState::Idle,
            viewport: Size::ZERO,
            content: Size::ZERO,
        }
    }

    fn mode_for(config: &ViewportConfig, width: f64) -> ViewMode {
        if width <= config.breakpoint {
            ViewMode::Compact
        } else {
            ViewMode::Desktop
        }
    }

    fn mode_config(config: &ViewportConfig, mode: ViewMode) -> &ModeConfig {
        match mode {
            ViewMode::Desktop => &config.desktop,
            ViewMode::Compact => &config.compact,
        }
    }

    fn constants(&self) -> &ModeConfig {
        Self::mode_config(&self.config, self.mode)
    }

    pub fn transform(&self) -> Transform {
        self.transform
    }

    pub fn gesture(&self) -> GestureState {
        self.gesture
    }

    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    pub fn viewport_size(&self) -> Size {
        self.viewport
    }

    /// Record the measured size of the rendered canvas content
    pub fn set_content_size(&mut self, size: Size) {
        self.content = size;
    }

    /// Record a new viewport size.
    ///
    /// Crossing the compact breakpoint switches mode, which snaps the
    /// transform to the new mode's default and abandons any gesture.
    pub fn resize(&mut self, size: Size) {
        self.viewport = size;
        let mode = Self::mode_for(&self.config, size.width);
        if mode != self.mode {
            log::debug!("viewport mode {:?} -> {:?}", self.mode, mode);
            self.mode = mode;
            self.gesture = GestureState::Idle;
            self.reset();
        }
    }

    /// Feed one input event through the gesture machine.
    pub fn handle(&mut self, event: &InputEvent) {
        if let InputEvent::Wheel { delta_y, position } = event {
            self.wheel(*delta_y, *position);
            return;
        }
        if let Some(next) = self
            .gesture
            .transform_for(event, self.constants().pinch_bounds)
        {
            self.transform = next;
        }
        self.gesture = self.gesture.transition(event, self.transform);
    }

    /// Zoom proportionally to a scroll delta, anchored at the cursor.
    pub fn wheel(&mut self, delta_y: f64, cursor: Point) {
        let constants = self.constants();
        let multiplier = 1.0 - delta_y * constants.wheel_sensitivity;
        let bounds = constants.wheel_bounds;
        self.transform = anchored_zoom(self.transform, cursor, multiplier, bounds);
    }

    pub fn zoom_in(&mut self) {
        self.step_zoom(self.constants().button_step);
    }

    pub fn zoom_out(&mut self) {
        self.step_zoom(1.0 / self.constants().button_step);
    }

    fn step_zoom(&mut self, multiplier: f64) {
        let center = Point::new(self.viewport.width / 2.0, self.viewport.height / 2.0);
        let bounds = self.constants().button_bounds;
        self.transform = anchored_zoom(self.transform, center, multiplier, bounds);
    }

    /// Scale and center the content inside the viewport.
    ///
    /// Does nothing until both the content and the viewport have been
    /// measured with a non-zero area, or when the viewport leaves no room
    /// inside the fit padding.
    pub fn fit_to_view(&mut self) {
        let (content, viewport) = (self.content, self.viewport);
        if content.is_zero_area() || viewport.is_zero_area() {
            log::debug!("fit-to-view skipped: content {content:?}, viewport {viewport:?}");
            return;
        }
        let constants = self.constants();
        let scale = fit_scale(
            content,
            viewport,
            constants.fit_padding,
            constants.fit_max_scale,
        );
        if scale <= 0.0 {
            log::debug!("fit-to-view skipped: no room inside padding of {viewport:?}");
            return;
        }
        self.transform = Transform {
            x: (viewport.width - content.width * scale) / 2.0,
            y: (viewport.height - content.height * scale) / 2.0,
            scale,
        };
    }

    /// Return to the current mode's default transform
    pub fn reset(&mut self) {
        self.transform = self.constants().default_view.into();
    }
}
