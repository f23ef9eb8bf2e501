use bmc_canvas_config::{DefaultView, ScaleRange};
use kurbo::{Affine, Point, Size, Vec2};

/// Screen-space placement of the canvas: translate, then uniform scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub x: f64,
    pub y: f64,
    pub scale: f64,
}

impl Transform {
    pub const fn new(x: f64, y: f64, scale: f64) -> Self {
        Self { x, y, scale }
    }

    pub fn translation(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    #[must_use]
    pub fn translated(self, delta: Vec2) -> Self {
        Self {
            x: self.x + delta.x,
            y: self.y + delta.y,
            ..self
        }
    }

    /// World → screen affine for the presentation layer
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translation()) * Affine::scale(self.scale)
    }

    pub fn world_to_screen(&self, world: Point) -> Point {
        Point::new(world.x * self.scale + self.x, world.y * self.scale + self.y)
    }

    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.x) / self.scale,
            (screen.y - self.y) / self.scale,
        )
    }
}

impl From<DefaultView> for Transform {
    fn from(view: DefaultView) -> Self {
        Self::new(view.x, view.y, view.scale)
    }
}

/// Rescale `transform` to exactly `new_scale`, keeping `focal` fixed on screen.
///
/// A transform without a positive scale has no anchor to keep and is
/// returned unchanged.
pub fn zoom_to(transform: Transform, focal: Point, new_scale: f64) -> Transform {
    if transform.scale <= 0.0 {
        return transform;
    }
    let ratio = new_scale / transform.scale;
    Transform {
        x: focal.x - (focal.x - transform.x) * ratio,
        y: focal.y - (focal.y - transform.y) * ratio,
        scale: new_scale,
    }
}

/// Multiply the scale by `multiplier` (clamped to `bounds`) around `focal`.
///
/// The world point under `focal` stays under `focal`.
pub fn anchored_zoom(
    transform: Transform,
    focal: Point,
    multiplier: f64,
    bounds: ScaleRange,
) -> Transform {
    let new_scale = bounds.clamp(transform.scale * multiplier);
    zoom_to(transform, focal, new_scale)
}

pub fn pinch_distance(a: Point, b: Point) -> f64 {
    a.distance(b)
}

pub fn pinch_center(a: Point, b: Point) -> Point {
    a.midpoint(b)
}

/// Largest scale that fits `content` inside `viewport` with `padding` on
/// every side, capped at `max_scale` and never negative.
///
/// `content` must have a non-zero area.
pub fn fit_scale(content: Size, viewport: Size, padding: f64, max_scale: f64) -> f64 {
    let scale_x = (viewport.width - 2.0 * padding) / content.width;
    let scale_y = (viewport.height - 2.0 * padding) / content.height;
    scale_x.min(scale_y).min(max_scale).max(0.0)
}
