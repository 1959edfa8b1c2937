//! Collision detection and response for circles against axis-aligned rectangles
//!
//! Physics is deliberately simple: the broad test uses the circle's bounding
//! square, and the response is a single minimum-translation push out of the
//! nearest point on the rectangle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// A static axis-aligned rectangle (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    #[inline]
    pub fn half_extents(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Result of a circle/rectangle contact query
#[derive(Debug, Clone)]
pub struct CollisionResult {
    /// Whether the circle penetrates the rectangle
    pub hit: bool,
    /// Nearest point on the rectangle to the circle center
    pub point: Vec2,
    /// Push direction (unit length when hit)
    pub normal: Vec2,
    /// How far to push along `normal` to separate
    pub penetration: f32,
}

impl CollisionResult {
    pub fn miss() -> Self {
        Self {
            hit: false,
            point: Vec2::ZERO,
            normal: Vec2::ZERO,
            penetration: 0.0,
        }
    }
}

/// Euclidean distance between two points
#[inline]
pub fn distance(a: Vec2, b: Vec2) -> f32 {
    a.distance(b)
}

/// Bounding-square overlap test between a circle and a rectangle
///
/// Not exact circle geometry: a circle just off a rectangle corner still
/// reports an overlap. The push-out in [`resolve_circle_rect`] sorts that out.
pub fn circle_overlaps_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    center.x - radius < rect.x + rect.width
        && center.x + radius > rect.x
        && center.y - radius < rect.y + rect.height
        && center.y + radius > rect.y
}

/// Find the push needed to move a circle out of a rectangle
///
/// The nearest point is found by clamping the center-to-center offset to the
/// rectangle's half extents. A circle whose center sits inside the rectangle
/// has no separation vector and gets pushed along +x by its full radius.
pub fn circle_rect_contact(center: Vec2, radius: f32, rect: &Rect) -> CollisionResult {
    let rect_center = rect.center();
    let half = rect.half_extents();

    let offset = center - rect_center;
    let closest = offset.clamp(-half, half);
    let separation = offset - closest;
    let dist = separation.length();

    if dist >= radius {
        return CollisionResult::miss();
    }

    let normal = if dist > 0.0 { separation / dist } else { Vec2::X };

    CollisionResult {
        hit: true,
        point: rect_center + closest,
        normal,
        penetration: radius - dist,
    }
}

/// Push a circle out of a rectangle, returning the corrected center
///
/// Idempotent: a circle that no longer penetrates is returned unchanged.
pub fn resolve_circle_rect(center: Vec2, radius: f32, rect: &Rect) -> Vec2 {
    let contact = circle_rect_contact(center, radius, rect);
    if contact.hit {
        center + contact.normal * contact.penetration
    } else {
        center
    }
}
