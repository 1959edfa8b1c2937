//! Movable entities: the player and the pursuers
//!
//! Both share a [`Body`] (position, footprint, speed) that always stays inside
//! the world bounds. Pursuer AI keeps no memory between ticks: the chase
//! velocity is a pure function of the two current positions.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geometry::{Rect, circle_overlaps_rect, resolve_circle_rect};
use crate::clamp_to_world;
use crate::consts::*;

/// Shared movable state
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pub pos: Vec2,
    /// Collision footprint
    pub radius: f32,
    /// World units per tick
    pub speed: f32,
}

impl Body {
    pub fn new(pos: Vec2, radius: f32, speed: f32) -> Self {
        Self { pos, radius, speed }
    }

    /// Move by `velocity`, then clamp back into the world
    #[inline]
    pub fn translate(&mut self, velocity: Vec2) {
        self.pos = clamp_to_world(self.pos + velocity, self.radius);
    }
}

/// The player-controlled entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub body: Body,
    /// Frozen in a hiding spot
    pub hidden: bool,
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: Body::new(pos, PLAYER_RADIUS, PLAYER_BASE_SPEED),
            hidden: false,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    /// Apply held-direction intent (components in {-1, 0, 1})
    ///
    /// Diagonals are normalized so every move covers exactly `speed` units.
    /// Must not be called while hidden.
    pub fn update_from_intent(&mut self, intent: Vec2) {
        if intent == Vec2::ZERO {
            return;
        }
        let dir = intent.normalize();
        self.body.translate(dir * self.body.speed);
    }

    /// Resolve overlaps one obstacle at a time, in order, then clamp back
    /// into the world
    pub fn resolve_obstacles(&mut self, obstacles: &[Rect]) {
        for obstacle in obstacles {
            if circle_overlaps_rect(self.body.pos, self.body.radius, obstacle) {
                self.body.pos = resolve_circle_rect(self.body.pos, self.body.radius, obstacle);
            }
        }
        self.body.pos = clamp_to_world(self.body.pos, self.body.radius);
    }
}

/// An enemy that walks straight at the player, faster when close
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pursuer {
    pub id: u32,
    /// `body.speed` holds the speed chosen on the last update
    pub body: Body,
    pub normal_speed: f32,
    pub chase_speed: f32,
    pub detection_radius: f32,
}

impl Pursuer {
    pub fn new(id: u32, pos: Vec2) -> Self {
        Self {
            id,
            body: Body::new(pos, PURSUER_RADIUS, PURSUER_NORMAL_SPEED),
            normal_speed: PURSUER_NORMAL_SPEED,
            chase_speed: PURSUER_CHASE_SPEED,
            detection_radius: PURSUER_DETECTION_RADIUS,
        }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.body.pos
    }

    /// Speed for a target at `dist` (strictly inside the radius => chase)
    #[inline]
    pub fn speed_at(&self, dist: f32) -> f32 {
        if dist < self.detection_radius {
            self.chase_speed
        } else {
            self.normal_speed
        }
    }

    /// Step toward the target and clamp into the world
    pub fn update(&mut self, target: Vec2) {
        self.body.speed = self.speed_at(self.body.pos.distance(target));
        let velocity = pursuer_velocity(self, target);
        self.body.translate(velocity);
    }
}

/// Velocity a pursuer takes this tick toward `target`
///
/// Straight line, no pathfinding or line of sight. A pursuer already on top
/// of its target does not move.
pub fn pursuer_velocity(pursuer: &Pursuer, target: Vec2) -> Vec2 {
    let delta = target - pursuer.body.pos;
    let dist = delta.length();
    if dist > 0.0 {
        delta / dist * pursuer.speed_at(dist)
    } else {
        Vec2::ZERO
    }
}
