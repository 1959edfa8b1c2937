//! Static interaction zones: hiding spots, power-ups, entrance and exit
//!
//! All interactions are proximity checks against the player's center.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::entity::Player;
use crate::consts::*;

/// A place the player can duck into
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HidingSpot {
    pub pos: Vec2,
    /// Visual size only; the interaction range is [`HIDE_RANGE`]
    pub size: f32,
}

impl HidingSpot {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            size: HIDING_SPOT_SIZE,
        }
    }
}

/// Power-up types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerUpKind {
    /// Doubles player speed
    Speed,
    /// Immune to capture
    Berserk,
    /// Pursuers stop chasing
    Disguise,
}

impl PowerUpKind {
    /// HUD display name
    pub fn display_name(&self) -> &'static str {
        match self {
            PowerUpKind::Speed => "Speed Boost",
            PowerUpKind::Berserk => "Berserk Strike",
            PowerUpKind::Disguise => "Pursuer Disguise",
        }
    }
}

/// A one-shot pickup lying in the world
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PowerUp {
    pub id: u32,
    pub kind: PowerUpKind,
    pub pos: Vec2,
    /// Visual radius; the pickup range is [`PICKUP_RANGE`]
    pub radius: f32,
}

impl PowerUp {
    pub fn new(id: u32, kind: PowerUpKind, pos: Vec2) -> Self {
        Self {
            id,
            kind,
            pos,
            radius: POWER_UP_RADIUS,
        }
    }
}

/// Entrance or exit marker
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Marker {
    pub pos: Vec2,
    pub radius: f32,
}

/// Toggle hiding, returning the new hidden state
///
/// Near any spot the state flips. Away from every spot the player always
/// ends up visible, even if they were hidden before.
pub fn try_toggle_hide(player: &mut Player, spots: &[HidingSpot]) -> bool {
    let near_spot = spots
        .iter()
        .any(|spot| player.pos().distance(spot.pos) < HIDE_RANGE);

    player.hidden = near_spot && !player.hidden;
    player.hidden
}

/// Take at most one power-up in range, scanning newest first
///
/// The taken power-up is removed from `power_ups` for good.
pub fn try_pickup(player: &Player, power_ups: &mut Vec<PowerUp>) -> Option<PowerUp> {
    let index = power_ups
        .iter()
        .rposition(|p| player.pos().distance(p.pos) < PICKUP_RANGE)?;
    Some(power_ups.remove(index))
}
