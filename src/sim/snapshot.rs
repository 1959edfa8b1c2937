//! Read-only view of the simulation for the renderer and HUD
//!
//! Built after each tick by copying what the collaborators need, so nothing
//! outside the simulation ever holds a mutable borrow of [`GameState`].

use glam::Vec2;
use serde::Serialize;

use super::geometry::Rect;
use super::state::{GamePhase, GameState, Outcome};
use super::zones::{Marker, PowerUpKind};
use crate::ticks_to_whole_seconds;

#[derive(Debug, Clone, Serialize)]
pub struct CircleView {
    pub pos: Vec2,
    pub radius: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct PowerUpView {
    pub pos: Vec2,
    pub radius: f32,
    pub kind: PowerUpKind,
}

#[derive(Debug, Clone, Serialize)]
pub struct HidingSpotView {
    pub pos: Vec2,
    pub size: f32,
}

/// Active effect banner
#[derive(Debug, Clone, Serialize)]
pub struct EffectHud {
    pub kind: PowerUpKind,
    /// Whole seconds left, rounded up
    pub seconds_left: u32,
}

impl EffectHud {
    pub fn banner(&self) -> String {
        format!("Active: {} ({}s)", self.kind.display_name(), self.seconds_left)
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, Serialize)]
pub struct RenderSnapshot {
    pub phase: GamePhase,
    pub player: CircleView,
    pub player_hidden: bool,
    /// Hidden players are not drawn unless disguised
    pub player_visible: bool,
    /// Disguised (and not hidden) players do not see the pursuers
    pub pursuers_visible: bool,
    pub pursuers: Vec<CircleView>,
    pub obstacles: Vec<Rect>,
    pub hiding_spots: Vec<HidingSpotView>,
    pub power_ups: Vec<PowerUpView>,
    pub entrance: Marker,
    pub exit: Marker,
    pub effect: Option<EffectHud>,
    pub outcome: Option<Outcome>,
}

impl RenderSnapshot {
    pub fn capture(state: &GameState) -> Self {
        let hidden = state.player.hidden;
        let disguised = state.effects.is_active(PowerUpKind::Disguise);

        Self {
            phase: state.phase,
            player: CircleView {
                pos: state.player.pos(),
                radius: state.player.body.radius,
            },
            player_hidden: hidden,
            player_visible: !hidden || disguised,
            pursuers_visible: !disguised || hidden,
            pursuers: state
                .pursuers
                .iter()
                .map(|p| CircleView {
                    pos: p.pos(),
                    radius: p.body.radius,
                })
                .collect(),
            obstacles: state.obstacles.clone(),
            hiding_spots: state
                .hiding_spots
                .iter()
                .map(|s| HidingSpotView {
                    pos: s.pos,
                    size: s.size,
                })
                .collect(),
            power_ups: state
                .power_ups
                .iter()
                .map(|p| PowerUpView {
                    pos: p.pos,
                    radius: p.radius,
                    kind: p.kind,
                })
                .collect(),
            entrance: state.entrance,
            exit: state.exit,
            effect: state.effects.kind.map(|kind| EffectHud {
                kind,
                seconds_left: ticks_to_whole_seconds(state.effects.remaining_ticks),
            }),
            outcome: state.outcome.clone(),
        }
    }

    /// Status line text
    pub fn status_text(&self) -> &'static str {
        self.phase.status_label()
    }

    /// JSON form for out-of-process renderers
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::tick::{TickInput, tick};

    #[test]
    fn test_capture_initial() {
        let state = GameState::new(3);
        let snap = RenderSnapshot::capture(&state);
        assert_eq!(snap.phase, GamePhase::Playing);
        assert_eq!(snap.status_text(), "Playing");
        assert_eq!(snap.player.pos, state.entrance.pos);
        assert_eq!(snap.pursuers.len(), 2);
        assert_eq!(snap.power_ups.len(), 3);
        assert_eq!(snap.obstacles.len(), 4);
        assert!(snap.player_visible);
        assert!(snap.pursuers_visible);
        assert!(snap.effect.is_none());
        assert!(snap.outcome.is_none());
    }

    #[test]
    fn test_effect_countdown_rounds_up() {
        let mut state = GameState::new(3);
        state.effects.activate(PowerUpKind::Berserk, &mut state.player);
        tick(&mut state, &TickInput::default());

        let hud = RenderSnapshot::capture(&state).effect.unwrap();
        assert_eq!(hud.kind, PowerUpKind::Berserk);
        assert_eq!(hud.seconds_left, 5);
        assert_eq!(hud.banner(), "Active: Berserk Strike (5s)");

        for _ in 0..60 {
            tick(&mut state, &TickInput::default());
        }
        let hud = RenderSnapshot::capture(&state).effect.unwrap();
        assert_eq!(hud.seconds_left, 4);
    }

    #[test]
    fn test_visibility_rules() {
        let mut state = GameState::new(3);

        state.player.hidden = true;
        let snap = RenderSnapshot::capture(&state);
        assert!(!snap.player_visible);
        assert!(snap.pursuers_visible);

        state.effects.activate(PowerUpKind::Disguise, &mut state.player);
        let snap = RenderSnapshot::capture(&state);
        assert!(snap.player_visible);
        assert!(snap.pursuers_visible);

        state.player.hidden = false;
        let snap = RenderSnapshot::capture(&state);
        assert!(snap.player_visible);
        assert!(!snap.pursuers_visible);
    }

    #[test]
    fn test_to_json() {
        let state = GameState::new(3);
        let json = RenderSnapshot::capture(&state).to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["phase"], "Playing");
        assert_eq!(value["power_ups"].as_array().map(Vec::len), Some(3));
        assert_eq!(value["power_ups"][0]["kind"], "Berserk");
    }
}
