//! Fixed timestep simulation tick
//!
//! One call advances the game by one fixed step; the host decides when.

use glam::Vec2;

use super::geometry::distance;
use super::state::{GameEvent, GamePhase, GameState};
use super::zones::PowerUpKind;
use crate::consts::*;

/// Input commands for a single tick, captured once at tick start
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TickInput {
    /// Held directions, each component in {-1, 0, 1}
    pub direction: Vec2,
    /// Hide/unhide (one-shot, key-press edge)
    pub toggle_hide: bool,
    /// Grab a nearby power-up (one-shot, key-press edge)
    pub pickup: bool,
}

/// Advance the game state by one fixed tick
///
/// Order: one-shot interactions, effect countdown, player motion and obstacle
/// push-out, pursuers, capture, exit. Capture is checked before the exit, so
/// it wins if both happen on the same tick.
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    if input.toggle_hide {
        state.try_toggle_hide();
    }
    if input.pickup {
        state.try_pickup();
    }

    if let Some(kind) = state.effects.tick(&mut state.player) {
        log::debug!("{:?} effect expired", kind);
        state.events.push(GameEvent::EffectExpired { kind });
    }

    let hidden = state.player.hidden;

    if !hidden {
        state.player.update_from_intent(input.direction);
        state.player.resolve_obstacles(&state.obstacles);
    }

    let target = state.player.pos();

    if !hidden && !state.effects.is_active(PowerUpKind::Disguise) {
        for pursuer in &mut state.pursuers {
            pursuer.update(target);
        }
    }

    if !hidden && !state.effects.is_active(PowerUpKind::Berserk) {
        let captor = state
            .pursuers
            .iter()
            .find(|p| distance(p.pos(), target) < CAPTURE_RANGE)
            .map(|p| p.id);
        if let Some(pursuer_id) = captor {
            state.lose(pursuer_id);
            return;
        }
    }

    if distance(target, state.exit.pos) < EXIT_RANGE {
        state.win();
    }
}
