//! Timed power-up effects
//!
//! Only one effect runs at a time. A new pickup replaces whatever is active
//! and restarts the countdown; nothing stacks.

use serde::{Deserialize, Serialize};

use super::entity::Player;
use super::zones::PowerUpKind;
use crate::consts::*;

/// The currently active power-up effect, if any
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActiveEffects {
    pub kind: Option<PowerUpKind>,
    pub remaining_ticks: u32,
}

impl ActiveEffects {
    /// Start `kind`, replacing any active effect
    ///
    /// Only Speed touches the player's speed. Replacing Speed with another
    /// kind leaves the boost in place until the new effect runs out.
    pub fn activate(&mut self, kind: PowerUpKind, player: &mut Player) {
        self.kind = Some(kind);
        self.remaining_ticks = EFFECT_DURATION_TICKS;

        match kind {
            PowerUpKind::Speed => player.body.speed = PLAYER_BOOSTED_SPEED,
            PowerUpKind::Berserk | PowerUpKind::Disguise => {}
        }
    }

    /// Count down one tick, returning the kind that just expired
    ///
    /// Expiry always resets the player to base speed.
    pub fn tick(&mut self, player: &mut Player) -> Option<PowerUpKind> {
        if self.remaining_ticks == 0 {
            return None;
        }
        self.remaining_ticks -= 1;
        if self.remaining_ticks > 0 {
            return None;
        }

        player.body.speed = PLAYER_BASE_SPEED;
        self.kind.take()
    }

    #[inline]
    pub fn is_active(&self, kind: PowerUpKind) -> bool {
        self.kind == Some(kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn player() -> Player {
        Player::new(Vec2::new(500.0, 500.0))
    }

    #[test]
    fn test_speed_effect_full_countdown() {
        let mut player = player();
        let mut effects = ActiveEffects::default();
        effects.activate(PowerUpKind::Speed, &mut player);
        assert_eq!(effects.remaining_ticks, 300);
        assert_eq!(player.body.speed, PLAYER_BOOSTED_SPEED);

        for _ in 0..299 {
            assert_eq!(effects.tick(&mut player), None);
            assert!(effects.is_active(PowerUpKind::Speed));
            assert_eq!(player.body.speed, PLAYER_BOOSTED_SPEED);
        }
        assert_eq!(effects.remaining_ticks, 1);

        assert_eq!(effects.tick(&mut player), Some(PowerUpKind::Speed));
        assert_eq!(effects.remaining_ticks, 0);
        assert_eq!(effects.kind, None);
        assert_eq!(player.body.speed, PLAYER_BASE_SPEED);

        // Idle once expired
        assert_eq!(effects.tick(&mut player), None);
        assert_eq!(effects.remaining_ticks, 0);
    }

    #[test]
    fn test_activation_replaces_and_resets() {
        let mut player = player();
        let mut effects = ActiveEffects::default();
        effects.activate(PowerUpKind::Disguise, &mut player);
        for _ in 0..120 {
            effects.tick(&mut player);
        }
        assert_eq!(effects.remaining_ticks, 180);

        effects.activate(PowerUpKind::Berserk, &mut player);
        assert_eq!(effects.kind, Some(PowerUpKind::Berserk));
        assert_eq!(effects.remaining_ticks, 300);
        assert!(!effects.is_active(PowerUpKind::Disguise));
    }

    #[test]
    fn test_replacing_speed_keeps_boost_until_expiry() {
        let mut player = player();
        let mut effects = ActiveEffects::default();
        effects.activate(PowerUpKind::Speed, &mut player);
        effects.activate(PowerUpKind::Berserk, &mut player);
        assert_eq!(player.body.speed, PLAYER_BOOSTED_SPEED);

        for _ in 0..300 {
            effects.tick(&mut player);
        }
        assert_eq!(effects.kind, None);
        assert_eq!(player.body.speed, PLAYER_BASE_SPEED);
    }

    #[test]
    fn test_berserk_expiry_resets_speed() {
        let mut player = player();
        let mut effects = ActiveEffects::default();
        effects.activate(PowerUpKind::Berserk, &mut player);
        player.body.speed = 42.0;
        for _ in 0..300 {
            effects.tick(&mut player);
        }
        assert_eq!(player.body.speed, PLAYER_BASE_SPEED);
    }
}
