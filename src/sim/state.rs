//! Game state and the fixed level layout
//!
//! Everything a game session owns lives in [`GameState`]. Restarting builds a
//! fresh state from the same layout; nothing carries over.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::effects::ActiveEffects;
use super::entity::{Player, Pursuer};
use super::geometry::Rect;
use super::zones::{self, HidingSpot, Marker, PowerUp, PowerUpKind};
use crate::consts::*;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    Playing,
    /// Reached the exit
    Won,
    /// Caught by a pursuer
    Lost,
}

impl GamePhase {
    /// Status line text
    pub fn status_label(&self) -> &'static str {
        match self {
            GamePhase::Playing => "Playing",
            GamePhase::Won => "Victory!",
            GamePhase::Lost => "Defeat",
        }
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// Things that happened during a tick, for UI/audio collaborators
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    HideToggled { hidden: bool },
    PowerUpCollected { kind: PowerUpKind },
    EffectExpired { kind: PowerUpKind },
    Captured { pursuer_id: u32 },
    Escaped,
}

/// Title and message shown when the game ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub title: String,
    pub message: String,
}

pub const LOSS_TITLE: &str = "Game Over";
pub const LOSS_MESSAGE: &str = "Delivery failed, please pay the fine";
pub const WIN_TITLE: &str = "Run Complete";
pub const FORTUNE_PREFIX: &str = "Today's fortune: ";

/// Flavor messages, one picked at random on every win
pub const FORTUNES: [&str; 15] = [
    "Wealth flows your way, a good day for investing",
    "Romance is in the air, singles may meet someone special",
    "Your career is rising, a mentor will lend a hand",
    "Health is strong, a fine time to start a new exercise plan",
    "Study luck is good, a fine day to learn something new",
    "Friendships are harmonious, friends will bring a pleasant surprise",
    "Creative inspiration abounds, a good day for making art",
    "Travel luck is good, plan a short trip",
    "Your words carry weight, a good day for important negotiations",
    "Spirits are high, spend time with family and friends",
    "Money luck is decent, an unexpected windfall may arrive",
    "Work goes smoothly and projects move forward",
    "Love is sweet, you and your partner grow closer",
    "No health worries, your body is in good shape",
    "Opportunity knocks, seize it and succeed",
];

/// RNG state wrapper for serialization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngState {
    pub seed: u64,
}

impl RngState {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// RNG for a draw made on `tick`
    pub fn rng_at(&self, tick: u64) -> Pcg32 {
        Pcg32::seed_from_u64(self.seed ^ tick.wrapping_mul(0x9E37_79B9_7F4A_7C15))
    }
}

/// Scale a point authored on the 800x600 grid into world space
#[inline]
fn layout(x: f32, y: f32) -> Vec2 {
    Vec2::new(x * LAYOUT_SCALE_X, y * LAYOUT_SCALE_Y)
}

#[inline]
fn layout_rect(x: f32, y: f32, width: f32, height: f32) -> Rect {
    Rect::new(
        x * LAYOUT_SCALE_X,
        y * LAYOUT_SCALE_Y,
        width * LAYOUT_SCALE_X,
        height * LAYOUT_SCALE_Y,
    )
}

/// Complete game state for one session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub seed: u64,
    pub rng_state: RngState,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    /// Set once the game reaches a terminal phase
    pub outcome: Option<Outcome>,
    pub player: Player,
    pub pursuers: Vec<Pursuer>,
    pub obstacles: Vec<Rect>,
    pub hiding_spots: Vec<HidingSpot>,
    /// Remaining power-ups (taken ones are removed)
    pub power_ups: Vec<PowerUp>,
    pub entrance: Marker,
    pub exit: Marker,
    pub effects: ActiveEffects,
    /// Events from the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a new game state in the fixed starting layout
    pub fn new(seed: u64) -> Self {
        let entrance = layout(400.0, 550.0);

        let mut state = Self {
            seed,
            rng_state: RngState::new(seed),
            time_ticks: 0,
            phase: GamePhase::Playing,
            outcome: None,
            player: Player::new(entrance),
            pursuers: Vec::new(),
            obstacles: vec![
                layout_rect(0.0, 200.0, 200.0, 20.0),
                layout_rect(150.0, 100.0, 200.0, 20.0),
                layout_rect(450.0, 250.0, 200.0, 20.0),
                layout_rect(600.0, 400.0, 200.0, 20.0),
            ],
            hiding_spots: vec![
                HidingSpot::new(layout(150.0, 450.0)),
                HidingSpot::new(layout(400.0, 150.0)),
            ],
            power_ups: Vec::new(),
            entrance: Marker {
                pos: entrance,
                radius: MARKER_RADIUS,
            },
            exit: Marker {
                pos: layout(100.0, 100.0),
                radius: MARKER_RADIUS,
            },
            effects: ActiveEffects::default(),
            events: Vec::new(),
            next_id: 1,
        };

        for pos in [layout(650.0, 450.0), layout(650.0, 150.0)] {
            let id = state.next_entity_id();
            state.pursuers.push(Pursuer::new(id, pos));
        }

        for (kind, pos) in [
            (PowerUpKind::Berserk, layout(200.0, 300.0)),
            (PowerUpKind::Speed, layout(600.0, 500.0)),
            (PowerUpKind::Disguise, layout(600.0, 100.0)),
        ] {
            let id = state.next_entity_id();
            state.power_ups.push(PowerUp::new(id, kind, pos));
        }

        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Hide/unhide interaction (ignored once the game is over)
    pub fn try_toggle_hide(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        let was_hidden = self.player.hidden;
        let hidden = zones::try_toggle_hide(&mut self.player, &self.hiding_spots);
        if hidden != was_hidden {
            log::info!("Player {}", if hidden { "hid" } else { "is visible" });
            self.events.push(GameEvent::HideToggled { hidden });
        }
    }

    /// Pickup interaction (ignored once the game is over)
    pub fn try_pickup(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        if let Some(power_up) = zones::try_pickup(&self.player, &mut self.power_ups) {
            log::info!("Picked up {:?} (id {})", power_up.kind, power_up.id);
            self.effects.activate(power_up.kind, &mut self.player);
            self.events.push(GameEvent::PowerUpCollected {
                kind: power_up.kind,
            });
        }
    }

    /// Move to `Lost` with the fixed capture message
    pub fn lose(&mut self, pursuer_id: u32) {
        log::info!("Caught by pursuer {} at tick {}", pursuer_id, self.time_ticks);
        self.phase = GamePhase::Lost;
        self.outcome = Some(Outcome {
            title: LOSS_TITLE.to_string(),
            message: LOSS_MESSAGE.to_string(),
        });
        self.events.push(GameEvent::Captured { pursuer_id });
    }

    /// Move to `Won` with a randomly drawn fortune
    pub fn win(&mut self) {
        let mut rng = self.rng_state.rng_at(self.time_ticks);
        let fortune = FORTUNES[rng.random_range(0..FORTUNES.len())];
        log::info!("Reached the exit at tick {}", self.time_ticks);
        self.phase = GamePhase::Won;
        self.outcome = Some(Outcome {
            title: WIN_TITLE.to_string(),
            message: format!("{FORTUNE_PREFIX}{fortune}"),
        });
        self.events.push(GameEvent::Escaped);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let state = GameState::new(1);
        assert_eq!(state.phase, GamePhase::Playing);
        assert!(state.outcome.is_none());
        assert_eq!(state.player.pos(), state.entrance.pos);
        assert!((state.entrance.pos.x - 621.0).abs() < 1e-3);
        assert!((state.entrance.pos.y - 2024.0).abs() < 1e-3);
        assert!((state.exit.pos.x - 155.25).abs() < 1e-3);
        assert!((state.exit.pos.y - 368.0).abs() < 1e-3);
        assert_eq!(state.pursuers.len(), 2);
        assert_eq!(state.obstacles.len(), 4);
        assert_eq!(state.hiding_spots.len(), 2);
        let kinds: Vec<_> = state.power_ups.iter().map(|p| p.kind).collect();
        assert_eq!(
            kinds,
            [PowerUpKind::Berserk, PowerUpKind::Speed, PowerUpKind::Disguise]
        );
    }

    #[test]
    fn test_entity_ids_unique() {
        let state = GameState::new(1);
        let mut ids: Vec<u32> = state
            .pursuers
            .iter()
            .map(|p| p.id)
            .chain(state.power_ups.iter().map(|p| p.id))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_lose_payload() {
        let mut state = GameState::new(1);
        state.lose(1);
        assert_eq!(state.phase, GamePhase::Lost);
        let outcome = state.outcome.as_ref().unwrap();
        assert_eq!(outcome.title, LOSS_TITLE);
        assert_eq!(outcome.message, LOSS_MESSAGE);
        assert_eq!(state.events, [GameEvent::Captured { pursuer_id: 1 }]);
    }

    #[test]
    fn test_win_draws_from_fortune_pool() {
        for seed in 0..20 {
            let mut state = GameState::new(seed);
            state.win();
            let outcome = state.outcome.as_ref().unwrap();
            assert_eq!(outcome.title, WIN_TITLE);
            let fortune = outcome.message.strip_prefix(FORTUNE_PREFIX).unwrap();
            assert!(FORTUNES.contains(&fortune));
        }
    }

    #[test]
    fn test_win_is_deterministic_per_seed_and_tick() {
        let mut a = GameState::new(77);
        let mut b = GameState::new(77);
        a.time_ticks = 500;
        b.time_ticks = 500;
        a.win();
        b.win();
        assert_eq!(a.outcome, b.outcome);
    }

    #[test]
    fn test_interactions_ignored_when_over() {
        let mut state = GameState::new(1);
        state.player.body.pos = state.hiding_spots[0].pos;
        state.lose(1);
        state.events.clear();
        state.try_toggle_hide();
        assert!(!state.player.hidden);

        state.player.body.pos = state.power_ups[0].pos;
        state.try_pickup();
        assert_eq!(state.power_ups.len(), 3);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_hide_toggle_reports_only_changes() {
        let mut state = GameState::new(1);
        state.player.body.pos = Vec2::new(600.0, 1300.0);
        state.try_toggle_hide();
        assert!(!state.player.hidden);
        assert!(state.events.is_empty());

        state.player.hidden = true;
        state.try_toggle_hide();
        assert!(!state.player.hidden);
        assert_eq!(state.events, vec![GameEvent::HideToggled { hidden: false }]);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(GamePhase::Playing.status_label(), "Playing");
        assert_eq!(GamePhase::Won.status_label(), "Victory!");
        assert_eq!(GamePhase::Lost.status_label(), "Defeat");
        assert!(!GamePhase::Playing.is_terminal());
        assert!(GamePhase::Lost.is_terminal());
    }
}
