//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order
//! - No rendering, audio or platform dependencies

pub mod effects;
pub mod entity;
pub mod geometry;
pub mod snapshot;
pub mod state;
pub mod tick;
pub mod zones;

pub use effects::ActiveEffects;
pub use entity::{Body, Player, Pursuer, pursuer_velocity};
pub use geometry::{CollisionResult, Rect, circle_overlaps_rect, distance, resolve_circle_rect};
pub use snapshot::RenderSnapshot;
pub use state::{GameEvent, GamePhase, GameState, Outcome};
pub use tick::{TickInput, tick};
pub use zones::{HidingSpot, Marker, PowerUp, PowerUpKind};
