//! Stealth Chase - a top-down stealth arcade loop
//!
//! Core modules:
//! - `sim`: Deterministic simulation (motion, collisions, pursuers, effects, game state)
//! - `platform`: Input adapter that turns key events into per-tick snapshots
//! - `session`: Fixed-step tick driver and atomic restart
//! - `settings`: Driver configuration

pub mod platform;
pub mod session;
pub mod settings;
pub mod sim;

pub use session::Session;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (one tick per display frame)
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// World dimensions
    pub const WORLD_WIDTH: f32 = 1242.0;
    pub const WORLD_HEIGHT: f32 = 2208.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 20.0;
    pub const PLAYER_BASE_SPEED: f32 = 3.0;
    pub const PLAYER_BOOSTED_SPEED: f32 = 6.0;

    /// Pursuer defaults
    pub const PURSUER_RADIUS: f32 = 25.0;
    pub const PURSUER_NORMAL_SPEED: f32 = 1.5;
    pub const PURSUER_CHASE_SPEED: f32 = 3.0;
    pub const PURSUER_DETECTION_RADIUS: f32 = 150.0;

    /// Interaction ranges (center to center)
    pub const HIDE_RANGE: f32 = 50.0;
    pub const PICKUP_RANGE: f32 = 40.0;
    pub const CAPTURE_RANGE: f32 = 40.0;
    pub const EXIT_RANGE: f32 = 40.0;

    /// Effect duration (5 seconds at the fixed tick rate)
    pub const EFFECT_DURATION_TICKS: u32 = 5 * TICK_RATE;

    /// Visual sizes (not gameplay-affecting)
    pub const HIDING_SPOT_SIZE: f32 = PLAYER_RADIUS * 2.0;
    pub const POWER_UP_RADIUS: f32 = 20.0;

    /// The level was authored on an 800x600 grid and scaled up
    pub const LAYOUT_SCALE_X: f32 = WORLD_WIDTH / 800.0;
    pub const LAYOUT_SCALE_Y: f32 = WORLD_HEIGHT / 600.0;
    pub const MARKER_RADIUS: f32 = 30.0 * LAYOUT_SCALE_X.min(LAYOUT_SCALE_Y);
}

/// Clamp a circle's center so the whole circle stays inside the world
#[inline]
pub fn clamp_to_world(pos: Vec2, radius: f32) -> Vec2 {
    Vec2::new(
        pos.x.clamp(radius, consts::WORLD_WIDTH - radius),
        pos.y.clamp(radius, consts::WORLD_HEIGHT - radius),
    )
}

/// Convert a tick count to whole seconds, rounding up (HUD countdown)
#[inline]
pub fn ticks_to_whole_seconds(ticks: u32) -> u32 {
    ticks.div_ceil(consts::TICK_RATE)
}
