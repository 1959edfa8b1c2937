//! Stealth Chase headless runner
//!
//! Drives a session at a steady 60 Hz with a simple autopilot at the keys and
//! logs how the run ends. Usage: `stealth-chase [settings.json]`

#[cfg(not(target_arch = "wasm32"))]
mod autopilot {
    use glam::Vec2;

    use stealth_chase::Session;
    use stealth_chase::consts::PICKUP_RANGE;
    use stealth_chase::platform::Key;

    /// Power-ups further than this are not worth the detour
    const DETOUR_RANGE: f32 = 300.0;

    const DIRECTION_KEYS: [Key; 4] = [Key::ArrowUp, Key::ArrowDown, Key::ArrowLeft, Key::ArrowRight];

    /// Press the keys for one frame: head for the exit, grabbing close power-ups
    pub fn drive(session: &mut Session) {
        let state = session.state();
        let player = state.player.pos();

        let detour = state
            .power_ups
            .iter()
            .map(|p| p.pos)
            .filter(|pos| pos.distance(player) < DETOUR_RANGE)
            .min_by(|a, b| {
                a.distance(player)
                    .partial_cmp(&b.distance(player))
                    .unwrap_or(std::cmp::Ordering::Equal)
            });
        let target = detour.unwrap_or(state.exit.pos);
        let grab = detour.is_some_and(|pos| pos.distance(player) < PICKUP_RANGE);

        for key in DIRECTION_KEYS {
            session.key_up(key);
        }
        for key in keys_toward(target - player) {
            session.key_down(key);
        }

        session.key_up(Key::E);
        if grab {
            session.key_down(Key::E);
        }
    }

    fn keys_toward(delta: Vec2) -> Vec<Key> {
        let mut keys = Vec::with_capacity(2);
        if delta.x > 1.0 {
            keys.push(Key::ArrowRight);
        } else if delta.x < -1.0 {
            keys.push(Key::ArrowLeft);
        }
        if delta.y > 1.0 {
            keys.push(Key::ArrowDown);
        } else if delta.y < -1.0 {
            keys.push(Key::ArrowUp);
        }
        keys
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::path::PathBuf;

    use stealth_chase::consts::SIM_DT;
    use stealth_chase::{Session, Settings};

    env_logger::init();
    log::info!("Stealth Chase (headless) starting...");

    let settings = match std::env::args().nth(1).map(PathBuf::from) {
        Some(path) => Settings::load_from(&path),
        None => Settings::default(),
    };
    let frames = settings.demo_frames;
    let mut session = Session::new(settings);

    for frame in 0..frames {
        autopilot::drive(&mut session);
        session.advance(SIM_DT);

        for event in session.drain_events() {
            log::debug!("frame {}: {:?}", frame, event);
        }

        if session.phase().is_terminal() {
            break;
        }
    }

    let snapshot = session.snapshot();
    println!("{}", snapshot.status_text());
    match session.outcome() {
        Some(outcome) => println!("{}\n{}", outcome.title, outcome.message),
        None => println!("Still running after {} frames", frames),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // Web hosts drive `Session` directly; nothing to do here
}
