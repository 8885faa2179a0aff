//! Time-gated entity generation.
//!
//! Each class has its own counter, bumped once per tick. A counter that
//! exceeds its interval spawns one entity just past the right edge at a
//! random height and resets to zero. All randomness comes through the
//! injected `rng` so tests can seed it.

use rand::Rng;

use crate::config::{GameConfig, Size};
use crate::entities::{Coin, GameSession, Key, Obstacle, Rect};

/// Run the whole spawn phase for one tick: coins, obstacles, then keys.
pub fn spawn_phase(session: &mut GameSession, config: &GameConfig, rng: &mut impl Rng) {
    spawn_coin(session, config, rng);
    spawn_obstacle(session, config, rng);
    spawn_key(session, config, rng);
}

/// Coins stop appearing once the quota has been collected; the counter is
/// left alone from then on.
pub fn spawn_coin(session: &mut GameSession, config: &GameConfig, rng: &mut impl Rng) {
    if session.quota_reached(config) {
        return;
    }
    session.counters.coin += 1;
    if session.counters.coin > config.coin_spawn_interval {
        session.counters.coin = 0;
        session.coins.push(Coin {
            rect: entry_rect(config, config.coin_size, rng),
            frame: 0,
            collected: false,
        });
        log::debug!("coin spawned ({} live)", session.coins.len());
    }
}

pub fn spawn_obstacle(session: &mut GameSession, config: &GameConfig, rng: &mut impl Rng) {
    session.counters.obstacle += 1;
    if session.counters.obstacle > config.obstacle_spawn_interval {
        session.counters.obstacle = 0;
        session.obstacles.push(Obstacle {
            rect: entry_rect(config, config.obstacle_size, rng),
        });
        log::debug!("obstacle spawned ({} live)", session.obstacles.len());
    }
}

/// Keys only trickle in after the quota is met and until one is collected.
/// The first eligible tick spawns straight away; later keys wait for the
/// full interval.
pub fn spawn_key(session: &mut GameSession, config: &GameConfig, rng: &mut impl Rng) {
    if !session.quota_reached(config) || session.key_collected {
        return;
    }
    session.counters.key += 1;
    if !session.key_spawned || session.counters.key > config.key_spawn_interval {
        session.counters.key = 0;
        session.key_spawned = true;
        session.keys.push(Key {
            rect: entry_rect(config, config.key_size, rng),
            collected: false,
        });
        log::debug!("key spawned ({} live)", session.keys.len());
    }
}

/// Uniform y in `[0, playfield.h - size.h)`, x just beyond the right edge.
fn entry_rect(config: &GameConfig, size: Size, rng: &mut impl Rng) -> Rect {
    let max_y = config.playfield.h - size.h;
    let y = if max_y > 0.0 { rng.gen_range(0.0..max_y) } else { 0.0 };
    Rect::at(config.playfield.w + config.spawn_margin, y, size)
}
