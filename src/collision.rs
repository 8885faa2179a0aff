//! Player-versus-world overlap tests for one tick.
//!
//! Evaluation order is fixed: coins, obstacles, keys, portal. An obstacle
//! hit ends the pass immediately, so a fatal collision always beats a
//! portal overlap in the same tick.

use crate::config::GameConfig;
use crate::entities::{GameSession, Portal};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CollisionEvent {
    CoinCollected,
    KeyCollected,
    PortalOpened,
    ObstacleHit,
    PortalReached,
}

/// How the tick ended, as far as the state machine cares.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Fatal,
    Won,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CollisionReport {
    pub events: Vec<CollisionEvent>,
    pub outcome: Outcome,
}

/// Run the collision phase and sweep out whatever got collected, so that
/// no collected entity survives the frame it was marked in.
pub fn collision_phase(session: &mut GameSession, config: &GameConfig) -> CollisionReport {
    let mut events = Vec::new();
    let outcome = detect(session, config, &mut events);
    sweep_collected(session, config);
    CollisionReport { events, outcome }
}

fn detect(session: &mut GameSession, config: &GameConfig, events: &mut Vec<CollisionEvent>) -> Outcome {
    let ship = session.player.rect;

    // ── Coins ─────────────────────────────────────────────────────────────────
    for coin in session.coins.iter_mut() {
        if !coin.collected && ship.overlaps(&coin.rect) {
            coin.collected = true;
            events.push(CollisionEvent::CoinCollected);
        }
    }

    // ── Obstacles ─────────────────────────────────────────────────────────────
    if session.obstacles.iter().any(|o| ship.overlaps(&o.rect)) {
        events.push(CollisionEvent::ObstacleHit);
        return Outcome::Fatal;
    }

    // ── Keys ──────────────────────────────────────────────────────────────────
    for key in session.keys.iter_mut() {
        if !key.collected && ship.overlaps(&key.rect) {
            key.collected = true;
            session.key_collected = true;
            events.push(CollisionEvent::KeyCollected);
            if session.portal.is_none() {
                session.portal = Some(Portal::open(config));
                events.push(CollisionEvent::PortalOpened);
            }
        }
    }

    // ── Portal ────────────────────────────────────────────────────────────────
    if session.key_collected {
        if let Some(portal) = &session.portal {
            if ship.overlaps(&portal.rect) {
                events.push(CollisionEvent::PortalReached);
                return Outcome::Won;
            }
        }
    }

    Outcome::Continue
}

/// Reverse-order removal of collected coins and keys. Each coin bumps the
/// collected count, which saturates at the quota.
fn sweep_collected(session: &mut GameSession, config: &GameConfig) {
    for i in (0..session.coins.len()).rev() {
        if session.coins[i].collected {
            session.coins.remove(i);
            session.coins_collected = (session.coins_collected + 1).min(config.coin_quota);
        }
    }
    for i in (0..session.keys.len()).rev() {
        if session.keys[i].collected {
            session.keys.remove(i);
        }
    }
}
