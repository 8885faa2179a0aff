//! Per-tick movement. Every entity reports where it was drawn (its position
//! before the step) through the render hook, then drifts left by its class
//! speed. Anything fully past the left edge is dropped.

use crate::config::GameConfig;
use crate::entities::{GameSession, Rect};
use crate::host::Sprite;

/// One draw request emitted while advancing the world.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderHook {
    pub sprite: Sprite,
    pub rect: Rect,
}

/// Advance the whole scene by one tick, emitting render hooks in paint
/// order: background (two copies), ship, coins, obstacles, keys, portal.
pub fn advance(session: &mut GameSession, config: &GameConfig, hook: &mut impl FnMut(RenderHook)) {
    session.frame += 1;

    scroll_background(session, config);
    let width = config.playfield.w;
    let height = config.playfield.h;
    hook(RenderHook {
        sprite: Sprite::Background,
        rect: Rect::new(session.background_x, 0.0, width, height),
    });
    hook(RenderHook {
        sprite: Sprite::Background,
        rect: Rect::new(session.background_x + width, 0.0, width, height),
    });

    hook(RenderHook {
        sprite: Sprite::Ship,
        rect: session.player.rect,
    });

    advance_coins(session, config, hook);
    advance_obstacles(session, config, hook);
    advance_keys(session, config, hook);

    if let Some(portal) = &session.portal {
        hook(RenderHook {
            sprite: Sprite::Portal,
            rect: portal.rect,
        });
    }
}

/// Shift the backdrop left and wrap it after one full width so the two
/// copies loop seamlessly.
pub fn scroll_background(session: &mut GameSession, config: &GameConfig) {
    session.background_x -= config.background_speed;
    if session.background_x <= -config.playfield.w {
        session.background_x = 0.0;
    }
}

// Sweeps run back to front so `remove` never skips the element that slides
// into the freed slot.

fn advance_coins(session: &mut GameSession, config: &GameConfig, hook: &mut impl FnMut(RenderHook)) {
    let frames = config.coin_frames.max(1);
    for i in (0..session.coins.len()).rev() {
        let coin = &mut session.coins[i];
        hook(RenderHook {
            sprite: Sprite::Coin(coin.frame),
            rect: coin.rect,
        });
        coin.frame = (coin.frame + 1) % frames;
        coin.rect.x -= config.coin_speed;
        if coin.rect.is_off_left() {
            session.coins.remove(i);
        }
    }
}

fn advance_obstacles(session: &mut GameSession, config: &GameConfig, hook: &mut impl FnMut(RenderHook)) {
    for i in (0..session.obstacles.len()).rev() {
        let obstacle = &mut session.obstacles[i];
        hook(RenderHook {
            sprite: Sprite::Obstacle,
            rect: obstacle.rect,
        });
        obstacle.rect.x -= config.obstacle_speed;
        if obstacle.rect.is_off_left() {
            session.obstacles.remove(i);
        }
    }
}

fn advance_keys(session: &mut GameSession, config: &GameConfig, hook: &mut impl FnMut(RenderHook)) {
    for i in (0..session.keys.len()).rev() {
        let key = &mut session.keys[i];
        hook(RenderHook {
            sprite: Sprite::Key,
            rect: key.rect,
        });
        key.rect.x -= config.key_speed;
        if key.rect.is_off_left() {
            session.keys.remove(i);
        }
    }
}

// ── Player input ──────────────────────────────────────────────────────────────

/// Move the ship by one step and clamp it inside the playfield.
pub fn move_player(session: &mut GameSession, config: &GameConfig, dx: f32, dy: f32) {
    let player = &mut session.player;
    let max_x = (config.playfield.w - player.rect.w).max(0.0);
    let max_y = (config.playfield.h - player.rect.h).max(0.0);
    player.rect.x = (player.rect.x + dx * player.speed).clamp(0.0, max_x);
    player.rect.y = (player.rect.y + dy * player.speed).clamp(0.0, max_y);
}
