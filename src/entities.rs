//! All game entity types and the session that owns them. Pure data, no
//! per-tick logic.

use crate::config::{GameConfig, Size};

// ── Geometry ──────────────────────────────────────────────────────────────────

/// Axis-aligned rectangle in playfield pixels, origin at the top-left.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn at(x: f32, y: f32, size: Size) -> Self {
        Self::new(x, y, size.w, size.h)
    }

    /// Strict overlap: touching edges do not count.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }

    /// Fully past the left edge of the playfield.
    pub fn is_off_left(&self) -> bool {
        self.x + self.w < 0.0
    }
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Player {
    pub rect: Rect,
    pub speed: f32,
}

impl Player {
    /// Where the ship sits at the start of every session.
    pub fn spawn(config: &GameConfig) -> Self {
        let size = config.player_size;
        Self {
            rect: Rect::at(100.0, config.playfield.h / 2.0 - size.h / 2.0, size),
            speed: config.player_speed,
        }
    }
}

// ── Transient entities ────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq)]
pub struct Coin {
    pub rect: Rect,
    /// Index into the coin animation cycle.
    pub frame: u8,
    pub collected: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Obstacle {
    pub rect: Rect,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Key {
    pub rect: Rect,
    pub collected: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Portal {
    pub rect: Rect,
}

impl Portal {
    /// The portal always opens at the far right, vertically centred.
    pub fn open(config: &GameConfig) -> Self {
        let size = config.portal_size;
        Self {
            rect: Rect::at(
                config.playfield.w - size.w,
                config.playfield.h / 2.0 - size.h / 2.0,
                size,
            ),
        }
    }
}

// ── Counters ──────────────────────────────────────────────────────────────────

/// Per-class spawn timers, each incremented once per tick.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SpawnCounters {
    pub coin: u32,
    pub obstacle: u32,
    pub key: u32,
}

// ── Session ───────────────────────────────────────────────────────────────────

/// Every piece of mutable state for one play-through. Restarting replaces
/// the whole value with `GameSession::new`.
///
/// Entity vectors are append-only during spawning; removal happens in a
/// single reverse-order sweep so `Vec::remove` never skips an element.
#[derive(Clone, Debug, PartialEq)]
pub struct GameSession {
    pub player: Player,
    pub coins: Vec<Coin>,
    pub obstacles: Vec<Obstacle>,
    pub keys: Vec<Key>,
    pub portal: Option<Portal>,
    pub coins_collected: u32,
    pub counters: SpawnCounters,
    /// True once the first key of the session has been spawned.
    pub key_spawned: bool,
    pub key_collected: bool,
    /// Horizontal background offset, always in `(-playfield.w, 0]`.
    pub background_x: f32,
    pub frame: u64,
}

impl GameSession {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            player: Player::spawn(config),
            coins: Vec::new(),
            obstacles: Vec::new(),
            keys: Vec::new(),
            portal: None,
            coins_collected: 0,
            counters: SpawnCounters::default(),
            key_spawned: false,
            key_collected: false,
            background_x: 0.0,
            frame: 0,
        }
    }

    pub fn quota_reached(&self, config: &GameConfig) -> bool {
        self.coins_collected >= config.coin_quota
    }
}
