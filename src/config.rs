//! Tunable constants for a session, bundled so tests and hosts can tweak
//! one field without touching the game logic.

use std::time::Duration;

use crate::error::ConfigError;

pub const QUOTA_ENV_VAR: &str = "PORTAL_DASH_QUOTA";
pub const FPS_ENV_VAR: &str = "PORTAL_DASH_FPS";

/// Width/height pair in playfield pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Size {
    pub w: f32,
    pub h: f32,
}

impl Size {
    pub const fn new(w: f32, h: f32) -> Self {
        Self { w, h }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct GameConfig {
    /// Visible render surface, in pixels.
    pub playfield: Size,

    // ── Sizes ────────────────────────────────────────────────────────────────
    pub player_size: Size,
    pub coin_size: Size,
    pub obstacle_size: Size,
    pub key_size: Size,
    pub portal_size: Size,

    // ── Speeds (pixels per tick, player: pixels per input step) ─────────────
    pub player_speed: f32,
    pub coin_speed: f32,
    pub obstacle_speed: f32,
    pub key_speed: f32,
    pub background_speed: f32,

    // ── Spawning ─────────────────────────────────────────────────────────────
    /// Ticks a counter must exceed before the next spawn.
    pub coin_spawn_interval: u32,
    pub obstacle_spawn_interval: u32,
    pub key_spawn_interval: u32,
    /// Horizontal distance past the right edge where new entities appear.
    pub spawn_margin: f32,
    /// Coins to collect before keys start appearing.
    pub coin_quota: u32,
    /// Length of the coin animation cycle.
    pub coin_frames: u8,

    /// Host frame pacing.
    pub frame_interval: Duration,
}

impl GameConfig {
    /// Default tuning for a playfield of the given pixel dimensions.
    pub fn for_playfield(width: f32, height: f32) -> Self {
        Self {
            playfield: Size::new(width, height),
            player_size: Size::new(100.0, 100.0),
            coin_size: Size::new(50.0, 50.0),
            obstacle_size: Size::new(100.0, 100.0),
            key_size: Size::new(50.0, 50.0),
            portal_size: Size::new(150.0, 150.0),
            player_speed: 20.0,
            coin_speed: 4.0,
            obstacle_speed: 4.0,
            key_speed: 4.0,
            background_speed: 2.0,
            coin_spawn_interval: 100,
            obstacle_spawn_interval: 150,
            key_spawn_interval: 300,
            spawn_margin: 50.0,
            coin_quota: 30,
            coin_frames: 4,
            frame_interval: Duration::from_millis(16),
        }
    }

    /// Defaults plus any overrides from the environment. A malformed value is
    /// logged and ignored.
    pub fn from_env(width: f32, height: f32) -> Self {
        let mut config = Self::for_playfield(width, height);

        match read_positive(QUOTA_ENV_VAR) {
            Ok(Some(quota)) => config.coin_quota = quota,
            Ok(None) => {}
            Err(err) => log::warn!("{err}; keeping quota {}", config.coin_quota),
        }
        match read_positive(FPS_ENV_VAR) {
            Ok(Some(fps)) => config.frame_interval = Duration::from_secs(1) / fps,
            Ok(None) => {}
            Err(err) => log::warn!("{err}; keeping {:?} per frame", config.frame_interval),
        }

        config
    }

    /// The playfield must at least fit the portal and the player.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let min = [self.player_size, self.portal_size, self.obstacle_size]
            .iter()
            .flat_map(|s| [s.w, s.h])
            .fold(0.0_f32, f32::max);
        if self.playfield.w < min || self.playfield.h < min {
            return Err(ConfigError::PlayfieldTooSmall {
                width: self.playfield.w,
                height: self.playfield.h,
                min,
            });
        }
        Ok(())
    }
}

fn read_positive(var: &'static str) -> Result<Option<u32>, ConfigError> {
    match std::env::var(var) {
        Ok(raw) => parse_positive(var, &raw).map(Some),
        Err(_) => Ok(None),
    }
}

fn parse_positive(var: &'static str, raw: &str) -> Result<u32, ConfigError> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidNumber {
            var,
            value: raw.to_string(),
        }),
    }
}
