//! Contracts between the core and whatever hosts it: render surface, audio
//! sink, asset readiness and input identifiers.
//!
//! The core only issues draw calls and sound requests; it never owns pixel
//! buffers, files or devices.

use std::collections::HashSet;

use crate::entities::Rect;
use crate::error::AudioError;

// ── Assets ────────────────────────────────────────────────────────────────────

/// Every image the game draws. Coins carry their animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sprite {
    Background,
    Ship,
    Obstacle,
    Key,
    Portal,
    Coin(u8),
}

/// Loadable resources gating the start of play.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Asset {
    Background,
    Ship,
    Obstacle,
    Key,
    Portal,
    CoinFrame(u8),
}

impl Asset {
    /// All assets that must be ready before the first tick.
    pub fn gameplay(coin_frames: u8) -> Vec<Asset> {
        let mut assets = vec![
            Asset::Background,
            Asset::Ship,
            Asset::Obstacle,
            Asset::Key,
            Asset::Portal,
        ];
        assets.extend((0..coin_frames).map(Asset::CoinFrame));
        assets
    }
}

/// Aggregate readiness of a set of assets. Completion is reported by the
/// loader; the gate never polls.
#[derive(Clone, Debug)]
pub struct AssetGate {
    pending: HashSet<Asset>,
}

impl AssetGate {
    pub fn new(assets: impl IntoIterator<Item = Asset>) -> Self {
        Self {
            pending: assets.into_iter().collect(),
        }
    }

    /// Record one completed load. Returns true if this was the last one
    /// outstanding. Duplicates and unknown assets are harmless.
    pub fn mark_ready(&mut self, asset: Asset) -> bool {
        self.pending.remove(&asset) && self.pending.is_empty()
    }

    pub fn is_ready(&self, asset: Asset) -> bool {
        !self.pending.contains(&asset)
    }

    pub fn all_ready(&self) -> bool {
        self.pending.is_empty()
    }
}

// ── Audio ─────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sound {
    Coin,
    Bump,
    Key,
    Win,
    /// Looping background track.
    Music,
}

/// Fire-and-forget playback. Playing a sound that is already going restarts
/// it from the beginning; nothing is queued.
pub trait Audio {
    fn play(&mut self, sound: Sound) -> Result<(), AudioError>;
}

// ── Rendering ─────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tint {
    White,
    Black,
    Red,
    Lime,
    Yellow,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Left,
    Center,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextSize {
    Hud,
    Banner,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TextStyle {
    pub tint: Tint,
    pub size: TextSize,
    pub align: Align,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fill {
    pub tint: Tint,
    /// 0.0 transparent .. 1.0 opaque.
    pub alpha: f32,
}

pub trait Surface {
    fn clear(&mut self);
    fn draw_image(&mut self, sprite: Sprite, rect: Rect);
    fn draw_text(&mut self, text: &str, x: f32, y: f32, style: TextStyle);
    fn draw_rect(&mut self, rect: Rect, fill: Fill);
}

// ── Input ─────────────────────────────────────────────────────────────────────

/// Key-down identifiers the core reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameKey {
    Up,
    Down,
    Left,
    Right,
    /// Pause toggle.
    Escape,
}

/// Named triggers the host wires to its own buttons or keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UiAction {
    Start,
    Pause,
    Resume,
    Restart,
    /// Back to the start screen; also serves as "Exit" on the win overlay.
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_completes_on_last_asset_only() {
        let mut gate = AssetGate::new(Asset::gameplay(2));
        assert!(!gate.all_ready());
        for asset in [Asset::Background, Asset::Ship, Asset::Obstacle, Asset::Key, Asset::Portal] {
            assert!(!gate.mark_ready(asset));
        }
        assert!(!gate.mark_ready(Asset::CoinFrame(0)));
        assert!(gate.mark_ready(Asset::CoinFrame(1)));
        assert!(gate.all_ready());
    }

    #[test]
    fn gate_ignores_duplicate_reports() {
        let mut gate = AssetGate::new([Asset::Ship, Asset::Key]);
        assert!(!gate.mark_ready(Asset::Ship));
        assert!(!gate.mark_ready(Asset::Ship));
        assert!(gate.is_ready(Asset::Ship));
        assert!(!gate.is_ready(Asset::Key));
    }

    #[test]
    fn empty_gate_is_ready() {
        assert!(AssetGate::new(Vec::new()).all_ready());
    }
}
