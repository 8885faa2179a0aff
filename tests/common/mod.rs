#![allow(dead_code)]

use portal_dash::config::GameConfig;
use portal_dash::entities::Rect;
use portal_dash::error::AudioError;
use portal_dash::game::Game;
use portal_dash::host::{Asset, Audio, Fill, Sound, Sprite, Surface, TextStyle, UiAction};
use portal_dash::state::GameMode;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Remembers every draw call instead of painting anything.
#[derive(Default)]
pub struct RecordingSurface {
    pub clears: usize,
    pub images: Vec<(Sprite, Rect)>,
    pub texts: Vec<String>,
    pub rects: Vec<(Rect, Fill)>,
}

impl RecordingSurface {
    pub fn has_text(&self, needle: &str) -> bool {
        self.texts.iter().any(|t| t == needle)
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self) {
        self.clears += 1;
    }

    fn draw_image(&mut self, sprite: Sprite, rect: Rect) {
        self.images.push((sprite, rect));
    }

    fn draw_text(&mut self, text: &str, _x: f32, _y: f32, _style: TextStyle) {
        self.texts.push(text.to_string());
    }

    fn draw_rect(&mut self, rect: Rect, fill: Fill) {
        self.rects.push((rect, fill));
    }
}

#[derive(Default)]
pub struct RecordingAudio {
    pub played: Vec<Sound>,
    /// Reject every request, like a browser blocking autoplay.
    pub reject: bool,
}

impl RecordingAudio {
    pub fn count(&self, sound: Sound) -> usize {
        self.played.iter().filter(|s| **s == sound).count()
    }
}

impl Audio for RecordingAudio {
    fn play(&mut self, sound: Sound) -> Result<(), AudioError> {
        self.played.push(sound);
        if self.reject {
            Err(AudioError::Blocked("test".to_string()))
        } else {
            Ok(())
        }
    }
}

pub fn config() -> GameConfig {
    GameConfig::for_playfield(800.0, 600.0)
}

pub fn seeded_rng() -> StdRng {
    StdRng::seed_from_u64(42)
}

pub fn load_all(game: &mut Game<StdRng>) {
    for asset in Asset::gameplay(game.config().coin_frames) {
        game.asset_loaded(asset);
    }
}

/// A game that has been started and is waiting for its first tick.
pub fn running_game_with(
    config: GameConfig,
    surface: &mut RecordingSurface,
    audio: &mut RecordingAudio,
) -> Game<StdRng> {
    let mut game = Game::new(config, seeded_rng());
    load_all(&mut game);
    game.ui_action(UiAction::Start, surface, audio);
    assert_eq!(game.mode(), GameMode::Running);
    game
}

pub fn running_game(surface: &mut RecordingSurface, audio: &mut RecordingAudio) -> Game<StdRng> {
    running_game_with(config(), surface, audio)
}

/// Deliver the pending tick, as the host's frame timer would. Returns false
/// if the loop is halted.
pub fn step(game: &mut Game<StdRng>, surface: &mut RecordingSurface, audio: &mut RecordingAudio) -> bool {
    match game.pending_tick() {
        Some(handle) => {
            game.on_frame(handle, surface, audio);
            true
        }
        None => false,
    }
}

pub fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
    Rect::new(x, y, w, h)
}
