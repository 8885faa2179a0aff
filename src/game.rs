//! The game facade: one `GameSession`, the mode machine, the frame
//! scheduler and the asset gate, driven by UI actions, key presses, asset
//! readiness and frame callbacks from the host.
//!
//! Every entry point runs to completion synchronously, so input can land
//! between any two ticks but never inside one.

use rand::Rng;

use crate::collision::{collision_phase, CollisionEvent, Outcome};
use crate::config::GameConfig;
use crate::entities::{GameSession, Rect};
use crate::host::{
    Align, Asset, AssetGate, Audio, Fill, GameKey, Sound, Surface, TextSize, TextStyle, Tint,
    UiAction,
};
use crate::motion::{advance, move_player};
use crate::scheduler::{FrameScheduler, TickHandle};
use crate::spawner::spawn_phase;
use crate::state::{GameMode, ModeEvent, StateMachine};

pub struct Game<R: Rng> {
    config: GameConfig,
    session: GameSession,
    machine: StateMachine,
    scheduler: FrameScheduler,
    assets: AssetGate,
    /// Set by `Start` and cleared once play actually begins.
    start_requested: bool,
    rng: R,
}

impl<R: Rng> Game<R> {
    pub fn new(config: GameConfig, rng: R) -> Self {
        let assets = AssetGate::new(Asset::gameplay(config.coin_frames));
        Self {
            session: GameSession::new(&config),
            config,
            machine: StateMachine::new(),
            scheduler: FrameScheduler::new(),
            assets,
            start_requested: false,
            rng,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    pub fn mode(&self) -> GameMode {
        self.machine.mode()
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Direct session access for hosts and tests that need to stage a scene.
    pub fn session_mut(&mut self) -> &mut GameSession {
        &mut self.session
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The tick the host should deliver next, if the loop is live.
    pub fn pending_tick(&self) -> Option<TickHandle> {
        self.scheduler.pending()
    }

    pub fn is_running(&self) -> bool {
        self.scheduler.is_running()
    }

    pub fn start_requested(&self) -> bool {
        self.start_requested
    }

    // ── Asset readiness ───────────────────────────────────────────────────────

    /// Loader callback. The last asset to arrive releases a deferred start.
    pub fn asset_loaded(&mut self, asset: Asset) {
        if self.assets.mark_ready(asset) {
            log::info!("all gameplay assets ready");
        }
        self.try_begin();
    }

    pub fn assets_ready(&self) -> bool {
        self.assets.all_ready()
    }

    // ── UI actions ────────────────────────────────────────────────────────────

    pub fn ui_action(&mut self, action: UiAction, surface: &mut dyn Surface, audio: &mut dyn Audio) {
        match action {
            UiAction::Start => self.request_start(audio),
            UiAction::Pause => self.pause(surface),
            UiAction::Resume => self.resume(),
            UiAction::Restart => self.restart(),
            UiAction::Quit => self.quit(),
        }
    }

    fn request_start(&mut self, audio: &mut dyn Audio) {
        if self.mode() != GameMode::Start || self.start_requested {
            log::debug!("ignoring start while {}", self.mode());
            return;
        }
        self.start_requested = true;
        play(audio, Sound::Music);
        self.try_begin();
    }

    fn try_begin(&mut self) {
        if !self.start_requested || !self.assets.all_ready() {
            return;
        }
        if self.machine.apply(ModeEvent::Begin).is_some() {
            self.start_requested = false;
            self.session = GameSession::new(&self.config);
            self.scheduler.start();
        }
    }

    fn pause(&mut self, surface: &mut dyn Surface) {
        if self.machine.apply(ModeEvent::Pause).is_some() {
            self.scheduler.stop();
            self.draw_overlay(surface, "Paused", Tint::Yellow);
        }
    }

    fn resume(&mut self) {
        if self.machine.apply(ModeEvent::Resume).is_some() {
            self.scheduler.start();
        }
    }

    fn restart(&mut self) {
        if self.machine.apply(ModeEvent::Restart).is_some() {
            self.session = GameSession::new(&self.config);
            self.scheduler.start();
        }
    }

    /// Back to the start screen. Background music is left as it is.
    fn quit(&mut self) {
        if self.machine.apply(ModeEvent::Quit).is_some() {
            self.scheduler.stop();
            self.start_requested = false;
        }
    }

    // ── Keyboard ──────────────────────────────────────────────────────────────

    pub fn key_down(&mut self, key: GameKey, surface: &mut dyn Surface) {
        match key {
            GameKey::Escape => match self.mode() {
                GameMode::Running => self.pause(surface),
                GameMode::Paused => self.resume(),
                _ => {}
            },
            _ if self.mode() != GameMode::Running => {}
            GameKey::Up => move_player(&mut self.session, &self.config, 0.0, -1.0),
            GameKey::Down => move_player(&mut self.session, &self.config, 0.0, 1.0),
            GameKey::Left => move_player(&mut self.session, &self.config, -1.0, 0.0),
            GameKey::Right => move_player(&mut self.session, &self.config, 1.0, 0.0),
        }
    }

    // ── Frame ─────────────────────────────────────────────────────────────────

    /// Run one tick for `handle`. Stale handles and non-running modes do
    /// nothing and leave the loop halted.
    pub fn on_frame(&mut self, handle: TickHandle, surface: &mut dyn Surface, audio: &mut dyn Audio) {
        if !self.scheduler.claim(handle) {
            log::debug!("dropping stale tick {handle:?}");
            return;
        }
        if self.mode() != GameMode::Running {
            return;
        }

        surface.clear();
        spawn_phase(&mut self.session, &self.config, &mut self.rng);
        advance(&mut self.session, &self.config, &mut |hook| {
            surface.draw_image(hook.sprite, hook.rect)
        });
        self.draw_hud(surface);

        let report = collision_phase(&mut self.session, &self.config);
        for event in &report.events {
            match event {
                CollisionEvent::CoinCollected => play(audio, Sound::Coin),
                CollisionEvent::KeyCollected => play(audio, Sound::Key),
                CollisionEvent::ObstacleHit => play(audio, Sound::Bump),
                CollisionEvent::PortalReached => play(audio, Sound::Win),
                CollisionEvent::PortalOpened => log::info!("portal opened"),
            }
        }

        match report.outcome {
            Outcome::Continue => {
                self.scheduler.start();
            }
            Outcome::Fatal => {
                self.machine.apply(ModeEvent::ObstacleHit);
                self.scheduler.stop();
                self.draw_overlay(surface, "You Lost!", Tint::Red);
            }
            Outcome::Won => {
                self.machine.apply(ModeEvent::PortalReached);
                self.scheduler.stop();
                self.draw_overlay(surface, "You Win!", Tint::Lime);
            }
        }
    }

    // ── Drawing ───────────────────────────────────────────────────────────────

    fn draw_hud(&self, surface: &mut dyn Surface) {
        let text = format!(
            "Coins: {} / {}",
            self.session.coins_collected, self.config.coin_quota
        );
        let style = TextStyle {
            tint: Tint::White,
            size: TextSize::Hud,
            align: Align::Left,
        };
        surface.draw_text(&text, 20.0, 40.0, style);
    }

    /// Dim the current frame and stamp a banner over it.
    fn draw_overlay(&self, surface: &mut dyn Surface, title: &str, tint: Tint) {
        let field = self.config.playfield;
        surface.draw_rect(
            Rect::new(0.0, 0.0, field.w, field.h),
            Fill {
                tint: Tint::Black,
                alpha: 0.7,
            },
        );
        let style = TextStyle {
            tint,
            size: TextSize::Banner,
            align: Align::Center,
        };
        surface.draw_text(title, field.w / 2.0, field.h / 2.0 - 50.0, style);
    }
}

fn play(audio: &mut dyn Audio, sound: Sound) {
    if let Err(err) = audio.play(sound) {
        log::warn!("audio: {err}");
    }
}
