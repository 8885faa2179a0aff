//! The game mode and its legal transitions.
//!
//! Requests that are not legal from the current mode are ignored rather
//! than treated as errors: `apply` returns `None` and nothing changes.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameMode {
    /// Idle on the start screen.
    Start,
    Running,
    Paused,
    GameOver,
    Won,
}

impl fmt::Display for GameMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameMode::Start => "start",
            GameMode::Running => "running",
            GameMode::Paused => "paused",
            GameMode::GameOver => "game over",
            GameMode::Won => "won",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModeEvent {
    /// Start was requested and every asset is ready.
    Begin,
    Pause,
    Resume,
    /// Pause input: pauses when running, resumes when paused.
    TogglePause,
    ObstacleHit,
    PortalReached,
    Restart,
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: GameMode,
    pub to: GameMode,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StateMachine {
    mode: GameMode,
}

impl Default for StateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl StateMachine {
    pub fn new() -> Self {
        Self {
            mode: GameMode::Start,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// Where `event` would lead from the current mode, if anywhere.
    pub fn target(&self, event: ModeEvent) -> Option<GameMode> {
        use GameMode::*;
        match (self.mode, event) {
            (Start, ModeEvent::Begin) => Some(Running),
            (Running, ModeEvent::Pause | ModeEvent::TogglePause) => Some(Paused),
            (Paused, ModeEvent::Resume | ModeEvent::TogglePause) => Some(Running),
            (Running, ModeEvent::ObstacleHit) => Some(GameOver),
            (Running, ModeEvent::PortalReached) => Some(Won),
            (GameOver | Won, ModeEvent::Restart) => Some(Running),
            (Paused | GameOver | Won, ModeEvent::Quit) => Some(Start),
            _ => None,
        }
    }

    pub fn apply(&mut self, event: ModeEvent) -> Option<Transition> {
        match self.target(event) {
            Some(to) => {
                let transition = Transition { from: self.mode, to };
                self.mode = to;
                log::info!("mode {} -> {}", transition.from, transition.to);
                Some(transition)
            }
            None => {
                log::debug!("ignoring {event:?} while {}", self.mode);
                None
            }
        }
    }
}
