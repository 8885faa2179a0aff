use std::io::{stdout, Write};

use portal_dash::error::AudioError;
use portal_dash::host::{Audio, Sound};

pub const MUTE_ENV_VAR: &str = "PORTAL_DASH_MUTE";

/// The terminal's only speaker is the bell. Bumps, keys and wins ring it;
/// coins are too frequent to be worth the noise and music is out of reach.
pub struct TerminalBell {
    muted: bool,
}

impl TerminalBell {
    pub fn new() -> Self {
        Self {
            muted: std::env::var_os(MUTE_ENV_VAR).is_some(),
        }
    }
}

impl Audio for TerminalBell {
    fn play(&mut self, sound: Sound) -> Result<(), AudioError> {
        match sound {
            Sound::Music => Err(AudioError::Unsupported(sound)),
            Sound::Coin => Ok(()),
            _ if self.muted => Err(AudioError::Blocked(format!("{MUTE_ENV_VAR} is set"))),
            Sound::Bump | Sound::Key | Sound::Win => {
                let mut out = stdout();
                out.write_all(b"\x07")?;
                out.flush()?;
                Ok(())
            }
        }
    }
}
