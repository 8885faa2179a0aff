mod display;
mod sound;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    style::Color,
    terminal, ExecutableCommand,
};
use rand::thread_rng;

use portal_dash::config::GameConfig;
use portal_dash::game::Game;
use portal_dash::host::{Asset, GameKey, Surface, UiAction};
use portal_dash::state::GameMode;

use display::TerminalSurface;
use sound::TerminalBell;

const LOG_ENV_VAR: &str = "PORTAL_DASH_LOG";

// ── Logging ───────────────────────────────────────────────────────────────────

/// Logs go to a file: anything written to the terminal would tear through
/// the alternate screen.
fn init_logging() {
    let path = std::env::var_os(LOG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("portal_dash.log"));

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    match File::create(&path) {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        Err(_) => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }
    builder.init();
}

// ── Input mapping ─────────────────────────────────────────────────────────────

enum Command {
    Key(GameKey),
    Ui(UiAction),
    Exit,
    Nothing,
}

/// What a key press means in the current mode. Requests the game cannot
/// honour right now are still forwarded; it ignores them.
fn interpret(code: KeyCode, modifiers: KeyModifiers, mode: GameMode) -> Command {
    match code {
        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => Command::Exit,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc if mode == GameMode::Start => {
            Command::Exit
        }
        KeyCode::Enter | KeyCode::Char(' ') if mode == GameMode::Start => {
            Command::Ui(UiAction::Start)
        }
        KeyCode::Enter if mode == GameMode::Paused => Command::Ui(UiAction::Resume),
        KeyCode::Char('q') | KeyCode::Char('Q') => Command::Ui(UiAction::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Command::Ui(UiAction::Restart),
        KeyCode::Esc | KeyCode::Char('p') | KeyCode::Char('P') => Command::Key(GameKey::Escape),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Command::Key(GameKey::Up),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Command::Key(GameKey::Down),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Command::Key(GameKey::Left),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Command::Key(GameKey::Right),
        _ => Command::Nothing,
    }
}

// ── Start screen & hints ──────────────────────────────────────────────────────

fn draw_menu(surface: &mut TerminalSurface, quota: u32) {
    let mid = surface.rows() / 2;
    let lines: [(&str, Color); 2] = [
        ("★  PORTAL  DASH  ★", Color::Cyan),
        ("Dodge the ▓ blocks and keep flying.", Color::DarkGrey),
    ];
    for (i, (text, color)) in lines.iter().enumerate() {
        surface.print_centered(mid.saturating_sub(5) + i as u16, text, *color);
    }

    let goal = format!("Collect {quota} ◐ coins, grab the ♦ key, reach the @ portal.");
    surface.print_centered(mid.saturating_sub(2), &goal, Color::Yellow);
    surface.print_centered(mid + 1, "[ENTER] Start    [Q] Quit", Color::White);
    surface.print_centered(
        mid + 3,
        "← ↑ → ↓ / W A S D : Move   ESC : Pause",
        Color::DarkGrey,
    );
}

fn draw_controls_hint(surface: &mut TerminalSurface, mode: GameMode) {
    let hint = match mode {
        GameMode::Start => return,
        GameMode::Running => "← ↑ → ↓ / W A S D : Move   ESC : Pause",
        GameMode::Paused => "ENTER / ESC : Resume   Q : Quit",
        GameMode::GameOver => "R : Restart   Q : Quit",
        GameMode::Won => "R : Play Again   Q : Exit",
    };
    let row = surface.rows().saturating_sub(1);
    surface.print_line(row, hint, Color::DarkGrey);
}

// ── Game loop ─────────────────────────────────────────────────────────────────

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> std::io::Result<()> {
    let (cols, rows) = terminal::size()?;
    let (width, height) = TerminalSurface::playfield_px(cols, rows);
    let config = GameConfig::from_env(width, height);
    if let Err(err) = config.validate() {
        log::error!("{err}");
        return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, err));
    }
    let frame = config.frame_interval;

    let mut game = Game::new(config, thread_rng());
    let mut surface = TerminalSurface::new(cols, rows);
    let mut bell = TerminalBell::new();

    // Glyph sprites are built in, so every asset is ready immediately.
    for asset in Asset::gameplay(game.config().coin_frames) {
        game.asset_loaded(asset);
    }

    loop {
        let frame_start = Instant::now();

        // ── Drain pending input between ticks ─────────────────────────────────
        while let Ok(event) = rx.try_recv() {
            let Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                modifiers,
                ..
            }) = event
            else {
                continue;
            };
            match interpret(code, modifiers, game.mode()) {
                Command::Exit => return Ok(()),
                Command::Key(key) => game.key_down(key, &mut surface),
                Command::Ui(action) => game.ui_action(action, &mut surface, &mut bell),
                Command::Nothing => {}
            }
        }

        if let Some(handle) = game.pending_tick() {
            game.on_frame(handle, &mut surface, &mut bell);
        }

        if game.mode() == GameMode::Start {
            surface.clear();
            draw_menu(&mut surface, game.config().coin_quota);
        }
        draw_controls_hint(&mut surface, game.mode());
        surface.present(out)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> std::io::Result<()> {
    init_logging();

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(err) => {
                log::error!("input thread stopped: {err}");
                break;
            }
        }
    });

    let result = run(&mut out, &rx);

    // Always restore the terminal
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    if let Err(err) = &result {
        log::error!("exiting: {err}");
    }
    result
}
