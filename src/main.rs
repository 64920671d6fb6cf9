//! Arcade launcher with a falling-block game for the terminal.

use arcade_blocks::{
    audio::AudioManager,
    game::{Command, Game},
    input::InputHandler,
    menu::{Menu, MenuAction},
    settings::Settings,
    snapshot::Progress,
    ui,
};
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::{self, stdout},
    path::PathBuf,
    time::{Duration, Instant},
};

/// Target frame rate
const TARGET_FPS: u64 = 60;
const FRAME_DURATION: Duration = Duration::from_micros(1_000_000 / TARGET_FPS);

/// Application state
enum AppState {
    Menu(Menu),
    Playing(Game, InputHandler),
}

/// Temp directory for session logs, created if needed
fn log_dir() -> PathBuf {
    let dir = std::env::temp_dir().join("arcade-blocks");
    let _ = std::fs::create_dir_all(&dir);
    dir
}

fn main() -> io::Result<()> {
    let session_id: u32 = rand::random();
    let dir = log_dir();
    let log_file = format!("{:08x}.log", session_id);

    // stdout belongs to the terminal UI, so logs go to a file
    let file_appender = tracing_appender::rolling::never(&dir, &log_file);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("arcade_blocks=debug"));
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_env_filter(filter)
        .with_ansi(false)
        .init();

    tracing::info!(
        "starting up, session={:08x}, log={}",
        session_id,
        dir.join(&log_file).display()
    );

    let settings = Settings::load();

    // Game works without audio
    let mut audio = AudioManager::new();
    if let Some(a) = audio.as_mut() {
        a.set_sfx_volume(settings.audio.sfx_volume as f32 / 100.0);
    }

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &settings, audio.as_ref());

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout(), LeaveAlternateScreen)?;

    match &result {
        Ok(Some(progress)) => {
            println!("Thanks for playing!");
            println!("Final Score: {}", progress.score);
            println!("Level: {} | Lines: {}", progress.level, progress.lines);
        }
        Ok(None) => println!("Thanks for playing!"),
        Err(e) => tracing::error!("terminal error: {}", e),
    }

    result.map(|_| ())
}

/// Main loop. Returns the progress of the last game played, if any.
fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    settings: &Settings,
    audio: Option<&AudioManager>,
) -> io::Result<Option<Progress>> {
    let mut state = AppState::Menu(Menu::new());
    let mut last_progress: Option<Progress> = None;
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| match &state {
            AppState::Menu(menu) => ui::render_menu(frame, menu),
            AppState::Playing(game, _) => ui::render_game(frame, &game.snapshot(), settings),
        })?;

        if event::poll(FRAME_DURATION)? {
            if let Event::Key(key) = event::read()? {
                match &mut state {
                    AppState::Menu(menu) => {
                        if key.kind != KeyEventKind::Press {
                            continue;
                        }
                        match key.code {
                            KeyCode::Up => menu.move_up(),
                            KeyCode::Down => menu.move_down(),
                            KeyCode::Char('q') | KeyCode::Esc => return Ok(last_progress),
                            KeyCode::Enter => match menu.select() {
                                Some(MenuAction::StartTetris) => {
                                    tracing::info!("starting tetris");
                                    let game = Game::new(settings.engine_config());
                                    let input = InputHandler::from_settings(settings);
                                    state = AppState::Playing(game, input);
                                    last_frame = Instant::now();
                                }
                                Some(MenuAction::Quit) => return Ok(last_progress),
                                None => {}
                            },
                            _ => {}
                        }
                    }
                    AppState::Playing(game, input) => match input.command(key) {
                        Some(Command::ExitToMenu) => {
                            last_progress = Some(game.progress());
                            tracing::info!("back to menu");
                            state = AppState::Menu(Menu::new());
                        }
                        Some(command) => game.process_command(command),
                        None => {}
                    },
                }
            }
        }

        // Gravity and animations run on wall-clock time, independent of input
        let now = Instant::now();
        let dt = now.duration_since(last_frame);
        last_frame = now;

        if let AppState::Playing(game, _) = &mut state {
            game.update(dt);
            let events = game.drain_events();
            if let Some(audio) = audio {
                audio.play_events(&events);
            }
        }
    }
}
