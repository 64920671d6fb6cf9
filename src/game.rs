//! Core game state and logic
//!
//! The engine is a plain state machine stepped by the caller. Player
//! commands apply immediately; `update` advances timers by the elapsed time
//! handed in. Nothing here touches the terminal, audio, or a system clock.

use crate::board::Board;
use crate::clear::{ClearState, ClearTiming};
use crate::clock::GameClock;
use crate::piece::Piece;
use crate::score::{GravityCurve, Score};
use crate::snapshot::{Progress, Snapshot};
use crate::spawner::PieceSpawner;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;
use tracing::{debug, info};

/// Engine tuning, normally built from the settings file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineConfig {
    pub gravity: GravityCurve,
    pub clear: ClearTiming,
    /// Fixed seed for the piece sequence; None draws one from the OS
    pub seed: Option<u64>,
}

/// Game state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    /// A piece is falling and accepts commands
    Falling,
    /// The piece could not fall further and is being written into the board.
    /// Resolved within the same update that entered it.
    Locking,
    /// Full rows are flashing before they are removed
    Clearing,
    GameOver,
}

/// Discrete player commands, at most one per key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    RotateCw,
    Reset,
    /// Handled by the shell; the engine ignores it
    ExitToMenu,
}

/// Things that happened, for the audio side to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    PieceMoved,
    PieceRotated,
    PieceLocked,
    /// Full rows detected; the count is how many will be removed
    LinesCleared(u32),
    GameOver,
}

/// The main game struct
#[derive(Debug)]
pub struct Game<R = ChaCha8Rng> {
    board: Board,
    /// Falling piece, None while clearing and after game over
    current_piece: Option<Piece>,
    spawner: PieceSpawner<R>,
    score: Score,
    state: GameState,
    /// Gravity timer
    clock: GameClock,
    /// Pending rows, Some only in `GameState::Clearing`
    clearing: Option<ClearState>,
    config: EngineConfig,
    events: Vec<GameEvent>,
}

impl Game<ChaCha8Rng> {
    /// Create a new game, seeded from the config when it carries a seed
    pub fn new(config: EngineConfig) -> Self {
        let spawner = match config.seed {
            Some(seed) => PieceSpawner::new(seed),
            None => PieceSpawner::from_entropy(),
        };
        Self::with_spawner(config, spawner)
    }
}

impl<R: Rng> Game<R> {
    /// Create a game dealing pieces from the given spawner
    pub fn with_spawner(config: EngineConfig, spawner: PieceSpawner<R>) -> Self {
        let mut game = Self {
            board: Board::new(),
            current_piece: None,
            spawner,
            score: Score::new(config.gravity),
            state: GameState::Falling,
            clock: GameClock::new(),
            clearing: None,
            config,
            events: Vec::new(),
        };
        game.spawn_piece();
        game
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_piece(&self) -> Option<&Piece> {
        self.current_piece.as_ref()
    }

    pub fn score(&self) -> &Score {
        &self.score
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn clear_state(&self) -> Option<&ClearState> {
        self.clearing.as_ref()
    }

    pub fn progress(&self) -> Progress {
        Progress {
            score: self.score.points,
            lines: self.score.lines,
            level: self.score.level,
        }
    }

    /// Take the events raised since the last call
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Process a player command. Commands that would put the piece somewhere
    /// illegal, or arrive outside `Falling`, are dropped without a trace.
    pub fn process_command(&mut self, command: Command) {
        match command {
            Command::Reset => {
                self.reset();
                return;
            }
            Command::ExitToMenu => return,
            _ => {}
        }

        if self.state != GameState::Falling {
            return;
        }
        let Some(piece) = self.current_piece.as_mut() else {
            return;
        };

        let event = match command {
            Command::MoveLeft => piece.move_left(&self.board).then_some(GameEvent::PieceMoved),
            Command::MoveRight => piece.move_right(&self.board).then_some(GameEvent::PieceMoved),
            Command::SoftDrop => piece.move_down(&self.board).then_some(GameEvent::PieceMoved),
            Command::RotateCw => piece.rotate_cw(&self.board).then_some(GameEvent::PieceRotated),
            Command::Reset | Command::ExitToMenu => None,
        };
        if let Some(event) = event {
            self.events.push(event);
        }
    }

    /// Update game state with the time elapsed since the previous call
    pub fn update(&mut self, dt: Duration) {
        match self.state {
            GameState::Falling => {
                if self.clock.advance(dt, self.score.gravity_interval()) {
                    self.gravity_tick();
                }
            }
            GameState::Locking => self.lock_piece(),
            GameState::Clearing => {
                let timing = self.config.clear;
                let done = self
                    .clearing
                    .as_mut()
                    .is_some_and(|clearing| clearing.advance(dt, &timing));
                if done {
                    self.finish_clear();
                }
            }
            GameState::GameOver => {}
        }
    }

    /// Start over with an empty board and fresh progress.
    /// The piece sequence carries on from the same random source.
    pub fn reset(&mut self) {
        info!(
            score = self.score.points,
            lines = self.score.lines,
            "resetting game"
        );
        self.board.clear();
        self.score = Score::new(self.config.gravity);
        self.clearing = None;
        self.current_piece = None;
        self.spawn_piece();
    }

    /// Render-side view of the current frame
    pub fn snapshot(&self) -> Snapshot {
        let next = self.spawner.peek_next();
        let (clearing_rows, flash_on) = match &self.clearing {
            Some(clearing) => (
                clearing.rows().to_vec(),
                clearing.flash_on(&self.config.clear),
            ),
            None => (Vec::new(), false),
        };
        Snapshot {
            cells: *self.board.rows(),
            active: self.current_piece,
            next,
            next_shape: next.shape(),
            progress: self.progress(),
            clearing_rows,
            flash_on,
            state: self.state,
        }
    }

    fn gravity_tick(&mut self) {
        let Some(piece) = self.current_piece.as_mut() else {
            return;
        };
        if !piece.move_down(&self.board) {
            self.state = GameState::Locking;
            self.lock_piece();
        }
    }

    /// Write the current piece into the board, then either start a clear or
    /// spawn the next piece
    fn lock_piece(&mut self) {
        let Some(piece) = self.current_piece.take() else {
            return;
        };
        piece.lock(&mut self.board);
        self.events.push(GameEvent::PieceLocked);
        debug!(kind = ?piece.piece_type, x = piece.x, y = piece.y, "piece locked");

        match ClearState::scan(&self.board) {
            Some(clearing) => {
                let count = clearing.rows().len() as u32;
                debug!(rows = ?clearing.rows(), "rows full, flashing");
                self.events.push(GameEvent::LinesCleared(count));
                self.clearing = Some(clearing);
                self.state = GameState::Clearing;
            }
            None => self.spawn_piece(),
        }
    }

    fn finish_clear(&mut self) {
        let Some(clearing) = self.clearing.take() else {
            return;
        };
        let removed = clearing.collapse(&mut self.board);
        let awarded = self.score.add_clear(removed);
        debug!(
            removed,
            awarded,
            level = self.score.level,
            "rows collapsed"
        );
        self.spawn_piece();
    }

    /// Deal the next piece. A spawn that overlaps the stack ends the game
    /// and leaves the board untouched.
    fn spawn_piece(&mut self) {
        let piece = self.spawner.next();
        self.clock.restart();

        if !piece.fits(&self.board) {
            info!(
                kind = ?piece.piece_type,
                score = self.score.points,
                lines = self.score.lines,
                level = self.score.level,
                "spawn blocked, game over"
            );
            self.current_piece = None;
            self.state = GameState::GameOver;
            self.events.push(GameEvent::GameOver);
            return;
        }

        debug!(kind = ?piece.piece_type, next = ?self.spawner.peek_next(), "spawned");
        self.current_piece = Some(piece);
        self.state = GameState::Falling;
    }
}
