//! Falling-block playfield engine and its terminal front end.
//!
//! The engine modules (`board`, `tetromino`, `spawner`, `collision`,
//! `piece`, `clear`, `score`, `clock`, `game`) are pure and deterministic
//! given a seed and the elapsed time fed to [`game::Game::update`]. The
//! front end modules (`ui`, `input`, `audio`, `menu`, `settings`) wire the
//! engine to a terminal, a keyboard and a sound device.

pub mod audio;
pub mod board;
pub mod clear;
pub mod clock;
pub mod collision;
pub mod game;
pub mod input;
pub mod menu;
pub mod piece;
pub mod score;
pub mod settings;
pub mod snapshot;
pub mod spawner;
pub mod tetromino;
pub mod ui;
