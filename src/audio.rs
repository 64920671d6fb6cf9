//! Sound effects triggered by engine events
//!
//! Audio is optional. Without an output device or an `assets/sfx`
//! directory the manager is simply not created and the game runs silent.

use crate::game::GameEvent;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Sfx {
    Move,
    Rotate,
    Drop,
    Clear,
    GameOver,
}

impl Sfx {
    fn filename(&self) -> &'static str {
        match self {
            Sfx::Move => "move.wav",
            Sfx::Rotate => "rotate.wav",
            Sfx::Drop => "drop.wav",
            Sfx::Clear => "clear.wav",
            Sfx::GameOver => "gameover.wav",
        }
    }

    /// Sound for an engine event
    pub fn for_event(event: GameEvent) -> Self {
        match event {
            GameEvent::PieceMoved => Sfx::Move,
            GameEvent::PieceRotated => Sfx::Rotate,
            GameEvent::PieceLocked => Sfx::Drop,
            GameEvent::LinesCleared(_) => Sfx::Clear,
            GameEvent::GameOver => Sfx::GameOver,
        }
    }
}

/// Audio manager handles all sound playback
pub struct AudioManager {
    _stream: OutputStream,
    stream_handle: OutputStreamHandle,
    assets_path: PathBuf,
    sfx_volume: f32,
}

impl AudioManager {
    /// Create a new audio manager, None when there is no device or no assets
    pub fn new() -> Option<Self> {
        let assets_path = Self::find_assets_path()?;
        let (stream, stream_handle) = OutputStream::try_default()
            .inspect_err(|e| tracing::info!("no audio output: {}", e))
            .ok()?;

        tracing::info!("audio assets at {}", assets_path.display());
        Some(Self {
            _stream: stream,
            stream_handle,
            assets_path,
            sfx_volume: 0.5,
        })
    }

    fn find_assets_path() -> Option<PathBuf> {
        let mut paths = vec![PathBuf::from("assets")];
        if let Some(dir) = std::env::current_exe()
            .ok()
            .and_then(|exe| exe.parent().map(|p| p.join("assets")))
        {
            paths.push(dir);
        }

        paths.into_iter().find(|p| p.join("sfx").is_dir())
    }

    /// Set SFX volume (0.0 to 1.0)
    pub fn set_sfx_volume(&mut self, volume: f32) {
        self.sfx_volume = volume.clamp(0.0, 1.0);
    }

    /// Play the sound for each event, in order
    pub fn play_events(&self, events: &[GameEvent]) {
        for &event in events {
            self.play_sfx(Sfx::for_event(event));
        }
    }

    /// Play a sound effect
    pub fn play_sfx(&self, sfx: Sfx) {
        if self.sfx_volume <= 0.0 {
            return;
        }

        let path = self.assets_path.join("sfx").join(sfx.filename());
        let Ok(file) = File::open(&path) else {
            tracing::debug!("missing sound {}", path.display());
            return;
        };
        let Ok(decoder) = Decoder::new(BufReader::new(file)) else {
            tracing::warn!("could not decode {}", path.display());
            return;
        };
        if let Ok(sink) = Sink::try_new(&self.stream_handle) {
            sink.set_volume(self.sfx_volume);
            sink.append(decoder);
            sink.detach(); // Let it play and clean up automatically
        }
    }
}
