//! Audio playback using rodio
//!
//! Sound effects are decoded once at startup and replayed from memory. Scenes
//! may also loop a soundtrack streamed from disk. With sound turned off the
//! manager holds no output device and every request is a no-op.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use rodio::source::Buffered;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink, Source};

use crate::error::DemoError;

/// File name of the box-on-box collision sound inside the data directory
pub const BOUNCE_SOUND: &str = "bounce.wav";
/// File name of the wall reflection sound inside the data directory
pub const REFLECT_SOUND: &str = "reflect.wav";

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Two boxes collided
    Bounce,
    /// A box touched the boundary
    Reflect,
}

type Sound = Buffered<Decoder<BufReader<File>>>;

/// An open output device with the effects decoded for it
struct Output {
    // Dropping the stream silences everything played through the handle
    _stream: OutputStream,
    handle: OutputStreamHandle,
    bounce: Sound,
    reflect: Sound,
}

/// Audio manager for the demo
pub struct AudioManager {
    output: Option<Output>,
    music: Option<Sink>,
}

impl AudioManager {
    /// A manager that never makes a sound
    pub fn disabled() -> Self {
        log::warn!("Warning: sound disabled.");
        Self {
            output: None,
            music: None,
        }
    }

    /// Open the default output device and decode the effects found in `data_dir`.
    ///
    /// Fails if there is no usable device or either effect can't be read.
    pub fn open(data_dir: &Path) -> Result<Self, DemoError> {
        let (stream, handle) = OutputStream::try_default()?;
        let bounce = load_sound(&data_dir.join(BOUNCE_SOUND))?;
        let reflect = load_sound(&data_dir.join(REFLECT_SOUND))?;

        log::info!("Audio output opened");

        Ok(Self {
            output: Some(Output {
                _stream: stream,
                handle,
                bounce,
                reflect,
            }),
            music: None,
        })
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        let Some(output) = &self.output else { return };

        let sound = match effect {
            SoundEffect::Bounce => output.bounce.clone(),
            SoundEffect::Reflect => output.reflect.clone(),
        };

        if let Err(e) = output.handle.play_raw(sound.convert_samples()) {
            log::warn!("Could not play {:?}: {}", effect, e);
        }
    }

    /// Start looping `path` as background music, replacing any current track
    pub fn play_music(&mut self, path: &Path) -> Result<(), DemoError> {
        let Some(output) = &self.output else {
            return Ok(());
        };

        let file = open(path)?;
        let track = Decoder::new(BufReader::new(file)).map_err(|source| DemoError::Sound {
            path: path.to_path_buf(),
            source,
        })?;

        let sink = Sink::try_new(&output.handle)?;
        sink.append(track.repeat_infinite());

        self.stop_music();
        self.music = Some(sink);
        log::info!("Looping soundtrack {}", path.display());
        Ok(())
    }

    /// Stop the background music, if any
    pub fn stop_music(&mut self) {
        if let Some(sink) = self.music.take() {
            sink.stop();
        }
    }

    pub fn is_music_playing(&self) -> bool {
        self.music.is_some()
    }
}

fn open(path: &Path) -> Result<File, DemoError> {
    File::open(path).map_err(|source| DemoError::Io {
        path: PathBuf::from(path),
        source,
    })
}

fn load_sound(path: &Path) -> Result<Sound, DemoError> {
    let file = open(path)?;
    let decoder = Decoder::new(BufReader::new(file)).map_err(|source| DemoError::Sound {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decoder.buffered())
}
