//! Fatal error type
//!
//! Anything that goes wrong while loading assets or bringing up the window
//! and mixer ends the program; `main` reports it and exits non-zero.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DemoError {
    #[error("cannot open {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("could not load image {}: {source}", .path.display())]
    Image {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("cannot decode sound {}: {source}", .path.display())]
    Sound {
        path: PathBuf,
        source: rodio::decoder::DecoderError,
    },

    #[error("cannot open the mixer: {0}")]
    Mixer(#[from] rodio::StreamError),

    #[error("cannot start playback: {0}")]
    Playback(#[from] rodio::PlayError),

    #[error("event loop failure: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),

    #[error("cannot create window: {0}")]
    Window(#[from] winit::error::OsError),

    #[error("framebuffer surface failure: {0}")]
    Surface(#[from] softbuffer::SoftBufferError),

    #[error("placed only {placed} of {requested} boxes before running out of attempts")]
    Placement { placed: usize, requested: usize },
}
