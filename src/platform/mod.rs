//! Native platform layer
//!
//! Owns the window, the framebuffer surface and the frame clock. Events are
//! buffered as they arrive and handed to the director at the start of the
//! next frame; a frame runs on every redraw, and a redraw is requested each
//! time the event loop goes idle.

pub mod input;

use std::mem;
use std::num::NonZeroU32;
use std::rc::Rc;

use fps_clock::FpsClock;
use softbuffer::{Context, Surface};
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::assets::Assets;
use crate::audio::AudioManager;
use crate::error::DemoError;
use crate::renderer::Canvas;
use crate::scene::{Director, SceneEvent};
use crate::settings::Settings;

type WindowSurface = Surface<Rc<Window>, Rc<Window>>;

/// Window plus the surface presenting into it
struct Display {
    window: Rc<Window>,
    surface: WindowSurface,
}

impl Display {
    fn open(event_loop: &ActiveEventLoop, settings: &Settings) -> Result<Self, DemoError> {
        let (width, height) = settings.window_size();
        let attributes = Window::default_attributes()
            .with_title(settings.title.as_str())
            .with_inner_size(PhysicalSize::new(width, height))
            .with_resizable(false);
        let window = Rc::new(event_loop.create_window(attributes)?);

        let context = Context::new(Rc::clone(&window))?;
        let mut surface = Surface::new(&context, Rc::clone(&window))?;
        surface.resize(
            NonZeroU32::new(width).unwrap_or(NonZeroU32::MIN),
            NonZeroU32::new(height).unwrap_or(NonZeroU32::MIN),
        )?;

        log::info!("Opened {}x{} window \"{}\"", width, height, settings.title);
        Ok(Self { window, surface })
    }

    /// Copy `canvas` to the window. Failures only cost this frame.
    fn present(&mut self, canvas: &Canvas) {
        let mut buffer = match self.surface.buffer_mut() {
            Ok(buffer) => buffer,
            Err(e) => {
                log::warn!("Skipping frame, no buffer: {}", e);
                return;
            }
        };

        for (dst, &src) in buffer.iter_mut().zip(canvas.pixels()) {
            *dst = src & 0x00FF_FFFF;
        }

        self.window.pre_present_notify();
        if let Err(e) = buffer.present() {
            log::warn!("Failed to present frame: {}", e);
        }
    }
}

/// The running demo
pub struct Demo {
    settings: Settings,
    director: Director,
    assets: Assets,
    audio: AudioManager,
    canvas: Canvas,
    clock: FpsClock,
    clock_rate: u32,
    pending: Vec<SceneEvent>,
    display: Option<Display>,
    error: Option<DemoError>,
}

impl Demo {
    pub fn new(settings: Settings, director: Director, assets: Assets, audio: AudioManager) -> Self {
        let (width, height) = settings.window_size();
        let clock_rate = director.frame_rate();
        Self {
            settings,
            director,
            assets,
            audio,
            canvas: Canvas::new(width, height),
            clock: FpsClock::new(clock_rate),
            clock_rate,
            pending: Vec::new(),
            display: None,
            error: None,
        }
    }

    fn fail(&mut self, event_loop: &ActiveEventLoop, error: DemoError) {
        self.error = Some(error);
        event_loop.exit();
    }

    /// Pace, step the director, present
    fn run_frame(&mut self, event_loop: &ActiveEventLoop) {
        let rate = self.director.frame_rate();
        if rate != self.clock_rate {
            log::debug!("Frame rate {} -> {}", self.clock_rate, rate);
            self.clock = FpsClock::new(rate);
            self.clock_rate = rate;
        }
        self.clock.tick();

        let events = mem::take(&mut self.pending);
        match self
            .director
            .frame(events, &mut self.canvas, &self.assets, &mut self.audio)
        {
            Ok(true) => {
                if let Some(display) = self.display.as_mut() {
                    display.present(&self.canvas);
                }
            }
            Ok(false) => event_loop.exit(),
            Err(e) => self.fail(event_loop, e),
        }
    }

    /// The fatal error that stopped the loop, if any
    pub fn take_error(&mut self) -> Option<DemoError> {
        self.error.take()
    }
}

impl ApplicationHandler for Demo {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.display.is_some() {
            return;
        }
        match Display::open(event_loop, &self.settings) {
            Ok(display) => {
                display.window.request_redraw();
                self.display = Some(display);
            }
            Err(e) => self.fail(event_loop, e),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::RedrawRequested => self.run_frame(event_loop),
            other => {
                if let Some(scene_event) = input::map_window_event(&other) {
                    self.pending.push(scene_event);
                }
            }
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(display) = &self.display {
            display.window.request_redraw();
        }
    }
}

/// Load everything, open the window and run until the scene chain is done
pub fn run(settings: Settings) -> Result<(), DemoError> {
    match serde_json::to_string(&settings) {
        Ok(json) => log::info!("Settings: {}", json),
        Err(e) => log::warn!("Could not serialize settings: {}", e),
    }
    log::info!("Our data directory is {}", settings.data_dir.display());

    let assets = Assets::load(&settings.data_dir)?;
    let mut audio = if settings.sound_on {
        AudioManager::open(&settings.data_dir)?
    } else {
        AudioManager::disabled()
    };

    let mut director = Director::demo(&settings)?;
    director.start(&mut audio)?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut demo = Demo::new(settings, director, assets, audio);
    event_loop.run_app(&mut demo)?;

    match demo.take_error() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
