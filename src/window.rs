//! SDL2 window that displays a [`FrameBuffer`].
//!
//! Only built with the `viewer` feature.

use sdl2::event::Event;
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::WindowContext;

use crate::render::{FrameBuffer, PixelTarget};

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 800;
pub const FPS: u64 = 60;
pub const FRAME_TARGET_TIME: f64 = 1000.0 / FPS as f64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    None,
    Quit,
    Resize(u32, u32),
    /// Switch between wireframe and shaded drawing.
    ToggleMode,
    /// Switch to the next rasterizer.
    CycleRasterizer,
}

pub struct FrameLimiter {
    previous_frame_time: u64,
}

impl FrameLimiter {
    pub fn new(window: &Window) -> Self {
        Self {
            previous_frame_time: window.timer().ticks64(),
        }
    }

    /// Waits if necessary to maintain frame rate and returns the delta time in milliseconds.
    pub fn wait_and_get_delta(&mut self, window: &Window) -> u64 {
        let target = FRAME_TARGET_TIME as u64;
        let mut current_time = window.timer().ticks64();
        let mut delta_time = current_time.saturating_sub(self.previous_frame_time);

        if delta_time < target {
            std::thread::sleep(std::time::Duration::from_millis(target - delta_time));
            current_time = window.timer().ticks64();
            delta_time = current_time.saturating_sub(self.previous_frame_time);
        }

        self.previous_frame_time = current_time;
        delta_time
    }
}

pub struct Window {
    canvas: Canvas<sdl2::video::Window>,
    // `texture` borrows from `texture_creator` and is declared first so it is
    // dropped first.
    texture: Texture<'static>,
    texture_creator: Box<TextureCreator<WindowContext>>,
    event_pump: sdl2::EventPump,
    timer_subsystem: sdl2::TimerSubsystem,
    width: u32,
    height: u32,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;
        let timer_subsystem = sdl_context.timer()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump()?;
        let texture = Self::streaming_texture(&texture_creator, width, height)?;

        Ok(Self {
            canvas,
            texture,
            texture_creator,
            event_pump,
            timer_subsystem,
            width,
            height,
        })
    }

    /// An ARGB8888 streaming texture, the layout of [`crate::colors::Argb8888`].
    fn streaming_texture(
        creator: &TextureCreator<WindowContext>,
        width: u32,
        height: u32,
    ) -> Result<Texture<'static>, String> {
        // SAFETY: the creator is boxed, so its address is stable, and it is
        // owned by the same `Window` as every texture made from it. The
        // texture field is dropped before the creator field.
        let creator: &'static TextureCreator<WindowContext> = unsafe { &*(creator as *const _) };
        creator
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())
    }

    pub fn poll_events(&mut self) -> WindowEvent {
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => return WindowEvent::Quit,
                Event::KeyDown {
                    keycode: Some(Keycode::Space),
                    repeat: false,
                    ..
                } => return WindowEvent::ToggleMode,
                Event::KeyDown {
                    keycode: Some(Keycode::Tab),
                    repeat: false,
                    ..
                } => return WindowEvent::CycleRasterizer,
                Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(w, h),
                    ..
                } => return WindowEvent::Resize(w.max(1) as u32, h.max(1) as u32),
                _ => {}
            }
        }
        WindowEvent::None
    }

    /// Upload `framebuffer` and show it, stretched to the window.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), String> {
        if (framebuffer.width(), framebuffer.height()) != (self.width, self.height) {
            self.resize(framebuffer.width(), framebuffer.height())?;
        }
        self.texture
            .update(None, framebuffer.as_bytes(), framebuffer.pitch() as usize * 4)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, Some(Rect::new(0, 0, self.width, self.height)))?;
        self.canvas.present();
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), String> {
        self.texture = Self::streaming_texture(&self.texture_creator, width, height)?;
        self.width = width;
        self.height = height;
        Ok(())
    }

    pub fn set_title(&mut self, title: &str) -> Result<(), String> {
        self.canvas.window_mut().set_title(title).map_err(|e| e.to_string())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn timer(&self) -> &sdl2::TimerSubsystem {
        &self.timer_subsystem
    }
}
