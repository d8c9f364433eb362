use pixels::{Pixels, SurfaceTexture};
use std::sync::{Arc, Mutex};
use winit::event_loop::EventLoopProxy;
use winit::window::Window;

use crate::adapters::pixel_format::copy_rgb_to_rgba;
use crate::controllers::interactive::events::render_event::RenderEvent;
use crate::controllers::interactive::ports::presenter_port::PresenterPort;
use crate::input::gui::events::GuiEvent;

struct PixelsPresenterPort {
    render_event: Mutex<Option<RenderEvent>>,
    event_loop_proxy: EventLoopProxy<GuiEvent>,
}

impl PresenterPort for PixelsPresenterPort {
    fn present(&self, event: RenderEvent) {
        *self.render_event.lock().unwrap() = Some(event);
        let _ = self.event_loop_proxy.send_event(GuiEvent::Wake);
    }
}

/// Presents rendered frames into a pixels framebuffer on the window.
///
/// The render worker hands frames to the shared port from its own thread;
/// the event loop drains them here on redraw.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    presenter_port: Arc<PixelsPresenterPort>,
    width: u32,
    height: u32,
    has_frame: bool,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window, event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)
            .expect("Failed to create pixels surface");

        Self {
            pixels,
            presenter_port: Arc::new(PixelsPresenterPort {
                render_event: Mutex::new(None),
                event_loop_proxy,
            }),
            width: size.width,
            height: size.height,
            has_frame: false,
        }
    }

    pub fn share_presenter_port(&self) -> Arc<dyn PresenterPort> {
        Arc::clone(&self.presenter_port) as Arc<dyn PresenterPort>
    }

    #[must_use]
    pub fn take_render_event(&self) -> Option<RenderEvent> {
        self.presenter_port.render_event.lock().unwrap().take()
    }

    fn draw_placeholder(&mut self) {
        for pixel in self.pixels.frame_mut().chunks_exact_mut(4) {
            pixel[0] = 0;
            pixel[1] = 0;
            pixel[2] = 0;
            pixel[3] = 255;
        }
    }

    /// Copies the latest matching frame into the framebuffer and renders it.
    ///
    /// Frames from superseded generations or with stale dimensions are
    /// dropped; the previous frame stays on screen.
    pub fn render(&mut self, requested_generation: u64) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        if let Some(event) = self.take_render_event() {
            match event {
                RenderEvent::Frame(frame) => {
                    if frame.generation == requested_generation
                        && frame.surface.width() == self.width
                        && frame.surface.height() == self.height
                    {
                        copy_rgb_to_rgba(frame.surface.data(), self.pixels.frame_mut());
                        self.has_frame = true;
                    }
                }
                RenderEvent::Error(error) => {
                    eprintln!("render request rejected: {}", error.message);
                }
            }
        }

        if !self.has_frame {
            self.draw_placeholder();
        }

        self.pixels.render()
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.width = width;
        self.height = height;

        self.pixels
            .resize_surface(width, height)
            .expect("Failed to resize surface");
        self.pixels
            .resize_buffer(width, height)
            .expect("Failed to resize buffer");

        self.has_frame = false;
    }
}
