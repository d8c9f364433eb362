//! Main GUI application loop.
//!
//! Key bindings: Up/Down step the lens curvature radius, Left/Right step
//! the wavelength, `C` toggles colour mode and `R` resets to defaults.

use std::sync::Arc;

use winit::dpi::LogicalSize;
use winit::event::{ElementState, Event, WindowEvent};
use winit::event_loop::EventLoopBuilder;
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowBuilder};

use crate::controllers::interactive::InteractiveController;
use crate::input::gui::events::GuiEvent;
use crate::input::gui::ui_state::UiState;
use crate::presenters::pixels::presenter::PixelsPresenter;

struct GuiApp {
    width: u32,
    height: u32,
    presenter: PixelsPresenter,
    controller: InteractiveController,
    ui_state: UiState,
}

impl GuiApp {
    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.presenter.resize(width, height);
    }

    /// Maps a key press onto the parameter state. Returns true if the key
    /// changed a parameter.
    fn handle_key(&mut self, key: &Key) -> bool {
        match key {
            Key::Named(NamedKey::ArrowUp) => {
                self.ui_state.increase_lens_radius();
                true
            }
            Key::Named(NamedKey::ArrowDown) => {
                self.ui_state.decrease_lens_radius();
                true
            }
            Key::Named(NamedKey::ArrowRight) => {
                self.ui_state.increase_wavelength();
                true
            }
            Key::Named(NamedKey::ArrowLeft) => {
                self.ui_state.decrease_wavelength();
                true
            }
            Key::Character(text) => match text.as_str() {
                "c" | "C" => {
                    self.ui_state.toggle_colour_mode();
                    true
                }
                "r" | "R" => {
                    self.ui_state.reset();
                    true
                }
                _ => false,
            },
            _ => false,
        }
    }

    fn submit_render_request_if_needed(&mut self) {
        if self.width == 0 || self.height == 0 {
            return;
        }

        let request = self.ui_state.build_render_request(self.width, self.height);

        if self.ui_state.should_submit(&request) {
            let request = Arc::new(request);
            let generation = self.controller.submit_request(Arc::clone(&request));
            self.ui_state.record_submission(request, generation);
        }
    }

    fn render(&mut self) -> Result<(), pixels::Error> {
        self.presenter
            .render(self.ui_state.latest_submitted_generation)
    }
}

/// Runs the GUI application.
///
/// This function does not return until the window is closed.
pub fn run_gui() {
    let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event()
        .build()
        .expect("Failed to create event loop");

    let event_loop_proxy = event_loop.create_proxy();

    // Leak the window to get a 'static reference for pixels
    let window: &'static Window = Box::leak(Box::new(
        WindowBuilder::new()
            .with_title("Newton's Rings")
            .with_inner_size(LogicalSize::new(500.0, 500.0))
            .with_min_inner_size(LogicalSize::new(100.0, 100.0))
            .build(&event_loop)
            .expect("Failed to create window"),
    ));

    let size = window.inner_size();
    let presenter = PixelsPresenter::new(window, event_loop_proxy);
    let controller = InteractiveController::new(presenter.share_presenter_port());

    let mut app = GuiApp {
        width: size.width,
        height: size.height,
        presenter,
        controller,
        ui_state: UiState::default(),
    };

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, window_id } if window_id == window.id() => match event {
                WindowEvent::CloseRequested => {
                    elwt.exit();
                }
                WindowEvent::Resized(new_size) => {
                    app.resize(new_size.width, new_size.height);
                    app.submit_render_request_if_needed();
                }
                WindowEvent::KeyboardInput {
                    event: key_event, ..
                } => {
                    if key_event.state == ElementState::Pressed
                        && app.handle_key(&key_event.logical_key)
                    {
                        app.submit_render_request_if_needed();
                    }
                }
                WindowEvent::RedrawRequested => {
                    if let Err(e) = app.render() {
                        eprintln!("Render error: {e}");
                        elwt.exit();
                    }
                }
                _ => {}
            },
            Event::UserEvent(GuiEvent::Wake) => {
                window.request_redraw();
            }
            Event::AboutToWait => {
                // Covers the initial frame; afterwards the dirty check makes
                // this a no-op until a parameter actually changes.
                app.submit_render_request_if_needed();
            }
            _ => {}
        })
        .expect("Event loop failed");
}
