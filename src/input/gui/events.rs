/// Custom user events for the GUI event loop.
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// Signals that the presenter may hold a new frame. The handler still
    /// has to call `window.request_redraw()` to display it.
    Wake,
}
