pub mod adapters;
pub mod controllers;
pub mod core;
#[cfg(feature = "gui")]
pub mod input;
#[cfg(feature = "gui")]
pub mod presenters;
pub mod storage;

pub use controllers::snapshot::snapshot_controller;

#[cfg(feature = "gui")]
pub use input::gui::run_gui;
