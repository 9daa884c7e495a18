//! GUI module for the tracker window
//!
//! An egui/eframe window over a [`crate::Tracker`]. The refresh schedule is
//! created with the window and polled once per frame; checkbox changes are
//! written straight back to the tracker (and its store).

pub mod app;
mod app_eframe;
mod app_theme;
pub mod level_list;
pub mod runner;
pub mod status_bar;
pub mod tabs;
pub mod theme;

pub use app::TrackerApp;
pub use runner::run_gui;
pub use tabs::Tab;
