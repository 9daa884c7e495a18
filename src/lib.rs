//! Nikki Tracker - Infinity Nikki progress checklist
//!
//! Tracks which Mira Levels have been reached and what each one rewards.
//! Level data comes from the built-in table, a spreadsheet CSV export over
//! HTTP, or a CSV file on disk, and is refreshed on a fixed interval.
//!
//! ## Layout
//!
//! - [`ingest`] parses sheet exports and wraps the data sources
//! - [`store`] holds checked state and persists it to local storage
//! - [`refresh`] runs the periodic background refresh
//! - [`tracker`] ties levels, checked state and load status together
//! - [`gui`] is the egui window on top of the tracker

pub mod config;
pub mod domain;
pub mod gui;
pub mod ingest;
pub mod refresh;
pub mod store;
pub mod tracker;

pub use domain::*;
pub use tracker::{LoadStatus, Tracker};
