//! FitTrack server
//!
//! A local HTTP/JSON server over an embedded SQLite store: one user
//! profile with goals, per-day metrics (calories, water, sleep), a
//! workout log, and a daily goal-feedback summary. Serves an embedded
//! static shell at `/` for the desktop wrapper.

mod app;

pub mod api;
pub mod core;
pub mod data;
pub mod domain;
pub mod utils;
