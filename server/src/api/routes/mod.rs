//! API route handlers

pub mod analytics;
pub mod dates;
pub mod exercises;
pub mod health;
pub mod metrics;
pub mod profile;
pub mod workouts;
