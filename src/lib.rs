pub mod app;
pub mod client;
pub mod config;
pub mod controller;
pub mod errors;
pub mod handlers;
pub mod models;
pub mod state;
pub mod stats;
pub mod ui;
pub mod view;

pub use app::router;
pub use client::{HttpStatsApi, StatsApi};
pub use config::Config;
pub use controller::{Phase, StatsDashboardController};
pub use state::AppState;
