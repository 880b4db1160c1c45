//! Process wiring: configuration, logging, the HTTP UI and effect execution.
mod app;
mod config;
mod effects;
mod logging;
mod ui;

pub use app::run_app;
