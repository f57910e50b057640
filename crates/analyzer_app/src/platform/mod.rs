//! Terminal front-end: wires the pure core to the engine and the console.
mod app;
mod cli;
mod config;
mod effects;
mod error;
mod logging;
mod ui;

pub use app::run_app;
