pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod events;
pub mod terms;
pub mod ui;
pub mod util;
