pub mod bridge;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod navigation;
pub mod profile;
pub mod shutdown;
pub mod ui;
