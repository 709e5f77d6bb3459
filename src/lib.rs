// Library exports for FitDesk CLI
// This allows testing of internal modules

pub mod api;
pub mod commands;
pub mod config;
pub mod detail;
pub mod export;
pub mod models;
pub mod session;
pub mod ui;
