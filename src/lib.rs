pub mod app;
pub mod app_dir;
pub mod backend_task;
pub mod chain;
pub mod components;
pub mod config;
pub mod context;
pub mod database;
pub mod logging;
pub mod model;
pub mod ui;
pub mod utils;
pub mod wallet;
