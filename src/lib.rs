pub mod app;
pub mod carousel;
pub mod config;
pub mod event;
pub mod form;
pub mod handlers;
pub mod section;
pub mod tui;
pub mod ui;
pub mod utils;
