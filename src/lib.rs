pub mod app;
pub mod config;
pub mod demo;
pub mod export;
pub mod form;
pub mod ranking;
pub mod state;
pub mod ui;
