pub mod app;
pub mod chrome;
pub mod edit;
pub mod handlers;
pub mod persistence;
pub mod ui;
