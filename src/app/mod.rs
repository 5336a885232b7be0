pub mod action;
pub mod command;
pub mod config;
pub mod dispatcher;
pub mod input;
pub mod interpreter;
pub mod keymap;
pub mod r#loop;
pub mod reducer;
pub mod session;
pub mod state;
pub mod suggestions;
pub mod ui;
pub mod view;
