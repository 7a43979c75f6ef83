//! blogdeck - a terminal client for the blog REST API
//!
//! The library holds the HTTP client, the auth and post flows, the browser
//! state machine and its rendering. The binary wires them to the terminal.

pub mod adapters;
pub mod api;
pub mod app;
pub mod cli;
pub mod cli_output;
pub mod config;
pub mod error;
pub mod flows;
pub mod logging;
pub mod models;
pub mod session;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod view;
