//! Fleet dashboard terminal client.

pub mod api_client;
pub mod config;
pub mod error;
pub mod events;
pub mod input;
pub mod keys;
pub mod logging;
pub mod source;
pub mod state;
pub mod tasks;
pub mod theme;
pub mod views;
pub mod widgets;
