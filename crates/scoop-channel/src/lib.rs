//! Persistent push channel to the clip backend.
//!
//! This crate provides:
//! - The WebSocket connection and its connectivity state machine
//! - Typed decoding of push events in arrival order
//! - Command emission (`get_videos`)

pub mod config;
pub mod connection;
pub mod error;
pub mod state;

pub use config::ChannelConfig;
pub use connection::Channel;
pub use error::{ChannelError, ChannelResult};
pub use state::ConnectionState;
