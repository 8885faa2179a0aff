//! Portal Dash core.
//!
//! A side-scrolling arcade loop: dodge obstacles, collect coins until the
//! quota is met, grab the key, then fly into the portal. Everything in this
//! crate is host-agnostic; the terminal shell in `main.rs` supplies the
//! render surface, audio sink, input and frame pacing.

pub mod collision;
pub mod config;
pub mod entities;
pub mod error;
pub mod game;
pub mod host;
pub mod motion;
pub mod scheduler;
pub mod spawner;
pub mod state;
