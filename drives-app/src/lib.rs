// SPDX-License-Identifier: GPL-3.0-only

//! Drive panels: one browsing panel per registered drive.
//!
//! Activation seeds a [`DriveRegistry`](state::registry::DriveRegistry) and
//! opens a panel per drive. Each panel subscribes to its drive's disposal, so
//! disposing a drive from any source (the context-menu remove command or host
//! shutdown) tears its panel down. The host UI only ever hands back panel
//! identifiers; [`identifier`] maps them to drive names and back.

pub mod app;
pub mod config;
pub mod host;
pub mod identifier;
pub mod logging;
pub mod message;
pub mod state;
mod update;

pub use app::DrivesApp;
pub use config::Config;
pub use message::{Message, Outcome};
