// SPDX-License-Identifier: GPL-3.0-only

pub mod panels;
pub mod registry;

pub use panels::{Panel, PanelManager, PanelSettings, RemoveOutcome};
pub use registry::DriveRegistry;
