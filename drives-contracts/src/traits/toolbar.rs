// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolbarItem {
    pub name: String,
    #[serde(default)]
    pub rank: Option<u32>,
}

/// Toolbar layouts resolved from the host settings.
pub trait ToolbarRegistry: Send + Sync {
    fn toolbar_for(&self, factory_name: &str, plugin_id: &str) -> Vec<ToolbarItem>;
}
