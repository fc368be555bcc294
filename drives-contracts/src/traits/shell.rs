// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;

use serde::{Deserialize, Serialize};

/// Side of the host shell a panel is docked to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShellArea {
    #[default]
    Left,
    Right,
}

impl fmt::Display for ShellArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddOptions {
    pub rank: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelTitle {
    pub caption: String,
    pub icon: String,
    pub icon_class: String,
}

/// What the host needs to render and address a panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelDescriptor {
    pub id: String,
    pub title: PanelTitle,
}

/// The host layout system.
pub trait Shell: Send + Sync {
    fn add(&self, panel: &PanelDescriptor, area: ShellArea, options: AddOptions);

    /// Drop a disposed panel from the layout. Unknown ids are ignored.
    fn detach(&self, panel_id: &str);
}

/// Recreates panels after an application restart.
pub trait LayoutRestorer: Send + Sync {
    fn add(&self, panel: &PanelDescriptor, key: &str);

    /// Forget the panel registered under `key`.
    fn remove(&self, key: &str);
}
