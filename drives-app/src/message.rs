// SPDX-License-Identifier: GPL-3.0-only

/// Command ids registered with the host command system.
pub mod command_ids {
    pub const ADD_DRIVE_BROWSER: &str = "drives:add-drive-browser";
    pub const REMOVE_DRIVE_BROWSER: &str = "drives:remove-drive-browser";
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Open a panel for every registered drive that has none.
    AddAllPanels,
    /// Remove the panel under the last context-menu event.
    RemoveSelectedPanel,
    /// Remove the panel with this identifier.
    RemovePanel(String),
    /// Host shutdown: dispose every drive.
    DisposeAll,
}

impl Message {
    /// Message dispatched for a host command id.
    pub fn from_command(id: &str) -> Option<Self> {
        match id {
            command_ids::ADD_DRIVE_BROWSER => Some(Self::AddAllPanels),
            command_ids::REMOVE_DRIVE_BROWSER => Some(Self::RemoveSelectedPanel),
            _ => None,
        }
    }
}

/// Panels opened and closed while handling one message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    pub opened: Vec<String>,
    pub closed: Vec<String>,
}

impl Outcome {
    pub fn is_empty(&self) -> bool {
        self.opened.is_empty() && self.closed.is_empty()
    }
}
