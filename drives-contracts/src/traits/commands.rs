// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandMetadata {
    pub caption: String,
    pub label: String,
}

/// A context-menu entry bound to a command and a node selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub command: String,
    pub selector: String,
    pub rank: i32,
}

/// A rendered UI node as seen by a context-menu hit-test.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiNode {
    pub title: String,
    #[serde(default)]
    pub data_id: Option<String>,
}

/// Named actions the host can invoke.
///
/// The host dispatches execution back to the extension by command id.
pub trait CommandRegistry: Send + Sync {
    fn add_command(&self, id: &str, metadata: CommandMetadata);

    fn has_command(&self, id: &str) -> bool;
}

pub trait ContextMenu: Send + Sync {
    fn add_item(&self, item: MenuItem);

    /// Drop every item bound to `selector`.
    fn remove_items(&self, selector: &str);

    /// The node under the most recent context-menu event that satisfies
    /// `predicate`, walking outwards from the event target.
    fn hit_test(&self, predicate: &dyn Fn(&UiNode) -> bool) -> Option<UiNode>;
}
