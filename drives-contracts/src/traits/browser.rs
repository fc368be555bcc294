// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};

use crate::WidgetId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileBrowserOptions {
    pub drive_name: String,
}

/// A browsing widget bound to one drive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowserWidget {
    pub id: WidgetId,
    pub kind: String,
    pub drive_name: String,
}

/// Window/session tracking of widgets created by the factory.
pub trait WidgetTracker: Send + Sync {
    fn add(&self, widget: &BrowserWidget);
}

pub trait FileBrowserFactory: Send + Sync {
    fn create_file_browser(&self, kind: &str, options: FileBrowserOptions) -> BrowserWidget;

    fn tracker(&self) -> &dyn WidgetTracker;
}
