// SPDX-License-Identifier: GPL-3.0-only

//! The host collaborators the extension is activated against.

mod headless;

pub use headless::{HeadlessHost, PlacedPanel};

use std::fmt;
use std::sync::Arc;

use drives_contracts::{
    CommandRegistry, ContentManager, ContextMenu, FileBrowserFactory, LayoutRestorer, Shell,
    ToolbarRegistry, Translator,
};

/// Handles to every host collaborator. The restorer is optional.
#[derive(Clone)]
pub struct HostServices {
    pub contents: Arc<dyn ContentManager>,
    pub shell: Arc<dyn Shell>,
    pub restorer: Option<Arc<dyn LayoutRestorer>>,
    pub file_browsers: Arc<dyn FileBrowserFactory>,
    pub toolbars: Arc<dyn ToolbarRegistry>,
    pub commands: Arc<dyn CommandRegistry>,
    pub context_menu: Arc<dyn ContextMenu>,
    pub translator: Arc<dyn Translator>,
}

impl fmt::Debug for HostServices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostServices")
            .field("restorer", &self.restorer.is_some())
            .finish_non_exhaustive()
    }
}
