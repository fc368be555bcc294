// SPDX-License-Identifier: GPL-3.0-only

//! In-memory host that records every call made into it.
//!
//! Backs the command-line front end and the tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use drives_contracts::{
    AddOptions, BrowserWidget, CommandMetadata, CommandRegistry, ContentManager, ContextMenu,
    FileBrowserFactory, FileBrowserOptions, IdentityTranslator, LayoutRestorer, MenuItem,
    PanelDescriptor, Shell, ShellArea, ToolbarItem, ToolbarRegistry, UiNode, WidgetId,
    WidgetTracker,
};
use drives_types::Drive;
use serde::Serialize;

use super::HostServices;

/// A panel currently attached to the headless shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacedPanel {
    pub panel: PanelDescriptor,
    pub area: ShellArea,
    pub rank: u32,
}

#[derive(Debug, Default)]
struct Records {
    drives: Vec<Arc<Drive>>,
    attached: Vec<PlacedPanel>,
    detached: Vec<String>,
    restorations: Vec<(String, String)>,
    commands: Vec<(String, CommandMetadata)>,
    menu_items: Vec<MenuItem>,
    tracked: Vec<BrowserWidget>,
    /// Nodes under the last context-menu event, innermost first.
    context_path: Vec<UiNode>,
}

#[derive(Debug, Default)]
pub struct HeadlessHost {
    records: Mutex<Records>,
    toolbars: HashMap<(String, String), Vec<ToolbarItem>>,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_toolbar(
        mut self,
        factory_name: &str,
        plugin_id: &str,
        items: Vec<ToolbarItem>,
    ) -> Self {
        self.toolbars
            .insert((factory_name.to_string(), plugin_id.to_string()), items);
        self
    }

    /// Bundle this host as the full set of collaborators.
    pub fn services(self: &Arc<Self>, with_restorer: bool) -> HostServices {
        HostServices {
            contents: self.clone(),
            shell: self.clone(),
            restorer: with_restorer.then(|| self.clone() as Arc<dyn LayoutRestorer>),
            file_browsers: self.clone(),
            toolbars: self.clone(),
            commands: self.clone(),
            context_menu: self.clone(),
            translator: Arc::new(IdentityTranslator),
        }
    }

    /// Simulate a context-menu event over `nodes`, innermost first.
    pub fn set_context_path(&self, nodes: Vec<UiNode>) {
        self.lock().context_path = nodes;
    }

    pub fn attached_panels(&self) -> Vec<PlacedPanel> {
        self.lock().attached.clone()
    }

    pub fn attached_ids(&self) -> Vec<String> {
        self.lock()
            .attached
            .iter()
            .map(|p| p.panel.id.clone())
            .collect()
    }

    pub fn detached_ids(&self) -> Vec<String> {
        self.lock().detached.clone()
    }

    pub fn content_drives(&self) -> Vec<String> {
        self.lock()
            .drives
            .iter()
            .map(|d| d.name().to_string())
            .collect()
    }

    /// `(panel id, restoration key)` pairs.
    pub fn restorations(&self) -> Vec<(String, String)> {
        self.lock().restorations.clone()
    }

    pub fn commands(&self) -> Vec<(String, CommandMetadata)> {
        self.lock().commands.clone()
    }

    pub fn menu_items(&self) -> Vec<MenuItem> {
        self.lock().menu_items.clone()
    }

    pub fn tracked_widgets(&self) -> Vec<BrowserWidget> {
        self.lock().tracked.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Records> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ContentManager for HeadlessHost {
    fn add_drive(&self, drive: Arc<Drive>) {
        tracing::debug!(drive = %drive.name(), "content manager: drive added");
        self.lock().drives.push(drive);
    }
}

impl Shell for HeadlessHost {
    fn add(&self, panel: &PanelDescriptor, area: ShellArea, options: AddOptions) {
        tracing::debug!(panel_id = %panel.id, %area, rank = options.rank, "shell: panel added");
        let mut records = self.lock();
        records.attached.retain(|p| p.panel.id != panel.id);
        records.attached.push(PlacedPanel {
            panel: panel.clone(),
            area,
            rank: options.rank,
        });
    }

    fn detach(&self, panel_id: &str) {
        let mut records = self.lock();
        let before = records.attached.len();
        records.attached.retain(|p| p.panel.id != panel_id);
        if records.attached.len() != before {
            tracing::debug!(%panel_id, "shell: panel detached");
            records.detached.push(panel_id.to_string());
        }
    }
}

impl LayoutRestorer for HeadlessHost {
    fn add(&self, panel: &PanelDescriptor, key: &str) {
        self.lock()
            .restorations
            .push((panel.id.clone(), key.to_string()));
    }

    fn remove(&self, key: &str) {
        self.lock().restorations.retain(|(_, existing)| existing != key);
    }
}

impl WidgetTracker for HeadlessHost {
    fn add(&self, widget: &BrowserWidget) {
        self.lock().tracked.push(widget.clone());
    }
}

impl FileBrowserFactory for HeadlessHost {
    fn create_file_browser(&self, kind: &str, options: FileBrowserOptions) -> BrowserWidget {
        BrowserWidget {
            id: WidgetId::new(),
            kind: kind.to_string(),
            drive_name: options.drive_name,
        }
    }

    fn tracker(&self) -> &dyn WidgetTracker {
        self
    }
}

impl ToolbarRegistry for HeadlessHost {
    fn toolbar_for(&self, factory_name: &str, plugin_id: &str) -> Vec<ToolbarItem> {
        self.toolbars
            .get(&(factory_name.to_string(), plugin_id.to_string()))
            .cloned()
            .unwrap_or_default()
    }
}

impl CommandRegistry for HeadlessHost {
    fn add_command(&self, id: &str, metadata: CommandMetadata) {
        let mut records = self.lock();
        records.commands.retain(|(existing, _)| existing != id);
        records.commands.push((id.to_string(), metadata));
    }

    fn has_command(&self, id: &str) -> bool {
        self.lock().commands.iter().any(|(existing, _)| existing == id)
    }
}

impl ContextMenu for HeadlessHost {
    fn add_item(&self, item: MenuItem) {
        self.lock().menu_items.push(item);
    }

    fn remove_items(&self, selector: &str) {
        self.lock().menu_items.retain(|item| item.selector != selector);
    }

    fn hit_test(&self, predicate: &dyn Fn(&UiNode) -> bool) -> Option<UiNode> {
        self.lock()
            .context_path
            .iter()
            .find(|node| predicate(*node))
            .cloned()
    }
}
