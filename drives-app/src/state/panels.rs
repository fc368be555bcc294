// SPDX-License-Identifier: GPL-3.0-only

//! Per-drive panels and the protocol that opens and closes them.
//!
//! A panel subscribes to its drive's disposal when it is built. That
//! subscription is the only teardown path: removing a panel means disposing
//! its drive.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

use drives_contracts::{
    AddOptions, BrowserWidget, DrivesError, FileBrowserOptions, MenuItem, PanelDescriptor,
    PanelTitle, ShellArea, ToolbarItem,
};
use drives_types::{DisposalListener, Drive};
use serde::{Deserialize, Serialize};

use crate::host::HostServices;
use crate::identifier;
use crate::message::command_ids;
use crate::state::registry::DriveRegistry;

/// Kind passed to the file-browser factory for drive browsers.
pub const BROWSER_KIND: &str = "drive-browser";
pub const PANEL_CAPTION: &str = "Browse Drives";
pub const PANEL_ICON: &str = "drive";
pub const PANEL_ICON_CLASS: &str = "jp-SideBar-tabIcon";
/// Toolbar settings are shared with the generic file browser.
pub const FILE_BROWSER_FACTORY: &str = "FileBrowser";
pub const FILE_BROWSER_PLUGIN_ID: &str = "@jupyter/drives:widget";
const MENU_RANK: i32 = 0;

/// Placement of drive panels in the host shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelSettings {
    pub area: ShellArea,
    pub rank: u32,
}

impl Default for PanelSettings {
    fn default() -> Self {
        Self {
            area: ShellArea::Left,
            rank: 102,
        }
    }
}

#[derive(Debug, Default)]
struct PanelState {
    disposed: bool,
    widget: Option<BrowserWidget>,
    toolbar: Vec<ToolbarItem>,
}

/// The browsing surface of one drive.
pub struct Panel {
    descriptor: PanelDescriptor,
    drive_name: String,
    placement: PanelSettings,
    host: HostServices,
    state: Mutex<PanelState>,
}

impl fmt::Debug for Panel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Panel")
            .field("id", &self.descriptor.id)
            .field("drive_name", &self.drive_name)
            .field("placement", &self.placement)
            .field("state", &*self.lock())
            .finish_non_exhaustive()
    }
}

impl Panel {
    fn new(drive_name: &str, placement: PanelSettings, host: HostServices) -> Self {
        Self {
            descriptor: PanelDescriptor {
                id: identifier::encode(drive_name),
                title: PanelTitle {
                    caption: PANEL_CAPTION.to_string(),
                    icon: PANEL_ICON.to_string(),
                    icon_class: PANEL_ICON_CLASS.to_string(),
                },
            },
            drive_name: drive_name.to_string(),
            placement,
            host,
            state: Mutex::new(PanelState::default()),
        }
    }

    pub fn id(&self) -> &str {
        &self.descriptor.id
    }

    pub fn drive_name(&self) -> &str {
        &self.drive_name
    }

    pub fn descriptor(&self) -> &PanelDescriptor {
        &self.descriptor
    }

    pub fn placement(&self) -> PanelSettings {
        self.placement
    }

    pub fn widget(&self) -> Option<BrowserWidget> {
        self.lock().widget.clone()
    }

    pub fn toolbar(&self) -> Vec<ToolbarItem> {
        self.lock().toolbar.clone()
    }

    pub fn is_disposed(&self) -> bool {
        self.lock().disposed
    }

    /// Detach the panel from the shell, drop its context-menu item and
    /// restoration entry, and release its widget.
    ///
    /// Returns `false` if the panel was already disposed.
    pub fn dispose(&self) -> bool {
        {
            let mut state = self.lock();
            if state.disposed {
                return false;
            }
            state.disposed = true;
            state.widget = None;
            state.toolbar.clear();
        }
        self.host.shell.detach(self.id());
        self.host
            .context_menu
            .remove_items(&identifier::tab_selector(self.id()));
        if let Some(restorer) = &self.host.restorer {
            restorer.remove(&identifier::restoration_key(&self.drive_name));
        }
        true
    }

    fn add_widget(&self, widget: BrowserWidget) {
        self.lock().widget = Some(widget);
    }

    fn set_toolbar(&self, items: Vec<ToolbarItem>) {
        self.lock().toolbar = items;
    }

    fn lock(&self) -> MutexGuard<'_, PanelState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl DisposalListener for Panel {
    fn drive_disposed(&self, drive_name: &str) {
        if self.dispose() {
            tracing::info!(drive = %drive_name, panel_id = %self.id(), "drive panel closed");
        }
    }
}

/// Result of a UI-triggered panel removal. None of these is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// The identifier names no registered drive.
    Unresolved,
    AlreadyDisposed,
    Disposed,
}

/// Opens and closes drive panels against the host collaborators.
#[derive(Debug)]
pub struct PanelManager {
    host: HostServices,
    settings: PanelSettings,
    panels: Vec<Arc<Panel>>,
}

impl PanelManager {
    pub fn new(host: HostServices, settings: PanelSettings) -> Self {
        Self {
            host,
            settings,
            panels: Vec::new(),
        }
    }

    /// Open the panel of `drive`.
    ///
    /// Disposed drives are refused before anything is built. A drive that
    /// already has a live panel is refused as well.
    pub fn add(&mut self, drive: &Arc<Drive>) -> Result<Arc<Panel>, DrivesError> {
        if drive.is_disposed() {
            return Err(DrivesError::StaleDrive {
                name: drive.name().to_string(),
            });
        }
        if let Some(existing) = self.panel_for(drive.name()) {
            return Err(DrivesError::PanelExists {
                name: drive.name().to_string(),
                panel_id: existing.id().to_string(),
            });
        }
        self.prune();

        let widget = self.host.file_browsers.create_file_browser(
            BROWSER_KIND,
            FileBrowserOptions {
                drive_name: drive.name().to_string(),
            },
        );

        let panel = Arc::new(Panel::new(
            drive.name(),
            self.settings,
            self.host.clone(),
        ));

        self.host.shell.add(
            panel.descriptor(),
            self.settings.area,
            AddOptions {
                rank: self.settings.rank,
            },
        );
        if let Some(restorer) = &self.host.restorer {
            restorer.add(panel.descriptor(), &identifier::restoration_key(drive.name()));
        }
        self.host.context_menu.add_item(MenuItem {
            command: command_ids::REMOVE_DRIVE_BROWSER.to_string(),
            selector: identifier::tab_selector(panel.id()),
            rank: MENU_RANK,
        });

        let weak = Arc::downgrade(&panel);
        let listener: Weak<dyn DisposalListener> = weak;
        if !drive.subscribe_disposed(listener) {
            // Disposed after the check above; undo the layout registration.
            panel.dispose();
            return Err(DrivesError::StaleDrive {
                name: drive.name().to_string(),
            });
        }

        panel.add_widget(widget.clone());
        panel.set_toolbar(
            self.host
                .toolbars
                .toolbar_for(FILE_BROWSER_FACTORY, FILE_BROWSER_PLUGIN_ID),
        );
        self.host.file_browsers.tracker().add(&widget);

        tracing::info!(
            drive = %drive.name(),
            panel_id = %panel.id(),
            area = %self.settings.area,
            rank = self.settings.rank,
            "drive panel opened"
        );
        self.panels.push(Arc::clone(&panel));
        Ok(panel)
    }

    /// Dispose the drive behind a panel identifier.
    ///
    /// The panel itself is closed by its disposal subscription, before this
    /// returns.
    pub fn remove(&mut self, registry: &DriveRegistry, identifier: &str) -> RemoveOutcome {
        let name = identifier::decode(identifier);
        let Some(drive) = registry.find_by_name(&name) else {
            tracing::debug!(%identifier, drive = %name, "no drive for panel identifier");
            return RemoveOutcome::Unresolved;
        };

        let outcome = if drive.dispose() {
            tracing::info!(drive = %name, panel_id = %identifier, "drive removed");
            RemoveOutcome::Disposed
        } else {
            tracing::debug!(drive = %name, "drive already disposed");
            RemoveOutcome::AlreadyDisposed
        };
        self.prune();
        outcome
    }

    /// Live panels in opening order.
    pub fn panels(&self) -> Vec<Arc<Panel>> {
        self.panels
            .iter()
            .filter(|p| !p.is_disposed())
            .cloned()
            .collect()
    }

    pub fn panel_ids(&self) -> Vec<String> {
        self.panels().iter().map(|p| p.id().to_string()).collect()
    }

    pub fn panel_for(&self, drive_name: &str) -> Option<Arc<Panel>> {
        self.panels
            .iter()
            .find(|p| p.drive_name() == drive_name && !p.is_disposed())
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.panels.iter().filter(|p| !p.is_disposed()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn prune(&mut self) {
        self.panels.retain(|p| !p.is_disposed());
    }
}
