// SPDX-License-Identifier: GPL-3.0-only

use std::sync::Arc;

use drives_contracts::{CommandMetadata, DrivesError};
use drives_types::{Drive, DriveInfo, DriveSummary};

use crate::config::Config;
use crate::host::HostServices;
use crate::message::{Message, Outcome, command_ids};
use crate::state::panels::{Panel, PanelManager};
use crate::state::registry::DriveRegistry;
use crate::update;

/// Translation domain of user-facing strings.
pub const TRANSLATION_DOMAIN: &str = "jupyter-drives";

/// Activation context: owns the registry and the open panels.
#[derive(Debug)]
pub struct DrivesApp {
    pub(crate) host: HostServices,
    pub(crate) registry: DriveRegistry,
    pub(crate) panels: PanelManager,
    rejected: Vec<DrivesError>,
}

impl DrivesApp {
    /// Register the configured drives and the commands, then open a panel
    /// per drive.
    ///
    /// A drive that fails to register is reported through [`Self::rejected`]
    /// and does not affect the others.
    pub fn activate(host: HostServices, config: &Config) -> Self {
        tracing::info!(drives = config.drives.len(), "activating drive panels");

        let mut app = Self {
            panels: PanelManager::new(host.clone(), config.panel),
            host,
            registry: DriveRegistry::new(),
            rejected: Vec::new(),
        };

        for info in config.drive_infos() {
            let name = info.name.clone();
            if let Err(e) = app.register_drive(info) {
                tracing::warn!(drive = %name, %e, "drive not registered");
                app.rejected.push(e);
            }
        }

        app.register_commands();
        app.execute(command_ids::ADD_DRIVE_BROWSER);
        app
    }

    /// Register a drive and hand it to the content manager. No panel is
    /// opened.
    pub fn register_drive(&mut self, info: DriveInfo) -> Result<Arc<Drive>, DrivesError> {
        let drive = Arc::new(Drive::new(info));
        self.registry.register(Arc::clone(&drive))?;
        self.host.contents.add_drive(Arc::clone(&drive));
        Ok(drive)
    }

    /// Open the panel of one drive.
    pub fn add_panel(&mut self, drive: &Arc<Drive>) -> Result<Arc<Panel>, DrivesError> {
        self.panels.add(drive)
    }

    /// Run a host command. Unknown ids are ignored.
    pub fn execute(&mut self, command_id: &str) -> Option<Outcome> {
        let Some(message) = Message::from_command(command_id) else {
            tracing::debug!(command = %command_id, "unknown command");
            return None;
        };
        tracing::debug!(command = %command_id, "executing command");
        Some(self.update(message))
    }

    pub fn update(&mut self, message: Message) -> Outcome {
        update::update(self, message)
    }

    /// Dispose every drive, closing every panel.
    pub fn shutdown(&mut self) -> Outcome {
        self.update(Message::DisposeAll)
    }

    pub fn registry(&self) -> &DriveRegistry {
        &self.registry
    }

    pub fn panels(&self) -> &PanelManager {
        &self.panels
    }

    /// Registration failures collected during activation.
    pub fn rejected(&self) -> &[DrivesError] {
        &self.rejected
    }

    pub fn list_drives(&self) -> Vec<DriveSummary> {
        self.registry
            .iter()
            .map(|drive| {
                let panel_id = self
                    .panels
                    .panel_for(drive.name())
                    .map(|panel| panel.id().to_string());
                drive.summary(panel_id)
            })
            .collect()
    }

    pub fn list_drives_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.list_drives())
    }

    fn register_commands(&self) {
        let trans = |msgid: &str| self.host.translator.translate(TRANSLATION_DOMAIN, msgid);

        self.host.commands.add_command(
            command_ids::ADD_DRIVE_BROWSER,
            CommandMetadata {
                caption: trans("Add drive filebrowser."),
                label: trans("Add Drive Filebrowser"),
            },
        );
        self.host.commands.add_command(
            command_ids::REMOVE_DRIVE_BROWSER,
            CommandMetadata {
                caption: trans("Remove drive filebrowser."),
                label: trans("Remove Drive Filebrowser"),
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::HeadlessHost;
    use drives_contracts::{CommandRegistry, UiNode};

    fn activate(config: &Config) -> (Arc<HeadlessHost>, DrivesApp) {
        let host = Arc::new(HeadlessHost::new());
        let app = DrivesApp::activate(host.services(true), config);
        (host, app)
    }

    #[test]
    fn activation_registers_drives_commands_and_panels() {
        let (host, app) = activate(&Config::default());

        assert_eq!(host.content_drives(), vec!["coconutDrive", "bananaDrive"]);
        assert!(host.has_command(command_ids::ADD_DRIVE_BROWSER));
        assert!(host.has_command(command_ids::REMOVE_DRIVE_BROWSER));
        assert_eq!(
            app.panels().panel_ids(),
            vec![
                "coconut-drive-file-browser".to_string(),
                "banana-drive-file-browser".to_string()
            ]
        );
        assert!(app.rejected().is_empty());
    }

    #[test]
    fn duplicate_configured_drive_is_rejected_alone() {
        let mut config = Config::default();
        config.drives.push(DriveInfo::new("bananaDrive", "/other/url"));

        let (host, app) = activate(&config);

        assert_eq!(app.registry().len(), 2);
        assert_eq!(host.content_drives().len(), 2);
        assert_eq!(
            app.rejected(),
            &[DrivesError::DuplicateName {
                name: "bananaDrive".to_string()
            }]
        );
        assert_eq!(
            app.registry().find_by_name("bananaDrive").unwrap().base_url(),
            "/banana/url"
        );
    }

    #[test]
    fn command_captions_are_translated() {
        let (host, _app) = activate(&Config::default());
        let commands = host.commands();
        let (_, add) = commands
            .iter()
            .find(|(id, _)| id == command_ids::ADD_DRIVE_BROWSER)
            .unwrap();
        assert_eq!(add.label, "Add Drive Filebrowser");
        assert_eq!(add.caption, "Add drive filebrowser.");
    }

    #[test]
    fn re_running_add_command_opens_nothing_new() {
        let (host, mut app) = activate(&Config::default());

        let outcome = app.execute(command_ids::ADD_DRIVE_BROWSER).unwrap();

        assert!(outcome.is_empty());
        assert_eq!(host.attached_panels().len(), 2);
    }

    #[test]
    fn remove_command_without_drive_target_is_a_no_op() {
        let (host, mut app) = activate(&Config::default());
        host.set_context_path(vec![UiNode {
            title: "Launcher".to_string(),
            data_id: Some("launcher".to_string()),
        }]);

        let outcome = app.execute(command_ids::REMOVE_DRIVE_BROWSER).unwrap();
        assert!(outcome.is_empty());

        host.set_context_path(vec![UiNode {
            title: "Browse Drives".to_string(),
            data_id: None,
        }]);
        let outcome = app.execute(command_ids::REMOVE_DRIVE_BROWSER).unwrap();
        assert!(outcome.is_empty());
        assert_eq!(app.panels().len(), 2);
    }

    #[test]
    fn unknown_command_is_ignored() {
        let (_host, mut app) = activate(&Config::default());
        assert!(app.execute("drives:mount").is_none());
    }

    #[test]
    fn listing_reports_panel_ids() {
        let (_host, mut app) = activate(&Config::default());
        app.update(Message::RemovePanel("banana-drive-file-browser".to_string()));

        let listing = app.list_drives();
        assert_eq!(listing.len(), 2);
        assert_eq!(
            listing[0].panel_id.as_deref(),
            Some("coconut-drive-file-browser")
        );
        assert!(listing[1].disposed);
        assert!(listing[1].panel_id.is_none());

        let json = app.list_drives_json().unwrap();
        assert!(json.contains("\"base_url\": \"/coconut/url\""));
    }

    #[test]
    fn listing_passes_configured_status_through() {
        let config = Config::from_toml(
            r#"
            [[drives]]
            name = "cocoDrive"
            base_url = "/coconut/url"
            status = "mounting"
            "#,
        )
        .expect("parse config");
        let (_host, app) = activate(&config);

        let json = app.list_drives_json().unwrap();
        assert!(json.contains("\"status\": \"mounting\""), "{json}");
    }
}
