// SPDX-License-Identifier: GPL-3.0-only

//! Handlers behind the add/remove drive browser commands.

use drives_contracts::{DrivesError, UiNode};

use crate::app::DrivesApp;
use crate::state::panels::PANEL_CAPTION;

pub(super) fn add_all_panels(app: &mut DrivesApp) {
    for drive in app.registry.all() {
        match app.panels.add(&drive) {
            Ok(_) => {}
            Err(e @ (DrivesError::StaleDrive { .. } | DrivesError::PanelExists { .. })) => {
                tracing::debug!(drive = %drive.name(), %e, "skipping drive");
            }
            Err(e) => {
                tracing::warn!(drive = %drive.name(), %e, "failed to open drive panel");
            }
        }
    }
}

pub(super) fn remove_selected_panel(app: &mut DrivesApp) {
    let node = app
        .host
        .context_menu
        .hit_test(&|node: &UiNode| node.title == PANEL_CAPTION);

    let Some(identifier) = node.and_then(|node| node.data_id) else {
        tracing::debug!("context menu target is not a drive panel");
        return;
    };
    remove_panel(app, &identifier);
}

pub(super) fn remove_panel(app: &mut DrivesApp, identifier: &str) {
    app.panels.remove(&app.registry, identifier);
}

pub(super) fn dispose_all(app: &mut DrivesApp) {
    let disposed = app.registry.dispose_all();
    tracing::info!(disposed, "all drives disposed");
}
