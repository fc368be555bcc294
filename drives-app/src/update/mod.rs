// SPDX-License-Identifier: GPL-3.0-only

mod panels;

use std::collections::HashSet;

use crate::app::DrivesApp;
use crate::message::{Message, Outcome};

pub(crate) fn update(app: &mut DrivesApp, message: Message) -> Outcome {
    let before = app.panels.panel_ids();

    match message {
        Message::AddAllPanels => panels::add_all_panels(app),
        Message::RemoveSelectedPanel => panels::remove_selected_panel(app),
        Message::RemovePanel(identifier) => panels::remove_panel(app, &identifier),
        Message::DisposeAll => panels::dispose_all(app),
    }

    diff(before, app.panels.panel_ids())
}

fn diff(before: Vec<String>, after: Vec<String>) -> Outcome {
    let previous: HashSet<&str> = before.iter().map(String::as_str).collect();
    let current: HashSet<&str> = after.iter().map(String::as_str).collect();

    Outcome {
        opened: after
            .iter()
            .filter(|id| !previous.contains(id.as_str()))
            .cloned()
            .collect(),
        closed: before
            .iter()
            .filter(|id| !current.contains(id.as_str()))
            .cloned()
            .collect(),
    }
}
