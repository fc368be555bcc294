// SPDX-License-Identifier: GPL-3.0-only

use std::sync::Arc;

use drive_panels::host::HeadlessHost;
use drive_panels::identifier::{decode, encode};
use drive_panels::message::command_ids;
use drive_panels::{Config, DrivesApp, Message};
use drives_contracts::UiNode;
use drives_types::DriveInfo;

fn config_with(names: &[&str]) -> Config {
    Config {
        drives: names
            .iter()
            .map(|name| DriveInfo::new(*name, format!("/{name}/url")))
            .collect(),
        ..Config::default()
    }
}

fn activate(names: &[&str]) -> (Arc<HeadlessHost>, DrivesApp) {
    let host = Arc::new(HeadlessHost::new());
    let app = DrivesApp::activate(host.services(true), &config_with(names));
    (host, app)
}

fn right_click(host: &HeadlessHost, panel_id: &str) {
    host.set_context_path(vec![
        UiNode {
            title: String::new(),
            data_id: None,
        },
        UiNode {
            title: "Browse Drives".to_string(),
            data_id: Some(panel_id.to_string()),
        },
    ]);
}

#[test]
fn coco_drive_identifier_round_trips() {
    let (_host, app) = activate(&["cocoDrive"]);

    assert_eq!(encode("cocoDrive"), "coco-drive-file-browser");
    assert_eq!(decode("coco-drive-file-browser"), "cocoDrive");
    assert_eq!(app.panels().panel_ids(), vec!["coco-drive-file-browser"]);
}

#[test]
fn activation_opens_one_panel_per_drive() {
    let (host, app) = activate(&["bananaDrive", "cocoDrive"]);

    let ids = app.panels().panel_ids();
    assert_eq!(ids.len(), 2);
    for drive in app.registry().iter() {
        assert!(ids.contains(&encode(drive.name())));
        assert_eq!(drive.listener_count(), 1);
    }
    assert_eq!(host.attached_ids(), ids);
    assert_eq!(host.tracked_widgets().len(), 2);
    assert_eq!(host.restorations().len(), 2);
}

#[test]
fn context_menu_removal_closes_only_the_clicked_drive() {
    let (host, mut app) = activate(&["bananaDrive", "cocoDrive"]);

    right_click(&host, "coco-drive-file-browser");
    let outcome = app
        .execute(command_ids::REMOVE_DRIVE_BROWSER)
        .expect("known command");

    assert_eq!(outcome.closed, vec!["coco-drive-file-browser"]);
    assert!(outcome.opened.is_empty());
    assert_eq!(app.panels().panel_ids(), vec!["banana-drive-file-browser"]);
    assert_eq!(host.attached_ids(), vec!["banana-drive-file-browser"]);

    let coco = app.registry().find_by_name("cocoDrive").unwrap();
    let banana = app.registry().find_by_name("bananaDrive").unwrap();
    assert!(coco.is_disposed());
    assert!(!banana.is_disposed());
}

#[test]
fn repeated_removal_is_a_silent_no_op() {
    let (host, mut app) = activate(&["bananaDrive", "cocoDrive"]);

    right_click(&host, "coco-drive-file-browser");
    app.execute(command_ids::REMOVE_DRIVE_BROWSER);
    let outcome = app.execute(command_ids::REMOVE_DRIVE_BROWSER).unwrap();

    assert!(outcome.is_empty());
    assert_eq!(app.panels().len(), 1);
    assert_eq!(host.detached_ids(), vec!["coco-drive-file-browser"]);
}

#[test]
fn unknown_identifier_leaves_panels_unchanged() {
    let (host, mut app) = activate(&["bananaDrive", "cocoDrive"]);

    let outcome = app.update(Message::RemovePanel("mango-drive-file-browser".to_string()));
    assert!(outcome.is_empty());

    right_click(&host, "not-a-panel");
    let outcome = app.execute(command_ids::REMOVE_DRIVE_BROWSER).unwrap();
    assert!(outcome.is_empty());

    assert_eq!(app.panels().len(), 2);
    assert!(app.registry().iter().all(|d| !d.is_disposed()));
}

#[test]
fn drive_disposed_outside_the_command_still_closes_its_panel() {
    let (host, app) = activate(&["bananaDrive", "cocoDrive"]);

    let banana = app.registry().find_by_name("bananaDrive").unwrap();
    assert!(banana.dispose());
    assert!(!banana.dispose());

    assert_eq!(app.panels().panel_ids(), vec!["coco-drive-file-browser"]);
    assert_eq!(host.attached_ids(), vec!["coco-drive-file-browser"]);
}

#[test]
fn disposed_drive_is_not_reopened_by_add_command() {
    let (host, mut app) = activate(&["bananaDrive", "cocoDrive"]);
    app.update(Message::RemovePanel("coco-drive-file-browser".to_string()));

    let outcome = app.execute(command_ids::ADD_DRIVE_BROWSER).unwrap();

    assert!(outcome.is_empty());
    assert_eq!(host.attached_ids(), vec!["banana-drive-file-browser"]);

    let coco = Arc::clone(app.registry().find_by_name("cocoDrive").unwrap());
    assert!(app.add_panel(&coco).is_err());
}

#[test]
fn drive_registered_after_activation_opens_on_next_add() {
    let (_host, mut app) = activate(&["bananaDrive"]);
    app.register_drive(DriveInfo::new("cocoDrive", "/coconut/url"))
        .expect("register drive");

    let outcome = app.execute(command_ids::ADD_DRIVE_BROWSER).unwrap();
    assert_eq!(outcome.opened, vec!["coco-drive-file-browser"]);
    assert_eq!(app.panels().len(), 2);
}

#[test]
fn shutdown_closes_every_panel() {
    let (host, mut app) = activate(&["bananaDrive", "cocoDrive"]);
    right_click(&host, "banana-drive-file-browser");
    app.execute(command_ids::REMOVE_DRIVE_BROWSER);

    let outcome = app.shutdown();

    assert_eq!(outcome.closed, vec!["coco-drive-file-browser"]);
    assert!(app.panels().is_empty());
    assert!(host.attached_ids().is_empty());
    assert_eq!(host.detached_ids().len(), 2);
}
