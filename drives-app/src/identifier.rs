// SPDX-License-Identifier: GPL-3.0-only

//! Mapping between drive names and the panel identifiers used by the host UI.
//!
//! Identifiers are dashed lowercase: every ASCII uppercase letter of the name
//! becomes a dash followed by its lowercase form. Other characters, including
//! non-ASCII letters, are copied unchanged, and [`FILE_BROWSER_SUFFIX`]
//! is appended. `cocoDrive` maps to `coco-drive-file-browser`.
//!
//! The mapping is only invertible for names without dashes; registered names
//! are restricted accordingly (see `DriveInfo::validate_name`).

/// Marks an identifier as belonging to a drive browsing panel.
pub const FILE_BROWSER_SUFFIX: &str = "-file-browser";

/// Panel identifier for a drive name.
pub fn encode(name: &str) -> String {
    let mut id = String::with_capacity(name.len() + FILE_BROWSER_SUFFIX.len() + 4);
    for c in name.chars() {
        if c.is_ascii_uppercase() {
            id.push('-');
            id.push(c.to_ascii_lowercase());
        } else {
            id.push(c);
        }
    }
    id.push_str(FILE_BROWSER_SUFFIX);
    id
}

/// Drive name for a panel identifier.
///
/// Never fails. Input that was not produced by [`encode`] yields a name that
/// simply does not resolve to a registered drive.
pub fn decode(identifier: &str) -> String {
    let body = identifier
        .strip_suffix(FILE_BROWSER_SUFFIX)
        .unwrap_or(identifier);

    let mut name = String::with_capacity(body.len());
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        if c == '-' {
            // A trailing dash has nothing to capitalize and is dropped.
            if let Some(next) = chars.next() {
                name.push(next.to_ascii_uppercase());
            }
        } else {
            name.push(c);
        }
    }
    name
}

/// Key under which the layout restorer recreates a drive's panel.
pub fn restoration_key(drive_name: &str) -> String {
    format!("{drive_name}-browser")
}

/// Context-menu selector matching the sidebar tab of a panel.
pub fn tab_selector(panel_id: &str) -> String {
    format!(".jp-SideBar.lm-TabBar .lm-TabBar-tab[data-id={panel_id}]")
}
