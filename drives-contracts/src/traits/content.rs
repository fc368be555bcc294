// SPDX-License-Identifier: GPL-3.0-only

use std::sync::Arc;

use drives_types::Drive;

/// The host document/content manager.
///
/// Exposes a drive's contents through the host's generic filesystem API.
pub trait ContentManager: Send + Sync {
    fn add_drive(&self, drive: Arc<Drive>);
}
