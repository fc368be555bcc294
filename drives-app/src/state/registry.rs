// SPDX-License-Identifier: GPL-3.0-only

use std::sync::Arc;

use drives_contracts::DrivesError;
use drives_types::Drive;

/// Known drives in activation order. Names are unique.
#[derive(Debug, Default)]
pub struct DriveRegistry {
    drives: Vec<Arc<Drive>>,
}

impl DriveRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a drive. A rejected drive leaves the registry untouched.
    pub fn register(&mut self, drive: Arc<Drive>) -> Result<(), DrivesError> {
        drive
            .info()
            .validate_name()
            .map_err(|reason| DrivesError::InvalidName { reason })?;

        if self.find_by_name(drive.name()).is_some() {
            return Err(DrivesError::DuplicateName {
                name: drive.name().to_string(),
            });
        }

        tracing::debug!(drive = %drive.name(), base_url = %drive.base_url(), "drive registered");
        self.drives.push(drive);
        Ok(())
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Arc<Drive>> {
        self.drives.iter().find(|d| d.name() == name)
    }

    /// Snapshot in insertion order.
    pub fn all(&self) -> Vec<Arc<Drive>> {
        self.drives.clone()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<Drive>> {
        self.drives.iter()
    }

    pub fn len(&self) -> usize {
        self.drives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.drives.is_empty()
    }

    /// Dispose every live drive, returning how many were disposed.
    pub fn dispose_all(&self) -> usize {
        self.drives.iter().filter(|d| d.dispose()).count()
    }
}
