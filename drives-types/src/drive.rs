// SPDX-License-Identifier: GPL-3.0-only

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError, Weak};

use serde::{Deserialize, Serialize};

/// Reported state of a drive backend.
///
/// Backends may report states beyond the two known ones; those are kept
/// verbatim in [`DriveStatus::Other`] and serialize back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum DriveStatus {
    #[default]
    Active,
    Inactive,
    Other(String),
}

impl DriveStatus {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Other(status) => status,
        }
    }
}

impl From<String> for DriveStatus {
    fn from(status: String) -> Self {
        match status.as_str() {
            "active" => Self::Active,
            "inactive" => Self::Inactive,
            _ => Self::Other(status),
        }
    }
}

impl From<DriveStatus> for String {
    fn from(status: DriveStatus) -> Self {
        match status {
            DriveStatus::Other(status) => status,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for DriveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration record of one drive.
///
/// Everything except `name` is opaque metadata handed through to the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveInfo {
    pub name: String,
    pub base_url: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub status: DriveStatus,
    #[serde(default)]
    pub provider: String,
}

impl DriveInfo {
    pub fn new(name: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_url: base_url.into(),
            region: String::new(),
            status: DriveStatus::Active,
            provider: String::new(),
        }
    }

    /// Drive names end up in panel identifiers, where a dash marks a case
    /// boundary. Only ASCII alphanumerics and underscores survive that mapping.
    pub fn validate_name(&self) -> Result<(), String> {
        if self.name.is_empty() {
            return Err("Drive name cannot be empty".to_string());
        }
        if !self
            .name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(format!(
                "Drive name '{}' must contain only ASCII letters, digits, or underscores",
                self.name
            ));
        }
        Ok(())
    }
}

/// Receives the one-shot disposal notification of a drive.
pub trait DisposalListener: Send + Sync {
    fn drive_disposed(&self, drive_name: &str);
}

#[derive(Default)]
struct Lifecycle {
    disposed: bool,
    listeners: Vec<Weak<dyn DisposalListener>>,
}

/// A named storage backend.
pub struct Drive {
    info: DriveInfo,
    lifecycle: Mutex<Lifecycle>,
}

impl fmt::Debug for Drive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Drive")
            .field("info", &self.info)
            .field("disposed", &self.is_disposed())
            .finish_non_exhaustive()
    }
}

impl Drive {
    pub fn new(info: DriveInfo) -> Self {
        Self {
            info,
            lifecycle: Mutex::new(Lifecycle::default()),
        }
    }

    pub fn info(&self) -> &DriveInfo {
        &self.info
    }

    pub fn name(&self) -> &str {
        &self.info.name
    }

    pub fn base_url(&self) -> &str {
        &self.info.base_url
    }

    pub fn region(&self) -> &str {
        &self.info.region
    }

    pub fn status(&self) -> &DriveStatus {
        &self.info.status
    }

    pub fn provider(&self) -> &str {
        &self.info.provider
    }

    pub fn is_disposed(&self) -> bool {
        self.lock().disposed
    }

    /// Subscribe to the disposal notification.
    ///
    /// Returns `false` without storing the listener when the drive is already
    /// disposed, since the notification will never fire again.
    pub fn subscribe_disposed(&self, listener: Weak<dyn DisposalListener>) -> bool {
        let mut lifecycle = self.lock();
        if lifecycle.disposed {
            return false;
        }
        lifecycle.listeners.retain(|l| l.strong_count() > 0);
        lifecycle.listeners.push(listener);
        true
    }

    /// Number of live disposal subscriptions.
    pub fn listener_count(&self) -> usize {
        self.lock()
            .listeners
            .iter()
            .filter(|l| l.strong_count() > 0)
            .count()
    }

    /// Dispose the drive and notify every live listener.
    ///
    /// Only the first call has an effect; it returns `true`. Listeners run
    /// after the internal lock is released and may query the drive.
    pub fn dispose(&self) -> bool {
        let listeners = {
            let mut lifecycle = self.lock();
            if lifecycle.disposed {
                return false;
            }
            lifecycle.disposed = true;
            std::mem::take(&mut lifecycle.listeners)
        };

        tracing::debug!(
            drive = %self.info.name,
            listeners = listeners.len(),
            "drive disposed"
        );

        for listener in listeners.iter().filter_map(Weak::upgrade) {
            listener.drive_disposed(&self.info.name);
        }
        true
    }

    pub fn summary(&self, panel_id: Option<String>) -> DriveSummary {
        DriveSummary {
            name: self.info.name.clone(),
            base_url: self.info.base_url.clone(),
            region: self.info.region.clone(),
            status: self.info.status.clone(),
            provider: self.info.provider.clone(),
            disposed: self.is_disposed(),
            panel_id,
        }
    }

    fn lock(&self) -> MutexGuard<'_, Lifecycle> {
        self.lifecycle.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Listing entry for a registered drive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DriveSummary {
    pub name: String,
    pub base_url: String,
    pub region: String,
    pub status: DriveStatus,
    pub provider: String,
    pub disposed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub panel_id: Option<String>,
}
