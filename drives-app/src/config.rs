// SPDX-License-Identifier: GPL-3.0-only

use std::fs;
use std::path::Path;

use anyhow::Context;
use drives_contracts::ToolbarItem;
use drives_types::DriveInfo;
use serde::{Deserialize, Serialize};

use crate::state::panels::PanelSettings;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LoggingLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LoggingLevel {
    pub fn as_directive(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

/// Extension configuration, read from a TOML file.
///
/// Omitted keys take their defaults; omitting `drives` seeds the two demo
/// drives.
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log_level: LoggingLevel,
    pub log_to_disk: bool,
    /// Provider applied to drives that do not name one.
    pub default_provider: String,
    pub panel: PanelSettings,
    /// Toolbar of every drive panel.
    pub toolbar: Vec<ToolbarItem>,
    pub drives: Vec<DriveInfo>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LoggingLevel::Info,
            log_to_disk: true,
            default_provider: String::new(),
            panel: PanelSettings::default(),
            toolbar: default_toolbar(),
            drives: vec![
                DriveInfo::new("coconutDrive", "/coconut/url"),
                DriveInfo::new("bananaDrive", "/banana/url"),
            ],
        }
    }
}

fn default_toolbar() -> Vec<ToolbarItem> {
    [
        ("new-directory", 10),
        ("uploader", 20),
        ("refresh", 30),
        ("filename-searcher", 40),
    ]
    .into_iter()
    .map(|(name, rank)| ToolbarItem {
        name: name.to_string(),
        rank: Some(rank),
    })
    .collect()
}

impl Config {
    /// Load `path`, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("invalid config {}", path.display()))
    }

    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(text)?;
        for drive in &config.drives {
            drive.validate_name().map_err(anyhow::Error::msg)?;
        }
        Ok(config)
    }

    /// Configured drives with the default provider filled in.
    pub fn drive_infos(&self) -> Vec<DriveInfo> {
        self.drives
            .iter()
            .cloned()
            .map(|mut info| {
                if info.provider.is_empty() {
                    info.provider = self.default_provider.clone();
                }
                info
            })
            .collect()
    }
}
