// SPDX-License-Identifier: GPL-3.0-only

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrivesErrorKind {
    InvalidInput,
    Conflict,
    Gone,
}

impl DrivesErrorKind {
    pub fn code(self) -> u16 {
        match self {
            Self::InvalidInput => 400,
            Self::Conflict => 409,
            Self::Gone => 410,
        }
    }
}

/// Failures of registry and panel operations.
///
/// A missing drive is not an error: lookups return `Option` and UI-triggered
/// removals of unknown identifiers are silent no-ops.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum DrivesError {
    #[error("drive '{name}' is already registered")]
    DuplicateName { name: String },
    #[error("drive '{name}' is disposed and cannot be shown in a panel")]
    StaleDrive { name: String },
    #[error("drive '{name}' already has an open panel '{panel_id}'")]
    PanelExists { name: String, panel_id: String },
    #[error("invalid drive name: {reason}")]
    InvalidName { reason: String },
}

impl DrivesError {
    pub fn kind(&self) -> DrivesErrorKind {
        match self {
            Self::DuplicateName { .. } | Self::PanelExists { .. } => DrivesErrorKind::Conflict,
            Self::StaleDrive { .. } => DrivesErrorKind::Gone,
            Self::InvalidName { .. } => DrivesErrorKind::InvalidInput,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drives_error_roundtrips() {
        let error = DrivesError::StaleDrive {
            name: "cocoDrive".to_string(),
        };
        let json = serde_json::to_string(&error).expect("serialize error");
        assert!(json.contains(r#""error":"stale_drive""#));
        let parsed: DrivesError = serde_json::from_str(&json).expect("deserialize error");
        assert_eq!(parsed, error);
    }

    #[test]
    fn kinds_map_to_codes() {
        let duplicate = DrivesError::DuplicateName {
            name: "bananaDrive".to_string(),
        };
        assert_eq!(duplicate.kind(), DrivesErrorKind::Conflict);
        assert_eq!(duplicate.kind().code(), 409);

        let invalid = DrivesError::InvalidName {
            reason: "empty".to_string(),
        };
        assert_eq!(invalid.kind().code(), 400);
    }
}
