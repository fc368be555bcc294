// SPDX-License-Identifier: GPL-3.0-only

//! Canonical drive model shared by the host contracts and the panel extension.
//!
//! A [`Drive`] is configured once from a [`DriveInfo`] record and is then
//! immutable apart from its disposal state. Disposal is terminal and is
//! announced exactly once to every [`DisposalListener`] subscribed to it.

pub mod drive;

pub use drive::{DisposalListener, Drive, DriveInfo, DriveStatus, DriveSummary};
