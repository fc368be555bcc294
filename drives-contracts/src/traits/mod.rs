// SPDX-License-Identifier: GPL-3.0-only

//! Interfaces of the host collaborators the extension calls into.
//!
//! Every call is synchronous and expected to return promptly; the extension
//! runs on the host's event loop and never blocks or spawns work.

pub mod browser;
pub mod commands;
pub mod content;
pub mod shell;
pub mod toolbar;
pub mod translation;

pub use browser::{BrowserWidget, FileBrowserFactory, FileBrowserOptions, WidgetTracker};
pub use commands::{CommandMetadata, CommandRegistry, ContextMenu, MenuItem, UiNode};
pub use content::ContentManager;
pub use shell::{AddOptions, LayoutRestorer, PanelDescriptor, PanelTitle, Shell, ShellArea};
pub use toolbar::{ToolbarItem, ToolbarRegistry};
pub use translation::{IdentityTranslator, Translator};
