// SPDX-License-Identifier: GPL-3.0-only

pub mod protocol;
pub mod traits;

pub use protocol::{DrivesError, DrivesErrorKind, WidgetId};
pub use traits::{
    AddOptions, BrowserWidget, CommandMetadata, CommandRegistry, ContentManager, ContextMenu,
    FileBrowserFactory, FileBrowserOptions, IdentityTranslator, LayoutRestorer, MenuItem,
    PanelDescriptor, PanelTitle, Shell, ShellArea, ToolbarItem, ToolbarRegistry, Translator,
    UiNode, WidgetTracker,
};
