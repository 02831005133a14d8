//! Application menu actions
//!
//! Menu items carry string ids; this is the one place they are defined and
//! parsed. Predefined items (about, clipboard commands) are handled by the OS
//! and never reach the shell. Undo and redo are only predefined on macOS;
//! elsewhere they are custom items running an editing command in the page.

use crate::theme::ThemePreference;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    SetTheme(ThemePreference),
    ZoomIn,
    ZoomOut,
    ZoomReset,
    Undo,
    Redo,
    Quit,
}

impl MenuAction {
    pub const ALL: [MenuAction; 9] = [
        MenuAction::SetTheme(ThemePreference::Light),
        MenuAction::SetTheme(ThemePreference::Dark),
        MenuAction::SetTheme(ThemePreference::System),
        MenuAction::ZoomIn,
        MenuAction::ZoomOut,
        MenuAction::ZoomReset,
        MenuAction::Undo,
        MenuAction::Redo,
        MenuAction::Quit,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            MenuAction::SetTheme(ThemePreference::Light) => "theme.light",
            MenuAction::SetTheme(ThemePreference::Dark) => "theme.dark",
            MenuAction::SetTheme(ThemePreference::System) => "theme.system",
            MenuAction::ZoomIn => "view.zoom-in",
            MenuAction::ZoomOut => "view.zoom-out",
            MenuAction::ZoomReset => "view.zoom-reset",
            MenuAction::Undo => "edit.undo",
            MenuAction::Redo => "edit.redo",
            MenuAction::Quit => "app.quit",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::SetTheme(ThemePreference::Light) => "Light",
            MenuAction::SetTheme(ThemePreference::Dark) => "Dark",
            MenuAction::SetTheme(ThemePreference::System) => "Auto (System)",
            MenuAction::ZoomIn => "Increase Text Size",
            MenuAction::ZoomOut => "Decrease Text Size",
            MenuAction::ZoomReset => "Reset Text Size",
            MenuAction::Undo => "Undo",
            MenuAction::Redo => "Redo",
            MenuAction::Quit => "Quit",
        }
    }

    pub fn accelerator(&self) -> Option<&'static str> {
        match self {
            MenuAction::ZoomIn => Some("CmdOrCtrl+Plus"),
            MenuAction::ZoomOut => Some("CmdOrCtrl+-"),
            MenuAction::ZoomReset => Some("CmdOrCtrl+0"),
            MenuAction::Quit => Some("CmdOrCtrl+Q"),
            // The surface keeps its own undo shortcuts
            MenuAction::SetTheme(_) | MenuAction::Undo | MenuAction::Redo => None,
        }
    }

    /// `document.execCommand` name for editing actions
    pub fn edit_command(&self) -> Option<&'static str> {
        match self {
            MenuAction::Undo => Some("undo"),
            MenuAction::Redo => Some("redo"),
            _ => None,
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|action| action.id() == id)
    }
}
