use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::DesktopError;

pub const DEFAULT_WINDOW_WIDTH: i32 = 420;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 520;
pub const MIN_WINDOW_WIDTH: i32 = 300;
pub const MIN_WINDOW_HEIGHT: i32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "w{}", self.0)
    }
}

/// Applet hosted by a window. The core only stores and compares the tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AppType {
    Tasks,
    Notes,
    Calculator,
    Calendar,
    Analytics,
    Music,
    Pomodoro,
    Clock,
    Stopwatch,
    Timer,
    Weather,
    Settings,
    FileManager,
}

impl AppType {
    pub const ALL: [AppType; 13] = [
        Self::Tasks,
        Self::Notes,
        Self::Calculator,
        Self::Calendar,
        Self::Analytics,
        Self::Music,
        Self::Pomodoro,
        Self::Clock,
        Self::Stopwatch,
        Self::Timer,
        Self::Weather,
        Self::Settings,
        Self::FileManager,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tasks => "tasks",
            Self::Notes => "notes",
            Self::Calculator => "calculator",
            Self::Calendar => "calendar",
            Self::Analytics => "analytics",
            Self::Music => "music",
            Self::Pomodoro => "pomodoro",
            Self::Clock => "clock",
            Self::Stopwatch => "stopwatch",
            Self::Timer => "timer",
            Self::Weather => "weather",
            Self::Settings => "settings",
            Self::FileManager => "file-manager",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Self::Tasks => "Tasks",
            Self::Notes => "Notes",
            Self::Calculator => "Calculator",
            Self::Calendar => "Calendar",
            Self::Analytics => "Analytics",
            Self::Music => "Music Player",
            Self::Pomodoro => "Pomodoro",
            Self::Clock => "Clock",
            Self::Stopwatch => "Stopwatch",
            Self::Timer => "Timer",
            Self::Weather => "Weather",
            Self::Settings => "Settings",
            Self::FileManager => "File Manager",
        }
    }

    pub fn icon_id(self) -> &'static str {
        match self {
            Self::Tasks => "checklist",
            Self::Notes => "notepad",
            Self::Calculator => "calculator",
            Self::Calendar => "calendar",
            Self::Analytics => "chart",
            Self::Music => "music",
            Self::Pomodoro => "tomato",
            Self::Clock => "clock",
            Self::Stopwatch => "stopwatch",
            Self::Timer => "hourglass",
            Self::Weather => "cloud",
            Self::Settings => "gear",
            Self::FileManager => "folder",
        }
    }
}

impl fmt::Display for AppType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppType {
    type Err = DesktopError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|app| app.as_str() == raw)
            .ok_or_else(|| DesktopError::UnknownAppType(raw.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn clamped_min(self, min: Size) -> Self {
        Self {
            width: self.width.max(min.width),
            height: self.height.max(min.height),
        }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self {
            width: DEFAULT_WINDOW_WIDTH,
            height: DEFAULT_WINDOW_HEIGHT,
        }
    }
}

/// Screen-space rectangle a renderer paints a window into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

/// Lifecycle phase of a record, independent of pointer interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowLifecycle {
    Opening,
    Open,
    Closing,
}

/// Combined per-window state as seen by the frame that renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindowState {
    Opening,
    Idle,
    Dragging,
    Resizing,
    Closing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub app_type: AppType,
    pub title: String,
    pub position: Position,
    pub size: Size,
    pub z_index: u64,
    pub is_minimized: bool,
    pub is_maximized: bool,
    pub lifecycle: WindowLifecycle,
}

impl WindowRecord {
    pub fn is_closing(&self) -> bool {
        self.lifecycle == WindowLifecycle::Closing
    }

    /// Rect to paint, given the maximized workspace. Stored geometry is left untouched.
    pub fn effective_rect(&self, workspace: WindowRect) -> WindowRect {
        if self.is_maximized {
            return workspace;
        }
        WindowRect {
            x: self.position.x,
            y: self.position.y,
            w: self.size.width,
            h: self.size.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn app_type_parses_every_catalog_identifier() {
        for app in AppType::ALL {
            assert_eq!(app.as_str().parse::<AppType>().unwrap(), app);
        }
    }

    #[test]
    fn unknown_app_type_is_rejected() {
        let err = "minesweeper".parse::<AppType>().unwrap_err();
        assert_eq!(err, DesktopError::UnknownAppType("minesweeper".to_string()));
    }

    #[test]
    fn serde_uses_kebab_case_identifiers() {
        let raw = serde_json::to_string(&AppType::FileManager).unwrap();
        assert_eq!(raw, "\"file-manager\"");
    }

    #[test]
    fn effective_rect_ignores_stored_geometry_when_maximized() {
        let workspace = WindowRect {
            x: 8,
            y: 8,
            w: 1000,
            h: 700,
        };
        let mut record = WindowRecord {
            id: WindowId(1),
            app_type: AppType::Notes,
            title: "Notes".to_string(),
            position: Position { x: 60, y: 40 },
            size: Size::default(),
            z_index: 1,
            is_minimized: false,
            is_maximized: false,
            lifecycle: WindowLifecycle::Open,
        };
        assert_eq!(
            record.effective_rect(workspace),
            WindowRect {
                x: 60,
                y: 40,
                w: 420,
                h: 520
            }
        );

        record.is_maximized = true;
        assert_eq!(record.effective_rect(workspace), workspace);
        assert_eq!(record.position, Position { x: 60, y: 40 });
    }
}
