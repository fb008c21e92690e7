//! Taskbar entries derived from the window collection on every render.
//!
//! Nothing here is stored: entries are rebuilt from a [`WindowManager`] snapshot so the taskbar
//! cannot drift from the canonical collection.

use crate::{
    model::{AppType, WindowId, WindowRecord},
    window_manager::WindowManager,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskbarEntry {
    pub window_id: WindowId,
    pub app_type: AppType,
    pub title: String,
    pub icon_id: &'static str,
    pub is_minimized: bool,
    pub is_focused: bool,
    pub is_closing: bool,
}

/// What a click on a taskbar entry does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskbarClick {
    Restore(WindowId),
    /// The window is already visible. Clicking does not raise it.
    Ignore,
}

/// One entry per record, minimized or not, in launch order.
///
/// Buttons are sorted by id rather than by the z-ascending snapshot, so focusing a window never
/// moves its taskbar button.
pub fn taskbar_entries(windows: &WindowManager) -> Vec<TaskbarEntry> {
    let focused = windows.focused_window_id();
    let mut records = windows.snapshot();
    records.sort_by_key(|w| w.id);
    records
        .into_iter()
        .map(|record| entry_for(record, focused))
        .collect()
}

pub fn resolve_taskbar_click(record: &WindowRecord) -> TaskbarClick {
    if record.is_minimized {
        TaskbarClick::Restore(record.id)
    } else {
        TaskbarClick::Ignore
    }
}

fn entry_for(record: WindowRecord, focused: Option<WindowId>) -> TaskbarEntry {
    TaskbarEntry {
        window_id: record.id,
        app_type: record.app_type,
        icon_id: record.app_type.icon_id(),
        is_minimized: record.is_minimized,
        is_focused: focused == Some(record.id),
        is_closing: record.is_closing(),
        title: record.title,
    }
}
