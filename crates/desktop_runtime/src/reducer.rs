//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use tracing::debug;

use crate::{
    config::ShellConfig,
    error::DesktopError,
    interaction::{HitTarget, PointerGrab},
    model::{AppType, PointerPosition, WindowId, WindowRecord, WindowState},
    placement::{LayoutJitter, SeededJitter},
    start_menu::StartMenuState,
    taskbar::{resolve_taskbar_click, taskbar_entries, TaskbarClick, TaskbarEntry},
    window_manager::WindowManager,
};

/// Everything the shell mutates: the window collection and the start menu.
#[derive(Debug, Default)]
pub struct DesktopState {
    pub windows: WindowManager,
    pub start_menu: StartMenuState,
}

impl DesktopState {
    pub fn new(config: ShellConfig, jitter: impl LayoutJitter + 'static) -> Self {
        Self {
            windows: WindowManager::new(config, jitter),
            start_menu: StartMenuState::default(),
        }
    }

    pub fn with_seed(config: ShellConfig, seed: u64) -> Self {
        Self::new(config, SeededJitter::new(seed))
    }

    /// Read-only render model. Cheap to compare, so subscribers can skip unchanged frames.
    pub fn view(&self) -> DesktopView {
        let windows = self
            .windows
            .snapshot()
            .into_iter()
            .map(|record| WindowView {
                state: self
                    .windows
                    .window_state(record.id)
                    .unwrap_or(WindowState::Idle),
                record,
            })
            .collect();
        DesktopView {
            windows,
            taskbar: taskbar_entries(&self.windows),
            start_menu: self.start_menu.clone(),
            focused_window_id: self.windows.focused_window_id(),
            grab: self.windows.grab(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WindowView {
    pub record: WindowRecord,
    pub state: WindowState,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DesktopView {
    /// Ordered back to front.
    pub windows: Vec<WindowView>,
    pub taskbar: Vec<TaskbarEntry>,
    pub start_menu: StartMenuState,
    pub focused_window_id: Option<WindowId>,
    pub grab: Option<PointerGrab>,
}

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate [`DesktopState`].
pub enum DesktopAction {
    /// Open a window for a catalog identifier (desktop icon, deep link, host call).
    OpenWindow {
        /// Identifier such as `"notes"`; unknown values are rejected.
        app_type: String,
    },
    /// Open from the start menu; the menu closes when the open succeeds.
    LaunchFromStartMenu {
        /// Identifier of the selected catalog entry.
        app_type: String,
    },
    /// Begin the close animation for a window.
    CloseWindow {
        /// Window to close.
        window_id: WindowId,
    },
    /// Close animation elapsed; drop the record.
    FinalizeClose {
        /// Window whose close timer fired.
        window_id: WindowId,
    },
    /// Open animation elapsed.
    SettleOpen {
        /// Window whose open timer fired.
        window_id: WindowId,
    },
    /// Focus (and raise) a window by id.
    FocusWindow {
        /// Window to focus.
        window_id: WindowId,
    },
    /// Minimize a window.
    MinimizeWindow {
        /// Window to minimize.
        window_id: WindowId,
    },
    /// Show a minimized window and raise it.
    RestoreWindow {
        /// Window to restore.
        window_id: WindowId,
    },
    /// Flip the maximized flag.
    ToggleMaximize {
        /// Window to maximize or un-maximize.
        window_id: WindowId,
    },
    /// A taskbar entry was clicked.
    TaskbarClick {
        /// Window associated with the taskbar button.
        window_id: WindowId,
    },
    /// Toggle the start menu open/closed.
    ToggleStartMenu,
    /// Close the start menu if open.
    CloseStartMenu,
    /// Replace the start menu filter text.
    SetStartMenuQuery {
        /// New filter text.
        query: String,
    },
    /// Pointer pressed inside a window frame.
    PointerDown {
        /// Window that received the press.
        window_id: WindowId,
        /// Frame part under the pointer.
        target: HitTarget,
        /// Pointer position in desktop coordinates.
        pointer: PointerPosition,
    },
    /// Pointer moved over the desktop surface.
    PointerMove {
        /// Current pointer position.
        pointer: PointerPosition,
    },
    /// Pointer released.
    PointerUp,
    /// Pointer left the desktop surface.
    PointerLeave,
}

impl DesktopAction {
    pub fn open(app_type: AppType) -> Self {
        Self::OpenWindow {
            app_type: app_type.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the shell runtime to execute.
pub enum RuntimeEffect {
    /// Mount applet content for a new record.
    MountContent {
        /// New window.
        window_id: WindowId,
        /// Applet to mount.
        app_type: AppType,
    },
    /// Unmount applet content; the record is gone.
    UnmountContent {
        /// Removed window.
        window_id: WindowId,
    },
    /// Dispatch [`DesktopAction::SettleOpen`] after `delay_ms`.
    ScheduleOpenSettle {
        /// Window that is animating in.
        window_id: WindowId,
        /// Open animation length.
        delay_ms: u64,
    },
    /// Dispatch [`DesktopAction::FinalizeClose`] after `delay_ms`.
    ScheduleCloseFinalize {
        /// Window that is animating out.
        window_id: WindowId,
        /// Close animation length.
        delay_ms: u64,
    },
}

/// Applies a [`DesktopAction`] to the desktop state and collects resulting side effects.
///
/// Actions that reference a missing or closing window are ignored and yield no effects.
///
/// # Errors
///
/// Returns [`DesktopError::UnknownAppType`] when an open action names an app outside the catalog.
/// Returns [`DesktopError::WindowIdsExhausted`] when no unused window id remains.
pub fn reduce_desktop(
    state: &mut DesktopState,
    action: DesktopAction,
) -> Result<Vec<RuntimeEffect>, DesktopError> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow { app_type } => {
            let window_id = state.windows.open(&app_type)?;
            push_open_effects(state, window_id, &mut effects);
        }
        DesktopAction::LaunchFromStartMenu { app_type } => {
            let window_id = state.windows.open(&app_type)?;
            state.start_menu.close();
            push_open_effects(state, window_id, &mut effects);
        }
        DesktopAction::CloseWindow { window_id } => {
            if state.windows.close(window_id) {
                effects.push(RuntimeEffect::ScheduleCloseFinalize {
                    window_id,
                    delay_ms: state.windows.config().close_animation_ms,
                });
            }
        }
        DesktopAction::FinalizeClose { window_id } => {
            if state.windows.finalize_close(window_id) {
                effects.push(RuntimeEffect::UnmountContent { window_id });
            }
        }
        DesktopAction::SettleOpen { window_id } => {
            state.windows.settle_open(window_id);
        }
        DesktopAction::FocusWindow { window_id } => {
            state.windows.focus(window_id);
        }
        DesktopAction::MinimizeWindow { window_id } => {
            state.windows.minimize(window_id);
        }
        DesktopAction::RestoreWindow { window_id } => {
            state.windows.restore(window_id);
        }
        DesktopAction::ToggleMaximize { window_id } => {
            state.windows.toggle_maximize(window_id);
        }
        DesktopAction::TaskbarClick { window_id } => {
            let click = state
                .windows
                .get(window_id)
                .map(resolve_taskbar_click)
                .unwrap_or(TaskbarClick::Ignore);
            match click {
                TaskbarClick::Restore(window_id) => {
                    state.windows.restore(window_id);
                }
                TaskbarClick::Ignore => debug!(%window_id, "taskbar click ignored"),
            }
        }
        DesktopAction::ToggleStartMenu => {
            state.start_menu.toggle();
        }
        DesktopAction::CloseStartMenu => {
            state.start_menu.close();
        }
        DesktopAction::SetStartMenuQuery { query } => {
            state.start_menu.set_query(query);
        }
        DesktopAction::PointerDown {
            window_id,
            target,
            pointer,
        } => {
            if state.windows.pointer_down(window_id, target, pointer) {
                state.start_menu.close();
            }
        }
        DesktopAction::PointerMove { pointer } => {
            state.windows.pointer_move(pointer);
        }
        DesktopAction::PointerUp => {
            state.windows.pointer_up();
        }
        DesktopAction::PointerLeave => {
            state.windows.pointer_leave();
        }
    }

    Ok(effects)
}

fn push_open_effects(state: &DesktopState, window_id: WindowId, effects: &mut Vec<RuntimeEffect>) {
    let Some(record) = state.windows.get(window_id) else {
        return;
    };
    effects.push(RuntimeEffect::MountContent {
        window_id,
        app_type: record.app_type,
    });
    effects.push(RuntimeEffect::ScheduleOpenSettle {
        window_id,
        delay_ms: state.windows.config().open_animation_ms,
    });
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::placement::FixedJitter;

    fn state() -> DesktopState {
        DesktopState::new(ShellConfig::default(), FixedJitter::new(0, 0))
    }

    fn open(state: &mut DesktopState, app_type: AppType) -> WindowId {
        reduce_desktop(state, DesktopAction::open(app_type)).expect("open window");
        state.windows.snapshot().last().expect("window").id
    }

    #[test]
    fn open_window_mounts_content_and_schedules_settle() {
        let mut state = state();
        let effects = reduce_desktop(&mut state, DesktopAction::open(AppType::Notes)).unwrap();
        let window_id = WindowId(1);

        assert_eq!(
            effects,
            vec![
                RuntimeEffect::MountContent {
                    window_id,
                    app_type: AppType::Notes,
                },
                RuntimeEffect::ScheduleOpenSettle {
                    window_id,
                    delay_ms: 300,
                },
            ]
        );
    }

    #[test]
    fn open_unknown_app_returns_error_and_no_effects() {
        let mut state = state();
        let err = reduce_desktop(
            &mut state,
            DesktopAction::OpenWindow {
                app_type: "paint".to_string(),
            },
        )
        .unwrap_err();

        assert_eq!(err, DesktopError::UnknownAppType("paint".to_string()));
        assert!(state.windows.is_empty());
    }

    #[test]
    fn close_schedules_finalize_once_and_finalize_unmounts() {
        let mut state = state();
        let win = open(&mut state, AppType::Timer);

        let effects = reduce_desktop(&mut state, DesktopAction::CloseWindow { window_id: win }).unwrap();
        assert_eq!(
            effects,
            vec![RuntimeEffect::ScheduleCloseFinalize {
                window_id: win,
                delay_ms: 200,
            }]
        );
        let again = reduce_desktop(&mut state, DesktopAction::CloseWindow { window_id: win }).unwrap();
        assert!(again.is_empty());

        let effects = reduce_desktop(&mut state, DesktopAction::FinalizeClose { window_id: win }).unwrap();
        assert_eq!(effects, vec![RuntimeEffect::UnmountContent { window_id: win }]);
        assert!(state.windows.is_empty());
    }

    #[test]
    fn launch_from_start_menu_closes_menu_only_on_success() {
        let mut state = state();
        reduce_desktop(&mut state, DesktopAction::ToggleStartMenu).unwrap();
        reduce_desktop(
            &mut state,
            DesktopAction::SetStartMenuQuery {
                query: "wea".to_string(),
            },
        )
        .unwrap();

        let err = reduce_desktop(
            &mut state,
            DesktopAction::LaunchFromStartMenu {
                app_type: "mail".to_string(),
            },
        );
        assert!(err.is_err());
        assert!(state.start_menu.open);
        assert_eq!(state.start_menu.query, "wea");

        reduce_desktop(
            &mut state,
            DesktopAction::LaunchFromStartMenu {
                app_type: "weather".to_string(),
            },
        )
        .unwrap();
        assert_eq!(state.start_menu, StartMenuState::default());
        assert_eq!(state.windows.len(), 1);
    }

    #[test]
    fn taskbar_click_restores_minimized_and_ignores_visible() {
        let mut state = state();
        let w1 = open(&mut state, AppType::Calculator);
        let w2 = open(&mut state, AppType::Notes);
        let before = state.windows.snapshot();

        reduce_desktop(&mut state, DesktopAction::TaskbarClick { window_id: w1 }).unwrap();
        assert_eq!(state.windows.snapshot(), before);

        reduce_desktop(&mut state, DesktopAction::MinimizeWindow { window_id: w2 }).unwrap();
        reduce_desktop(&mut state, DesktopAction::TaskbarClick { window_id: w2 }).unwrap();
        let record = state.windows.get(w2).unwrap();
        assert!(!record.is_minimized);
        assert_eq!(state.windows.focused_window_id(), Some(w2));
    }

    #[test]
    fn pointer_down_in_window_dismisses_start_menu() {
        let mut state = state();
        let win = open(&mut state, AppType::Clock);
        reduce_desktop(&mut state, DesktopAction::ToggleStartMenu).unwrap();

        reduce_desktop(
            &mut state,
            DesktopAction::PointerDown {
                window_id: win,
                target: HitTarget::Body,
                pointer: PointerPosition { x: 60, y: 60 },
            },
        )
        .unwrap();
        assert!(!state.start_menu.open);
    }

    #[test]
    fn view_reports_combined_window_states() {
        let mut state = state();
        let w1 = open(&mut state, AppType::Notes);
        let w2 = open(&mut state, AppType::Tasks);
        reduce_desktop(&mut state, DesktopAction::SettleOpen { window_id: w2 }).unwrap();
        reduce_desktop(
            &mut state,
            DesktopAction::PointerDown {
                window_id: w2,
                target: HitTarget::TitleBar,
                pointer: PointerPosition { x: 55, y: 35 },
            },
        )
        .unwrap();

        let view = state.view();
        let states: Vec<_> = view.windows.iter().map(|w| (w.record.id, w.state)).collect();
        assert_eq!(
            states,
            vec![(w1, WindowState::Opening), (w2, WindowState::Dragging)]
        );
        assert_eq!(view.focused_window_id, Some(w2));
        assert_eq!(view.taskbar.len(), 2);
    }
}
