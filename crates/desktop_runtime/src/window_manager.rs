//! Canonical window collection: id assignment, stacking order, lifecycle and pointer interaction.
//!
//! [`WindowManager`] is the single writer of every [`WindowRecord`]. Operations that target a
//! window id never fail; a stale or unknown id turns the call into a no-op so that a close
//! animation finishing between two queued user actions cannot break the shell.

use tracing::{debug, trace, warn};

use crate::{
    config::ShellConfig,
    error::DesktopError,
    interaction::{drag_position, resize_size, HitTarget, PointerGrab},
    model::{
        AppType, PointerPosition, Position, WindowId, WindowLifecycle, WindowRecord, WindowRect,
        WindowState,
    },
    placement::{LayoutJitter, SeededJitter},
};

#[derive(Debug)]
pub struct WindowManager {
    config: ShellConfig,
    jitter: Box<dyn LayoutJitter>,
    /// `None` once `u64::MAX` has been issued; ids are never handed out twice.
    next_window_id: Option<u64>,
    windows: Vec<WindowRecord>,
    grab: Option<PointerGrab>,
}

impl Default for WindowManager {
    fn default() -> Self {
        Self::new(ShellConfig::default(), SeededJitter::new(0))
    }
}

impl WindowManager {
    pub fn new(config: ShellConfig, jitter: impl LayoutJitter + 'static) -> Self {
        Self {
            config,
            jitter: Box::new(jitter),
            next_window_id: Some(1),
            windows: Vec::new(),
            grab: None,
        }
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    /// Opens a window for a catalog identifier such as `"calculator"` or `"file-manager"`.
    ///
    /// # Errors
    ///
    /// Returns [`DesktopError::UnknownAppType`] and creates nothing when `app_type` is not in the
    /// catalog.
    pub fn open(&mut self, app_type: &str) -> Result<WindowId, DesktopError> {
        match app_type.parse::<AppType>() {
            Ok(app) => self.open_app(app),
            Err(err) => {
                warn!(app_type, "open rejected: unknown app type");
                Err(err)
            }
        }
    }

    /// Opens a window for `app` on top of the stack, in the `Opening` phase.
    ///
    /// # Errors
    ///
    /// Returns [`DesktopError::WindowIdsExhausted`] once every id has been handed out.
    pub fn open_app(&mut self, app: AppType) -> Result<WindowId, DesktopError> {
        let Some(next_window_id) = self.next_window_id else {
            warn!(app = %app, "open rejected: window ids exhausted");
            return Err(DesktopError::WindowIdsExhausted);
        };
        let window_id = WindowId(next_window_id);
        self.next_window_id = next_window_id.checked_add(1);

        let (dx, dy) = self
            .jitter
            .next_offset(self.config.jitter_x, self.config.jitter_y);
        let position = Position {
            x: self.config.base_position.x.saturating_add(dx),
            y: self.config.base_position.y.saturating_add(dy),
        };
        let z_index = self.top_z_index() + 1;

        self.windows.push(WindowRecord {
            id: window_id,
            app_type: app,
            title: app.title().to_string(),
            position,
            size: self.config.default_size,
            z_index,
            is_minimized: false,
            is_maximized: false,
            lifecycle: WindowLifecycle::Opening,
        });
        debug!(%window_id, app = %app, z_index, "window opened");
        Ok(window_id)
    }

    /// Ends the open animation. Returns `true` when the window left `Opening`.
    pub fn settle_open(&mut self, window_id: WindowId) -> bool {
        match self.windows.iter_mut().find(|w| w.id == window_id) {
            Some(window) if window.lifecycle == WindowLifecycle::Opening => {
                window.lifecycle = WindowLifecycle::Open;
                true
            }
            _ => false,
        }
    }

    /// Starts the close animation. The record stays in the collection until
    /// [`WindowManager::finalize_close`] runs.
    ///
    /// Returns `true` only for the call that moved the window into `Closing`.
    pub fn close(&mut self, window_id: WindowId) -> bool {
        let Some(window) = self.find_live_mut(window_id, "close") else {
            return false;
        };
        window.lifecycle = WindowLifecycle::Closing;
        self.release_grab_for(window_id);
        debug!(%window_id, "window closing");
        true
    }

    /// Removes a window whose close animation has elapsed. Windows not in `Closing` are kept.
    pub fn finalize_close(&mut self, window_id: WindowId) -> bool {
        let Some(index) = self
            .windows
            .iter()
            .position(|w| w.id == window_id && w.is_closing())
        else {
            return false;
        };
        self.windows.remove(index);
        debug!(%window_id, "window removed");
        true
    }

    /// Hides the window. Geometry and stacking order are kept.
    pub fn minimize(&mut self, window_id: WindowId) -> bool {
        let Some(window) = self.find_live_mut(window_id, "minimize") else {
            return false;
        };
        window.is_minimized = true;
        self.release_grab_for(window_id);
        true
    }

    /// Shows a minimized window again and raises it.
    pub fn restore(&mut self, window_id: WindowId) -> bool {
        let Some(window) = self.find_live_mut(window_id, "restore") else {
            return false;
        };
        window.is_minimized = false;
        self.raise(window_id);
        true
    }

    /// Flips the maximized flag. Stored position and size are never touched.
    pub fn toggle_maximize(&mut self, window_id: WindowId) -> bool {
        let Some(window) = self.find_live_mut(window_id, "toggle_maximize") else {
            return false;
        };
        window.is_maximized = !window.is_maximized;
        let maximized = window.is_maximized;
        if maximized {
            self.release_grab_for(window_id);
        }
        debug!(%window_id, maximized, "window maximize toggled");
        true
    }

    /// Raises the window to the top of the stack.
    pub fn focus(&mut self, window_id: WindowId) -> bool {
        if self.find_live_mut(window_id, "focus").is_none() {
            return false;
        }
        self.raise(window_id);
        true
    }

    /// Pointer pressed inside a window frame.
    ///
    /// The window is raised first. A press on the title bar starts a drag and a press on the
    /// resize handle starts a resize, unless the window is maximized.
    pub fn pointer_down(
        &mut self,
        window_id: WindowId,
        target: HitTarget,
        pointer: PointerPosition,
    ) -> bool {
        let Some(window) = self.find_live_mut(window_id, "pointer_down") else {
            return false;
        };
        if window.is_minimized {
            return false;
        }
        let maximized = window.is_maximized;
        let position = window.position;
        self.raise(window_id);

        self.grab = match target {
            HitTarget::TitleBar if !maximized => {
                Some(PointerGrab::begin_drag(window_id, pointer, position))
            }
            HitTarget::ResizeHandle if !maximized => Some(PointerGrab::Resize { window_id }),
            _ => None,
        };
        true
    }

    /// Applies the active drag or resize. Without a grab the pointer stream changes nothing.
    pub fn pointer_move(&mut self, pointer: PointerPosition) -> bool {
        let Some(grab) = self.grab else {
            return false;
        };
        let min_size = self.config.min_size;
        let Some(window) = self
            .windows
            .iter_mut()
            .find(|w| w.id == grab.window_id())
            .filter(|w| !w.is_closing() && !w.is_minimized && !w.is_maximized)
        else {
            self.grab = None;
            return false;
        };

        match grab {
            PointerGrab::Drag { offset, .. } => {
                window.position = drag_position(pointer, offset);
                trace!(window_id = %window.id, x = window.position.x, y = window.position.y, "drag");
            }
            PointerGrab::Resize { .. } => {
                window.size = resize_size(pointer, window.position, min_size);
                trace!(
                    window_id = %window.id,
                    width = window.size.width,
                    height = window.size.height,
                    "resize"
                );
            }
        }
        true
    }

    /// Ends the active drag or resize. Returns `true` when a grab was released.
    pub fn pointer_up(&mut self) -> bool {
        self.grab.take().is_some()
    }

    /// Pointer left the tracking surface; cancels exactly like [`WindowManager::pointer_up`].
    pub fn pointer_leave(&mut self) -> bool {
        self.pointer_up()
    }

    pub fn grab(&self) -> Option<PointerGrab> {
        self.grab
    }

    pub fn window_state(&self, window_id: WindowId) -> Option<WindowState> {
        let window = self.get(window_id)?;
        let state = match (window.lifecycle, self.grab) {
            (WindowLifecycle::Closing, _) => WindowState::Closing,
            (_, Some(PointerGrab::Drag { window_id: id, .. })) if id == window_id => {
                WindowState::Dragging
            }
            (_, Some(PointerGrab::Resize { window_id: id })) if id == window_id => {
                WindowState::Resizing
            }
            (WindowLifecycle::Opening, _) => WindowState::Opening,
            (WindowLifecycle::Open, _) => WindowState::Idle,
        };
        Some(state)
    }

    pub fn get(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    pub fn contains(&self, window_id: WindowId) -> bool {
        self.get(window_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Read-only copy of the collection ordered by `z_index` ascending (back to front).
    pub fn snapshot(&self) -> Vec<WindowRecord> {
        let mut windows = self.windows.clone();
        windows.sort_by_key(|w| (w.z_index, w.id));
        windows
    }

    /// Topmost window that is visible and not closing.
    pub fn focused_window_id(&self) -> Option<WindowId> {
        self.windows
            .iter()
            .filter(|w| !w.is_minimized && !w.is_closing())
            .max_by_key(|w| w.z_index)
            .map(|w| w.id)
    }

    pub fn top_z_index(&self) -> u64 {
        self.windows.iter().map(|w| w.z_index).max().unwrap_or(0)
    }

    pub fn workspace_rect(&self, viewport_w: i32, viewport_h: i32) -> WindowRect {
        self.config.workspace_rect(viewport_w, viewport_h)
    }

    fn raise(&mut self, window_id: WindowId) {
        let top = self.top_z_index();
        let Some(window) = self.windows.iter_mut().find(|w| w.id == window_id) else {
            return;
        };
        if window.z_index == top {
            return;
        }
        window.z_index = top + 1;
        trace!(%window_id, z_index = window.z_index, "window raised");
    }

    fn release_grab_for(&mut self, window_id: WindowId) {
        if self.grab.is_some_and(|grab| grab.window_id() == window_id) {
            self.grab = None;
        }
    }

    /// Finds a window that accepts mutations. Closing windows are terminal.
    fn find_live_mut(&mut self, window_id: WindowId, op: &'static str) -> Option<&mut WindowRecord> {
        let found = self
            .windows
            .iter_mut()
            .find(|w| w.id == window_id && !w.is_closing());
        if found.is_none() {
            debug!(%window_id, op, "ignored: window not found or closing");
        }
        found
    }
}
