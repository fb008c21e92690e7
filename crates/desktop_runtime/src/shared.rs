//! Thread-safe handle for hosts that drive the desktop from more than one thread.
//!
//! The browser shell is single-threaded and owns [`DesktopState`] directly. Native hosts (timer
//! threads firing close/open deadlines, IPC handlers) share one [`SharedDesktop`] instead; every
//! action runs under the same lock, so the collection and the z-order counter have one writer.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::{
    error::DesktopError,
    model::WindowRecord,
    reducer::{reduce_desktop, DesktopAction, DesktopState, DesktopView, RuntimeEffect},
};

#[derive(Debug, Clone)]
pub struct SharedDesktop {
    inner: Arc<Mutex<DesktopState>>,
}

impl SharedDesktop {
    pub fn new(state: DesktopState) -> Self {
        Self {
            inner: Arc::new(Mutex::new(state)),
        }
    }

    /// # Errors
    ///
    /// Propagates [`reduce_desktop`] errors.
    pub fn dispatch(&self, action: DesktopAction) -> Result<Vec<RuntimeEffect>, DesktopError> {
        reduce_desktop(&mut self.inner.lock(), action)
    }

    /// Window records ordered by `z_index` ascending.
    pub fn snapshot(&self) -> Vec<WindowRecord> {
        self.inner.lock().windows.snapshot()
    }

    pub fn view(&self) -> DesktopView {
        self.inner.lock().view()
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, thread};

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{config::ShellConfig, model::AppType, placement::FixedJitter};

    #[test]
    fn concurrent_opens_get_distinct_ids_and_z_indices() {
        let desktop = SharedDesktop::new(DesktopState::new(
            ShellConfig::default(),
            FixedJitter::default(),
        ));

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let desktop = desktop.clone();
                thread::spawn(move || {
                    for _ in 0..25 {
                        desktop
                            .dispatch(DesktopAction::open(AppType::Stopwatch))
                            .unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let snapshot = desktop.snapshot();
        assert_eq!(snapshot.len(), 200);
        let ids: HashSet<_> = snapshot.iter().map(|w| w.id).collect();
        let z: HashSet<_> = snapshot.iter().map(|w| w.z_index).collect();
        assert_eq!(ids.len(), 200);
        assert_eq!(z.len(), 200);
    }
}
