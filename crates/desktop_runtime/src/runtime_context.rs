//! Runtime provider and context wiring for the desktop shell.
//!
//! This module owns the long-lived [`DesktopState`], the render snapshot signal, and the runtime
//! effect queue. UI composition stays in [`crate::components`].

use leptos::*;

use crate::{
    config::ShellConfig,
    effect_executor,
    model::WindowRect,
    reducer::{reduce_desktop, DesktopAction, DesktopState, DesktopView, RuntimeEffect},
};

#[derive(Clone, Copy)]
/// Leptos context for reading the desktop snapshot and dispatching [`DesktopAction`] values.
pub struct DesktopRuntimeContext {
    /// Single-writer desktop state. Only the dispatch callback mutates it.
    pub desktop: StoredValue<DesktopState>,
    /// Render snapshot, replaced after every action that changed something.
    pub view: RwSignal<DesktopView>,
    /// Browser viewport size in CSS pixels.
    pub viewport: RwSignal<(i32, i32)>,
    /// Queue of runtime effects emitted by the reducer and processed by the executor.
    pub effects: RwSignal<Vec<RuntimeEffect>>,
    /// Collaborator hook for content mount/unmount effects.
    pub on_effect: Option<Callback<RuntimeEffect>>,
    /// Reducer dispatch callback.
    pub dispatch: Callback<DesktopAction>,
}

impl DesktopRuntimeContext {
    /// Dispatches a reducer action through the runtime context callback.
    pub fn dispatch_action(&self, action: DesktopAction) {
        self.dispatch.call(action);
    }

    /// Area a maximized window fills for the current viewport.
    pub fn workspace(&self) -> WindowRect {
        let (width, height) = self.viewport.get();
        self.desktop
            .with_value(|desktop| desktop.windows.workspace_rect(width, height))
    }
}

#[component]
/// Provides [`DesktopRuntimeContext`] to descendant components.
pub fn DesktopProvider(
    /// Geometry and timing overrides; stock constants when omitted.
    #[prop(optional)]
    config: Option<ShellConfig>,
    /// Receives `MountContent`/`UnmountContent` so applet content can follow window records.
    #[prop(optional)]
    on_effect: Option<Callback<RuntimeEffect>>,
    children: Children,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let desktop = store_value(DesktopState::with_seed(config, jitter_seed()));
    let view = create_rw_signal(desktop.with_value(DesktopState::view));
    let viewport = create_rw_signal(crate::components::viewport_size());
    let effects = create_rw_signal(Vec::<RuntimeEffect>::new());

    let dispatch = Callback::new(move |action: DesktopAction| {
        let mut outcome = None;
        desktop.update_value(|desktop| {
            outcome = Some(
                reduce_desktop(desktop, action).map(|new_effects| (new_effects, desktop.view())),
            );
        });

        match outcome {
            Some(Ok((new_effects, next_view))) => {
                if view.with_untracked(|current| *current != next_view) {
                    view.set(next_view);
                }
                if !new_effects.is_empty() {
                    let mut queue = effects.get_untracked();
                    queue.extend(new_effects);
                    effects.set(queue);
                }
            }
            Some(Err(err)) => logging::warn!("desktop reducer error: {err}"),
            None => {}
        }
    });

    let runtime = DesktopRuntimeContext {
        desktop,
        view,
        viewport,
        effects,
        on_effect,
        dispatch,
    };

    provide_context(runtime);
    effect_executor::install(runtime);

    children().into_view()
}

/// Returns the current [`DesktopRuntimeContext`].
///
/// # Panics
///
/// Panics if called outside [`DesktopProvider`].
pub fn use_desktop_runtime() -> DesktopRuntimeContext {
    use_context::<DesktopRuntimeContext>().expect("DesktopRuntimeContext not provided")
}

fn jitter_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        return js_sys::Date::now() as u64;
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        0
    }
}
