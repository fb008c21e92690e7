//! Desktop shell UI composition and interaction surfaces.

mod menus;
mod taskbar;
mod window;

use leptos::*;

use self::{menus::StartMenu, taskbar::Taskbar, window::DesktopWindow};

use crate::{
    apps,
    interaction::HitTarget,
    model::{PointerPosition, WindowId},
    reducer::{DesktopAction, WindowView},
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

#[component]
/// Renders the desktop surface, its windows, and the taskbar.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let desktop_view = runtime.view;

    let resize_listener = window_event_listener(ev::resize, move |_| {
        runtime.viewport.set(viewport_size());
    });
    on_cleanup(move || resize_listener.remove());

    // Move/up/leave only reach the reducer while a grab is active, so an idle pointer stream never
    // touches window geometry.
    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        if desktop_view.with_untracked(|view| view.grab.is_some()) {
            runtime.dispatch_action(DesktopAction::PointerMove {
                pointer: pointer_from_pointer_event(&ev),
            });
        }
    };
    let on_pointer_end = move |_| {
        if desktop_view.with_untracked(|view| view.grab.is_some()) {
            runtime.dispatch_action(DesktopAction::PointerUp);
        }
    };
    let on_pointer_leave = move |_| {
        if desktop_view.with_untracked(|view| view.grab.is_some()) {
            runtime.dispatch_action(DesktopAction::PointerLeave);
        }
    };

    view! {
        <div
            id="desktop-shell-root"
            class="desktop-shell"
            tabindex="-1"
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
            on:pointerleave=on_pointer_leave
        >
            <div
                class="desktop-surface"
                on:mousedown=move |_| runtime.dispatch_action(DesktopAction::CloseStartMenu)
            >
                <DesktopIcons />
                <div class="desktop-window-layer">
                    <For
                        each=move || desktop_view.get().windows
                        key=|win| win.record.id.0
                        let:win
                    >
                        <DesktopWindow window_id=win.record.id />
                    </For>
                </div>
            </div>

            <Taskbar />
        </div>
    }
}

#[component]
fn DesktopIcons() -> impl IntoView {
    let runtime = use_desktop_runtime();

    view! {
        <div class="desktop-icon-grid">
            <For each=apps::desktop_icon_apps key=|app| app.app_type.as_str() let:app>
                {{
                    let app_type = app.app_type;
                    view! {
                        <button
                            class="desktop-icon"
                            data-icon=app_type.icon_id()
                            on:dblclick=move |_| runtime.dispatch_action(DesktopAction::open(app_type))
                        >
                            <span class="desktop-icon-glyph" aria-hidden="true"></span>
                            <span>{app.desktop_icon_label}</span>
                        </button>
                    }
                }}
            </For>
        </div>
    }
}

/// Browser viewport size in CSS pixels, with a fixed fallback off the web.
pub(crate) fn viewport_size() -> (i32, i32) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(1024);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(768);
            return (width.max(320), height.max(240));
        }
    }

    (1024, 768)
}

fn find_window(runtime: DesktopRuntimeContext, window_id: WindowId) -> Option<WindowView> {
    runtime.view.with(|view| {
        view.windows
            .iter()
            .find(|win| win.record.id == window_id)
            .cloned()
    })
}

fn stop_mouse_event(ev: &web_sys::MouseEvent) {
    ev.prevent_default();
    ev.stop_propagation();
}

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn dispatch_pointer_down(
    runtime: DesktopRuntimeContext,
    window_id: WindowId,
    target: HitTarget,
    ev: &web_sys::PointerEvent,
) {
    if ev.pointer_type() == "mouse" && ev.button() != 0 {
        return;
    }
    if ev.pointer_type() != "mouse" && !ev.is_primary() {
        return;
    }
    runtime.dispatch_action(DesktopAction::PointerDown {
        window_id,
        target,
        pointer: pointer_from_pointer_event(ev),
    });
}
