use super::*;
use crate::model::{WindowRect, WindowState};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

fn window_class(win: &WindowView, focused: bool) -> String {
    let state_class = match win.state {
        WindowState::Opening => " opening",
        WindowState::Idle => "",
        WindowState::Dragging => " dragging",
        WindowState::Resizing => " resizing",
        WindowState::Closing => " closing",
    };
    let focused_class = if focused { " focused" } else { "" };
    let minimized_class = if win.record.is_minimized {
        " minimized"
    } else {
        ""
    };
    let maximized_class = if win.record.is_maximized {
        " maximized"
    } else {
        ""
    };
    format!("desktop-window{state_class}{focused_class}{minimized_class}{maximized_class}")
}

/// Minimized frames stay in the DOM so mounted applet content survives a restore.
fn window_style(win: &WindowView, workspace: WindowRect) -> String {
    let rect = win.record.effective_rect(workspace);
    let display = if win.record.is_minimized {
        "display:none;"
    } else {
        ""
    };
    format!(
        "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};{display}",
        rect.x, rect.y, rect.w, rect.h, win.record.z_index
    )
}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let window = Signal::derive(move || find_window(runtime, window_id));
    let present = move || window.with(Option::is_some);
    let maximized = move || {
        window
            .get()
            .map(|win| win.record.is_maximized)
            .unwrap_or(false)
    };
    let style = move || {
        window
            .get()
            .map(|win| window_style(&win, runtime.workspace()))
            .unwrap_or_default()
    };
    let class_name = move || {
        let focused = runtime.view.with(|view| view.focused_window_id == Some(window_id));
        window
            .get()
            .map(|win| window_class(&win, focused))
            .unwrap_or_default()
    };
    let title = move || {
        window
            .get()
            .map(|win| win.record.title)
            .unwrap_or_default()
    };
    let app_type = window
        .get_untracked()
        .map(|win| win.record.app_type.as_str())
        .unwrap_or_default();

    let on_frame_pointerdown = move |ev: web_sys::PointerEvent| {
        dispatch_pointer_down(runtime, window_id, HitTarget::Body, &ev);
    };
    let on_titlebar_pointerdown = move |ev: web_sys::PointerEvent| {
        ev.stop_propagation();
        try_set_pointer_capture(&ev);
        dispatch_pointer_down(runtime, window_id, HitTarget::TitleBar, &ev);
    };
    let on_resize_pointerdown = move |ev: web_sys::PointerEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        try_set_pointer_capture(&ev);
        dispatch_pointer_down(runtime, window_id, HitTarget::ResizeHandle, &ev);
    };
    let titlebar_double_click = move |ev: web_sys::MouseEvent| {
        stop_mouse_event(&ev);
        runtime.dispatch_action(DesktopAction::ToggleMaximize { window_id });
    };
    // Title bar controls raise the window like any other press, without starting a drag.
    let on_control_pointerdown = move |ev: web_sys::PointerEvent| {
        ev.stop_propagation();
        dispatch_pointer_down(runtime, window_id, HitTarget::Body, &ev);
    };

    view! {
        <Show when=present fallback=|| ()>
            <section
                class=class_name
                style=style
                on:pointerdown=on_frame_pointerdown
                role="dialog"
                aria-label=title
            >
                <header
                    class="titlebar"
                    on:pointerdown=on_titlebar_pointerdown
                    on:dblclick=titlebar_double_click
                >
                    <div class="titlebar-title">
                        <span class="titlebar-app-icon" data-app-type=app_type aria-hidden="true"></span>
                        <span>{title}</span>
                    </div>
                    <div class="titlebar-controls">
                        <button
                            aria-label="Minimize window"
                            on:pointerdown=on_control_pointerdown
                            on:click=move |ev| {
                                stop_mouse_event(&ev);
                                runtime.dispatch_action(DesktopAction::MinimizeWindow { window_id });
                            }
                        >
                            "_"
                        </button>
                        <button
                            aria-label=move || if maximized() { "Restore window" } else { "Maximize window" }
                            on:pointerdown=on_control_pointerdown
                            on:click=move |ev| {
                                stop_mouse_event(&ev);
                                runtime.dispatch_action(DesktopAction::ToggleMaximize { window_id });
                            }
                        >
                            {move || if maximized() { "❐" } else { "□" }}
                        </button>
                        <button
                            aria-label="Close window"
                            on:pointerdown=on_control_pointerdown
                            on:click=move |ev| {
                                stop_mouse_event(&ev);
                                runtime.dispatch_action(DesktopAction::CloseWindow { window_id });
                            }
                        >
                            "×"
                        </button>
                    </div>
                </header>
                <div
                    class="window-body"
                    id=format!("window-content-{}", window_id.0)
                    data-app-type=app_type
                ></div>
                <Show when=move || !maximized() fallback=|| ()>
                    <div
                        class="window-resize-handle"
                        aria-hidden="true"
                        on:pointerdown=on_resize_pointerdown
                    />
                </Show>
            </section>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::{AppType, Position, Size, WindowLifecycle, WindowRecord};

    fn view(is_minimized: bool, is_maximized: bool) -> WindowView {
        WindowView {
            record: WindowRecord {
                id: WindowId(3),
                app_type: AppType::Notes,
                title: "Notes".to_string(),
                position: Position { x: 60, y: 40 },
                size: Size::default(),
                z_index: 7,
                is_minimized,
                is_maximized,
                lifecycle: WindowLifecycle::Open,
            },
            state: WindowState::Idle,
        }
    }

    const WORKSPACE: WindowRect = WindowRect {
        x: 10,
        y: 10,
        w: 1260,
        h: 742,
    };

    #[test]
    fn minimized_frame_is_hidden_not_removed() {
        let win = view(true, false);
        assert_eq!(window_class(&win, false), "desktop-window minimized");
        assert_eq!(
            window_style(&win, WORKSPACE),
            "left:60px;top:40px;width:420px;height:520px;z-index:7;display:none;"
        );
    }

    #[test]
    fn restored_frame_keeps_geometry_and_is_visible() {
        let win = view(false, false);
        assert_eq!(window_class(&win, true), "desktop-window focused");
        assert_eq!(
            window_style(&win, WORKSPACE),
            "left:60px;top:40px;width:420px;height:520px;z-index:7;"
        );
    }

    #[test]
    fn maximized_frame_fills_workspace() {
        let win = view(false, true);
        assert_eq!(window_class(&win, false), "desktop-window maximized");
        assert_eq!(
            window_style(&win, WORKSPACE),
            "left:10px;top:10px;width:1260px;height:742px;z-index:7;"
        );
    }
}
