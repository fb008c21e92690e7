use super::*;

#[component]
pub(super) fn Taskbar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let desktop_view = runtime.view;

    view! {
        <footer
            class="taskbar"
            role="toolbar"
            aria-label="Desktop taskbar"
            on:mousedown=move |ev| ev.stop_propagation()
        >
            <div class="taskbar-left">
                <button
                    id="taskbar-start-button"
                    class="start-button"
                    aria-haspopup="menu"
                    aria-controls="desktop-launcher-menu"
                    aria-expanded=move || desktop_view.get().start_menu.open.to_string()
                    on:click=move |_| runtime.dispatch_action(DesktopAction::ToggleStartMenu)
                >
                    <span>"Start"</span>
                </button>
                <StartMenu />
            </div>

            <div class="taskbar-windows" role="group" aria-label="Open windows">
                <For
                    each=move || desktop_view.get().taskbar
                    key=|entry| entry.window_id.0
                    let:entry
                >
                    <TaskbarWindowButton window_id=entry.window_id />
                </For>
            </div>
        </footer>
    }
}

#[component]
fn TaskbarWindowButton(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();
    let entry = Signal::derive(move || {
        runtime.view.with(|view| {
            view.taskbar
                .iter()
                .find(|entry| entry.window_id == window_id)
                .cloned()
        })
    });

    let class_name = move || {
        entry
            .get()
            .map(|entry| {
                let mut class = String::from("taskbar-window-button");
                if entry.is_focused {
                    class.push_str(" focused");
                }
                if entry.is_minimized {
                    class.push_str(" minimized");
                }
                if entry.is_closing {
                    class.push_str(" closing");
                }
                class
            })
            .unwrap_or_default()
    };
    let title = move || entry.get().map(|entry| entry.title).unwrap_or_default();
    let icon_id = move || entry.get().map(|entry| entry.icon_id).unwrap_or_default();

    view! {
        <button
            id=format!("taskbar-window-button-{}", window_id.0)
            class=class_name
            aria-pressed=move || entry.get().map(|entry| entry.is_focused).unwrap_or(false).to_string()
            on:click=move |_| runtime.dispatch_action(DesktopAction::TaskbarClick { window_id })
        >
            <span class="taskbar-app-icon" data-icon=icon_id aria-hidden="true"></span>
            <span class="taskbar-window-title">{title}</span>
        </button>
    }
}
