use super::*;
use crate::model::AppType;

#[component]
pub(super) fn StartMenu() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let desktop_view = runtime.view;
    let query = move || desktop_view.with(|view| view.start_menu.query.clone());

    view! {
        <Show when=move || desktop_view.with(|view| view.start_menu.open) fallback=|| ()>
            <div
                id="desktop-launcher-menu"
                class="start-menu"
                role="menu"
                aria-label="Application launcher"
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    if ev.key() == "Escape" {
                        ev.prevent_default();
                        ev.stop_propagation();
                        runtime.dispatch_action(DesktopAction::CloseStartMenu);
                    }
                }
                on:mousedown=move |ev| ev.stop_propagation()
            >
                <input
                    class="start-menu-search"
                    type="search"
                    placeholder="Search apps"
                    prop:value=query
                    on:input=move |ev| {
                        runtime.dispatch_action(DesktopAction::SetStartMenuQuery {
                            query: event_target_value(&ev),
                        });
                    }
                />
                <For
                    each=move || desktop_view.with(|view| view.start_menu.visible_entries())
                    key=|app| app.app_type.as_str()
                    let:app
                >
                    {{
                        let app_type = app.app_type;
                        view! {
                            <button
                                id=format!("desktop-launcher-item-{}", app_type.as_str())
                                role="menuitem"
                                on:click=move |_| launch(runtime, app_type)
                            >
                                <span class="taskbar-app-icon" data-icon=app_type.icon_id() aria-hidden="true"></span>
                                <span>{app.launcher_label}</span>
                            </button>
                        }
                    }}
                </For>
            </div>
        </Show>
    }
}

fn launch(runtime: DesktopRuntimeContext, app_type: AppType) {
    runtime.dispatch_action(DesktopAction::LaunchFromStartMenu {
        app_type: app_type.as_str().to_string(),
    });
}
