use desktop_runtime::{DesktopProvider, DesktopShell, RuntimeEffect};
use leptos::*;
use leptos_meta::*;

use crate::applets;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Desktop" />
        <Meta name="description" content="A desktop-style window manager running in the browser." />

        <main class="site-root">
            <DesktopEntry />
        </main>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    let on_effect = Callback::new(|effect: RuntimeEffect| match effect {
        RuntimeEffect::MountContent {
            window_id,
            app_type,
        } => applets::mount_applet(window_id, app_type),
        RuntimeEffect::UnmountContent { window_id } => {
            logging::log!("window {window_id} content released");
        }
        _ => {}
    });

    view! {
        <DesktopProvider on_effect=on_effect>
            <DesktopShell />
        </DesktopProvider>
    }
}
