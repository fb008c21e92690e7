//! Placeholder applet content mounted into window bodies.

use desktop_runtime::{AppType, WindowId};
use leptos::*;

pub(crate) fn placeholder_text(app_type: AppType) -> String {
    format!("{} is not bundled with this build.", app_type.title())
}

#[cfg(target_arch = "wasm32")]
pub(crate) fn mount_applet(window_id: WindowId, app_type: AppType) {
    use wasm_bindgen::JsCast;

    // The window body is rendered in the same tick as the mount effect; wait for the next frame.
    request_animation_frame(move || {
        let Some(element) = document()
            .get_element_by_id(&format!("window-content-{}", window_id.0))
            .and_then(|element| element.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            logging::warn!("window {window_id} has no content element");
            return;
        };
        mount_to(element, move || {
            view! {
                <div class="applet-placeholder" data-app-type=app_type.as_str()>
                    <p>{placeholder_text(app_type)}</p>
                </div>
            }
        });
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn mount_applet(window_id: WindowId, app_type: AppType) {
    logging::log!("window {window_id}: {}", placeholder_text(app_type));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_names_the_app() {
        assert_eq!(
            placeholder_text(AppType::FileManager),
            "File Manager is not bundled with this build."
        );
    }
}
