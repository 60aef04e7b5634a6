use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

const TOAST_MILLIS: u32 = 3000;

/// Shows a transient message at the bottom of the page.
///
/// The element is appended to `<body>` and removed again after three seconds.
/// Text is set with `textContent`, so messages coming from remote services
/// are never interpreted as markup.
pub fn show_toast(message: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let (Ok(toast), Some(body)) = (document.create_element("div"), document.body()) else {
        return;
    };

    toast.set_text_content(Some(message));
    toast.set_class_name("toast");
    let toast: HtmlElement = toast.unchecked_into();
    if body.append_child(&toast).is_ok() {
        wasm_bindgen_futures::spawn_local(async move {
            TimeoutFuture::new(TOAST_MILLIS).await;
            if let Some(parent) = toast.parent_node() {
                parent.remove_child(&toast).ok();
            }
        });
    }
}
