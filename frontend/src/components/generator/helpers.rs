//! DOM plumbing for the generator: file reading, the mobile media query,
//! new-tab navigation and body scroll locking.

use std::rc::Rc;

use common::model::image::ImageUpload;
use gloo_console::warn;
use gloo_file::futures::read_as_bytes;
use gloo_file::ObjectUrl;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{FileList, MediaQueryList};
use yew::Callback;

use super::state::PickedImage;

/// Layout switches to the mobile variant below this width.
pub const MOBILE_QUERY: &str = "(max-width: 768px)";

const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

pub fn is_image(content_type: &str) -> bool {
    content_type.starts_with("image/")
}

/// Enter submits on desktop; Shift+Enter, and Enter on mobile, insert a newline.
pub fn is_submit_key(key: &str, shift: bool, mobile: bool) -> bool {
    key == "Enter" && !shift && !mobile
}

/// Image files of a `FileList`, in order.
pub fn image_files(list: Option<FileList>) -> Vec<web_sys::File> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|index| list.get(index))
        .filter(|file| is_image(&file.type_()))
        .collect()
}

/// Reads each file into memory and creates an object URL for its preview.
/// Files that cannot be read are skipped with a console warning.
pub async fn read_images(files: Vec<web_sys::File>) -> Vec<PickedImage> {
    let mut picked = Vec::with_capacity(files.len());
    for raw in files {
        let file = gloo_file::File::from(raw);
        let bytes = match read_as_bytes(&file).await {
            Ok(bytes) => bytes,
            Err(err) => {
                warn!(format!("could not read {}: {err}", file.name()));
                continue;
            }
        };
        let content_type = match file.raw_mime_type() {
            mime if mime.is_empty() => FALLBACK_CONTENT_TYPE.to_string(),
            mime => mime,
        };
        let upload = ImageUpload {
            file_name: file.name(),
            content_type,
            bytes,
        };
        picked.push(PickedImage {
            upload,
            preview: Rc::new(ObjectUrl::from(file)),
        });
    }
    picked
}

/// Keeps `on_change` informed about [`MOBILE_QUERY`]. The listener is
/// detached when the watcher is dropped.
pub struct MobileWatcher {
    list: MediaQueryList,
    _listener: Closure<dyn FnMut(web_sys::Event)>,
}

impl MobileWatcher {
    pub fn new(on_change: Callback<bool>) -> Option<Self> {
        let list = web_sys::window()?.match_media(MOBILE_QUERY).ok().flatten()?;
        let watched = list.clone();
        let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
            on_change.emit(watched.matches());
        });
        list.set_onchange(Some(listener.as_ref().unchecked_ref()));
        Some(Self {
            list,
            _listener: listener,
        })
    }

    pub fn matches(&self) -> bool {
        self.list.matches()
    }
}

impl Drop for MobileWatcher {
    fn drop(&mut self) {
        self.list.set_onchange(None);
    }
}

pub fn open_in_new_tab(url: &str) {
    let opened = web_sys::window().map(|window| window.open_with_url_and_target(url, "_blank"));
    if !matches!(opened, Some(Ok(Some(_)))) {
        warn!(format!("could not open {url}"));
    }
}

/// Stops the page behind the viewer from scrolling on mobile.
pub fn lock_scroll(locked: bool) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let value = if locked { "hidden" } else { "" };
    if let Some(body) = document.body() {
        body.style().set_property("overflow", value).ok();
    }
    if let Some(root) = document
        .document_element()
        .and_then(|e| e.dyn_into::<web_sys::HtmlElement>().ok())
    {
        root.style().set_property("overflow", value).ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_submits_only_on_desktop() {
        assert!(is_submit_key("Enter", false, false));
        assert!(!is_submit_key("Enter", true, false));
        assert!(!is_submit_key("Enter", false, true));
        assert!(!is_submit_key("a", false, false));
    }

    #[test]
    fn only_image_types_are_accepted() {
        assert!(is_image("image/png"));
        assert!(is_image("image/webp"));
        assert!(!is_image("application/pdf"));
        assert!(!is_image(""));
    }
}
