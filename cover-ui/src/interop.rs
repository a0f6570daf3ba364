//! Thin wrappers over the browser APIs the pages need.

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{window, Document, File, HtmlAnchorElement, HtmlFormElement, HtmlInputElement};

use crate::bootstrap::{PageBootstrap, BOOTSTRAP_ELEMENT_ID};
use crate::error::ActionError;

fn document() -> Option<Document> {
    window().and_then(|w| w.document())
}

/// Read one attribute from the server-rendered bootstrap element.
pub fn bootstrap_attribute(name: &str) -> Option<String> {
    document()
        .and_then(|doc| doc.get_element_by_id(BOOTSTRAP_ELEMENT_ID))
        .and_then(|el| el.get_attribute(name))
}

pub fn read_page_bootstrap() -> PageBootstrap {
    PageBootstrap::from_attributes(bootstrap_attribute)
}

pub fn reload_page() -> Result<(), ActionError> {
    let window = window().ok_or_else(|| ActionError::Browser("no window".to_string()))?;
    window
        .location()
        .reload()
        .map_err(|e| ActionError::Browser(format!("reload failed: {e:?}")))
}

pub fn show_alert(message: &str) {
    if let Some(window) = window() {
        let _ = window.alert_with_message(message);
    }
}

pub async fn copy_text_to_clipboard(text: &str) -> Result<(), ActionError> {
    let window = window().ok_or_else(|| ActionError::Browser("no window".to_string()))?;
    let clipboard = window.navigator().clipboard();
    JsFuture::from(clipboard.write_text(text))
        .await
        .map(|_| ())
        .map_err(|e| ActionError::Browser(format!("clipboard write failed: {e:?}")))
}

/// Click a temporary `<a download>` so the browser fetches `href` itself.
pub fn trigger_download(href: &str, filename: &str) -> Result<(), ActionError> {
    let doc = document().ok_or_else(|| ActionError::Browser("no document".to_string()))?;
    let body = doc
        .body()
        .ok_or_else(|| ActionError::Browser("no body".to_string()))?;
    let anchor: HtmlAnchorElement = doc
        .create_element("a")
        .map_err(|e| ActionError::Browser(format!("{e:?}")))?
        .dyn_into()
        .map_err(|_| ActionError::Browser("anchor cast failed".to_string()))?;

    anchor.set_href(href);
    anchor.set_download(filename);
    body.append_child(&anchor)
        .map_err(|e| ActionError::Browser(format!("{e:?}")))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| ActionError::Browser(format!("{e:?}")))?;
    Ok(())
}

/// First file chosen in the `<input type=file>` with this id.
pub fn selected_file(input_id: &str) -> Option<(String, File)> {
    let input: HtmlInputElement = document()?
        .get_element_by_id(input_id)?
        .dyn_into()
        .ok()?;
    let file = input.files()?.get(0)?;
    Some((file.name(), file))
}

/// Navigate by POSTing `fields` as a regular form to `action`.
///
/// A detached form is built so the posted values are exactly the validated
/// ones; `submit()` does not fire submit listeners.
pub fn post_form(action: &str, fields: &[(&str, &str)]) -> Result<(), ActionError> {
    let doc = document().ok_or_else(|| ActionError::Browser("no document".to_string()))?;
    let body = doc
        .body()
        .ok_or_else(|| ActionError::Browser("no body".to_string()))?;
    let form: HtmlFormElement = doc
        .create_element("form")
        .map_err(|e| ActionError::Browser(format!("{e:?}")))?
        .dyn_into()
        .map_err(|_| ActionError::Browser("form cast failed".to_string()))?;
    form.set_method("post");
    form.set_action(action);

    for (name, value) in fields {
        let input: HtmlInputElement = doc
            .create_element("input")
            .map_err(|e| ActionError::Browser(format!("{e:?}")))?
            .dyn_into()
            .map_err(|_| ActionError::Browser("input cast failed".to_string()))?;
        input.set_type("hidden");
        input.set_name(name);
        input.set_value(value);
        form.append_child(&input)
            .map_err(|e| ActionError::Browser(format!("{e:?}")))?;
    }

    body.append_child(&form)
        .map_err(|e| ActionError::Browser(format!("{e:?}")))?;
    form.submit()
        .map_err(|e| ActionError::Browser(format!("submit failed: {e:?}")))
}
