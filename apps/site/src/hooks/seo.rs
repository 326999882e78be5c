use dioxus::prelude::*;

/// Sets the document title and meta description when the page mounts.
pub fn use_seo(title: &'static str, description: &'static str) {
    use_hook(move || apply(title, description));
}

#[cfg(target_arch = "wasm32")]
fn apply(title: &str, description: &str) {
    use wasm_bindgen::JsCast;

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };

    document.set_title(title);

    let existing = document
        .query_selector(r#"meta[name="description"]"#)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<web_sys::HtmlMetaElement>().ok());

    let meta = match existing {
        Some(meta) => meta,
        None => {
            let Some(meta) = document
                .create_element("meta")
                .ok()
                .and_then(|element| element.dyn_into::<web_sys::HtmlMetaElement>().ok())
            else {
                return;
            };
            meta.set_name("description");
            if let Some(head) = document.head() {
                if let Err(err) = head.append_child(&meta) {
                    tracing::debug!("failed to attach meta description: {err:?}");
                }
            }
            meta
        }
    };

    meta.set_content(description);
}

#[cfg(not(target_arch = "wasm32"))]
fn apply(title: &str, _description: &str) {
    tracing::debug!(%title, "document metadata is browser-only");
}
