//! Browser Glue
//!
//! Small web-sys helpers: body scroll lock, redirects, date labels.

use wasm_bindgen::JsValue;

fn body() -> Option<web_sys::HtmlElement> {
    web_sys::window()?.document()?.body()
}

/// Disable or restore page scrolling behind a modal
pub fn set_body_scroll_locked(locked: bool) {
    let Some(body) = body() else { return };
    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if let Err(err) = result {
        log::warn!("failed to toggle body scroll: {:?}", err);
    }
}

/// Full navigation to another path (e.g. the login entry point)
pub fn redirect(path: &str) {
    let Some(window) = web_sys::window() else { return };
    log::info!("redirecting to {}", path);
    if let Err(err) = window.location().set_href(path) {
        log::error!("redirect to {} failed: {:?}", path, err);
    }
}

fn locale_options(pairs: &[(&str, &str)]) -> js_sys::Object {
    let options = js_sys::Object::new();
    for (key, value) in pairs {
        let _ = js_sys::Reflect::set(&options, &JsValue::from_str(key), &JsValue::from_str(value));
    }
    options
}

/// Weekday name and a "Month DD, YYYY, HH:MM" stamp for page headers
pub fn today_labels() -> (String, String) {
    let now = js_sys::Date::new_0();
    let day = now.to_locale_date_string("en-US", &locale_options(&[("weekday", "long")]));
    let stamp = now.to_locale_string(
        "en-US",
        &locale_options(&[
            ("hour", "2-digit"),
            ("minute", "2-digit"),
            ("day", "2-digit"),
            ("month", "long"),
            ("year", "numeric"),
        ]),
    );
    (day.into(), stamp.into())
}
