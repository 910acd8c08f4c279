//! Document lookups and the few imperative DOM calls the page needs.
//!
//! Everything here is hydrate-only at runtime; server builds get inert
//! fallbacks so components can call these unconditionally.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("window is not available")]
    NoWindow,
    #[error("document is not available")]
    NoDocument,
    #[error("no element matches `{0}`")]
    MissingElement(String),
    #[error("browser call failed: {0}")]
    Js(String),
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(feature = "hydrate")]
fn document() -> Result<web_sys::Document, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)?.document().ok_or(DomError::NoDocument)
}

#[cfg(feature = "hydrate")]
fn query(selector: &str) -> Result<web_sys::Element, DomError> {
    document()?
        .query_selector(selector)?
        .ok_or_else(|| DomError::MissingElement(selector.to_owned()))
}

/// Whether `selector` matches an element. Invalid selectors (a bare `#`)
/// match nothing.
pub fn selector_matches(selector: &str) -> bool {
    #[cfg(feature = "hydrate")]
    {
        query(selector).is_ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = selector;
        false
    }
}

/// Smoothly scroll the element matching `selector` to the top of the viewport.
pub fn scroll_into_view(selector: &str) -> Result<(), DomError> {
    #[cfg(feature = "hydrate")]
    {
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        options.set_block(web_sys::ScrollLogicalPosition::Start);
        query(selector)?.scroll_into_view_with_scroll_into_view_options(&options);
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = selector;
        Ok(())
    }
}

/// Focus the element matching `selector`.
pub fn focus(selector: &str) -> Result<(), DomError> {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let el = query(selector)?
            .dyn_into::<web_sys::HtmlElement>()
            .map_err(|_| DomError::MissingElement(selector.to_owned()))?;
        el.focus()?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = selector;
        Ok(())
    }
}

/// Add or remove `class` on the `<html>` element.
pub fn set_root_class(class: &str, enabled: bool) -> Result<(), DomError> {
    #[cfg(feature = "hydrate")]
    {
        let root = document()?
            .document_element()
            .ok_or_else(|| DomError::MissingElement("html".to_owned()))?;
        let class_list = root.class_list();
        if enabled {
            class_list.add_1(class)?;
        } else {
            class_list.remove_1(class)?;
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (class, enabled);
        Ok(())
    }
}

/// Current calendar year from the browser clock.
pub fn current_year() -> Option<i32> {
    #[cfg(feature = "hydrate")]
    {
        i32::try_from(js_sys::Date::new_0().get_full_year()).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
