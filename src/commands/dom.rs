//! Document Commands
//!
//! Attributes and CSS custom properties on the document root.

use wasm_bindgen::JsCast;

use showcase_core::{ThemeMode, ThemeVars};

fn root_element() -> Result<web_sys::HtmlElement, String> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
        .ok_or("No document element")?
        .dyn_into::<web_sys::HtmlElement>()
        .map_err(|_| "Document element is not an HtmlElement".to_string())
}

/// Write one custom property, e.g. `--brand-primary`
pub fn set_css_var(name: &str, value: &str) -> Result<(), String> {
    root_element()?
        .style()
        .set_property(name, value)
        .map_err(|e| format!("Failed to set {}: {:?}", name, e))
}

/// Computed value of a custom property on the root
pub fn read_css_var(name: &str) -> Option<String> {
    let window = web_sys::window()?;
    let root = root_element().ok()?;
    let style = window.get_computed_style(&root).ok()??;
    let value = style.get_property_value(name).ok()?;
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

pub fn apply_theme_vars(vars: &ThemeVars) -> Result<(), String> {
    for (name, value) in vars.css_vars() {
        set_css_var(name, &value)?;
    }
    Ok(())
}

pub fn set_root_attr(name: &str, value: &str) -> Result<(), String> {
    root_element()?
        .set_attribute(name, value)
        .map_err(|e| format!("Failed to set {}: {:?}", name, e))
}

pub fn apply_theme_mode(mode: ThemeMode) -> Result<(), String> {
    set_root_attr("data-theme", mode.as_str())
}

pub fn apply_reduce_motion(on: bool) -> Result<(), String> {
    set_root_attr("data-reduce-motion", if on { "true" } else { "false" })
}
