//! Theme initialization, persistence, and application.
//!
//! Reads the visitor's stored theme from `localStorage` (defaulting to
//! dark) and mirrors the active theme onto a `data-theme` attribute on the
//! `<html>` element so the stylesheet can follow. Writes go back to
//! `localStorage` on toggle.

#[cfg(test)]
#[path = "theme_store_test.rs"]
mod theme_store_test;

use backdrop::style::Theme;

use crate::util::storage;

/// `localStorage` key for the theme preference.
const STORAGE_KEY: &str = "theme";

/// Read the stored theme preference, defaulting to dark for first-time
/// visitors.
#[must_use]
pub fn read_preference() -> Theme {
    storage::load_local(STORAGE_KEY).unwrap_or_default()
}

/// Apply the `data-theme` attribute on the `<html>` element.
pub fn apply(theme: Theme) {
    #[cfg(feature = "csr")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document())
            && let Some(el) = doc.document_element()
        {
            let _ = el.set_attribute("data-theme", theme.as_str());
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = theme;
    }
}

/// Toggle the theme, apply it, and persist the new preference.
pub fn toggle(current: Theme) -> Theme {
    let next = current.toggled();
    apply(next);
    storage::save_local(STORAGE_KEY, &next);
    next
}
