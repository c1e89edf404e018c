//! Visual themes of the storefront.
//!
//! The two storefront flavors differ only in styling; the theme is
//! exposed to CSS through a `data-theme` attribute on `<body>`.

use web_sys::window;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    /// Violet gradients (marketplace flavor)
    #[default]
    Violet,
    /// Neutral slate (showcase flavor)
    Slate,
}

impl Theme {
    /// Returns the theme name as a string (used for the CSS hook).
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Violet => "violet",
            Theme::Slate => "slate",
        }
    }

    /// Brand mark shown in the header
    pub fn brand(&self) -> &'static str {
        match self {
            Theme::Violet => "TenderFinder",
            Theme::Slate => "TenderFinder Lite",
        }
    }
}

/// Set `data-theme` on body so the stylesheet can switch palettes
pub fn apply_theme(theme: Theme) {
    let body = match window().and_then(|w| w.document()).and_then(|d| d.body()) {
        Some(b) => b,
        None => return,
    };
    if let Err(e) = body.set_attribute("data-theme", theme.as_str()) {
        log::warn!("failed to apply theme {}: {:?}", theme.as_str(), e);
    }
}
