//! Route → layout mode selection.
//!
//! DESIGN
//! ======
//! Portal routes (admin, point of sale, login, vendor portal, account) render
//! bare content; everything else gets the shared header/footer chrome. The
//! decision is a plain prefix test against a closed list, recomputed on
//! every navigation and never cached.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

/// Path prefixes that select [`LayoutMode::Portal`]. Matching is by string
/// prefix, not path segment, so `/accountability` is a portal path too.
pub const PORTAL_PREFIXES: [&str; 5] = ["/admin", "/pos", "/login", "/vendor-portal", "/account"];

/// Which page frame a route renders inside.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayoutMode {
    /// Shared header and footer around the page.
    #[default]
    Chrome,
    /// Bare content, no shared chrome.
    Portal,
}

impl LayoutMode {
    #[must_use]
    pub fn shows_chrome(self) -> bool {
        matches!(self, Self::Chrome)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Chrome => "chrome",
            Self::Portal => "portal",
        }
    }
}

/// Strip the hash-routing marker, query string and fragment from `raw`.
#[must_use]
pub fn normalize_path(raw: &str) -> &str {
    let path = raw.strip_prefix('#').unwrap_or(raw);
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

/// Layout for the route at `path`. Empty paths get chrome.
#[must_use]
pub fn layout_for_path(path: &str) -> LayoutMode {
    let path = normalize_path(path);
    if PORTAL_PREFIXES.iter().any(|prefix| path.starts_with(prefix)) {
        LayoutMode::Portal
    } else {
        LayoutMode::Chrome
    }
}
