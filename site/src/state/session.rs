//! Gate session state for the current visitor.
//!
//! Used by the route guards on both pages to coordinate redirects between
//! the gate and the gallery.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Whether the visitor has passed the access gate this browser session.
///
/// Seeded from `sessionStorage` at app start; in-memory afterwards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub access_granted: bool,
}
