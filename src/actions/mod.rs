//! The form actions themselves. Each one is a thin sequence: session guard,
//! input validation, one CRUD call, cache invalidation, then either stay on
//! the page or redirect. The session-derived viewer id and all collaborators
//! are passed in explicitly so the actions stay testable without a server.

pub mod auth;
pub mod booking;
pub mod profile;

/// What the browser should do once an action has completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Stay on the current page.
    Stay,
    /// Navigate to the given location.
    Redirect(String),
}
