//! # Forms crate: client state without a UI
//!
//! The state machines and collections behind every LinkFree screen. Each type here
//! owns its data, validates locally and talks to the backend only through
//! [`api::LinkFreeApi`], so the whole crate is tested against a recording fake.
//!
//! | Module | Screen |
//! |--------|--------|
//! | [`session`] | auth state and the route gate |
//! | [`wizard`] | `/setup` |
//! | [`page`], [`links`], [`social`], [`background`], [`visibility`] | page editor (edit and create) |
//! | [`profile`] | `/dashboard/profile` |
//! | [`auth_forms`] | `/login`, `/signup` |
//! | [`overview`], [`share`], [`themes`] | dashboard |
//! | [`validation`] | shared field rules |

pub mod auth_forms;
pub mod background;
pub mod links;
pub mod overview;
pub mod page;
pub mod profile;
pub mod session;
pub mod share;
pub mod social;
pub mod themes;
pub mod validation;
pub mod visibility;
pub mod wizard;

#[cfg(test)]
mod fake;

pub use session::{Access, AuthState};
pub use validation::ValidationError;

/// Where to go after a successful action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation {
    /// Client-side route change.
    Push(String),
    /// Full page load, so the app starts over with a fresh auth check.
    Hard(String),
}
