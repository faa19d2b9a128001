//! # API crate: the LinkFree backend as seen from the client
//!
//! Everything the web frontend knows about the REST backend lives here: the wire
//! models, the error type every call returns, the client configuration and the
//! [`LinkFreeApi`] trait with its HTTP implementation.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Request and response bodies (`User`, `Page`, `Portfolio`, `SocialLink`, ...) |
//! | [`error`] | [`ApiError`]: transport failures, non-2xx statuses with the server's message |
//! | [`config`] | [`ClientConfig`]: API origin and public share origin, loadable from `linkfree.toml` |
//! | [`client`] | [`LinkFreeApi`] trait and the `reqwest`-backed [`HttpClient`] |
//!
//! ## Endpoints
//!
//! - **Auth**: `isAuthenticated`, `login`, `register`, `logout`
//! - **Profile**: `check-username`, `setup`, `update`, `profileinfo`, `profile-picture`
//! - **Pages**: list, create, get, update, visibility, `createpageinfo`, `upload-file`
//! - **Portfolio**: public page lookup and `track-link`
//! - **Analytics**: overview, per-user metrics and activities

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::{HttpClient, LinkFreeApi};
pub use config::ClientConfig;
pub use error::ApiError;
pub use models::*;
