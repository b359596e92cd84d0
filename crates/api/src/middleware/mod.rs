//! Request extractors enforcing authentication.
//!
//! - [`auth::AuthUser`] -- the caller's user id, resolved from a Bearer token.

pub mod auth;
