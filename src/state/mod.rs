//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `auth`, `friends`, `suggestions`) so
//! individual components can depend on small focused models. Everything here
//! except the session storage shims is pure and unit-tested.

pub mod auth;
pub mod friends;
pub mod session;
pub mod suggestions;
