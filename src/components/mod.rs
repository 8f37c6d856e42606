//! Shared UI components: navigation chrome and the route guard.

pub mod guard;
pub mod top_bar;
