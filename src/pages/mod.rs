//! Page controllers: one module per routed view.

pub mod friend_ideas;
pub mod friends;
pub mod login;
