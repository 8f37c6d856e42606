//! Network layer: REST types and the HTTP client for the FriendGift API.

pub mod api;
pub mod types;
