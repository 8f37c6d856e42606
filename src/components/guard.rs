//! Route guard for protected views.
//!
//! Evaluated reactively on every navigation, never cached: when no session
//! token is present the guard redirects to the login view, carrying the
//! originally requested path in the `from` query parameter so a successful
//! login can return the user there.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::net::api::encode_path_segment;
use crate::state::session::Session;

/// Default landing page after login when no return path was requested.
pub const DEFAULT_TARGET: &str = "/friends";

/// Login path remembering `from` as the post-login destination.
pub fn login_path_with_return(from: &str) -> String {
    if from.is_empty() || from == "/" {
        "/login".to_owned()
    } else {
        format!("/login?from={}", encode_path_segment(from))
    }
}

/// Resolve the post-login destination from the `from` query parameter.
///
/// Only absolute in-app paths are honored; anything else (missing, external
/// URL, protocol-relative) falls back to the friends list.
pub fn return_target(from: Option<&str>) -> String {
    match from {
        Some(path) if path.starts_with('/') && !path.starts_with("//") => path.to_owned(),
        _ => DEFAULT_TARGET.to_owned(),
    }
}

/// Gate wrapping a protected route.
///
/// Renders its children while a token is present; otherwise redirects to
/// login. Because the check reads the session signal, a mid-session 401/403
/// invalidation re-evaluates the gate without a fresh navigation.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<Session>();
    let location = use_location();

    view! {
        <Show
            when=move || session.is_authenticated()
            fallback=move || {
                let from = location.pathname.get();
                view! { <Redirect path=login_path_with_return(&from)/> }
            }
        >
            {children()}
        </Show>
    }
}
