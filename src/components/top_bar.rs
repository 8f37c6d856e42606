//! Top bar shown on protected pages: brand, subtitle badge, and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::state::session::Session;

/// Shared header chrome.
///
/// The logout button clears the session token; the guard on the next
/// protected navigation then sends the user back to login.
#[component]
pub fn TopBar(#[prop(optional, into)] subtitle: MaybeProp<String>) -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.clear();
        navigate("/login", NavigateOptions::default());
    };

    view! {
        <header class="header">
            <div class="brand">
                <A href="/friends">
                    <span class="brand-name">"FriendGift"</span>
                </A>
                <span class="badge badge-accent">"Espace privé"</span>
                {move || {
                    subtitle
                        .get()
                        .map(|s| view! { <span class="badge">{s}</span> })
                }}
            </div>

            <button class="button button-danger" type="button" on:click=on_logout>
                "Déconnexion"
            </button>
        </header>
    }
}
