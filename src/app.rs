//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::guard::RequireAuth;
use crate::net::api::ApiClient;
use crate::pages::{friend_ideas::FriendIdeasPage, friends::FriendsPage, login::LoginPage};
use crate::state::session::Session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session and API client contexts and sets up client-side
/// routing. The session is restored from browser storage once, here; every
/// other actor reaches it through context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = Session::restore();
    let api = ApiClient::new(session);

    provide_context(session);
    provide_context(api);

    view! {
        <Stylesheet id="leptos" href="/pkg/friendgift.css"/>
        <Title text="FriendGift"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/friends"/> }>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("friends")
                    view=|| view! { <RequireAuth><FriendsPage/></RequireAuth> }
                />
                <Route
                    path=(StaticSegment("friends"), ParamSegment("id"))
                    view=|| view! { <RequireAuth><FriendIdeasPage/></RequireAuth> }
                />
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/friends"/> }/>
            </Routes>
        </Router>
    }
}
