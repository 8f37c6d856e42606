//! Login / registration page.
//!
//! Two modes behind tabs sharing one form. Validation runs client-side
//! before any network call; a successful call stores the token and navigates
//! to the path the guard remembered in the `from` query parameter.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::net::api::ApiClient;
use crate::state::auth::{self, AuthMode};
use crate::state::session::Session;

/// Login page with a login/register mode switch and demo-account shortcuts.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let api = expect_context::<ApiClient>();
    let query = use_query_map();
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let mode = RwSignal::new(AuthMode::Login);
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let loading = RwSignal::new(false);
    let error = RwSignal::new(None::<&'static str>);

    let switch_mode = move |next: AuthMode| {
        mode.set(next);
        confirm_password.set(String::new());
        error.set(None);
    };

    let fill_demo = move |name: &'static str| {
        mode.set(AuthMode::Login);
        username.set(name.to_owned());
        password.set("password".to_owned());
        confirm_password.set(String::new());
        error.set(None);
    };

    let submit = Callback::new(move |()| {
        error.set(None);

        let creds = match auth::validate(
            mode.get_untracked(),
            &username.get_untracked(),
            &password.get_untracked(),
            &confirm_password.get_untracked(),
        ) {
            Ok(creds) => creds,
            Err(message) => {
                error.set(Some(message));
                return;
            }
        };

        #[cfg(feature = "hydrate")]
        {
            loading.set(true);
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let submitted_mode = mode.get_untracked();
                let result = match submitted_mode {
                    AuthMode::Login => api.login(&creds.username, &creds.password).await,
                    AuthMode::Register => api.register(&creds.username, &creds.password).await,
                };
                match result {
                    Ok(token) => {
                        session.set(token);
                        let target = crate::components::guard::return_target(
                            query.read_untracked().get("from").as_deref(),
                        );
                        navigate(
                            &target,
                            leptos_router::NavigateOptions {
                                replace: true,
                                ..Default::default()
                            },
                        );
                    }
                    Err(e) => {
                        let _ = error.try_set(Some(auth::submit_error_message(submitted_mode, &e)));
                    }
                }
                let _ = loading.try_set(false);
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (creds, &session, &api, &query);
        }
    });

    let submit_label = move || match (loading.get(), mode.get()) {
        (true, AuthMode::Login) => "Connexion…",
        (true, AuthMode::Register) => "Inscription…",
        (false, AuthMode::Login) => "Se connecter",
        (false, AuthMode::Register) => "Créer mon compte",
    };

    view! {
        <div class="container">
            <div class="shell auth-shell">
                <header class="header">
                    <div class="brand">
                        <span>"FriendGift"</span>
                        <span class="badge">
                            {move || {
                                if mode.get() == AuthMode::Login { "Connexion" } else { "Inscription" }
                            }}
                        </span>
                    </div>
                    <span class="badge badge-success">"Démo"</span>
                </header>

                <section class="card">
                    <div class="card-inner">
                        <h1 class="h1">"Bienvenue"</h1>
                        <p class="p">
                            {move || {
                                if mode.get() == AuthMode::Login {
                                    "Connecte-toi pour retrouver tes amis et noter tes idées de cadeaux."
                                } else {
                                    "Crée ton compte pour accéder à ton espace privé."
                                }
                            }}
                        </p>

                        {move || error.get().map(|message| view! { <div class="error">{message}</div> })}

                        <form
                            class="row"
                            on:submit=move |ev| {
                                ev.prevent_default();
                                submit.run(());
                            }
                        >
                            <div class="tabs" role="tablist">
                                <button
                                    class=move || {
                                        if mode.get() == AuthMode::Login { "tab tab-active" } else { "tab" }
                                    }
                                    type="button"
                                    role="tab"
                                    prop:disabled=move || loading.get()
                                    on:click=move |_| switch_mode(AuthMode::Login)
                                >
                                    "J’ai déjà un compte"
                                </button>
                                <button
                                    class=move || {
                                        if mode.get() == AuthMode::Register { "tab tab-active" } else { "tab" }
                                    }
                                    type="button"
                                    role="tab"
                                    prop:disabled=move || loading.get()
                                    on:click=move |_| switch_mode(AuthMode::Register)
                                >
                                    "Créer un compte"
                                </button>
                            </div>

                            <label class="row">
                                <span class="item-meta">"Nom d’utilisateur"</span>
                                <input
                                    class="input"
                                    type="text"
                                    autocomplete="username"
                                    prop:value=move || username.get()
                                    on:input=move |ev| username.set(event_target_value(&ev))
                                />
                            </label>

                            <label class="row">
                                <span class="item-meta">"Mot de passe"</span>
                                <input
                                    class="input"
                                    type="password"
                                    prop:value=move || password.get()
                                    on:input=move |ev| password.set(event_target_value(&ev))
                                />
                            </label>

                            <Show when=move || mode.get() == AuthMode::Register>
                                <label class="row">
                                    <span class="item-meta">"Confirmer le mot de passe"</span>
                                    <input
                                        class="input"
                                        type="password"
                                        prop:value=move || confirm_password.get()
                                        on:input=move |ev| confirm_password.set(event_target_value(&ev))
                                    />
                                    <div class="item-meta">"Minimum 6 caractères."</div>
                                </label>
                            </Show>

                            <button
                                class="button button-primary"
                                type="submit"
                                prop:disabled=move || loading.get()
                            >
                                {submit_label}
                            </button>

                            <div class="demo-box">
                                <div class="item-meta">"Comptes de démo (clique pour remplir) :"</div>
                                <div class="chips">
                                    <button
                                        type="button"
                                        class="chip"
                                        prop:disabled=move || loading.get()
                                        on:click=move |_| fill_demo("omar")
                                    >
                                        "omar"
                                    </button>
                                    <button
                                        type="button"
                                        class="chip"
                                        prop:disabled=move || loading.get()
                                        on:click=move |_| fill_demo("alice")
                                    >
                                        "alice"
                                    </button>
                                    <span class="kbd">"password"</span>
                                </div>
                            </div>
                        </form>
                    </div>
                </section>
            </div>
        </div>
    }
}
