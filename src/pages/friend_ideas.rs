//! Per-friend gift ideas page.
//!
//! Fetches the friend list and the idea list concurrently and joins them
//! before rendering: the list supplies the friend's display name, the ideas
//! fill the page. Adding an idea follows refresh-on-write like every other
//! mutation.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::top_bar::TopBar;
use crate::net::api::ApiClient;
use crate::net::types::{Friend, GiftIdea};
use crate::state::friends::find_by_id;
use crate::state::suggestions;

/// How many suggestion chips to show before the user starts filtering.
const CHIP_LIMIT: usize = 8;

/// Ideas page for one friend, selected by the `id` route parameter.
#[component]
pub fn FriendIdeasPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let params = use_params_map();

    let friend_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    // Friend list + ideas, fetched concurrently; re-runs when the route
    // parameter changes.
    let data = LocalResource::new(move || {
        let id = friend_id.get();
        async move { api.load_ideas_page(&id).await }
    });

    let error = RwSignal::new(None::<&'static str>);
    let text = RwSignal::new(String::new());
    let idea_query = RwSignal::new(String::new());
    let saving = RwSignal::new(false);

    let on_add = Callback::new(move |()| {
        error.set(None);
        let id = friend_id.get_untracked();
        if id.is_empty() {
            return;
        }
        let trimmed = text.get_untracked().trim().to_owned();
        if trimmed.is_empty() {
            error.set(Some("Le texte est requis."));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            saving.set(true);
            let data = data.clone();
            leptos::task::spawn_local(async move {
                match api.add_idea(&id, &trimmed).await {
                    Ok(_) => {
                        let _ = text.try_set(String::new());
                        data.refetch();
                    }
                    Err(_) => {
                        let _ = error.try_set(Some("Impossible d'ajouter l'idée."));
                    }
                }
                let _ = saving.try_set(false);
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, trimmed, &api, &data, &saving);
        }
    });

    let on_refresh = move |_| {
        error.set(None);
        data.refetch();
    };

    let apply_suggestion = move |value: &str| {
        text.set(value.to_owned());
    };

    let on_surprise = move |_| {
        let filtered = suggestions::filter(&idea_query.get_untracked());
        if let Some(pick) = suggestions::pick(&filtered, suggestions::random_roll()) {
            apply_suggestion(pick);
        }
    };

    let subtitle = Signal::derive(move || {
        data.get().and_then(|result| result.ok()).map_or_else(
            || "Idées".to_owned(),
            |(friends, _)| {
                find_by_id(&friends, &friend_id.get())
                    .map_or_else(|| "Idées".to_owned(), |f| format!("Idées pour {}", f.name))
            },
        )
    });

    view! {
        <div class="container">
            <div class="shell">
                <TopBar subtitle=subtitle/>

                <section class="card">
                    <div class="card-inner">
                        <div class="page-header">
                            <div>
                                <h1 class="h1">"Idées de cadeaux"</h1>
                                <SelectedFriend data=data friend_id=friend_id/>
                            </div>

                            <div class="page-actions">
                                <A href="/friends" attr:class="button">"Retour"</A>
                                <button
                                    class="button"
                                    type="button"
                                    prop:disabled=move || friend_id.get().is_empty()
                                    on:click=on_refresh
                                >
                                    "Rafraîchir"
                                </button>
                            </div>
                        </div>

                        {move || error.get().map(|message| view! { <div class="error">{message}</div> })}

                        <details class="panel-details">
                            <summary class="panel-summary">
                                <span class="panel-title">"Besoin d’inspiration ?"</span>
                                <span class="panel-hint">"Suggestions rapides"</span>
                            </summary>

                            <div class="panel-body">
                                <div class="panel-header">
                                    <input
                                        class="input"
                                        type="text"
                                        placeholder="Rechercher une idée…"
                                        prop:value=move || idea_query.get()
                                        on:input=move |ev| idea_query.set(event_target_value(&ev))
                                    />
                                    <button class="button button-small" type="button" on:click=on_surprise>
                                        "Surprise"
                                    </button>
                                </div>

                                <div class="chips">
                                    {move || {
                                        let query = idea_query.get();
                                        let filtered = suggestions::filter(&query);
                                        let shown: Vec<&'static str> = if query.trim().is_empty() {
                                            filtered.into_iter().take(CHIP_LIMIT).collect()
                                        } else {
                                            filtered
                                        };
                                        shown
                                            .into_iter()
                                            .map(|s| {
                                                view! {
                                                    <button
                                                        type="button"
                                                        class="chip"
                                                        on:click=move |_| apply_suggestion(s)
                                                    >
                                                        {s}
                                                    </button>
                                                }
                                            })
                                            .collect::<Vec<_>>()
                                    }}
                                </div>

                                {move || {
                                    let query = idea_query.get();
                                    (!query.trim().is_empty() && suggestions::filter(&query).is_empty())
                                        .then(|| {
                                            view! {
                                                <div class="item-meta">
                                                    "Aucun résultat. Essaie un mot-clé (ex: “livre”, “sport”, “cours”…)."
                                                </div>
                                            }
                                        })
                                }}
                            </div>
                        </details>

                        <IdeaList data=data/>

                        <div class="card card-nested">
                            <div class="card-inner">
                                <h1 class="h1">"Ajouter une idée"</h1>
                                <p class="p">"Ex: “Montre connectée”, “Livre de cuisine”, “Billets concert”…"</p>

                                <form
                                    class="row"
                                    on:submit=move |ev| {
                                        ev.prevent_default();
                                        on_add.run(());
                                    }
                                >
                                    <input
                                        class="input"
                                        type="text"
                                        placeholder="Nouvelle idée…"
                                        prop:value=move || text.get()
                                        on:input=move |ev| text.set(event_target_value(&ev))
                                    />
                                    <button
                                        class="button button-primary"
                                        type="submit"
                                        prop:disabled=move || saving.get() || friend_id.get().is_empty()
                                    >
                                        {move || if saving.get() { "Ajout…" } else { "Ajouter" }}
                                    </button>
                                </form>
                            </div>
                        </div>
                    </div>
                </section>
            </div>
        </div>
    }
}

type IdeasPageData = Result<(Vec<Friend>, Vec<GiftIdea>), crate::net::api::ApiError>;

/// Header line naming the selected friend, or flagging an unknown id.
#[component]
fn SelectedFriend(data: LocalResource<IdeasPageData>, friend_id: Memo<String>) -> impl IntoView {
    view! {
        <p class="p">
            {move || {
                data.get().map_or_else(
                    || view! { <span>"Chargement…"</span> }.into_any(),
                    |result| match result {
                        Ok((friends, _)) => match find_by_id(&friends, &friend_id.get()) {
                            Some(friend) => {
                                let name = friend.name.clone();
                                view! {
                                    <span>"Ami sélectionné : " <strong>{name}</strong></span>
                                }
                                    .into_any()
                            }
                            None => view! { <span>"Ami introuvable (ou non autorisé)."</span> }
                                .into_any(),
                        },
                        Err(_) => view! { <span>"Ami introuvable (ou non autorisé)."</span> }
                            .into_any(),
                    },
                )
            }}
        </p>
    }
}

/// The idea list in backend (creation) order.
#[component]
fn IdeaList(data: LocalResource<IdeasPageData>) -> impl IntoView {
    view! {
        <Suspense fallback=move || view! { <div class="item-meta">"Chargement…"</div> }>
            {move || {
                data.get().map(|result| match result {
                    Err(_) => {
                        view! { <div class="error">"Impossible de charger les données."</div> }
                            .into_any()
                    }
                    Ok((_, ideas)) if ideas.is_empty() => ().into_any(),
                    Ok((_, ideas)) => {
                        let rows = ideas
                            .into_iter()
                            .map(|idea| {
                                let added = format!("Ajouté le {}", format_timestamp(&idea.created_at));
                                view! {
                                    <div class="item">
                                        <div>
                                            <div class="item-title">{idea.text}</div>
                                            <div class="item-meta">{added}</div>
                                        </div>
                                        <span class="badge">"Idée"</span>
                                    </div>
                                }
                            })
                            .collect::<Vec<_>>();
                        view! { <div class="list">{rows}</div> }.into_any()
                    }
                })
            }}
        </Suspense>
    }
}

/// Render a backend timestamp for display, via the browser's locale
/// formatting when available.
fn format_timestamp(raw: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(raw));
        if date.get_time().is_nan() {
            return raw.to_owned();
        }
        String::from(date.to_locale_string("fr-FR", &wasm_bindgen::JsValue::UNDEFINED))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        raw.to_owned()
    }
}
