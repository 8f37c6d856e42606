//! Friends list page: add, rename, delete, and open a friend's ideas.
//!
//! Mutations follow refresh-on-write: perform the call, then refetch the
//! canonical list. No optimistic patching, so there is nothing to roll back
//! when a call fails.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::top_bar::TopBar;
use crate::net::api::{ApiClient, ApiError, encode_path_segment};
use crate::state::friends::{initials, sorted_by_name};

/// Localized message for a failed friends fetch.
fn load_error_message(error: &ApiError) -> &'static str {
    if error.is_unauthenticated() {
        "Session expirée. Merci de te reconnecter."
    } else {
        "Impossible de charger la liste des amis."
    }
}

/// Friends page — fetches the list on mount and re-fetches after every
/// mutation.
#[component]
pub fn FriendsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();

    let friends = LocalResource::new(move || async move { api.list_friends().await });

    let error = RwSignal::new(None::<&'static str>);
    let new_name = RwSignal::new(String::new());
    let saving = RwSignal::new(false);
    let editing_id = RwSignal::new(None::<String>);
    let editing_name = RwSignal::new(String::new());

    let on_add = Callback::new(move |()| {
        error.set(None);
        let name = new_name.get_untracked().trim().to_owned();
        if name.is_empty() {
            error.set(Some("Le nom est requis."));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            saving.set(true);
            let friends = friends.clone();
            leptos::task::spawn_local(async move {
                match api.create_friend(&name).await {
                    Ok(_) => {
                        let _ = new_name.try_set(String::new());
                        friends.refetch();
                    }
                    Err(_) => {
                        let _ = error.try_set(Some("Impossible d'ajouter cet ami."));
                    }
                }
                let _ = saving.try_set(false);
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (name, &api, &friends, &saving);
        }
    });

    let on_save_edit = Callback::new(move |id: String| {
        error.set(None);
        let name = editing_name.get_untracked().trim().to_owned();
        if name.is_empty() {
            error.set(Some("Le nom est requis."));
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            saving.set(true);
            let friends = friends.clone();
            leptos::task::spawn_local(async move {
                match api.update_friend(&id, &name).await {
                    Ok(_) => {
                        let _ = editing_id.try_set(None);
                        let _ = editing_name.try_set(String::new());
                        friends.refetch();
                    }
                    Err(_) => {
                        let _ = error.try_set(Some("Impossible de modifier cet ami."));
                    }
                }
                let _ = saving.try_set(false);
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, name);
        }
    });

    let on_delete = Callback::new(move |(id, name): (String, String)| {
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window().is_some_and(|w| {
                w.confirm_with_message(&format!("Supprimer {name} ?"))
                    .unwrap_or(false)
            });
            if !confirmed {
                return;
            }

            error.set(None);
            saving.set(true);
            let friends = friends.clone();
            leptos::task::spawn_local(async move {
                match api.delete_friend(&id).await {
                    Ok(()) => friends.refetch(),
                    Err(_) => {
                        let _ = error.try_set(Some("Impossible de supprimer cet ami."));
                    }
                }
                let _ = saving.try_set(false);
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (id, name);
        }
    });

    view! {
        <div class="container">
            <div class="shell">
                <TopBar subtitle="Mes amis"/>

                <section class="card">
                    <div class="card-inner">
                        <h1 class="h1">"Mes amis"</h1>
                        <p class="p">"Consulte leurs idées et ajoute-en de nouvelles."</p>

                        {move || error.get().map(|message| view! { <div class="error">{message}</div> })}

                        <form
                            class="row"
                            on:submit=move |ev| {
                                ev.prevent_default();
                                on_add.run(());
                            }
                        >
                            <label class="row">
                                <span class="item-meta">"Ajouter un ami"</span>
                                <div class="row-inline">
                                    <input
                                        class="input"
                                        type="text"
                                        placeholder="Ex: Nadia"
                                        prop:value=move || new_name.get()
                                        on:input=move |ev| new_name.set(event_target_value(&ev))
                                    />
                                    <button
                                        class="button button-primary"
                                        type="submit"
                                        prop:disabled=move || saving.get()
                                    >
                                        {move || if saving.get() { "Ajout…" } else { "Ajouter" }}
                                    </button>
                                </div>
                            </label>
                        </form>

                        <div class="friends-list">
                            <Suspense fallback=move || {
                                view! { <div class="item-meta">"Chargement…"</div> }
                            }>
                                {move || {
                                    let editing = editing_id.get();
                                    friends.get().map(|result| match result {
                                        Err(e) => {
                                            view! { <div class="error">{load_error_message(&e)}</div> }
                                                .into_any()
                                        }
                                        Ok(list) if list.is_empty() => {
                                            view! {
                                                <div class="empty">
                                                    <div class="empty-title">"Aucun ami pour le moment"</div>
                                                    <div class="empty-text">
                                                        "Connecte-toi avec un compte de démo pour voir des exemples."
                                                    </div>
                                                </div>
                                            }
                                                .into_any()
                                        }
                                        Ok(list) => {
                                            let rows = sorted_by_name(&list)
                                                .into_iter()
                                                .map(|f| {
                                                    let is_editing =
                                                        editing.as_deref() == Some(f.id.as_str());
                                                    view! {
                                                        <FriendRow
                                                            friend=f
                                                            is_editing=is_editing
                                                            saving=saving
                                                            editing_id=editing_id
                                                            editing_name=editing_name
                                                            on_save_edit=on_save_edit
                                                            on_delete=on_delete
                                                        />
                                                    }
                                                })
                                                .collect::<Vec<_>>();
                                            view! { <div class="list">{rows}</div> }.into_any()
                                        }
                                    })
                                }}
                            </Suspense>
                        </div>
                    </div>
                </section>
            </div>
        </div>
    }
}

/// One friend row: name + actions, or the inline rename form.
#[component]
fn FriendRow(
    friend: crate::net::types::Friend,
    is_editing: bool,
    saving: RwSignal<bool>,
    editing_id: RwSignal<Option<String>>,
    editing_name: RwSignal<String>,
    on_save_edit: Callback<String>,
    on_delete: Callback<(String, String)>,
) -> impl IntoView {
    let open_href = format!("/friends/{}", encode_path_segment(&friend.id));
    let save_id = friend.id.clone();
    let edit_id = friend.id.clone();
    let edit_name = friend.name.clone();
    let delete_id = friend.id.clone();
    let delete_name = friend.name.clone();

    view! {
        <div class="item">
            <div class="friend-main">
                <div class="avatar" aria-hidden="true">{initials(&friend.name)}</div>
                {if is_editing {
                    view! {
                        <div class="row-inline">
                            <input
                                class="input"
                                type="text"
                                placeholder="Nom"
                                prop:value=move || editing_name.get()
                                on:input=move |ev| editing_name.set(event_target_value(&ev))
                            />
                            <button
                                class="button button-primary button-small"
                                type="button"
                                prop:disabled=move || saving.get()
                                on:click=move |_| on_save_edit.run(save_id.clone())
                            >
                                "Enregistrer"
                            </button>
                            <button
                                class="button button-small"
                                type="button"
                                prop:disabled=move || saving.get()
                                on:click=move |_| {
                                    editing_id.set(None);
                                    editing_name.set(String::new());
                                }
                            >
                                "Annuler"
                            </button>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <div>
                            <div class="item-title">{friend.name.clone()}</div>
                            <div class="item-meta">"Voir les idées cadeaux"</div>
                        </div>
                    }
                        .into_any()
                }}
            </div>

            {if is_editing {
                view! { <span class="badge">"Édition"</span> }.into_any()
            } else {
                view! {
                    <div class="item-actions">
                        <A href=open_href attr:class="button button-small">"Ouvrir"</A>
                        <button
                            class="button button-small"
                            type="button"
                            prop:disabled=move || saving.get()
                            on:click=move |_| {
                                editing_id.set(Some(edit_id.clone()));
                                editing_name.set(edit_name.clone());
                            }
                        >
                            "Modifier"
                        </button>
                        <button
                            class="button button-small button-danger"
                            type="button"
                            prop:disabled=move || saving.get()
                            on:click=move |_| {
                                on_delete.run((delete_id.clone(), delete_name.clone()));
                            }
                        >
                            "Supprimer"
                        </button>
                    </div>
                }
                    .into_any()
            }}
        </div>
    }
}
