use bliss_commerce::catalog::Product;
use bliss_commerce::ids::WishlistId;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::state::use_app_state;

/// Save a product to an existing wishlist or start a new one with it.
#[component]
pub fn WishlistModal(product: Product, #[prop(into)] on_close: Callback<()>) -> impl IntoView {
    let state = use_app_state();
    let product_id = product.id;
    let (name, set_name) = signal(String::new());
    let (description, set_description) = signal(String::new());
    let (error, set_error) = signal(None::<String>);

    let add_to = {
        let state = state.clone();
        let product = product.clone();
        move |list_id: WishlistId| {
            let outcome = state.update_wishlists(|w| {
                let list_name = w.get(&list_id).map(|l| l.name.clone()).unwrap_or_default();
                w.add_to(&list_id, product.clone()).map(|o| (o, list_name))
            });
            match outcome {
                Some(Ok((outcome, list_name))) => {
                    state.notify(outcome.notice(&product.name, &list_name));
                    on_close.run(());
                }
                Some(Err(e)) => set_error.set(Some(e.to_string())),
                None => {}
            }
        }
    };

    let create = {
        let state = state.clone();
        let product = product.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let description = Some(description.get_untracked()).filter(|d| !d.trim().is_empty());
            let list_name = name.get_untracked();
            let created = state.update_wishlists(|w| w.create(&list_name, description, product.clone()));
            match created {
                Some(Ok(_)) => {
                    state.notify(format!("Created \"{}\" with {}", list_name.trim(), product.name));
                    on_close.run(());
                }
                Some(Err(e)) => set_error.set(Some(e.to_string())),
                None => {}
            }
        }
    };

    let remove_everywhere = {
        let state = state.clone();
        let product_name = product.name.clone();
        move |_| {
            if let Some(changed) = state.update_wishlists(|w| w.remove_everywhere(product_id)) {
                state.notify(format!("Removed {product_name} from {changed} wishlist(s)"));
            }
            on_close.run(());
        }
    };

    let wishlists = state.wishlists;
    let lists = move || {
        wishlists.with(|w| {
            w.lists()
                .iter()
                .map(|l| (l.id.clone(), l.name.clone(), l.len(), l.contains(product_id)))
                .collect::<Vec<_>>()
        })
    };
    let in_any = move || wishlists.with(|w| w.is_product_in_wishlist(product_id));

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal" on:click=|ev| ev.stop_propagation()>
                <header class="modal-header">
                    <h2>"Save to wishlist"</h2>
                    <button class="close" on:click=move |_| on_close.run(())>"×"</button>
                </header>
                <p class="modal-subtitle">{product.name.clone()}</p>

                <ul class="wishlist-options">
                    {move || {
                        let add_to = add_to.clone();
                        lists()
                            .into_iter()
                            .map(|(id, list_name, count, present)| {
                                let add_to = add_to.clone();
                                view! {
                                    <li>
                                        <span>{list_name}</span>
                                        <span class="count">{format!("{count} items")}</span>
                                        <button
                                            class="btn-small"
                                            disabled=present
                                            on:click=move |_| add_to(id.clone())
                                        >
                                            {if present { "Saved" } else { "Add" }}
                                        </button>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()
                    }}
                </ul>

                <form class="new-wishlist" on:submit=create>
                    <h3>"New wishlist"</h3>
                    <input
                        type="text"
                        placeholder="Name, e.g. Reception looks"
                        prop:value=move || name.get()
                        on:input=move |ev| set_name.set(event_target_value(&ev))
                    />
                    <textarea
                        placeholder="Description (optional)"
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                    <button type="submit" class="btn">"Create and save"</button>
                </form>

                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}

                <Show when=in_any>
                    <button class="btn-link danger" on:click=remove_everywhere.clone()>
                        "Remove from all wishlists"
                    </button>
                </Show>
            </div>
        </div>
    }
}
