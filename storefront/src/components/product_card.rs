use bliss_commerce::catalog::Product;
use leptos::prelude::*;

use crate::state::use_app_state;

/// Grid tile: image, badges, price, rating and quick actions.
#[component]
pub fn ProductCard(
    product: Product,
    /// Open the detail modal.
    #[prop(into)]
    on_view: Callback<Product>,
    /// Open the wishlist modal.
    #[prop(into)]
    on_wishlist: Callback<Product>,
) -> impl IntoView {
    let state = use_app_state();
    let id = product.id;
    let wishlists = state.wishlists;
    let saved = move || wishlists.with(|w| w.is_product_in_wishlist(id));

    let add_to_cart = {
        let state = state.clone();
        let name = product.name.clone();
        move |_| {
            let mut result = Ok(());
            state.cart.update(|cart| result = cart.add(id, 1));
            match result {
                Ok(()) => state.notify(format!("Added {name} to your cart")),
                Err(e) => state.notify(e.to_string()),
            }
        }
    };

    let image = product.primary_image().unwrap_or_default().to_string();
    let discount = product.discount_percent();
    let view_product = product.clone();
    let wishlist_product = product.clone();

    view! {
        <div class="product-card">
            <div class="product-media" on:click=move |_| on_view.run(view_product.clone())>
                <img src=image alt=product.name.clone() loading="lazy"/>
                <div class="badges">
                    {product.trending.then(|| view! { <span class="badge trending">"Trending"</span> })}
                    {product.new_arrival.then(|| view! { <span class="badge new">"New"</span> })}
                    {product.best_seller.then(|| view! { <span class="badge best">"Bestseller"</span> })}
                </div>
            </div>
            <button
                class="wishlist-toggle"
                class:saved=saved
                title="Save to wishlist"
                on:click=move |_| on_wishlist.run(wishlist_product.clone())
            >
                {move || if saved() { "♥" } else { "♡" }}
            </button>
            <div class="product-info">
                <h3>{product.name.clone()}</h3>
                <p class="price">
                    {product.price.clone()}
                    {product.original_price.clone().map(|original| view! {
                        <s class="original-price">{original}</s>
                    })}
                    {discount.map(|pct| view! { <span class="discount">{format!("{pct}% off")}</span> })}
                </p>
                <p class="rating">
                    {format!("★ {:.1}", product.rating)}
                    <span class="reviews">{format!(" ({})", product.reviews)}</span>
                </p>
                <button class="btn" on:click=add_to_cart>"Add to Cart"</button>
            </div>
        </div>
    }
}
