use bliss_commerce::catalog::Product;
use leptos::prelude::*;

use super::{ProductCard, ProductModal, WishlistModal};

/// Product tiles plus the detail and wishlist modals they open.
#[component]
pub fn ProductGrid(#[prop(into)] products: Signal<Vec<Product>>) -> impl IntoView {
    let (detail, set_detail) = signal(None::<Product>);
    let (wishlist_target, set_wishlist_target) = signal(None::<Product>);

    let on_view = Callback::new(move |p: Product| set_detail.set(Some(p)));
    let on_wishlist = Callback::new(move |p: Product| {
        set_detail.set(None);
        set_wishlist_target.set(Some(p));
    });

    view! {
        <Show
            when=move || products.with(|p| !p.is_empty())
            fallback=|| view! {
                <div class="empty-state">
                    <p>"No products match these filters."</p>
                    <a href="/products">"Clear filters"</a>
                </div>
            }
        >
            <div class="products">
                <For
                    each=move || products.get()
                    key=|p| p.id
                    children=move |p| view! {
                        <ProductCard product=p on_view=on_view on_wishlist=on_wishlist/>
                    }
                />
            </div>
        </Show>

        {move || detail.get().map(|p| view! {
            <ProductModal
                product=p
                on_close=move |_| set_detail.set(None)
                on_select=on_view
                on_wishlist=on_wishlist
            />
        })}

        {move || wishlist_target.get().map(|p| view! {
            <WishlistModal product=p on_close=move |_| set_wishlist_target.set(None)/>
        })}
    }
}
