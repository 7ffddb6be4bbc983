use bliss_commerce::catalog::Product;
use leptos::prelude::*;

use crate::state::use_app_state;

/// Full product details with an image strip and related products.
#[component]
pub fn ProductModal(
    product: Product,
    #[prop(into)] on_close: Callback<()>,
    /// Switch the modal to another product.
    #[prop(into)]
    on_select: Callback<Product>,
    #[prop(into)] on_wishlist: Callback<Product>,
) -> impl IntoView {
    let state = use_app_state();
    let images = product.images.clone();
    let (active_image, set_active_image) = signal(0usize);
    let (quantity, set_quantity) = signal(1i64);

    let related: Vec<Product> = state
        .catalog
        .related(&product, 4)
        .into_iter()
        .cloned()
        .collect();

    let category_name = state
        .catalog
        .category(&product.category)
        .map(|c| c.name.clone())
        .unwrap_or_else(|| product.category.clone());

    let add_to_cart = {
        let state = state.clone();
        let id = product.id;
        let name = product.name.clone();
        move |_| {
            let qty = quantity.get_untracked();
            let mut result = Ok(());
            state.cart.update(|cart| result = cart.add(id, qty));
            match result {
                Ok(()) => {
                    state.notify(format!("Added {qty} × {name} to your cart"));
                    on_close.run(());
                }
                Err(e) => state.notify(e.to_string()),
            }
        }
    };

    let main_image = {
        let images = images.clone();
        move || images.get(active_image.get()).cloned().unwrap_or_default()
    };
    let wishlist_product = product.clone();

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class="modal modal-wide" on:click=|ev| ev.stop_propagation()>
                <button class="close" on:click=move |_| on_close.run(())>"×"</button>
                <div class="product-detail">
                    <div class="gallery">
                        <img class="gallery-main" src=main_image alt=product.name.clone()/>
                        <div class="gallery-thumbs">
                            {images
                                .into_iter()
                                .enumerate()
                                .map(|(i, src)| view! {
                                    <img
                                        src=src
                                        class:active=move || active_image.get() == i
                                        on:click=move |_| set_active_image.set(i)
                                    />
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                    <div class="detail-info">
                        <p class="breadcrumb">{category_name}</p>
                        <h2>{product.name.clone()}</h2>
                        <p class="rating">
                            {format!("★ {:.1} · {} reviews", product.rating, product.reviews)}
                        </p>
                        <p class="price">
                            {product.price.clone()}
                            {product.original_price.clone().map(|o| view! { <s class="original-price">{o}</s> })}
                            {product.savings().map(|s| view! {
                                <span class="discount">{format!("You save {}", s.display())}</span>
                            })}
                        </p>
                        <p>{product.description.clone()}</p>
                        <ul class="features">
                            {product.features.iter().map(|f| view! { <li>{f.clone()}</li> }).collect::<Vec<_>>()}
                        </ul>
                        <div class="quantity">
                            <button on:click=move |_| set_quantity.update(|q| *q = (*q - 1).max(1))>"−"</button>
                            <span>{move || quantity.get().to_string()}</span>
                            <button on:click=move |_| set_quantity.update(|q| *q += 1)>"+"</button>
                        </div>
                        <div class="actions">
                            <button class="btn" on:click=add_to_cart>"Add to Cart"</button>
                            <button class="btn-outline" on:click=move |_| on_wishlist.run(wishlist_product.clone())>
                                "Save to Wishlist"
                            </button>
                        </div>
                    </div>
                </div>

                {(!related.is_empty()).then(|| view! {
                    <section class="related">
                        <h3>"You may also like"</h3>
                        <div class="related-row">
                            {related
                                .into_iter()
                                .map(|p| {
                                    let image = p.primary_image().unwrap_or_default().to_string();
                                    let name = p.name.clone();
                                    let price = p.price.clone();
                                    view! {
                                        <div class="related-item" on:click=move |_| on_select.run(p.clone())>
                                            <img src=image alt=name.clone()/>
                                            <p>{name}</p>
                                            <p class="price">{price}</p>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </section>
                })}
            </div>
        </div>
    }
}
