use bliss_commerce::search::ProductQuery;
use leptos::prelude::*;

use crate::components::ProductGrid;
use crate::state::use_app_state;

/// Home page: hero, category tiles and the trending collection.
#[component]
pub fn HomePage() -> impl IntoView {
    let state = use_app_state();
    let catalog = state.catalog;
    let site = state.config.site.clone();

    let trending = ProductQuery::new().with_subcategory("trending").run(catalog).items;
    let new_arrivals = ProductQuery::new()
        .with_subcategory("new-arrivals")
        .run(catalog)
        .items;

    view! {
        <section class="hero">
            <h1>{site.name}</h1>
            <p>{site.tagline}</p>
            <div class="hero-actions">
                <a href="/products" class="btn">"Browse the collection"</a>
                <a href="/auth?mode=signup" class="btn-outline">"Book a free consultation"</a>
            </div>
        </section>

        <section class="categories">
            <h2>"Shop by category"</h2>
            <div class="category-tiles">
                {catalog
                    .categories()
                    .iter()
                    .map(|c| {
                        let href = format!("/products?category={}", c.slug);
                        view! {
                            <a href=href class="category-tile">
                                <h3>{c.name.clone()}</h3>
                                <p>{c.description.clone()}</p>
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>

        <section>
            <div class="section-heading">
                <h2>"Trending now"</h2>
                <a href="/products?subcategory=trending">"See all"</a>
            </div>
            <ProductGrid products=Signal::stored(trending)/>
        </section>

        <section>
            <div class="section-heading">
                <h2>"New arrivals"</h2>
                <a href="/products?subcategory=new-arrivals">"See all"</a>
            </div>
            <ProductGrid products=Signal::stored(new_arrivals)/>
        </section>
    }
}
