use bliss_commerce::search::{CategoryFilter, ProductQuery, SortOption, SubcategoryFilter};
use leptos::ev::Event;
use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};
use leptos_router::NavigateOptions;

use crate::components::ProductGrid;
use crate::state::use_app_state;

/// The product grid with category, subcategory, search and sort controls.
///
/// The URL query string is the filter state, so filtered views can be
/// linked and survive a reload.
#[component]
pub fn ProductsPage() -> impl IntoView {
    let state = use_app_state();
    let catalog = state.catalog;
    let params = use_query_map();

    let query = Memo::new(move |_| {
        params.with(|p| {
            ProductQuery::new()
                .with_category(p.get("category").unwrap_or_default())
                .with_subcategory(p.get("subcategory").unwrap_or_default())
                .with_search(p.get("q").unwrap_or_default())
                .with_sort(SortOption::parse(&p.get("sort").unwrap_or_default()))
        })
    });
    let results = Memo::new(move |_| query.with(|q| q.run(catalog)));
    let products = Signal::derive(move || results.with(|r| r.items.clone()));

    let navigate = use_navigate();
    let apply = move |next: ProductQuery| {
        let qs = next.to_query_string();
        let url = if qs.is_empty() {
            "/products".to_string()
        } else {
            format!("/products?{qs}")
        };
        navigate(
            &url,
            NavigateOptions {
                replace: true,
                scroll: false,
                ..Default::default()
            },
        );
    };

    let on_category = {
        let apply = apply.clone();
        move |ev: Event| {
            // a new category invalidates its subcategory
            let mut next = query.get_untracked().with_category(event_target_value(&ev));
            next.subcategory = SubcategoryFilter::All;
            apply(next);
        }
    };
    let on_subcategory = {
        let apply = apply.clone();
        move |ev: Event| apply(query.get_untracked().with_subcategory(event_target_value(&ev)))
    };
    let on_search = {
        let apply = apply.clone();
        move |ev: Event| apply(query.get_untracked().with_search(event_target_value(&ev)))
    };
    let on_sort = move |ev: Event| apply(query.get_untracked().with_sort(SortOption::parse(&event_target_value(&ev))));

    // subcategory options depend on the selected category
    let subcategory_options = move || {
        let mut options: Vec<(String, String)> = SubcategoryFilter::collections()
            .iter()
            .map(|s| (s.as_str().to_string(), s.display_name().to_string()))
            .collect();
        if let CategoryFilter::Slug(slug) = query.with(|q| q.category.clone()) {
            if let Some(category) = catalog.category(&slug) {
                options.extend(
                    category
                        .subcategories
                        .iter()
                        .map(|s| (s.slug.clone(), s.name.clone())),
                );
            }
        }
        options
    };

    view! {
        <div class="page-heading">
            <h1>"Shop"</h1>
            <p class="results-summary">{move || results.with(|r| r.summary(catalog))}</p>
        </div>

        <div class="filters">
            <select
                prop:value=move || query.with(|q| q.category.as_str().to_string())
                on:change=on_category
            >
                <option value="all">"All categories"</option>
                {catalog
                    .categories()
                    .iter()
                    .map(|c| view! { <option value=c.slug.clone()>{c.name.clone()}</option> })
                    .collect::<Vec<_>>()}
            </select>

            <select
                prop:value=move || query.with(|q| q.subcategory.as_str().to_string())
                on:change=on_subcategory
            >
                <option value="all">"Everything"</option>
                {move || {
                    subcategory_options()
                        .into_iter()
                        .map(|(value, label)| view! { <option value=value>{label}</option> })
                        .collect::<Vec<_>>()
                }}
            </select>

            <input
                type="search"
                placeholder="Search lehengas, gold, mandap..."
                prop:value=move || query.with(|q| q.search.clone())
                on:change=on_search
            />

            <select
                prop:value=move || query.with(|q| q.sort.as_str().to_string())
                on:change=on_sort
            >
                {SortOption::ALL
                    .iter()
                    .map(|s| view! { <option value=s.as_str()>{s.display_name()}</option> })
                    .collect::<Vec<_>>()}
            </select>
        </div>

        <ProductGrid products=products/>
    }
}
