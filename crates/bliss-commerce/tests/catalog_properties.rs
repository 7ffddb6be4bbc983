/// Properties of the product grid pipeline and wishlist manager, checked
/// against the seeded catalog.
use bliss_commerce::prelude::*;

#[test]
fn every_product_survives_its_own_category_and_subcategory() {
    let catalog = Catalog::seeded();

    for product in catalog.products() {
        let results = ProductQuery::new()
            .with_category(&product.category)
            .with_subcategory(&product.subcategory)
            .run(catalog);

        assert!(
            results.items.iter().any(|p| p.id == product.id),
            "{} missing from {}/{}",
            product.name,
            product.category,
            product.subcategory
        );
    }
}

#[test]
fn gold_search_only_returns_gold_products() {
    let catalog = Catalog::seeded();
    let results = ProductQuery::new().with_search("GoLd").run(catalog);

    assert!(!results.is_empty());
    for product in &results.items {
        let mentions_gold = product.name.to_lowercase().contains("gold")
            || product.description.to_lowercase().contains("gold")
            || product.features.iter().any(|f| f.to_lowercase().contains("gold"));
        assert!(mentions_gold, "{} does not mention gold", product.name);
    }

    // and nothing mentioning gold was left out
    let expected = catalog
        .products()
        .iter()
        .filter(|p| p.matches_search("gold"))
        .count();
    assert_eq!(results.total(), expected);
}

#[test]
fn price_low_is_non_decreasing() {
    let catalog = Catalog::seeded();
    let results = ProductQuery::new().with_sort(SortOption::PriceLow).run(catalog);
    assert_eq!(results.total(), catalog.products().len());

    let prices: Vec<i64> = results
        .items
        .iter()
        .filter_map(|p| p.price_value())
        .map(|m| m.amount_minor)
        .collect();
    assert!(prices.windows(2).all(|w| w[0] <= w[1]), "{prices:?}");

    // unpriced products trail the priced ones
    let first_unpriced = results.items.iter().position(|p| p.price_value().is_none());
    if let Some(idx) = first_unpriced {
        assert!(results.items[idx..].iter().all(|p| p.price_value().is_none()));
    }
}

#[test]
fn price_high_is_non_increasing() {
    let catalog = Catalog::seeded();
    let results = ProductQuery::from_query_string("sort=price-high").run(catalog);

    let prices: Vec<i64> = results
        .items
        .iter()
        .filter_map(|p| p.price_value())
        .map(|m| m.amount_minor)
        .collect();
    assert!(prices.windows(2).all(|w| w[0] >= w[1]), "{prices:?}");
    assert!(results.items.last().is_some_and(|p| p.price_value().is_none()));
}

#[test]
fn collection_subcategories_use_flags() {
    let catalog = Catalog::seeded();

    let trending = ProductQuery::new().with_subcategory("trending").run(catalog);
    assert!(trending.items.iter().all(|p| p.trending));

    let fresh = ProductQuery::new().with_subcategory("new-arrivals").run(catalog);
    assert!(fresh.items.iter().all(|p| p.new_arrival));

    let best = ProductQuery::new()
        .with_category("jewelry")
        .with_subcategory("best-sellers")
        .run(catalog);
    assert!(best.items.iter().all(|p| p.best_seller && p.category == "jewelry"));
}

#[test]
fn adding_existing_product_does_not_duplicate() {
    let catalog = Catalog::seeded();
    let product = catalog.product(ProductId(3)).cloned().unwrap();

    let mut wishlists = WishlistManager::new();
    let id = wishlists.create("Sangeet", None, product.clone()).unwrap();
    let before = wishlists.get(&id).unwrap().len();

    assert_eq!(wishlists.add_to(&id, product).unwrap(), AddOutcome::AlreadyPresent);
    assert_eq!(wishlists.get(&id).unwrap().len(), before);
}

#[test]
fn remove_everywhere_clears_membership() {
    let catalog = Catalog::seeded();
    let first = catalog.product(ProductId(1)).cloned().unwrap();
    let second = catalog.product(ProductId(2)).cloned().unwrap();

    let mut wishlists = WishlistManager::new();
    let a = wishlists.create("Wedding", None, first.clone()).unwrap();
    let b = wishlists.create("Reception", Some("Evening looks".into()), second).unwrap();
    wishlists.add_to(&b, first.clone()).unwrap();
    assert_eq!(wishlists.lists_containing(first.id).len(), 2);

    assert_eq!(wishlists.remove_everywhere(first.id), 2);
    assert!(!wishlists.is_product_in_wishlist(first.id));
    assert!(wishlists.get(&a).unwrap().is_empty());
    assert_eq!(wishlists.get(&b).unwrap().len(), 1);
}

#[test]
fn wishlists_round_trip_through_storage() {
    let catalog = Catalog::seeded();
    let cache = bliss_cache::Cache::in_memory();

    let mut wishlists = WishlistManager::new();
    wishlists
        .create("Mehendi", None, catalog.product(ProductId(9)).cloned().unwrap())
        .unwrap();
    wishlists.save(&cache).unwrap();

    let restored = WishlistManager::load(&cache).unwrap();
    assert_eq!(restored.lists().len(), 1);
    assert!(restored.is_product_in_wishlist(ProductId(9)));
}
