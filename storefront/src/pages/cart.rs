use bliss_commerce::cart::{CheckoutSummary, SummaryLine};
use bliss_commerce::ids::ProductId;
use leptos::prelude::*;

use crate::state::use_app_state;

/// Cart page with the checkout summary. There is no payment step; orders
/// are finalised during a consultation.
#[component]
pub fn CartPage() -> impl IntoView {
    let state = use_app_state();
    let catalog = state.catalog;
    let cart = state.cart;
    let currency = state.config.site.currency();
    let summary = Memo::new(move |_| cart.with(|c| CheckoutSummary::calculate(c, catalog, currency)));

    view! {
        <h1>"Your Cart"</h1>
        {move || {
            let summary = summary.get();
            if summary.lines.is_empty() {
                view! {
                    <div class="empty-state">
                        <p>"Your cart is empty."</p>
                        <a href="/products">"Continue shopping"</a>
                    </div>
                }
                .into_any()
            } else {
                view! { <CartView summary=summary/> }.into_any()
            }
        }}
    }
}

#[component]
fn CartView(summary: CheckoutSummary) -> impl IntoView {
    let cart = use_app_state().cart;
    let item_count = summary.item_count;

    view! {
        <div class="cart-layout">
            <div class="cart-lines">
                <p>{format!("{item_count} item(s) in your cart")}</p>
                {summary
                    .lines
                    .iter()
                    .cloned()
                    .map(|line| view! { <CartLineRow line=line/> })
                    .collect::<Vec<_>>()}
            </div>
            <aside class="order-summary">
                <h2>"Summary"</h2>
                {summary.has_savings().then(|| view! {
                    <div class="summary-row">
                        <span>"Original price"</span>
                        <s>{summary.original_total().display()}</s>
                    </div>
                    <div class="summary-row savings">
                        <span>"You save"</span>
                        <span>{summary.savings.display()}</span>
                    </div>
                })}
                <div class="summary-row">
                    <span>"Subtotal"</span>
                    <span>{summary.subtotal.display()}</span>
                </div>
                <div class="summary-row total">
                    <strong>"Total"</strong>
                    <strong>{summary.total.display()}</strong>
                </div>
                {summary.has_unpriced.then(|| view! {
                    <p class="note">"Some items are priced on request; we'll send a quote after your consultation."</p>
                })}
                <a href="/auth?mode=signup" class="btn">"Book a consultation to order"</a>
                <div class="cart-actions">
                    <a href="/products">"Continue shopping"</a>
                    <button class="btn-link danger" on:click=move |_| cart.update(|c| c.clear())>
                        "Clear cart"
                    </button>
                </div>
            </aside>
        </div>
    }
}

#[component]
fn CartLineRow(line: SummaryLine) -> impl IntoView {
    let state = use_app_state();
    let id: ProductId = line.product.id;
    let quantity = line.quantity;

    let set_quantity = move |qty: i64| {
        let mut result = Ok(false);
        state.cart.update(|c| result = c.set_quantity(id, qty));
        if let Err(e) = result {
            state.notify(e.to_string());
        }
    };
    let decrement = {
        let set_quantity = set_quantity.clone();
        move |_| set_quantity(quantity - 1)
    };
    let increment = {
        let set_quantity = set_quantity.clone();
        move |_| set_quantity(quantity + 1)
    };
    let remove = move |_| set_quantity(0);

    let unit_price = line
        .unit_price
        .map(|m| m.display())
        .unwrap_or_else(|| line.product.price.clone());
    let line_total = line
        .line_total
        .map(|m| m.display())
        .unwrap_or_else(|| "On request".to_string());

    view! {
        <div class="cart-line">
            <img src=line.product.primary_image().unwrap_or_default().to_string() alt=""/>
            <div class="cart-line-info">
                <strong>{line.product.name.clone()}</strong>
                <p class="muted">{unit_price}" each"</p>
                {line.line_savings.map(|s| view! { <p class="savings">{format!("Saving {}", s.display())}</p> })}
            </div>
            <div class="quantity">
                <button on:click=decrement>"−"</button>
                <span>{quantity.to_string()}</span>
                <button on:click=increment>"+"</button>
            </div>
            <strong class="line-total">{line_total}</strong>
            <button class="btn-link danger" on:click=remove>"Remove"</button>
        </div>
    }
}
