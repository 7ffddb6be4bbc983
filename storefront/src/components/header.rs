use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::state::use_app_state;

#[component]
pub fn Header() -> impl IntoView {
    let state = use_app_state();
    let site_name = state.config.site.name.clone();
    let user = state.user;
    let cart = state.cart;
    let wishlists = state.wishlists;
    let (signing_out, set_signing_out) = signal(false);

    let sign_out = {
        let state = state.clone();
        move |_| {
            let state = state.clone();
            set_signing_out.set(true);
            spawn_local(async move {
                if let Err(e) = state.auth.sign_out().await {
                    tracing::warn!(error = %e, "sign-out failed");
                }
                state.sync_user();
                set_signing_out.set(false);
            });
        }
    };

    view! {
        <header class="site-header">
            <a href="/" class="logo">{site_name}</a>
            <nav>
                <a href="/">"Home"</a>
                <a href="/products">"Shop"</a>
                <a href="/blog">"Blog"</a>
                <a href="/contact">"Contact"</a>
                <a href="/account?section=wishlists">
                    "Wishlists"
                    {move || {
                        let count = wishlists.with(|w| w.total_items());
                        (count > 0).then(|| view! { <span class="pill">{count}</span> })
                    }}
                </a>
                <a href="/cart">
                    "Cart"
                    {move || {
                        let count = cart.with(|c| c.item_count());
                        (count > 0).then(|| view! { <span class="pill">{count}</span> })
                    }}
                </a>
            </nav>
            <div class="account-area">
                {move || match user.get() {
                    Some(u) => {
                        let avatar = match u.photo_url.clone() {
                            Some(src) => view! { <img class="avatar" src=src alt=""/> }.into_any(),
                            None => view! { <span class="avatar">{u.initials()}</span> }.into_any(),
                        };
                        view! {
                            <a href="/account" class="account-link">
                                {avatar}
                                <span>{format!("Hi, {}", u.greeting_name())}</span>
                            </a>
                            <button
                                class="btn-link"
                                disabled=move || signing_out.get()
                                on:click=sign_out.clone()
                            >
                                {move || if signing_out.get() { "Signing out..." } else { "Sign out" }}
                            </button>
                        }
                        .into_any()
                    }
                    None => view! {
                        <a href="/auth?mode=signin" class="btn-link">"Sign in"</a>
                        <a href="/auth?mode=signup" class="btn">"Get started"</a>
                    }
                    .into_any(),
                }}
            </div>
        </header>
        <Notice/>
    }
}

/// Dismissible one-line banner for app notices.
#[component]
fn Notice() -> impl IntoView {
    let notice = use_app_state().notice;

    view! {
        {move || notice.get().map(|text| view! {
            <div class="notice" role="status">
                <span>{text}</span>
                <button class="close" on:click=move |_| notice.set(None)>"×"</button>
            </div>
        })}
    }
}
