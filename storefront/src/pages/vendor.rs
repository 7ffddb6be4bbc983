use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::pages::NotFound;
use crate::state::use_app_state;

/// `/vendor/:section` with `register`, `benefits` or `faq`.
#[component]
pub fn VendorPage() -> impl IntoView {
    let params = use_params_map();
    let section = move || params.with(|p| p.get("section").unwrap_or_default());

    view! {
        {move || match section().as_str() {
            "register" => view! { <VendorRegister/> }.into_any(),
            "benefits" => view! { <VendorBenefits/> }.into_any(),
            "faq" => view! { <VendorFaq/> }.into_any(),
            _ => view! { <NotFound/> }.into_any(),
        }}
    }
}

#[component]
fn VendorRegister() -> impl IntoView {
    let support_email = use_app_state().config.site.support_email;

    view! {
        <h1>"Sell on Bliss"</h1>
        <p>"Designers, jewellers and decorators can list their work with us."</p>
        <ol>
            <li>"Send us your portfolio and GST details."</li>
            <li>"Our curation team reviews it within five working days."</li>
            <li>"Once approved, we photograph and list your collection."</li>
        </ol>
        <a class="btn" href=format!("mailto:{support_email}?subject=Vendor%20registration")>
            "Apply by email"
        </a>
    }
}

#[component]
fn VendorBenefits() -> impl IntoView {
    let benefits = [
        ("Reach", "Couples across the country planning their wedding with us."),
        ("Consultations", "Our consultants recommend your pieces in one-on-one sessions."),
        ("No listing fee", "You only pay commission on completed orders."),
    ];

    view! {
        <h1>"Why partner with us"</h1>
        <div class="benefits">
            {benefits
                .into_iter()
                .map(|(title, body)| view! {
                    <div class="benefit">
                        <h3>{title}</h3>
                        <p>{body}</p>
                    </div>
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn VendorFaq() -> impl IntoView {
    let faq = [
        ("How long does approval take?", "Usually five working days."),
        ("Can I set my own prices?", "Yes. Discounts are shown against your original price."),
        ("Who handles delivery?", "You ship to the customer; we provide packaging guidelines."),
    ];

    view! {
        <h1>"Vendor FAQ"</h1>
        <dl class="faq">
            {faq
                .into_iter()
                .map(|(q, a)| view! {
                    <dt>{q}</dt>
                    <dd>{a}</dd>
                })
                .collect::<Vec<_>>()}
        </dl>
    }
}
