use leptos::prelude::*;

use crate::state::use_app_state;

#[component]
pub fn PrivacyPage() -> impl IntoView {
    let site = use_app_state().config.site;

    view! {
        <article class="policy">
            <h1>"Privacy Policy"</h1>
            <p>
                {format!(
                    "{} keeps your account, wishlists and bookings in this browser's local storage. Nothing is sent to a server.",
                    site.name
                )}
            </p>
            <h2>"What we store"</h2>
            <ul>
                <li>"Your profile: name, email, phone and photo."</li>
                <li>"Wishlists you create."</li>
                <li>"Consultations you book."</li>
            </ul>
            <h2>"Removing your data"</h2>
            <p>"Signing out deletes your session. Clearing site data removes everything else."</p>
            <p>{format!("Questions? Email {}.", site.support_email)}</p>
        </article>
    }
}

#[component]
pub fn TermsPage() -> impl IntoView {
    let site = use_app_state().config.site;

    view! {
        <article class="policy">
            <h1>"Terms of Service"</h1>
            <p>{format!("By using {} you agree to these terms.", site.name)}</p>
            <h2>"Consultations"</h2>
            <p>"Bookings can be rescheduled up to 24 hours before the session."</p>
            <h2>"Prices"</h2>
            <p>"Prices are indicative. Items marked on request are quoted after a consultation."</p>
        </article>
    }
}
