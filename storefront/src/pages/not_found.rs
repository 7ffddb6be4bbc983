use leptos::prelude::*;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="empty-state">
            <h1>"Page not found"</h1>
            <p>"The page you're looking for doesn't exist."</p>
            <a href="/" class="btn">"Back home"</a>
        </div>
    }
}
