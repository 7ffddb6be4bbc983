use bliss_commerce::booking::ContactForm;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::use_app_state;

/// Contact form. Submitting hands the details to the signup wizard, which
/// pre-fills its forms from them.
#[component]
pub fn ContactPage() -> impl IntoView {
    let state = use_app_state();
    let support_email = state.config.site.support_email.clone();
    let form = RwSignal::new(ContactForm::default());
    let (error, set_error) = signal(None::<String>);
    let navigate = use_navigate();

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match form.get_untracked().stash(&state.cache) {
            Ok(true) => navigate("/auth?mode=signup&source=contact", Default::default()),
            Ok(false) => set_error.set(Some("Tell us a little about yourself first.".to_string())),
            Err(e) => {
                tracing::warn!(error = %e, "could not stash contact form");
                set_error.set(Some("Something went wrong, please try again.".to_string()));
            }
        }
    };

    let bind = move |apply: fn(&mut ContactForm, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            form.update(|f| apply(f, value));
        }
    };

    view! {
        <div class="contact-layout">
            <section>
                <h1>"Let's plan your day"</h1>
                <p>"Share a few details and we'll set you up with a consultant."</p>
                <p>
                    "Prefer email? Write to "
                    <a href=format!("mailto:{support_email}")>{support_email.clone()}</a>
                </p>
            </section>
            <form class="contact-form" on:submit=submit>
                <label>
                    "Name"
                    <input
                        type="text"
                        prop:value=move || form.with(|f| f.name.clone())
                        on:input=bind(|f, v| f.name = v)
                    />
                </label>
                <label>
                    "Email"
                    <input
                        type="email"
                        prop:value=move || form.with(|f| f.email.clone())
                        on:input=bind(|f, v| f.email = v)
                    />
                </label>
                <label>
                    "Phone"
                    <input
                        type="tel"
                        prop:value=move || form.with(|f| f.phone.clone())
                        on:input=bind(|f, v| f.phone = v)
                    />
                </label>
                <label>
                    "How can we help?"
                    <textarea
                        prop:value=move || form.with(|f| f.message.clone())
                        on:input=bind(|f, v| f.message = v)
                    ></textarea>
                </label>
                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                <button type="submit" class="btn">"Continue"</button>
            </form>
        </div>
    }
}
