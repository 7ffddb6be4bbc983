//! The signup and booking wizard page.

use bliss_auth::{AuthError, AuthMode, FieldError, SignupForm, SignupWizard, UserRecord, WizardStep};
use chrono::Utc;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_location;

use crate::pages::account::{BookingCard, BookingFields};
use crate::state::{use_app_state, AppState};

/// `/auth?mode=signin|signup&source=contact`
#[component]
pub fn AuthPage() -> impl IntoView {
    let state = use_app_state();
    let search = use_location().search.get_untracked();

    let mut initial = SignupWizard::from_query_string(&search);
    if let Err(e) = initial.mount(&state.cache) {
        tracing::warn!(error = %e, "could not load stashed forms");
    }
    let wizard = RwSignal::new(initial);
    let step = Memo::new(move |_| wizard.with(|w| w.step()));

    let cache = state.cache.clone();
    on_cleanup(move || {
        if let Some(Err(e)) = wizard.try_with_untracked(|w| w.unmount(&cache)) {
            tracing::warn!(error = %e, "could not clear contact form");
        }
    });

    view! {
        <div class="wizard">
            <StepIndicator wizard=wizard/>
            {move || match step.get() {
                WizardStep::Auth => view! { <AuthStep wizard=wizard/> }.into_any(),
                WizardStep::Verification => view! { <VerificationStep wizard=wizard/> }.into_any(),
                WizardStep::Booking => view! { <BookingStep wizard=wizard/> }.into_any(),
                WizardStep::Success => view! { <SuccessStep wizard=wizard/> }.into_any(),
            }}
        </div>
    }
}

#[component]
fn StepIndicator(wizard: RwSignal<SignupWizard>) -> impl IntoView {
    let progress = move || format!("width: {}%", wizard.with(|w| w.progress_percent()));

    view! {
        <ol class="steps">
            {WizardStep::ALL
                .into_iter()
                .map(|s| {
                    let class = move || {
                        wizard.with(|w| {
                            if w.step() == s {
                                "step current"
                            } else if w.skipped(s) {
                                "step skipped"
                            } else if w.completed_steps().contains(&s) {
                                "step done"
                            } else {
                                "step"
                            }
                        })
                    };
                    view! {
                        <li class=class>
                            <span class="step-number">{s.number()}</span>
                            <span>{s.display_name()}</span>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ol>
        <div class="progress"><div class="progress-bar" style=progress></div></div>
    }
}

/// Apply a wizard transition, surfacing a failure as the step's error.
fn advance(
    wizard: RwSignal<SignupWizard>,
    set_error: WriteSignal<Option<String>>,
    transition: impl FnOnce(&mut SignupWizard) -> Result<WizardStep, AuthError>,
) {
    let mut result = None;
    wizard.update(|w| result = Some(transition(w)));
    match result {
        Some(Ok(step)) => tracing::debug!(step = step.as_str(), "wizard moved"),
        Some(Err(e)) => set_error.set(Some(e.to_string())),
        None => {}
    }
}

/// Run a store call in the background and advance on success.
fn authenticate<F>(
    state: AppState,
    wizard: RwSignal<SignupWizard>,
    busy: RwSignal<bool>,
    set_error: WriteSignal<Option<String>>,
    call: impl FnOnce(AppState) -> F + 'static,
) where
    F: std::future::Future<Output = Result<UserRecord, AuthError>> + 'static,
{
    if busy.get_untracked() {
        return;
    }
    busy.set(true);
    set_error.set(None);
    spawn_local(async move {
        match call(state.clone()).await {
            Ok(user) => {
                state.sync_user();
                advance(wizard, set_error, |w| w.authenticated(&user));
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
        busy.set(false);
    });
}

#[component]
fn AuthStep(wizard: RwSignal<SignupWizard>) -> impl IntoView {
    let state = use_app_state();
    let user = state.user;
    let busy = RwSignal::new(false);
    let (error, set_error) = signal(None::<String>);
    let field_errors = RwSignal::new(Vec::<FieldError>::new());
    let (phone_login, set_phone_login) = signal(String::new());

    let mode = Memo::new(move |_| wizard.with(|w| w.mode()));
    let field_error = move |field: &'static str| {
        move || {
            field_errors.with(|errors| SignupForm::error_for(errors, field)).map(|e| {
                view! { <span class="field-error">{e}</span> }
            })
        }
    };
    let set_mode = move |m: AuthMode| {
        field_errors.set(Vec::new());
        set_error.set(None);
        wizard.update(|w| w.set_mode(m));
    };

    let submit = {
        let state = state.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            if let Err(e) = wizard.with_untracked(|w| w.validate_auth_form()) {
                field_errors.set(e.field_errors().to_vec());
                return;
            }
            field_errors.set(Vec::new());
            let form = wizard.with_untracked(|w| w.form.clone());
            let mode = wizard.with_untracked(|w| w.mode());
            authenticate(state.clone(), wizard, busy, set_error, move |state| async move {
                match mode {
                    AuthMode::SignUp => {
                        state
                            .auth
                            .sign_up_with_email(&form.email, &form.password, &form.name, &form.phone)
                            .await
                    }
                    AuthMode::SignIn => state.auth.sign_in_with_email(&form.email, &form.password).await,
                }
            });
        }
    };

    let google = {
        let state = state.clone();
        move |_| {
            authenticate(state.clone(), wizard, busy, set_error, |state| async move {
                state.auth.sign_in_with_google().await
            })
        }
    };

    let phone = {
        let state = state.clone();
        move |_| {
            let number = phone_login.get_untracked();
            if let Err(e) = bliss_auth::validation::validate_phone(&number) {
                set_error.set(Some(e.message));
                return;
            }
            authenticate(state.clone(), wizard, busy, set_error, move |state| async move {
                state.auth.sign_in_with_phone(&number).await
            })
        }
    };

    let continue_as = move |_| {
        let current = user.get_untracked();
        advance(wizard, set_error, |w| w.next(current.as_ref()));
    };

    let bind = move |apply: fn(&mut SignupForm, String)| {
        move |ev: leptos::ev::Event| {
            let value = event_target_value(&ev);
            wizard.update(|w| apply(&mut w.form, value));
        }
    };

    view! {
        <div class="wizard-step">
            {move || user.get().map(|u| view! {
                <div class="signed-in-banner">
                    <span>{format!("Signed in as {}", u.greeting_name())}</span>
                    <button class="btn" on:click=continue_as>"Continue"</button>
                </div>
            })}

            <div class="mode-toggle">
                <button
                    class:active=move || mode.get() == AuthMode::SignUp
                    on:click=move |_| set_mode(AuthMode::SignUp)
                >
                    "Create account"
                </button>
                <button
                    class:active=move || mode.get() == AuthMode::SignIn
                    on:click=move |_| set_mode(AuthMode::SignIn)
                >
                    "Sign in"
                </button>
            </div>

            <form class="auth-form" on:submit=submit>
                <Show when=move || mode.get() == AuthMode::SignUp>
                    <label>
                        "Full name"
                        <input
                            type="text"
                            prop:value=move || wizard.with(|w| w.form.name.clone())
                            on:input=bind(|f, v| f.name = v)
                        />
                        {field_error("name")}
                    </label>
                </Show>
                <label>
                    "Email"
                    <input
                        type="email"
                        prop:value=move || wizard.with(|w| w.form.email.clone())
                        on:input=bind(|f, v| f.email = v)
                    />
                    {field_error("email")}
                </label>
                <Show when=move || mode.get() == AuthMode::SignUp>
                    <label>
                        "Phone"
                        <input
                            type="tel"
                            placeholder="+91 98765 43210"
                            prop:value=move || wizard.with(|w| w.form.phone.clone())
                            on:input=bind(|f, v| f.phone = v)
                        />
                        {field_error("phone")}
                    </label>
                </Show>
                <label>
                    "Password"
                    <input
                        type="password"
                        prop:value=move || wizard.with(|w| w.form.password.clone())
                        on:input=bind(|f, v| f.password = v)
                    />
                    {field_error("password")}
                </label>
                <Show when=move || mode.get() == AuthMode::SignUp>
                    <label>
                        "Confirm password"
                        <input
                            type="password"
                            prop:value=move || wizard.with(|w| w.form.confirm_password.clone())
                            on:input=bind(|f, v| f.confirm_password = v)
                        />
                        {field_error("confirm_password")}
                    </label>
                </Show>
                <button type="submit" class="btn" disabled=move || busy.get()>
                    {move || match (busy.get(), mode.get()) {
                        (true, _) => "Please wait...",
                        (false, AuthMode::SignUp) => "Create account",
                        (false, AuthMode::SignIn) => "Sign in",
                    }}
                </button>
            </form>

            <div class="divider">"or"</div>
            <button class="btn-outline" disabled=move || busy.get() on:click=google>
                "Continue with Google"
            </button>
            <Show when=move || mode.get() == AuthMode::SignIn>
                <div class="phone-login">
                    <input
                        type="tel"
                        placeholder="+91 98765 43210"
                        prop:value=move || phone_login.get()
                        on:input=move |ev| set_phone_login.set(event_target_value(&ev))
                    />
                    <button class="btn-outline" disabled=move || busy.get() on:click=phone.clone()>
                        "Sign in with phone"
                    </button>
                </div>
            </Show>

            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
        </div>
    }
}

#[component]
fn VerificationStep(wizard: RwSignal<SignupWizard>) -> impl IntoView {
    let state = use_app_state();
    let demo_code = state.config.auth.accepted_otp.clone();
    let busy = RwSignal::new(false);
    let (error, set_error) = signal(None::<String>);

    let initial_phone = state
        .auth
        .pending_phone()
        .or_else(|| state.user.get_untracked().and_then(|u| u.phone_number))
        .unwrap_or_else(|| wizard.with_untracked(|w| w.form.phone.clone()));
    let (phone, set_phone) = signal(initial_phone);
    let (code, set_code) = signal(String::new());
    let code_sent = RwSignal::new(state.auth.pending_phone().is_some());

    let send = {
        let state = state.clone();
        move |_| {
            let number = phone.get_untracked();
            if let Err(e) = bliss_auth::validation::validate_phone(&number) {
                set_error.set(Some(e.message));
                return;
            }
            let state = state.clone();
            busy.set(true);
            set_error.set(None);
            spawn_local(async move {
                match state.auth.send_phone_otp(&number).await {
                    Ok(()) => code_sent.set(true),
                    Err(e) => set_error.set(Some(e.to_string())),
                }
                busy.set(false);
            });
        }
    };

    let verify = {
        let state = state.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            if busy.get_untracked() {
                return;
            }
            let state = state.clone();
            let entered = code.get_untracked();
            busy.set(true);
            set_error.set(None);
            spawn_local(async move {
                match state.auth.verify_phone_otp(&entered).await {
                    Ok(user) => {
                        state.sync_user();
                        advance(wizard, set_error, |w| w.verified(&user));
                    }
                    Err(e) => set_error.set(Some(e.to_string())),
                }
                busy.set(false);
            });
        }
    };

    let user = state.user;
    let skip = move |_| {
        let current = user.get_untracked();
        advance(wizard, set_error, |w| w.next(current.as_ref()));
    };
    let back = move |_| advance(wizard, set_error, |w| w.prev());

    view! {
        <div class="wizard-step">
            <h2>"Verify your phone"</h2>
            <div class="phone-send">
                <input
                    type="tel"
                    prop:value=move || phone.get()
                    on:input=move |ev| set_phone.set(event_target_value(&ev))
                />
                <button class="btn-outline" disabled=move || busy.get() on:click=send>
                    {move || if code_sent.get() { "Resend code" } else { "Send code" }}
                </button>
            </div>
            <Show when=move || code_sent.get()>
                <form class="otp-form" on:submit=verify.clone()>
                    <p class="muted">{format!("Demo mode: use code {demo_code}")}</p>
                    <input
                        type="text"
                        inputmode="numeric"
                        maxlength="6"
                        placeholder="6-digit code"
                        prop:value=move || code.get()
                        on:input=move |ev| set_code.set(event_target_value(&ev))
                    />
                    <button type="submit" class="btn" disabled=move || busy.get()>
                        {move || if busy.get() { "Verifying..." } else { "Verify" }}
                    </button>
                </form>
            </Show>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            <div class="wizard-nav">
                <button class="btn-link" on:click=back>"Back"</button>
                <button class="btn-link" on:click=skip>"Skip for now"</button>
            </div>
        </div>
    }
}

#[component]
fn BookingStep(wizard: RwSignal<SignupWizard>) -> impl IntoView {
    let state = use_app_state();
    let today = Utc::now().date_naive();
    let draft = RwSignal::new(wizard.with_untracked(|w| w.draft.clone()));
    let (error, set_error) = signal(None::<String>);
    let can_go_back = !wizard.with_untracked(|w| w.skipped(WizardStep::Verification));
    let missing = move || draft.with(|d| d.missing_fields(today));

    let submit = {
        let state = state.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let Some(user) = state.user.get_untracked() else {
                set_error.set(Some(AuthError::NotSignedIn.to_string()));
                return;
            };
            let mut result = None;
            wizard.update(|w| {
                w.draft = draft.get_untracked();
                result = Some(w.submit_booking(&user, &state.cache, today));
            });
            match result {
                Some(Ok(booking)) => state.notify(format!("Consultation booked for {}", booking.when())),
                Some(Err(e)) => set_error.set(Some(e.to_string())),
                None => {}
            }
        }
    };
    let back = move |_| {
        wizard.update(|w| w.draft = draft.get_untracked());
        advance(wizard, set_error, |w| w.prev());
    };

    view! {
        <div class="wizard-step">
            <h2>"Book your consultation"</h2>
            <form class="booking-form" on:submit=submit>
                <BookingFields today=today draft=draft/>
                <label>
                    "Anything we should know?"
                    <textarea
                        prop:value=move || draft.with(|d| d.special_request.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|d| d.special_request = value);
                        }
                    ></textarea>
                </label>
                {move || {
                    let missing = missing();
                    (!missing.is_empty()).then(|| view! {
                        <p class="muted">{format!("Still needed: {}", missing.join(", "))}</p>
                    })
                }}
                {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
                <div class="wizard-nav">
                    {can_go_back.then(|| view! { <button type="button" class="btn-link" on:click=back>"Back"</button> })}
                    <button type="submit" class="btn" disabled=move || !missing().is_empty()>
                        "Confirm booking"
                    </button>
                </div>
            </form>
        </div>
    }
}

#[component]
fn SuccessStep(wizard: RwSignal<SignupWizard>) -> impl IntoView {
    let booking = wizard.with_untracked(|w| w.booking().cloned());

    view! {
        <div class="wizard-step success">
            <h2>"You're all set!"</h2>
            <p>"We've sent the details to your email. Your consultant will reach out before the session."</p>
            {booking.map(|b| view! { <BookingCard booking=b/> })}
            <a href="/account?section=bookings" class="btn">"View my bookings"</a>
        </div>
    }
}
