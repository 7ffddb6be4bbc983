use bliss_auth::{ProfileUpdate, UserRecord};
use bliss_commerce::booking::{
    bookings_for, consultants, Booking, BookingDraft, ConsultationType, TIME_SLOTS,
};
use bliss_commerce::ids::ConsultantId;
use chrono::{NaiveDate, Utc};
use leptos::ev::{Event, SubmitEvent};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::state::use_app_state;

/// Account sections selected with `?section=`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    Profile,
    Bookings,
    Wishlists,
}

impl Section {
    const ALL: [Section; 3] = [Section::Profile, Section::Bookings, Section::Wishlists];

    fn parse(value: &str) -> Self {
        match value {
            "bookings" => Section::Bookings,
            "wishlists" => Section::Wishlists,
            _ => Section::Profile,
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Section::Profile => "profile",
            Section::Bookings => "bookings",
            Section::Wishlists => "wishlists",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            Section::Profile => "Profile",
            Section::Bookings => "My Bookings",
            Section::Wishlists => "Wishlists",
        }
    }
}

/// `/account?section=profile|bookings|wishlists`
#[component]
pub fn AccountPage() -> impl IntoView {
    view! { <AccountArea/> }
}

/// `/bookings`: the account area pinned to bookings.
#[component]
pub fn BookingsPage() -> impl IntoView {
    view! { <AccountArea section="bookings"/> }
}

/// `section` pins a section regardless of the query string.
#[component]
fn AccountArea(#[prop(optional)] section: Option<&'static str>) -> impl IntoView {
    let state = use_app_state();
    let user = state.user;
    let query = use_query_map();
    let section = Memo::new(move |_| match section {
        Some(pinned) => Section::parse(pinned),
        None => Section::parse(&query.with(|q| q.get("section").unwrap_or_default())),
    });

    view! {
        <div class="account-layout">
            <nav class="account-nav">
                {Section::ALL
                    .into_iter()
                    .map(|s| {
                        let href = format!("/account?section={}", s.as_str());
                        view! {
                            <a href=href class:active=move || section.get() == s>{s.title()}</a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
            <section class="account-content">
                {move || match (section.get(), user.get()) {
                    (Section::Wishlists, _) => view! { <WishlistsSection/> }.into_any(),
                    (Section::Bookings, Some(u)) => view! { <BookingsSection user=u/> }.into_any(),
                    (Section::Bookings, None) => view! { <PendingBookingForm/> }.into_any(),
                    (Section::Profile, Some(u)) => view! { <ProfileSection user=u/> }.into_any(),
                    (Section::Profile, None) => view! { <SignInPrompt/> }.into_any(),
                }}
            </section>
        </div>
    }
}

#[component]
fn SignInPrompt() -> impl IntoView {
    view! {
        <div class="empty-state">
            <h2>"You're not signed in"</h2>
            <p>"Sign in to manage your profile and bookings."</p>
            <a href="/auth?mode=signin" class="btn">"Sign in"</a>
            <a href="/auth?mode=signup" class="btn-outline">"Create an account"</a>
        </div>
    }
}

#[component]
fn ProfileSection(user: UserRecord) -> impl IntoView {
    let state = use_app_state();
    let (name, set_name) = signal(user.display_name.clone());
    let (phone, set_phone) = signal(user.phone_number.clone().unwrap_or_default());
    let (photo, set_photo) = signal(user.photo_url.clone().unwrap_or_default());
    let (saving, set_saving) = signal(false);
    let (error, set_error) = signal(None::<String>);

    let save = {
        let state = state.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            if saving.get_untracked() {
                return;
            }
            let update = ProfileUpdate {
                display_name: Some(name.get_untracked()),
                photo_url: Some(photo.get_untracked()),
                phone_number: Some(phone.get_untracked()),
            };
            let state = state.clone();
            set_saving.set(true);
            set_error.set(None);
            spawn_local(async move {
                match state.auth.update_profile(update).await {
                    Ok(_) => {
                        state.sync_user();
                        state.notify("Profile saved");
                    }
                    Err(e) => set_error.set(Some(e.to_string())),
                }
                set_saving.set(false);
            });
        }
    };

    let phone_status = match (&user.phone_number, user.phone_verified) {
        (None, _) => None,
        (Some(_), true) => Some(view! { <span class="badge verified">"Verified"</span> }.into_any()),
        (Some(_), false) => Some(
            view! {
                <span class="badge">"Not verified"</span>
                <a href="/auth?mode=signin">"Verify"</a>
            }
            .into_any(),
        ),
    };

    view! {
        <h1>"Profile"</h1>
        <dl class="profile-facts">
            <dt>"Email"</dt>
            <dd>{if user.email.is_empty() { "Not set".to_string() } else { user.email.clone() }}</dd>
            <dt>"Signed in with"</dt>
            <dd>{user.provider.as_str()}</dd>
            <dt>"Member since"</dt>
            <dd>{user.created_at.format("%B %Y").to_string()}</dd>
        </dl>
        <form class="profile-form" on:submit=save>
            <label>
                "Name"
                <input
                    type="text"
                    prop:value=move || name.get()
                    on:input=move |ev| set_name.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Phone " {phone_status}
                <input
                    type="tel"
                    placeholder="+91 98765 43210"
                    prop:value=move || phone.get()
                    on:input=move |ev| set_phone.set(event_target_value(&ev))
                />
            </label>
            <label>
                "Photo URL"
                <input
                    type="url"
                    prop:value=move || photo.get()
                    on:input=move |ev| set_photo.set(event_target_value(&ev))
                />
            </label>
            {move || error.get().map(|e| view! { <p class="form-error">{e}</p> })}
            <button type="submit" class="btn" disabled=move || saving.get()>
                {move || if saving.get() { "Saving..." } else { "Save changes" }}
            </button>
        </form>
    }
}

#[component]
fn BookingsSection(user: UserRecord) -> impl IntoView {
    let state = use_app_state();
    let bookings = bookings_for(&state.cache, &user.uid).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "could not load bookings");
        Vec::new()
    });

    view! {
        <h1>"My Bookings"</h1>
        {if bookings.is_empty() {
            view! {
                <div class="empty-state">
                    <p>"No consultations booked yet."</p>
                    <a href="/auth?mode=signin" class="btn">"Book a consultation"</a>
                </div>
            }
            .into_any()
        } else {
            bookings
                .into_iter()
                .rev()
                .map(|b| view! { <BookingCard booking=b/> })
                .collect::<Vec<_>>()
                .into_any()
        }}
    }
}

#[component]
pub fn BookingCard(booking: Booking) -> impl IntoView {
    let consultant = booking.consultant_name();
    let when = booking.when();

    view! {
        <article class="booking-card">
            <header>
                <h3>{booking.consultation_type.display_name()}</h3>
                <span class="muted">{format!("#{}", booking.id)}</span>
            </header>
            <p>{when}</p>
            <p>{format!("with {consultant}")}</p>
            <p class="muted">{format!("{} minutes", booking.consultation_type.duration_minutes())}</p>
            {(!booking.special_request.is_empty()).then(|| view! {
                <blockquote>{booking.special_request.clone()}</blockquote>
            })}
        </article>
    }
}

/// Booking form for visitors without a session. The draft is stashed and
/// picked up by the wizard after sign-in.
#[component]
fn PendingBookingForm() -> impl IntoView {
    let state = use_app_state();
    let today = Utc::now().date_naive();
    let draft = RwSignal::new(BookingDraft::new());
    let navigate = use_navigate();

    let stash = move |ev: SubmitEvent| {
        ev.prevent_default();
        match draft.get_untracked().stash_pending(&state.cache) {
            Ok(()) => navigate("/auth?mode=signin", Default::default()),
            Err(e) => state.notify(format!("Could not save your booking: {e}")),
        }
    };

    view! {
        <h1>"Book a consultation"</h1>
        <p>"Pick a slot now; we'll hold it while you sign in."</p>
        <form class="booking-form" on:submit=stash>
            <BookingFields today=today draft=draft/>
            <button type="submit" class="btn">"Continue to sign in"</button>
        </form>
    }
}

/// Inputs shared by the signed-out form and the wizard's booking step.
#[component]
pub fn BookingFields(today: NaiveDate, draft: RwSignal<BookingDraft>) -> impl IntoView {
    let on_type = move |ev: Event| {
        if let Some(t) = ConsultationType::parse(&event_target_value(&ev)) {
            draft.update(|d| d.consultation_type = t);
        }
    };
    let on_date = move |ev: Event| {
        let date = NaiveDate::parse_from_str(&event_target_value(&ev), "%Y-%m-%d").ok();
        draft.update(|d| d.date = date);
    };
    let on_slot = move |ev: Event| {
        let slot = Some(event_target_value(&ev)).filter(|s| !s.is_empty());
        draft.update(|d| d.time_slot = slot);
    };
    let on_consultant = move |ev: Event| {
        let id = Some(event_target_value(&ev)).filter(|s| !s.is_empty()).map(ConsultantId::new);
        draft.update(|d| d.consultant_id = id);
    };
    let min_date = today.format("%Y-%m-%d").to_string();

    view! {
        <fieldset class="consultation-types">
            <legend>"Consultation type"</legend>
            {ConsultationType::ALL
                .into_iter()
                .map(|t| {
                    view! {
                        <label>
                            <input
                                type="radio"
                                name="consultation-type"
                                value=t.as_str()
                                prop:checked=move || draft.with(|d| d.consultation_type == t)
                                on:change=on_type
                            />
                            {format!("{} ({} min)", t.display_name(), t.duration_minutes())}
                        </label>
                    }
                })
                .collect::<Vec<_>>()}
        </fieldset>
        <label>
            "Date"
            <input
                type="date"
                min=min_date
                prop:value=move || {
                    draft.with(|d| d.date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default())
                }
                on:change=on_date
            />
        </label>
        <label>
            "Time"
            <select
                prop:value=move || draft.with(|d| d.time_slot.clone().unwrap_or_default())
                on:change=on_slot
            >
                <option value="">"Choose a time"</option>
                {TIME_SLOTS
                    .iter()
                    .map(|slot| view! { <option value=*slot>{*slot}</option> })
                    .collect::<Vec<_>>()}
            </select>
        </label>
        <label>
            "Consultant"
            <select
                prop:value=move || {
                    draft.with(|d| d.consultant_id.as_ref().map(|c| c.as_str().to_string()).unwrap_or_default())
                }
                on:change=on_consultant
            >
                <option value="">"Choose a consultant"</option>
                {consultants()
                    .into_iter()
                    .map(|c| {
                        let label = format!("{} ({})", c.name, c.specialty);
                        view! { <option value=c.id.into_inner()>{label}</option> }
                    })
                    .collect::<Vec<_>>()}
            </select>
        </label>
    }
}

#[component]
fn WishlistsSection() -> impl IntoView {
    let state = use_app_state();
    let wishlists = state.wishlists;

    let remove = move |product_id| {
        if let Some(changed) = state.update_wishlists(|w| w.remove_everywhere(product_id)) {
            state.notify(format!("Removed from {changed} wishlist(s)"));
        }
    };

    view! {
        <h1>"Wishlists"</h1>
        {move || {
            let lists = wishlists.with(|w| w.lists().to_vec());
            if lists.is_empty() {
                return view! {
                    <div class="empty-state">
                        <p>"No wishlists yet. Tap the heart on any product to start one."</p>
                        <a href="/products" class="btn">"Browse products"</a>
                    </div>
                }
                .into_any();
            }
            lists
                .into_iter()
                .map(|list| {
                    let remove = remove.clone();
                    view! {
                        <article class="wishlist">
                            <header>
                                <h2>{list.name.clone()}</h2>
                                <span class="count">{format!("{} items", list.len())}</span>
                            </header>
                            {list.description.clone().map(|d| view! { <p class="muted">{d}</p> })}
                            <ul class="wishlist-items">
                                {list
                                    .products
                                    .iter()
                                    .map(|p| {
                                        let remove = remove.clone();
                                        let id = p.id;
                                        view! {
                                            <li>
                                                <img src=p.primary_image().unwrap_or_default().to_string() alt=""/>
                                                <span>{p.name.clone()}</span>
                                                <span class="price">{p.price.clone()}</span>
                                                <button class="btn-link danger" on:click=move |_| remove(id)>
                                                    "Remove"
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        </article>
                    }
                })
                .collect::<Vec<_>>()
                .into_any()
        }}
    }
}
