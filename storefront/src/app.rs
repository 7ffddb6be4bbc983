//! Root component and route table.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::components::{Footer, Header};
use crate::pages::*;
use crate::state::use_app_state;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let site = use_app_state().config.site;
    let fallback = || view! { <NotFound/> }.into_view();

    view! {
        <Meta name="description" content=site.tagline.clone()/>
        <Title text=site.name.clone()/>

        <Router>
            <Header/>
            <main>
                <Routes fallback>
                    <Route path=path!("") view=HomePage/>
                    <Route path=path!("/products") view=ProductsPage/>
                    <Route path=path!("/cart") view=CartPage/>
                    <Route path=path!("/account") view=AccountPage/>
                    <Route path=path!("/bookings") view=BookingsPage/>
                    <Route path=path!("/auth") view=AuthPage/>
                    <Route path=path!("/contact") view=ContactPage/>
                    <Route path=path!("/blog") view=BlogPage/>
                    <Route path=path!("/vendor/:section") view=VendorPage/>
                    <Route path=path!("/privacy") view=PrivacyPage/>
                    <Route path=path!("/terms") view=TermsPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}
