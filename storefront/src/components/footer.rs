use leptos::prelude::*;

use crate::state::use_app_state;

#[component]
pub fn Footer() -> impl IntoView {
    let site = use_app_state().config.site;
    let mailto = format!("mailto:{}", site.support_email);

    view! {
        <footer class="site-footer">
            <div class="footer-brand">
                <strong>{site.name.clone()}</strong>
                <p>{site.tagline.clone()}</p>
            </div>
            <div class="footer-links">
                <div>
                    <h4>"Shop"</h4>
                    <a href="/products?subcategory=trending">"Trending"</a>
                    <a href="/products?subcategory=new-arrivals">"New Arrivals"</a>
                    <a href="/products?subcategory=best-sellers">"Best Sellers"</a>
                </div>
                <div>
                    <h4>"Vendors"</h4>
                    <a href="/vendor/register">"List your business"</a>
                    <a href="/vendor/benefits">"Why Bliss"</a>
                    <a href="/vendor/faq">"Vendor FAQ"</a>
                </div>
                <div>
                    <h4>"Help"</h4>
                    <a href="/contact">"Contact us"</a>
                    <a href=mailto>{site.support_email.clone()}</a>
                    <a href="/privacy">"Privacy"</a>
                    <a href="/terms">"Terms"</a>
                </div>
            </div>
            <p class="copyright">{format!("© {} {}", chrono::Utc::now().format("%Y"), site.name)}</p>
        </footer>
    }
}
