//! Storefront landing page.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home-page">
            <h1>"欢迎光临"</h1>
            <A href="/products">"浏览商品"</A>
        </section>
    }
}
