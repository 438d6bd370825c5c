//! Product listing page.

use leptos::prelude::*;

#[component]
pub fn ProductListPage() -> impl IntoView {
    view! {
        <section class="product-list-page">
            <h1>"商品列表"</h1>
        </section>
    }
}
