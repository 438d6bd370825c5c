//! Product detail page for `/products/:id`. Public; no login needed.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn ProductDetailPage() -> impl IntoView {
    let params = use_params_map();
    let product_id = move || params.get().get("id").unwrap_or_default();

    view! {
        <section class="product-detail-page">
            <h1>"商品详情"</h1>
            <p class="product-detail-page__id">{product_id}</p>
        </section>
    }
}
