//! Order detail page for `/orders/:id`. Login required.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

#[component]
pub fn OrderDetailPage() -> impl IntoView {
    let params = use_params_map();
    let order_id = move || params.get().get("id").unwrap_or_default();

    view! {
        <section class="order-detail-page">
            <h1>"订单详情"</h1>
            <p class="order-detail-page__id">{order_id}</p>
        </section>
    }
}
