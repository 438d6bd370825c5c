//! Order history page. Login required.

use leptos::prelude::*;

#[component]
pub fn OrderListPage() -> impl IntoView {
    view! {
        <section class="order-list-page">
            <h1>"我的订单"</h1>
        </section>
    }
}
