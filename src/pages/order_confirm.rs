//! Order confirmation step before checkout. Login required.
//!
//! Registered ahead of `/orders/:id` so `confirm` is never read as an id.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn OrderConfirmPage() -> impl IntoView {
    view! {
        <section class="order-confirm-page">
            <h1>"确认订单"</h1>
            <A href="/cart">"返回购物车"</A>
        </section>
    }
}
