//! Shopping cart page. Login required.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn CartPage() -> impl IntoView {
    view! {
        <section class="cart-page">
            <h1>"购物车"</h1>
            <A href="/orders/confirm">"去结算"</A>
        </section>
    }
}
