//! Catch-all page for paths outside the route table.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section class="not-found-page">
            <h1>"页面不存在"</h1>
            <A href="/">"返回首页"</A>
        </section>
    }
}
