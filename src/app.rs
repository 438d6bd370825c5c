//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{nav_bar::NavBar, route_gate::PreviousPath, route_gate::RouteGate, toast_host::ToastHost};
use crate::config::GuardConfig;
use crate::pages::not_found::NotFoundPage;
use crate::routes::{RouteName, RouteTable};
use crate::state::{auth::AuthState, toast::ToastState};

/// Root application component.
///
/// Provides all shared state contexts and declares the route table to the
/// router. Every route renders through `RouteGate`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    if let Err(e) = RouteTable::storefront().validate() {
        log::error!("app: route table invalid: {e}");
    }

    let config = GuardConfig::default();
    let auth = RwSignal::new(AuthState::load(&config.token_storage_key));
    let toasts = RwSignal::new(ToastState::default());
    let previous = RwSignal::new(PreviousPath::default());
    log::debug!("app: starting, authenticated={}", auth.get_untracked().is_authenticated());

    provide_context(config);
    provide_context(auth);
    provide_context(toasts);
    provide_context(previous);

    // `/orders/confirm` is declared before `/orders/:id` so the static
    // segment wins regardless of the router's match order.
    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Storefront"/>

        <Router>
            <NavBar/>
            <ToastHost/>
            <main class="app-main">
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=|| view! { <RouteGate route=RouteName::Home/> }/>
                    <Route path=StaticSegment("login") view=|| view! { <RouteGate route=RouteName::Login/> }/>
                    <Route
                        path=StaticSegment("register")
                        view=|| view! { <RouteGate route=RouteName::Register/> }
                    />
                    <Route
                        path=StaticSegment("products")
                        view=|| view! { <RouteGate route=RouteName::Products/> }
                    />
                    <Route
                        path=(StaticSegment("products"), ParamSegment("id"))
                        view=|| view! { <RouteGate route=RouteName::ProductDetail/> }
                    />
                    <Route path=StaticSegment("cart") view=|| view! { <RouteGate route=RouteName::Cart/> }/>
                    <Route path=StaticSegment("orders") view=|| view! { <RouteGate route=RouteName::Orders/> }/>
                    <Route
                        path=(StaticSegment("orders"), StaticSegment("confirm"))
                        view=|| view! { <RouteGate route=RouteName::OrderConfirm/> }
                    />
                    <Route
                        path=(StaticSegment("orders"), ParamSegment("id"))
                        view=|| view! { <RouteGate route=RouteName::OrderDetail/> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
