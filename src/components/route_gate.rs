//! Route gate applying the navigation guard before a page renders.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every `<Route>` in `app` renders through [`RouteGate`], which makes it the
//! single global before-navigation hook. A denied navigation never mounts the
//! page: the gate renders nothing, queues the warning toast, and replaces the
//! history entry with the login redirect.
//!
//! The auth context is re-read from storage on each mount, so a login or
//! logout in another tab takes effect on the next navigation.

#[cfg(test)]
#[path = "route_gate_test.rs"]
mod route_gate_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::config::GuardConfig;
use crate::guard::{self, NavigationDecision};
use crate::pages::{
    cart::CartPage, home::HomePage, login::LoginPage, not_found::NotFoundPage, order_confirm::OrderConfirmPage,
    order_detail::OrderDetailPage, order_list::OrderListPage, product_detail::ProductDetailPage,
    product_list::ProductListPage, register::RegisterPage,
};
use crate::routes::pattern::RouteParams;
use crate::routes::{RouteMatch, RouteName, RouteTable};
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::location::full_path;

/// Full path of the last navigation the guard let through.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreviousPath(pub Option<String>);

/// Guard `route`, then render its page or redirect to login.
#[component]
pub fn RouteGate(route: RouteName) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let previous = expect_context::<RwSignal<PreviousPath>>();
    let config = expect_context::<GuardConfig>();
    let router_location = use_location();

    let requested = full_path(
        &router_location.pathname.get_untracked(),
        &router_location.search.get_untracked(),
        &router_location.hash.get_untracked(),
    );
    let table = RouteTable::storefront();
    let Some(to) = destination(table, route, &requested) else {
        log::warn!("route_gate: {route} is not in the route table");
        return view! { <NotFoundPage/> }.into_any();
    };

    let from_path = previous.get_untracked().0;
    let from = from_path.as_deref().and_then(|path| table.resolve(path));

    let current = AuthState::load(&config.token_storage_key);
    if auth.get_untracked() != current {
        auth.set(current.clone());
    }

    match guard::before_each(&to, from.as_ref(), &current, &config) {
        NavigationDecision::Proceed => {
            previous.set(PreviousPath(Some(requested)));
            page_view(route)
        }
        NavigationDecision::RedirectToLogin { location, message } => {
            toasts.update(|t| {
                t.warning(message);
            });
            let navigate = use_navigate();
            Effect::new(move || {
                navigate(&location, NavigateOptions { replace: true, ..NavigateOptions::default() });
            });
            ().into_any()
        }
    }
}

/// Resolve the requested URL, falling back to the declared route when the
/// router and the table disagree on the match.
fn destination<'a>(table: &'a RouteTable, route: RouteName, requested: &str) -> Option<RouteMatch<'a>> {
    match table.resolve(requested) {
        Some(matched) if matched.name() == route => Some(matched),
        other => {
            log::warn!(
                "route_gate: router rendered {route} for {requested} but the table resolves it to {}",
                other.map_or("nothing", |m| m.name().as_str()),
            );
            table.get(route).map(|def| RouteMatch {
                route: def,
                params: RouteParams::default(),
                full_path: requested.to_owned(),
            })
        }
    }
}

fn page_view(route: RouteName) -> AnyView {
    match route {
        RouteName::Home => view! { <HomePage/> }.into_any(),
        RouteName::Login => view! { <LoginPage/> }.into_any(),
        RouteName::Register => view! { <RegisterPage/> }.into_any(),
        RouteName::Products => view! { <ProductListPage/> }.into_any(),
        RouteName::ProductDetail => view! { <ProductDetailPage/> }.into_any(),
        RouteName::Cart => view! { <CartPage/> }.into_any(),
        RouteName::Orders => view! { <OrderListPage/> }.into_any(),
        RouteName::OrderDetail => view! { <OrderDetailPage/> }.into_any(),
        RouteName::OrderConfirm => view! { <OrderConfirmPage/> }.into_any(),
    }
}
