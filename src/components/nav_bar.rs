//! Top navigation bar with auth-aware actions.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::config::GuardConfig;
use crate::routes::{RouteName, RouteTable};
use crate::state::auth::AuthState;
use crate::state::toast::{ToastLevel, ToastState};
use crate::util::token_storage;

fn href(name: RouteName) -> String {
    RouteTable::storefront().path_for(name, &[]).unwrap_or_else(|_| "/".to_owned())
}

#[component]
pub fn NavBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    view! {
        <nav class="nav-bar">
            <A href=href(RouteName::Home)>"首页"</A>
            <A href=href(RouteName::Products)>"商品"</A>
            <A href=href(RouteName::Cart)>"购物车"</A>
            <A href=href(RouteName::Orders)>"我的订单"</A>
            <span class="nav-bar__spacer"></span>
            <Show
                when=move || auth.get().is_authenticated()
                fallback=|| {
                    view! {
                        <A href=href(RouteName::Login)>"登录"</A>
                        <A href=href(RouteName::Register)>"注册"</A>
                    }
                }
            >
                <LogoutButton/>
            </Show>
        </nav>
    }
}

/// Clears the stored token and returns to the home page.
#[component]
fn LogoutButton() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let config = expect_context::<GuardConfig>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        token_storage::clear_token(&config.token_storage_key);
        auth.set(AuthState::default());
        toasts.update(|t| {
            t.push(ToastLevel::Info, "已退出登录");
        });
        navigate(&href(RouteName::Home), NavigateOptions::default());
    };

    view! {
        <button class="nav-bar__logout" on:click=on_logout>
            "退出"
        </button>
    }
}
