//! Login page with return-to-destination support.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard sends denied navigations here with the original path in the
//! `redirect` query parameter. After a successful login the page stores the
//! token and navigates back to that path.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::config::GuardConfig;
use crate::net::api::validate_credentials;
use crate::state::auth::AuthState;
use crate::state::toast::{ToastLevel, ToastState};
use crate::util::location::sanitize_redirect_target;
use crate::util::token_storage;

/// Persist a freshly issued token and mark the session authenticated.
pub fn finish_sign_in(config: &GuardConfig, auth: RwSignal<AuthState>, toasts: RwSignal<ToastState>, token: String) {
    token_storage::store_token(&config.token_storage_key, &token);
    auth.set(AuthState::with_token(token));
    toasts.update(|t| {
        t.push(ToastLevel::Success, "登录成功");
    });
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let config = expect_context::<GuardConfig>();
    let query = use_query_map();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let credentials = match validate_credentials(&username.get(), &password.get()) {
            Ok(credentials) => credentials,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        let target = sanitize_redirect_target(query.get_untracked().get(&config.redirect_param).as_deref());
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "csr")]
        {
            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&credentials).await {
                    Ok(token) => {
                        finish_sign_in(&config, auth, toasts, token);
                        navigate(
                            &target,
                            leptos_router::NavigateOptions { replace: true, ..Default::default() },
                        );
                    }
                    Err(e) => {
                        log::warn!("login: request failed: {e}");
                        info.set(format!("Login failed: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (credentials, target, &navigate, auth, toasts);
            busy.set(false);
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"登录"</h1>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="用户名"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="密码"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "登录"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <a href="/register" class="auth-link">"还没有账号？注册"</a>
            </div>
        </div>
    }
}
