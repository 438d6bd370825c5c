//! Registration page. A successful sign-up logs the user straight in.

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::config::GuardConfig;
use crate::net::api::validate_credentials;
use crate::state::auth::AuthState;
use crate::state::toast::ToastState;
use crate::util::location::sanitize_redirect_target;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let config = expect_context::<GuardConfig>();
    let query = use_query_map();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if password.get() != confirm.get() {
            info.set("两次输入的密码不一致".to_owned());
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
        info.set("Creating account...".to_owned());

        #[cfg(feature = "csr")]
        {
            let config = config.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&credentials).await {
                    Ok(token) => {
                        super::login::finish_sign_in(&config, auth, toasts, token);
                        navigate(
                            &target,
                            leptos_router::NavigateOptions { replace: true, ..Default::default() },
                        );
                    }
                    Err(e) => {
                        log::warn!("register: request failed: {e}");
                        info.set(format!("Registration failed: {e}"));
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
                <h1>"注册"</h1>
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
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="确认密码"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit" disabled=move || busy.get()>
                        "注册"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <a href="/login" class="auth-link">"已有账号？登录"</a>
            </div>
        </div>
    }
}
