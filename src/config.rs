//! Navigation guard configuration.
//!
//! Defaults reproduce the storefront's fixed contract: token under `token`,
//! login at `/login`, return path in the `redirect` query parameter.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_TOKEN_STORAGE_KEY: &str = "token";
pub const DEFAULT_LOGIN_PATH: &str = "/login";
pub const DEFAULT_REDIRECT_PARAM: &str = "redirect";
pub const DEFAULT_LOGIN_REQUIRED_MESSAGE: &str = "请先登录";

/// Settings consumed by the guard and the pages that read or write the token.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuardConfig {
    /// `localStorage` key holding the credential token.
    pub token_storage_key: String,
    /// Path of the login page that denied navigations are sent to.
    pub login_path: String,
    /// Query parameter carrying the originally requested path.
    pub redirect_param: String,
    /// Warning shown when a navigation is denied.
    pub login_required_message: String,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            token_storage_key: DEFAULT_TOKEN_STORAGE_KEY.to_owned(),
            login_path: DEFAULT_LOGIN_PATH.to_owned(),
            redirect_param: DEFAULT_REDIRECT_PARAM.to_owned(),
            login_required_message: DEFAULT_LOGIN_REQUIRED_MESSAGE.to_owned(),
        }
    }
}
