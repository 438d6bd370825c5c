//! Global navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Runs before any routed page renders. The decision is a pure function of
//! the destination's metadata and the explicit [`AuthState`]; applying it
//! (toast, history replace) is left to `components::route_gate`.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::config::GuardConfig;
use crate::routes::{RouteMatch, RouteMeta};
use crate::state::auth::AuthState;
use crate::util::location::login_location;

/// Outcome of a guarded navigation attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavigationDecision {
    /// Render the destination unchanged.
    Proceed,
    /// Cancel, warn with `message`, and go to `location` instead.
    RedirectToLogin { location: String, message: String },
}

impl NavigationDecision {
    #[cfg(test)]
    pub fn is_proceed(&self) -> bool {
        matches!(self, Self::Proceed)
    }
}

/// Decide a navigation from route metadata and token presence alone.
pub fn decide(meta: RouteMeta, full_path: &str, auth: &AuthState, config: &GuardConfig) -> NavigationDecision {
    if meta.requires_auth && !auth.is_authenticated() {
        return NavigationDecision::RedirectToLogin {
            location: login_location(&config.login_path, &config.redirect_param, full_path),
            message: config.login_required_message.clone(),
        };
    }
    NavigationDecision::Proceed
}

/// Guard hook invoked once per navigation to a matched route.
///
/// `from` is the route being left, if any; it only feeds the log line.
pub fn before_each(
    to: &RouteMatch<'_>,
    from: Option<&RouteMatch<'_>>,
    auth: &AuthState,
    config: &GuardConfig,
) -> NavigationDecision {
    let decision = decide(to.route.meta, &to.full_path, auth, config);
    if let NavigationDecision::RedirectToLogin { location, .. } = &decision {
        log::info!(
            "guard: denied {} ({}) from {}, redirecting to {location}",
            to.full_path,
            to.name(),
            from.map_or("<entry>", |m| m.name().as_str()),
        );
    }
    decision
}
