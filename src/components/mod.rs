//! Shell components shared by every route.
//!
//! SYSTEM CONTEXT
//! ==============
//! `route_gate` wraps each routed page with the login guard; `nav_bar` and
//! `toast_host` sit outside `<Routes>` and persist across navigations.

pub mod nav_bar;
pub mod route_gate;
pub mod toast_host;
