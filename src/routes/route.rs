//! Route definition records.
//!
//! DESIGN
//! ======
//! A route is plain data: a URL pattern, a symbolic name, and access
//! metadata. The name doubles as the page handle; `components::route_gate`
//! maps each variant to its page component.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use super::pattern::PathPattern;

/// Symbolic identifier for every storefront route.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RouteName {
    Home,
    Login,
    Register,
    Products,
    ProductDetail,
    Cart,
    Orders,
    OrderDetail,
    OrderConfirm,
}

impl RouteName {
    /// Every route name, in table declaration order.
    #[cfg(test)]
    pub const ALL: [RouteName; 9] = [
        RouteName::Home,
        RouteName::Login,
        RouteName::Register,
        RouteName::Products,
        RouteName::ProductDetail,
        RouteName::Cart,
        RouteName::Orders,
        RouteName::OrderDetail,
        RouteName::OrderConfirm,
    ];

    /// Kebab-case name as exposed in links and logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Login => "login",
            Self::Register => "register",
            Self::Products => "products",
            Self::ProductDetail => "product-detail",
            Self::Cart => "cart",
            Self::Orders => "orders",
            Self::OrderDetail => "order-detail",
            Self::OrderConfirm => "order-confirm",
        }
    }

    /// Parse a kebab-case route name.
    #[cfg(test)]
    pub fn parse(raw: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|name| name.as_str() == raw)
    }
}

impl std::fmt::Display for RouteName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Access metadata attached to a route.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RouteMeta {
    /// Navigation requires a stored credential token.
    pub requires_auth: bool,
}

impl RouteMeta {
    pub const PUBLIC: Self = Self { requires_auth: false };
    pub const AUTH: Self = Self { requires_auth: true };
}

/// One entry of the route table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteDef {
    pub name: RouteName,
    pub pattern: PathPattern,
    pub meta: RouteMeta,
}

impl RouteDef {
    pub fn new(path: &'static str, name: RouteName, meta: RouteMeta) -> Self {
        Self { name, pattern: PathPattern::parse(path), meta }
    }

    /// The declared pattern text, e.g. `/orders/:id`.
    pub fn path(&self) -> &'static str {
        self.pattern.source()
    }

    pub fn requires_auth(&self) -> bool {
        self.meta.requires_auth
    }
}
