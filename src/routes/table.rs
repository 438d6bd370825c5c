//! The storefront route table and URL resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! `app` declares the same paths to `leptos_router` for rendering; this table
//! is the queryable copy used by the navigation guard, named-link building,
//! and tests. The set is fixed at startup and never mutated.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

use std::collections::HashSet;
use std::sync::LazyLock;

use super::pattern::{RouteParams, Segment};
use super::route::{RouteDef, RouteMeta, RouteName};
use crate::util::location::split_full_path;

static STOREFRONT: LazyLock<RouteTable> = LazyLock::new(|| {
    RouteTable::new(vec![
        RouteDef::new("/", RouteName::Home, RouteMeta::PUBLIC),
        RouteDef::new("/login", RouteName::Login, RouteMeta::PUBLIC),
        RouteDef::new("/register", RouteName::Register, RouteMeta::PUBLIC),
        RouteDef::new("/products", RouteName::Products, RouteMeta::PUBLIC),
        RouteDef::new("/products/:id", RouteName::ProductDetail, RouteMeta::PUBLIC),
        RouteDef::new("/cart", RouteName::Cart, RouteMeta::AUTH),
        RouteDef::new("/orders", RouteName::Orders, RouteMeta::AUTH),
        RouteDef::new("/orders/:id", RouteName::OrderDetail, RouteMeta::AUTH),
        RouteDef::new("/orders/confirm", RouteName::OrderConfirm, RouteMeta::AUTH),
    ])
});

/// Errors from table validation and named-path building.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteTableError {
    #[error("route pattern must start with '/': {path}")]
    RelativePattern { path: &'static str },

    #[error("duplicate route name: {name}")]
    DuplicateName { name: RouteName },

    #[error("pattern {path} shadows an earlier route with the same shape")]
    DuplicatePattern { path: &'static str },

    #[error("empty parameter name in pattern: {path}")]
    EmptyParam { path: &'static str },

    #[error("parameter `{param}` repeated in pattern: {path}")]
    RepeatedParam { path: &'static str, param: &'static str },

    #[error("no route named {name}")]
    UnknownRoute { name: RouteName },

    #[error("missing parameter `{param}` for route {name}")]
    MissingParam { name: RouteName, param: &'static str },
}

/// A successful resolution of a URL against the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch<'a> {
    pub route: &'a RouteDef,
    pub params: RouteParams,
    /// The requested URL as given, including query and fragment.
    pub full_path: String,
}

impl RouteMatch<'_> {
    pub fn name(&self) -> RouteName {
        self.route.name
    }
}

/// Ordered, immutable list of route definitions.
#[derive(Clone, Debug)]
pub struct RouteTable {
    routes: Vec<RouteDef>,
}

impl RouteTable {
    pub fn new(routes: Vec<RouteDef>) -> Self {
        Self { routes }
    }

    /// The storefront's fixed route table.
    pub fn storefront() -> &'static RouteTable {
        &STOREFRONT
    }

    pub fn routes(&self) -> &[RouteDef] {
        &self.routes
    }

    pub fn get(&self, name: RouteName) -> Option<&RouteDef> {
        self.routes.iter().find(|route| route.name == name)
    }

    /// Resolve a URL (path plus optional query/fragment) to a route.
    ///
    /// The most specific matching pattern wins; equal ranks fall back to
    /// declaration order. Returns `None` when nothing matches.
    pub fn resolve(&self, url: &str) -> Option<RouteMatch<'_>> {
        let (path, _, _) = split_full_path(url);
        let mut best: Option<(Vec<u8>, &RouteDef, RouteParams)> = None;

        for route in &self.routes {
            let Some(params) = route.pattern.matches(path) else {
                continue;
            };
            let rank = route.pattern.rank();
            if best.as_ref().is_none_or(|(best_rank, _, _)| rank > *best_rank) {
                best = Some((rank, route, params));
            }
        }

        best.map(|(_, route, params)| RouteMatch { route, params, full_path: url.to_owned() })
    }

    /// Build a concrete path for a named route.
    ///
    /// # Errors
    ///
    /// Returns an error if the route is not in the table or a parameter is
    /// missing from `params`.
    pub fn path_for(&self, name: RouteName, params: &[(&str, &str)]) -> Result<String, RouteTableError> {
        let route = self.get(name).ok_or(RouteTableError::UnknownRoute { name })?;

        let mut path = String::new();
        for seg in route.pattern.segments() {
            path.push('/');
            match *seg {
                Segment::Static(text) => path.push_str(text),
                Segment::Param(param) => {
                    let value = params
                        .iter()
                        .find(|(key, _)| *key == param)
                        .map(|(_, value)| *value)
                        .filter(|value| !value.is_empty())
                        .ok_or(RouteTableError::MissingParam { name, param })?;
                    path.push_str(&urlencoding::encode(value));
                }
            }
        }

        if path.is_empty() {
            path.push('/');
        }
        Ok(path)
    }

    /// Check the table for malformed or conflicting definitions.
    ///
    /// # Errors
    ///
    /// Returns the first problem found, in declaration order.
    pub fn validate(&self) -> Result<(), RouteTableError> {
        let mut names = HashSet::new();
        let mut shapes = HashSet::new();

        for route in &self.routes {
            let path = route.path();
            if !path.starts_with('/') {
                return Err(RouteTableError::RelativePattern { path });
            }
            if !names.insert(route.name) {
                return Err(RouteTableError::DuplicateName { name: route.name });
            }

            let mut seen_params = HashSet::new();
            for param in route.pattern.param_names() {
                if param.is_empty() {
                    return Err(RouteTableError::EmptyParam { path });
                }
                if !seen_params.insert(param) {
                    return Err(RouteTableError::RepeatedParam { path, param });
                }
            }

            let shape: Vec<Option<&str>> = route
                .pattern
                .segments()
                .iter()
                .map(|seg| match *seg {
                    Segment::Static(text) => Some(text),
                    Segment::Param(_) => None,
                })
                .collect();
            if !shapes.insert(shape) {
                return Err(RouteTableError::DuplicatePattern { path });
            }
        }
        Ok(())
    }
}
