//! Route table modules.
//!
//! DESIGN
//! ======
//! `route` holds the declarative records, `pattern` owns path matching, and
//! `table` assembles the storefront's fixed list with lookup helpers.

pub mod pattern;
pub mod route;
pub mod table;

pub use route::{RouteDef, RouteMeta, RouteName};
pub use table::{RouteMatch, RouteTable, RouteTableError};
