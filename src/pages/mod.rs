//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns one route of the table. Pages are only mounted through
//! `components::route_gate`, so gated pages can assume a stored token.

pub mod cart;
pub mod home;
pub mod login;
pub mod not_found;
pub mod order_confirm;
pub mod order_detail;
pub mod order_list;
pub mod product_detail;
pub mod product_list;
pub mod register;
