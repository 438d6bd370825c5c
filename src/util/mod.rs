//! Browser-facing helpers for the storefront.
//!
//! SYSTEM CONTEXT
//! ==============
//! `location` turns router locations into full paths and login redirects;
//! `token_storage` is the only code that touches `localStorage`.

pub mod location;
pub mod token_storage;
