//! Session-scoped state shared by several pages.

pub mod auth;
pub mod cart;
