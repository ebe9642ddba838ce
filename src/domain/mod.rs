//! Domain records exchanged with the bookstore backend.

pub mod book;
pub mod cart;
pub mod category;
pub mod filter;
pub mod types;
