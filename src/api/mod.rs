//! API handlers for the BookStore REST endpoints

pub mod books;
pub mod health;
pub mod openapi;
