//! DTO modules crossing the HTTP boundary.

pub mod client;
