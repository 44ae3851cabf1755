//! Artworks catalog browser library
//!
//! Paged access to a remote artwork catalog with a selection that survives
//! pagination, plus a front-end independent view layer that wires the two
//! together.

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod pagination;
pub mod selection;
pub mod view;

mod client;

pub use client::*;
