//! Data model types

mod record;

pub use record::*;
