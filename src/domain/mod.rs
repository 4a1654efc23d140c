//! Domain entities shared by the persistence and web layers.

pub mod product;
pub mod types;
