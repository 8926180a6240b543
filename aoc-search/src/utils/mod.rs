//! Shared building blocks

pub mod dp_cache;
