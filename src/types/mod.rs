// src/types/mod.rs

pub mod record;

pub use record::Record;
