// src/lib.rs

pub mod config;
pub mod core;
pub mod error;
pub mod overlay;
pub mod persistence;
pub mod tagger;
pub use crate::core::engine::ReviewEngine;
