pub mod analysis;
pub mod classifier;
pub mod engine;
pub mod normalizer;
pub mod session;
pub mod types;
