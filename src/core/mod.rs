pub mod engine;
pub mod news;
pub mod score;

pub use crate::core::engine::ChaosEngine;
