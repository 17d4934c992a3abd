pub mod scoring_engine;

pub use scoring_engine::IScoringEngine;
