//! # faultline-scoring
//!
//! Rule evaluator that turns classified events into bounded fragility scores.
//!
//! Two stages, kept separate:
//! 1. **Evidence evaluation** ([`evidence`]): which checklist items are
//!    triggered, contested, or not triggered for a lab on a given date,
//!    honouring the validity window.
//! 2. **Score arithmetic** ([`arithmetic`]): per-dimension sums, caps,
//!    resilience reduction, and the clamped total.
//!
//! [`ranking`] and [`trend`] work on the resulting scores. Everything here is
//! pure and synchronous.

pub mod arithmetic;
pub mod engine;
pub mod evidence;
pub mod ranking;
pub mod trend;
pub mod validation;

pub use engine::ScoringEngine;
pub use evidence::{EvidenceWindow, LabEvidence};
pub use ranking::rank_labs;
pub use trend::{apply_trends, classify_delta, compute_trend, trend_from_baseline};
