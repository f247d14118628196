//! # agrolens-analysis
//!
//! Analyzer implementations for AgroLens.
//!
//! Only mock analyzers exist today: they wait a fixed delay and return one
//! of a few canned records at random, without looking at the image. A real
//! inference backend plugs in by implementing
//! [`agrolens_core::traits::Analyzer`] for the same output records.

pub mod canned;
pub mod crop;
pub mod soil;


pub use canned::{sample, CannedAnalyzer, CannedPicker};
