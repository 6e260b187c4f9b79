//! Per-step rule sets.
//!
//! The pick steps (genre, subgenre) may stop at the first failure; the
//! information step collects every failing field in one pass.

pub mod genre;
pub mod information;
pub mod new_subgenre;
pub mod subgenre;
