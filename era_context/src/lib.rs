//! # Era Context
//!
//! The "mindset" crate - holds the historical era a story-mode narrative is
//! currently set in. This crate owns the data describing what a person of that
//! era knows and does not know, and it contains no text-analysis logic.
//!
//! ## Core Components
//!
//! - **mindset**: The `MindsetContext` value object, its loaders and snapshots
//! - **store**: The single-slot `MindsetStore` that narrative sessions swap eras into

pub mod mindset;
pub mod store;

pub use mindset::*;
pub use store::*;
