//! # Anachronism Filter
//!
//! Finds chronologically inappropriate terms in story-mode narrative text and
//! rewrites them. A filter holds its own table of custom terms and falls back
//! on the unknown-technology vocabulary of the active mindset (see the
//! `era_context` crate).
//!
//! ## Core Components
//!
//! - **terms**: Custom terms, the term table and the built-in era seed data
//! - **analysis**: Term classification, whole-word scanning and text rewriting
//! - **config**: TOML configuration for filter defaults and extra terms
//!
//! Output is plain text. Callers must escape `filtered` before inserting it
//! into markup.

pub mod analysis;
pub mod config;
pub mod terms;

pub use analysis::*;
pub use config::*;
pub use terms::*;

pub use era_context::{FixedYear, MindsetContext, MindsetSource, MindsetStore, NoMindset};
