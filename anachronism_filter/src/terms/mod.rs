//! Terms module - the vocabulary a filter checks narrative text against.
//!
//! - **CustomTerm**: A term with the year it was introduced and an optional
//!   period-accurate replacement
//! - **TermTable**: Case-folded lookup of custom terms
//! - **ERA_TERMS**: Built-in seed data of well-known computing terms

mod custom_term;
mod era_seed;
mod table;

pub use custom_term::*;
pub use era_seed::*;
pub use table::*;
