//! Command implementations for cbundl CLI

pub mod bundle;
pub mod completions;
pub mod helpers;
pub mod plan;
pub mod version;
