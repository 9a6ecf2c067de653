//! docpress-export
//!
//! Markdown collections to styled PDF via external tools, plus the
//! built-in tutorial rendered in-process.

pub mod assemble;
pub mod deps;
pub mod error;
pub mod naming;
pub mod pdf;
pub mod process;
pub mod styles;
pub mod tutorial;
