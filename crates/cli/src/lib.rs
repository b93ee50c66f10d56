//! Terminal output helpers for the jowafrique tools
//!
//! Provides shared CLI functionality:
//! - Status lines and section headers
//! - Text or JSON output selection
//! - Spinners for backend calls

#![warn(missing_docs)]

pub mod output;
pub mod progress;
