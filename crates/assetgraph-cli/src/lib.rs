//! # Asset Graph CLI Library
//!
//! Command-line interface for serving the interactive asset graph and for
//! printing projections, vulnerability roll-ups and entity details.

pub mod commands;

pub use commands::*;
