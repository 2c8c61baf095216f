//! Shared execution skeleton for single-purpose code-generation tools.
//!
//! Every tool reads an input file (and, for template-driven tools, a template
//! file) from a two-tier working directory, hands the paths to a pluggable
//! content service, and writes an output file. The crate is split into:
//!
//! - **[`core`]**: Pure types and parsing (message codes, validation reports,
//!   mapping input, lifecycle state). No I/O.
//! - **[`io`]**: Side effects (configuration, path resolution, measurement
//!   logging, built-in file services).
//!
//! [`lifecycle`] drives I/O tools through `initialize` → `execute`;
//! [`tools`] holds the tools that first load their arguments from plain
//! content ([`plain_content`]).

pub mod core;
pub mod error;
pub mod exit_codes;
pub mod io;
pub mod lifecycle;
pub mod logging;
pub mod plain_content;
pub mod service;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
pub mod tools;
