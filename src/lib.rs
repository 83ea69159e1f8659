//! difflace: context and unified diff hunk formatting.
//!
//! Given two line-indexed file views and a precomputed edit script, renders
//! GNU-diffutils-style context or unified hunks: grouping nearby changes,
//! suppressing hunks whose content is entirely ignorable, and locating the
//! nearest preceding function header for hunk headers.
//!
//! # Architecture
//!
//! - [`line_index`] / [`change`] — the data model: read-only file views and
//!   edit scripts.
//! - [`hunk`] / [`grouper`] / [`ignore`] — classify and coalesce runs of
//!   changes into hunks.
//! - [`function_finder`] — locates a hunk's enclosing function header.
//! - [`format`] — the two output formatters, [`format::context`] and
//!   [`format::unified`].
//! - [`matcher`] / [`config`] — pluggable regex matching and formatter
//!   configuration.
//! - [`engine`] / [`loader`] / [`cli`] — the pieces that make `difflace` a
//!   runnable binary rather than just a library.

pub mod change;
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod format;
pub mod function_finder;
pub mod grouper;
pub mod hunk;
pub mod ignore;
pub mod line_index;
pub mod loader;
pub mod matcher;
pub mod time_format;
