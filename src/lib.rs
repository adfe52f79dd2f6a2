//! CAMELS toolbox - extract measurement tables from CAMELS data files.
//!
//! CAMELS files are NeXus/HDF5 containers holding one or more measurement
//! entries. Each entry keeps its data under a `data` group, optionally with
//! named sub-groups and "variable signal" groups. This crate resolves which
//! entry and dataset group to read and flattens it into uniquely named
//! columns.
//!
//! # Features
//!
//! - Automatic entry selection that skips `NeXus_` metadata entries
//! - Fallback to an operator prompt (or any [`select::Selector`]) when the
//!   choice is ambiguous
//! - Variable-signal groups hoisted into the top-level columns
//! - Optional Arrow output with the `arrow` feature
//!
//! # Example
//!
//! ```ignore
//! use camels_toolbox::{read_camels_file, PromptSelector, ReadOptions};
//! use std::path::Path;
//!
//! let options = ReadOptions::new().return_table(false);
//! let extraction = read_camels_file(Path::new("data.nxs"), &options, &mut PromptSelector::stdio())?;
//! for column in extraction.columns().unwrap() {
//!     println!("{}: {} values", column.name, column.len());
//! }
//! ```
//!
//! Column names are unique. When a hoisted variable-signal column has the
//! same name as another column, the one met later replaces the earlier one
//! without any report.

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod data;
pub mod error;
pub mod export;
pub mod extract;
pub mod format;
pub mod resolve;
pub mod select;
pub mod table;

pub use error::{Result, ToolboxError};
pub use extract::{
    extract_from, read_camels_file, resolve_selection, Extraction, ReadOptions, ResolvedSelection,
    TableData,
};
pub use select::{FixedSelector, HeadlessSelector, PromptSelector, Selector};
