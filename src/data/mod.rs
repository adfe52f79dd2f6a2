//! Container access.
//!
//! This module defines the [`Container`] seam the extraction engine walks,
//! together with an in-memory tree and a netCDF-4/HDF5 file backend.

mod container;
mod node;
mod reader;
mod values;

pub use container::{join_path, AttrValue, Container, NodeKind};
pub use node::DataNode;
pub use reader::NetcdfContainer;
