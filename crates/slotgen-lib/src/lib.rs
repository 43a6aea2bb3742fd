//! slotgen: C++ wrapper generator for fixed-layout function-pointer tables.
//!
//! Given an ordered list of [`Descriptor`]s, a run produces three documents
//! that agree on every offset and signature:
//! - the table struct, one field per 4-byte slot
//! - a wrapper base class declaration with one virtual method per function
//! - its implementation, including the free wrapper functions that are
//!   installed into a copy of the table
//!
//! # Example
//!
//! ```
//! use slotgen_lib::{Config, Descriptor, generate};
//!
//! let functions = [
//!     Descriptor::new(0x14, "u32", "Clear", ["u32", "u32"]),
//!     Descriptor::new(0x18, "u32", "ClearAll", [] as [&str; 0]),
//! ];
//! let artifacts = generate(&functions, &Config::default()).unwrap();
//! assert!(artifacts.class_source.contains("m_impl.Clear = Clear_wrapper;"));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod catalog;
pub mod colors;
pub mod config;
pub mod descriptor;
pub mod emit;
pub mod layout;
pub mod validate;
pub mod writer;

#[cfg(test)]
mod descriptor_tests;

use std::path::PathBuf;

pub use colors::Colors;
pub use config::{CollisionPolicy, Config, SLOT_SIZE, SPECIAL_OFFSET, TABLE_SIZE, TableShape};
pub use descriptor::Descriptor;
pub use emit::{Artifacts, Emitter};
pub use layout::{Slot, Table};
pub use validate::ValidationError;

/// Errors that can occur during a generation run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for generation runs.
pub type Result<T> = std::result::Result<T, Error>;

/// Lay out `descriptors` and emit all three documents.
pub fn generate(descriptors: &[Descriptor], config: &Config) -> Result<Artifacts> {
    let table = Table::build(descriptors, config)?;
    log::debug!(
        "emitting {} for {} functions",
        config.class_name,
        descriptors.len()
    );
    Ok(Emitter::new(descriptors, &table, config).emit())
}
