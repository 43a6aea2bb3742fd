//! C++ source emission.
//!
//! Expands fixed templates per descriptor and concatenates them into three
//! documents:
//! - the table struct header (one field per slot)
//! - the wrapper base class header
//! - the wrapper base class source (wrappers, constructor, default bodies)

mod emitter;
mod fragments;

#[cfg(test)]
mod emit_tests;

pub use emitter::Emitter;

/// The three generated documents of one run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Artifacts {
    /// Table struct layout (`GfxFunctions.h`)
    pub table_header: String,
    /// Wrapper class declaration (`GfxContextBase.h`)
    pub class_header: String,
    /// Wrapper class implementation (`GfxContextBase.cpp`)
    pub class_source: String,
}
