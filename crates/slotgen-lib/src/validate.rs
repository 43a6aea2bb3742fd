//! Run-level validation of a descriptor list.
//!
//! A single descriptor is never invalid on its own; problems only appear
//! when it is placed into a table next to the others. Checks run in input
//! order and stop at the first offending descriptor. The table shape is
//! checked before any descriptor.

use indexmap::IndexMap;

use crate::config::{SLOT_SIZE, TableShape};
use crate::descriptor::Descriptor;

/// A descriptor that cannot be placed into the table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("`{name}` at 0x{offset:02X} is not aligned to a 4-byte slot")]
    MisalignedOffset { name: String, offset: u32 },

    #[error("`{name}` at 0x{offset:02X} is outside the table (size 0x{size:02X})")]
    OffsetOutOfRange { name: String, offset: u32, size: u32 },

    #[error("`{second}` at 0x{offset:02X} collides with `{first}`")]
    DuplicateOffset {
        offset: u32,
        first: String,
        second: String,
    },

    #[error("`{name}` at 0x{offset:02X} collides with the back-reference slot")]
    BackReferenceCollision { name: String, offset: u32 },

    #[error("`{name}` is declared at both 0x{first_offset:02X} and 0x{second_offset:02X}")]
    DuplicateName {
        name: String,
        first_offset: u32,
        second_offset: u32,
    },

    #[error("`{name}` at 0x{offset:02X} is not a valid identifier")]
    InvalidName { name: String, offset: u32 },

    #[error("table size 0x{size:02X} is not a positive multiple of 4")]
    InvalidTableSize { size: u32 },

    #[error("back-reference offset 0x{offset:02X} is not aligned to a 4-byte slot")]
    MisalignedBackReference { offset: u32 },

    #[error("back-reference offset 0x{offset:02X} is outside the table (size 0x{size:02X})")]
    BackReferenceOutOfRange { offset: u32, size: u32 },
}

/// Check that the table geometry has room for an aligned back-reference slot.
///
/// Runs under every collision policy: without a real back-reference slot the
/// emitted class and table disagree.
pub fn validate_shape(shape: &TableShape) -> Result<(), ValidationError> {
    if shape.size == 0 || shape.size % SLOT_SIZE != 0 {
        return Err(ValidationError::InvalidTableSize { size: shape.size });
    }
    let offset = shape.back_reference_offset;
    if offset % SLOT_SIZE != 0 {
        return Err(ValidationError::MisalignedBackReference { offset });
    }
    if !shape.contains(offset) {
        return Err(ValidationError::BackReferenceOutOfRange {
            offset,
            size: shape.size,
        });
    }
    Ok(())
}

/// Check that every descriptor gets its own aligned, in-range slot.
pub fn validate(descriptors: &[Descriptor], shape: &TableShape) -> Result<(), ValidationError> {
    validate_shape(shape)?;

    let mut by_offset: IndexMap<u32, &str> = IndexMap::new();
    let mut by_name: IndexMap<&str, u32> = IndexMap::new();

    for d in descriptors {
        let (name, offset) = (d.name(), d.offset());

        if !is_identifier(name) {
            return Err(ValidationError::InvalidName {
                name: name.to_string(),
                offset,
            });
        }
        if offset % SLOT_SIZE != 0 {
            return Err(ValidationError::MisalignedOffset {
                name: name.to_string(),
                offset,
            });
        }
        if !shape.contains(offset) {
            return Err(ValidationError::OffsetOutOfRange {
                name: name.to_string(),
                offset,
                size: shape.size,
            });
        }
        if offset == shape.back_reference_offset {
            return Err(ValidationError::BackReferenceCollision {
                name: name.to_string(),
                offset,
            });
        }
        if let Some(first) = by_offset.insert(offset, name) {
            return Err(ValidationError::DuplicateOffset {
                offset,
                first: first.to_string(),
                second: name.to_string(),
            });
        }
        if let Some(first_offset) = by_name.insert(name, offset) {
            return Err(ValidationError::DuplicateName {
                name: name.to_string(),
                first_offset,
                second_offset: offset,
            });
        }
    }

    log::debug!(
        "validated {} descriptors against a 0x{:02X}-byte table",
        descriptors.len(),
        shape.size
    );
    Ok(())
}

/// C identifier: `[A-Za-z_][A-Za-z0-9_]*`.
fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
