//! Configuration for a generation run.
//!
//! The defaults reproduce the graphics driver table of the original tool:
//! `FF7::GfxFunctions` wrapped by `GfxContextBase`.

use crate::colors::Colors;

/// Size of one table slot in bytes.
pub const SLOT_SIZE: u32 = 4;
/// Default table size in bytes.
pub const TABLE_SIZE: u32 = 0xF0;
/// Default offset of the back-reference slot.
pub const SPECIAL_OFFSET: u32 = 0x24;

/// Geometry of the function-pointer table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TableShape {
    /// Table size in bytes. Expected to be a multiple of [`SLOT_SIZE`].
    pub size: u32,
    /// Offset of the slot that points back at the wrapper instance.
    pub back_reference_offset: u32,
}

impl Default for TableShape {
    fn default() -> Self {
        Self {
            size: TABLE_SIZE,
            back_reference_offset: SPECIAL_OFFSET,
        }
    }
}

impl TableShape {
    pub fn slot_count(&self) -> usize {
        (self.size / SLOT_SIZE) as usize
    }

    pub fn contains(&self, offset: u32) -> bool {
        offset < self.size
    }
}

/// What to do when descriptors compete for a slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CollisionPolicy {
    /// Validate the descriptor list and fail on the first conflict.
    #[default]
    Reject,
    /// Later descriptors silently replace earlier ones (original behavior).
    LastWins,
}

/// Names and conventions used by the emitted C++.
#[derive(Clone, Debug)]
pub struct Config {
    /// Namespace enclosing the table struct
    pub(crate) namespace: String,
    /// Name of the table struct
    pub(crate) table_struct: String,
    /// Name of the wrapper base class
    pub(crate) class_name: String,
    /// Name of the back-reference field
    pub(crate) back_reference_field: String,
    /// Expression yielding a pointer to the live table
    pub(crate) instance_accessor: String,
    /// RAII type opening a trace scope
    pub(crate) trace_scope: String,
    /// Calling convention of table functions
    pub(crate) calling_convention: String,
    /// Type of anonymous padding slots
    pub(crate) placeholder_type: String,
    pub(crate) shape: TableShape,
    pub(crate) collisions: CollisionPolicy,
    /// Color configuration for layout dumps
    pub(crate) colors: Colors,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            namespace: "FF7".to_string(),
            table_struct: "GfxFunctions".to_string(),
            class_name: "GfxContextBase".to_string(),
            back_reference_field: "rendererInstance".to_string(),
            instance_accessor: "FF7::GetGfxFunctions()".to_string(),
            trace_scope: "ScopedD3DEvent".to_string(),
            calling_convention: "__cdecl".to_string(),
            placeholder_type: "u32".to_string(),
            shape: TableShape::default(),
            collisions: CollisionPolicy::default(),
            colors: Colors::OFF,
        }
    }
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the namespace enclosing the table struct.
    pub fn namespace(mut self, value: impl Into<String>) -> Self {
        self.namespace = value.into();
        self
    }

    /// Set the table struct name.
    pub fn table_struct(mut self, value: impl Into<String>) -> Self {
        self.table_struct = value.into();
        self
    }

    /// Set the wrapper base class name.
    pub fn class_name(mut self, value: impl Into<String>) -> Self {
        self.class_name = value.into();
        self
    }

    /// Set the name of the back-reference field.
    pub fn back_reference_field(mut self, value: impl Into<String>) -> Self {
        self.back_reference_field = value.into();
        self
    }

    /// Set the expression wrappers use to reach the live table.
    ///
    /// Wrappers resolve the active instance through the back-reference
    /// field of whatever this expression returns.
    pub fn instance_accessor(mut self, value: impl Into<String>) -> Self {
        self.instance_accessor = value.into();
        self
    }

    /// Set the trace scope type.
    pub fn trace_scope(mut self, value: impl Into<String>) -> Self {
        self.trace_scope = value.into();
        self
    }

    /// Set the calling convention of table functions.
    pub fn calling_convention(mut self, value: impl Into<String>) -> Self {
        self.calling_convention = value.into();
        self
    }

    /// Set the type of padding slots.
    pub fn placeholder_type(mut self, value: impl Into<String>) -> Self {
        self.placeholder_type = value.into();
        self
    }

    /// Set the table geometry.
    pub fn shape(mut self, value: TableShape) -> Self {
        self.shape = value;
        self
    }

    /// Set the collision policy.
    pub fn collisions(mut self, value: CollisionPolicy) -> Self {
        self.collisions = value;
        self
    }

    /// Set whether to use colored output in layout dumps.
    pub fn colored(mut self, enabled: bool) -> Self {
        self.colors = Colors::new(enabled);
        self
    }

    pub fn table_shape(&self) -> TableShape {
        self.shape
    }

    pub fn collision_policy(&self) -> CollisionPolicy {
        self.collisions
    }

    /// File name of the table struct header.
    pub fn table_header_name(&self) -> String {
        format!("{}.h", self.table_struct)
    }

    /// File name of the class declaration header.
    pub fn class_header_name(&self) -> String {
        format!("{}.h", self.class_name)
    }

    /// File name of the class implementation.
    pub fn class_source_name(&self) -> String {
        format!("{}.cpp", self.class_name)
    }

    /// Fully qualified table type: `FF7::GfxFunctions`.
    pub(crate) fn qualified_table(&self) -> String {
        if self.namespace.is_empty() {
            self.table_struct.clone()
        } else {
            format!("{}::{}", self.namespace, self.table_struct)
        }
    }
}
