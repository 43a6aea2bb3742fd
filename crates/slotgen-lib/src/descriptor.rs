//! Function descriptors and the text fragments derived from them.
//!
//! A descriptor is the only input of a generation run. Everything the
//! emitters print about a function (parameter list, call list, trace format)
//! is derived here so that all three output documents agree on the same
//! canonical argument names.

use serde::Serialize;

/// Format tag used in the trace string for pointer arguments.
pub const POINTER_FORMAT: &str = "%p";
/// Format tag used in the trace string for every other argument.
pub const INTEGER_FORMAT: &str = "0x%x";

/// One function slot of the table: where it lives and what it looks like.
///
/// Types are opaque strings and are copied into the output verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Descriptor {
    offset: u32,
    return_type: String,
    name: String,
    arg_types: Vec<String>,
}

impl Descriptor {
    pub fn new<R, N, I, A>(offset: u32, return_type: R, name: N, arg_types: I) -> Self
    where
        R: Into<String>,
        N: Into<String>,
        I: IntoIterator<Item = A>,
        A: Into<String>,
    {
        Self {
            offset,
            return_type: return_type.into(),
            name: name.into(),
            arg_types: arg_types.into_iter().map(Into::into).collect(),
        }
    }

    pub fn offset(&self) -> u32 {
        self.offset
    }

    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arg_types(&self) -> &[String] {
        &self.arg_types
    }

    pub fn arity(&self) -> usize {
        self.arg_types.len()
    }

    pub fn has_args(&self) -> bool {
        !self.arg_types.is_empty()
    }

    /// Whether calls to this function are emitted as statements.
    pub fn is_void(&self) -> bool {
        self.return_type.trim() == "void"
    }

    /// Canonical parameter names `a0..a(n-1)`.
    pub fn arg_names(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.arg_types.len()).map(|i| format!("a{i}"))
    }

    /// Parameter list for declarations: `u32 a0, void* a1`.
    pub fn args_decl(&self) -> String {
        self.arg_types
            .iter()
            .zip(self.arg_names())
            .map(|(ty, name)| format!("{ty} {name}"))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Argument list for forwarding calls: `a0, a1`.
    pub fn call_args(&self) -> String {
        self.arg_names().collect::<Vec<_>>().join(", ")
    }

    /// Per-argument trace format tags.
    pub fn format_tags(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.arg_types.iter().map(|ty| format_tag(ty))
    }

    /// Trace format string: `0x%x, %p`.
    pub fn args_fmt(&self) -> String {
        self.format_tags().collect::<Vec<_>>().join(", ")
    }

    /// Separator between the trace format literal and its arguments.
    pub(crate) fn trace_separator(&self) -> &'static str {
        if self.has_args() { ", " } else { "" }
    }
}

/// Whether an opaque type string names a pointer.
pub fn is_pointer(ty: &str) -> bool {
    ty.trim_end().ends_with('*')
}

/// Trace format tag for one argument type.
pub fn format_tag(ty: &str) -> &'static str {
    if is_pointer(ty) {
        POINTER_FORMAT
    } else {
        INTEGER_FORMAT
    }
}
