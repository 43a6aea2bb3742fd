//! Slot highlighting for terminal layout dumps.

/// Escape codes keyed by slot role.
///
/// The struct text written to disk never carries these; only
/// [`crate::layout::dump`] reads them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Colors {
    /// Name of a described function pointer
    pub function: &'static str,
    /// Type and name of the back-reference field
    pub back_reference: &'static str,
    /// Whole line of an anonymous padding slot
    pub padding: &'static str,
    /// `/* 0xNN */` comment of a non-padding slot
    pub offset: &'static str,
    pub reset: &'static str,
}

impl Colors {
    pub const ON: Self = Self {
        function: "\x1b[34m",
        back_reference: "\x1b[32m",
        padding: "\x1b[2m",
        offset: "\x1b[2m",
        reset: "\x1b[0m",
    };

    pub const OFF: Self = Self {
        function: "",
        back_reference: "",
        padding: "",
        offset: "",
        reset: "",
    };

    pub fn new(enabled: bool) -> Self {
        if enabled { Self::ON } else { Self::OFF }
    }
}
