//! Fixed-size slot table construction.
//!
//! Every 4-byte cell of the table starts as a padding field named after its
//! offset. The back-reference slot is then overridden unconditionally, and
//! finally each descriptor claims the slot at its offset. Overrides are keyed
//! by offset, so the last write to a slot wins.

use serde::Serialize;

use crate::colors::Colors;
use crate::config::{CollisionPolicy, Config, SLOT_SIZE, TableShape};
use crate::descriptor::Descriptor;
use crate::validate::{ValidationError, validate, validate_shape};

/// One 4-byte cell of the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Slot<'a> {
    /// Anonymous padding, named after its own offset.
    Placeholder { offset: u32 },
    /// Pointer back to the wrapper instance owning the table copy.
    BackReference { offset: u32 },
    /// Function pointer described by a descriptor.
    Function {
        offset: u32,
        descriptor: &'a Descriptor,
    },
}

impl Slot<'_> {
    /// Offset of the cell this slot occupies.
    pub fn offset(&self) -> u32 {
        match self {
            Slot::Placeholder { offset }
            | Slot::BackReference { offset }
            | Slot::Function { offset, .. } => *offset,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, Slot::Placeholder { .. })
    }

    /// Render as one struct field declaration.
    pub fn render(&self, config: &Config) -> String {
        self.render_colored(config, Colors::OFF)
    }

    fn render_colored(&self, config: &Config, c: Colors) -> String {
        match self {
            Slot::Placeholder { offset } => format!(
                "{}/* 0x{offset:02X} */ {} dword{offset:02X};{}",
                c.padding, config.placeholder_type, c.reset
            ),
            Slot::BackReference { offset } => format!(
                "{}/* 0x{offset:02X} */{} {}{}* {}{};",
                c.offset,
                c.reset,
                c.back_reference,
                config.class_name,
                config.back_reference_field,
                c.reset
            ),
            // The comment carries the descriptor's own offset, which differs
            // from the cell offset only for misaligned last-wins input.
            Slot::Function { descriptor: d, .. } => format!(
                "{}/* 0x{:02X} */{} {} ({} *{}{}{})({});",
                c.offset,
                d.offset(),
                c.reset,
                d.return_type(),
                config.calling_convention,
                c.function,
                d.name(),
                c.reset,
                d.args_decl()
            ),
        }
    }
}

/// The complete slot table of one generation run.
#[derive(Clone, Debug, Serialize)]
pub struct Table<'a> {
    #[serde(skip)]
    shape: TableShape,
    slots: Vec<Slot<'a>>,
}

impl<'a> Table<'a> {
    /// Lay out `descriptors` according to `config`'s shape and collision policy.
    pub fn build(descriptors: &'a [Descriptor], config: &Config) -> Result<Self, ValidationError> {
        let shape = config.table_shape();
        let policy = config.collision_policy();
        if policy == CollisionPolicy::Reject {
            validate(descriptors, &shape)?;
        } else {
            validate_shape(&shape)?;
        }

        let mut slots: Vec<Slot<'a>> = (0..shape.slot_count() as u32)
            .map(|i| Slot::Placeholder {
                offset: i * SLOT_SIZE,
            })
            .collect();

        // In range and aligned per `validate_shape`.
        let back_ref = (shape.back_reference_offset / SLOT_SIZE) as usize;
        slots[back_ref] = Slot::BackReference {
            offset: shape.back_reference_offset,
        };

        for d in descriptors {
            let index = (d.offset() / SLOT_SIZE) as usize;
            let Some(slot) = slots.get_mut(index) else {
                return Err(ValidationError::OffsetOutOfRange {
                    name: d.name().to_string(),
                    offset: d.offset(),
                    size: shape.size,
                });
            };

            match slot {
                Slot::Placeholder { .. } => {}
                Slot::BackReference { offset } => {
                    log::warn!(
                        "`{}` replaces the back-reference slot at 0x{:02X}",
                        d.name(),
                        offset
                    );
                }
                Slot::Function {
                    offset,
                    descriptor: prev,
                } => {
                    log::warn!(
                        "`{}` replaces `{}` at 0x{:02X}",
                        d.name(),
                        prev.name(),
                        offset
                    );
                }
            }
            if d.offset() % SLOT_SIZE != 0 {
                log::warn!(
                    "`{}` at 0x{:02X} is misaligned, placed in slot 0x{:02X}",
                    d.name(),
                    d.offset(),
                    index as u32 * SLOT_SIZE
                );
            }

            *slot = Slot::Function {
                offset: index as u32 * SLOT_SIZE,
                descriptor: d,
            };
        }

        log::debug!(
            "laid out {} slots, {} described",
            slots.len(),
            slots
                .iter()
                .filter(|s| matches!(s, Slot::Function { .. }))
                .count()
        );
        Ok(Self { shape, slots })
    }

    pub fn shape(&self) -> TableShape {
        self.shape
    }

    pub fn slots(&self) -> &[Slot<'a>] {
        &self.slots
    }

    /// Slot covering `offset`, if inside the table.
    pub fn slot_at(&self, offset: u32) -> Option<&Slot<'a>> {
        self.slots.get((offset / SLOT_SIZE) as usize)
    }

    /// One field declaration per slot, in offset order.
    pub fn render_lines(&self, config: &Config) -> Vec<String> {
        self.slots.iter().map(|slot| slot.render(config)).collect()
    }
}

/// Render the table for terminal inspection, one slot per line.
pub fn dump(table: &Table<'_>, config: &Config) -> String {
    let mut out = String::new();
    for slot in table.slots() {
        out.push_str(&slot.render_colored(config, config.colors));
        out.push('\n');
    }
    out
}
