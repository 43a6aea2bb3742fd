//! Document assembly.

use crate::config::Config;
use crate::descriptor::Descriptor;
use crate::layout::Table;

use super::{Artifacts, fragments};

/// C++ emitter for one descriptor list and its laid-out table.
pub struct Emitter<'a> {
    descriptors: &'a [Descriptor],
    table: &'a Table<'a>,
    config: &'a Config,
}

impl<'a> Emitter<'a> {
    pub fn new(descriptors: &'a [Descriptor], table: &'a Table<'a>, config: &'a Config) -> Self {
        Self {
            descriptors,
            table,
            config,
        }
    }

    /// Emit all three documents.
    pub fn emit(&self) -> Artifacts {
        Artifacts {
            table_header: self.emit_table_header(),
            class_header: self.emit_class_header(),
            class_source: self.emit_class_source(),
        }
    }

    /// Table struct: one field per slot.
    ///
    /// An empty namespace puts the struct at global scope.
    pub fn emit_table_header(&self) -> String {
        let c = self.config;
        if c.namespace.is_empty() {
            let fields = self.table.render_lines(c).join("\n    ");
            return format!(
                "\n#pragma once\n\nclass {class};\n\nstruct {table}\n{{\n    {fields}\n}};\n",
                class = c.class_name,
                table = c.table_struct,
            );
        }

        let fields = self.table.render_lines(c).join("\n        ");
        format!(
            "\n#pragma once\n\nclass {class};\n\nnamespace {ns}\n{{\n    struct {table}\n    {{\n        {fields}\n    }};\n}}\n",
            class = c.class_name,
            ns = c.namespace,
            table = c.table_struct,
        )
    }

    /// Wrapper base class declaration.
    pub fn emit_class_header(&self) -> String {
        let c = self.config;
        let methods = self.join(fragments::method_decl, "\n    ");
        format!(
            "\n#pragma once\n\nclass {class}\n{{\npublic:\n    virtual ~{class}() = default;\n\n    {class}({table}* impl);\n    {table}* GetFunctions();\n\n    {methods}\n\nprivate:\n    {table}* const m_originalImpl;\n    {table} m_impl;\n}};\n",
            class = c.class_name,
            table = c.qualified_table(),
        )
    }

    /// Wrappers, constructor, accessor and default method bodies.
    pub fn emit_class_source(&self) -> String {
        let c = self.config;
        let wrappers = self.join(|d| fragments::wrapper(d, c), "");
        let assignments = self.join(fragments::assignment, "\n    ");
        let impls = self.join(|d| fragments::method_impl(d, c), "");
        format!(
            "\n{wrappers}\n\n{class}::{class}({table}* impl):\n    m_originalImpl(impl), m_impl(*impl)\n{{\n    m_impl.{back_ref} = this;\n    {assignments}\n}}\n\n{table}* {class}::GetFunctions()\n{{\n    return &m_impl;\n}}\n\n{impls}\n",
            class = c.class_name,
            table = c.qualified_table(),
            back_ref = c.back_reference_field,
        )
    }

    fn join(&self, fragment: impl Fn(&Descriptor) -> String, sep: &str) -> String {
        self.descriptors
            .iter()
            .map(fragment)
            .collect::<Vec<_>>()
            .join(sep)
    }
}
