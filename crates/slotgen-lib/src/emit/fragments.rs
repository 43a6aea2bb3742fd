//! Per-descriptor text fragments.
//!
//! Each fragment is a fixed template expanded with the descriptor's derived
//! strings. Multi-line fragments carry their own leading newline so they can
//! be concatenated directly.

use crate::config::Config;
use crate::descriptor::Descriptor;

/// Free function installed into the working table.
///
/// ```text
/// static u32 __cdecl Clear_wrapper(u32 a0, u32 a1)
/// {
///     ScopedD3DEvent _(L"Clear(0x%x, 0x%x)", a0, a1);
///     return FF7::GetGfxFunctions()->rendererInstance->Clear(a0, a1);
/// }
/// ```
pub(crate) fn wrapper(d: &Descriptor, config: &Config) -> String {
    let call = d.call_args();
    format!(
        "\nstatic {ret} {cc} {name}_wrapper({decl})\n{{\n    {scope} _(L\"{name}({fmt})\"{sep}{call});\n    {ret_kw}{accessor}->{back_ref}->{name}({call});\n}}\n",
        ret = d.return_type(),
        cc = config.calling_convention,
        name = d.name(),
        decl = d.args_decl(),
        scope = config.trace_scope,
        fmt = d.args_fmt(),
        sep = d.trace_separator(),
        ret_kw = return_keyword(d),
        accessor = config.instance_accessor,
        back_ref = config.back_reference_field,
    )
}

/// Redirects the working table's field to the wrapper.
pub(crate) fn assignment(d: &Descriptor) -> String {
    format!("m_impl.{name} = {name}_wrapper;", name = d.name())
}

/// Virtual method in the class's public surface.
pub(crate) fn method_decl(d: &Descriptor) -> String {
    format!(
        "virtual {} {}({});",
        d.return_type(),
        d.name(),
        d.args_decl()
    )
}

/// Default method body: forwards to the original table.
pub(crate) fn method_impl(d: &Descriptor, config: &Config) -> String {
    format!(
        "\n{ret} {class}::{name}({decl})\n{{\n    {ret_kw}m_originalImpl->{name}({call});\n}}\n",
        ret = d.return_type(),
        class = config.class_name,
        name = d.name(),
        decl = d.args_decl(),
        ret_kw = return_keyword(d),
        call = d.call_args(),
    )
}

fn return_keyword(d: &Descriptor) -> &'static str {
    if d.is_void() { "" } else { "return " }
}
