//! Built-in descriptor lists.

use crate::descriptor::Descriptor;

/// The graphics driver function table (`FF7::GfxFunctions`).
///
/// Unknown entries keep their `GfxFn_<offset>` names.
pub fn gfx_functions() -> Vec<Descriptor> {
    const U32: &str = "u32";
    const PTR: &str = "void*";
    const CTX: &str = "FF7::GameContext*";

    vec![
        Descriptor::new(0x00, U32, "GfxFn_0", [U32]),
        Descriptor::new(0x04, U32, "Shutdown", [U32]),
        Descriptor::new(0x10, U32, "EndFrame", [U32]),
        Descriptor::new(0x14, U32, "Clear", [U32, U32]),
        Descriptor::new(0x18, U32, "ClearAll", [] as [&str; 0]),
        Descriptor::new(0x4C, U32, "GfxFn_4C", [U32]),
        Descriptor::new(0x50, PTR, "GfxFn_50", [PTR, PTR, PTR]),
        Descriptor::new(0x54, U32, "GfxFn_54", [U32; 5]),
        Descriptor::new(0x58, U32, "GfxFn_58", [U32; 6]),
        Descriptor::new(0x64, U32, "SetRenderState", [U32; 3]),
        Descriptor::new(0x68, U32, "GfxFn_68", [U32, U32]),
        Descriptor::new(0x6C, U32, "GfxFn_6C", [U32, U32]),
        Descriptor::new(0x70, U32, "GfxFn_70", [U32, U32]),
        Descriptor::new(0x74, U32, "GfxFn_74", [U32, U32]),
        Descriptor::new(0x78, U32, "GfxFn_78", [U32, U32]),
        Descriptor::new(0x7C, U32, "GfxFn_7C", [U32, U32]),
        Descriptor::new(0x80, U32, "GfxFn_80", [U32, U32]),
        Descriptor::new(0x84, "void", "GfxFn_84", [U32, CTX]),
        Descriptor::new(0x88, U32, "GfxFn_88", [U32, CTX]),
        Descriptor::new(0x8C, U32, "ResetState", [U32]),
        Descriptor::new(0xA8, "void", "DrawModel2_A8", [U32, U32]),
        Descriptor::new(0xAC, "void", "DrawModel2_AC", [U32, U32]),
        Descriptor::new(0xB0, "void", "DrawModel2_B0", [U32, U32]),
        Descriptor::new(0xB4, "void", "DrawTiles", [PTR, PTR]),
        Descriptor::new(0xB8, U32, "GfxFn_B8", [U32; 3]),
        Descriptor::new(0xBC, U32, "GfxFn_BC", [U32; 3]),
        Descriptor::new(0xC0, U32, "GfxFn_C0", [U32; 3]),
        Descriptor::new(0xC4, U32, "GfxFn_C4", [U32; 3]),
        Descriptor::new(0xC8, U32, "GfxFn_C8", [U32; 3]),
        Descriptor::new(0xCC, "void", "DrawModel3_CC", [U32, U32]),
        Descriptor::new(0xD0, "void", "DrawModel3_D0", [U32, U32]),
        Descriptor::new(0xD4, "void", "DrawModel3_D4", [U32, U32]),
        Descriptor::new(0xD8, "void", "DrawTiles2", [PTR, PTR]),
        Descriptor::new(0xE4, U32, "GfxFn_E4", [U32, U32]),
        Descriptor::new(0xE8, U32, "GfxFn_E8", [U32, U32]),
    ]
}
