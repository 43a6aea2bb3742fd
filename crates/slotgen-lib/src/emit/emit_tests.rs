//! Whole-document tests on a small four-slot table.

use indoc::indoc;

use crate::config::{Config, TableShape};
use crate::descriptor::Descriptor;
use crate::layout::Table;

use super::Emitter;

fn doc(body: &str) -> String {
    format!("\n{body}")
}

fn small_config() -> Config {
    Config::new().shape(TableShape {
        size: 0x10,
        back_reference_offset: 0x04,
    })
}

fn functions() -> Vec<Descriptor> {
    vec![
        Descriptor::new(0x08, "u32", "Clear", ["u32", "u32"]),
        Descriptor::new(0x0C, "void", "DrawTiles", ["void*", "void*"]),
    ]
}

#[test]
fn table_header() {
    let config = small_config();
    let functions = functions();
    let table = Table::build(&functions, &config).unwrap();

    let output = Emitter::new(&functions, &table, &config).emit_table_header();

    assert_eq!(
        output,
        doc(indoc! {r#"
            #pragma once

            class GfxContextBase;

            namespace FF7
            {
                struct GfxFunctions
                {
                    /* 0x00 */ u32 dword00;
                    /* 0x04 */ GfxContextBase* rendererInstance;
                    /* 0x08 */ u32 (__cdecl *Clear)(u32 a0, u32 a1);
                    /* 0x0C */ void (__cdecl *DrawTiles)(void* a0, void* a1);
                };
            }
        "#})
    );
}

#[test]
fn class_header() {
    let config = small_config();
    let functions = functions();
    let table = Table::build(&functions, &config).unwrap();

    let output = Emitter::new(&functions, &table, &config).emit_class_header();

    assert_eq!(
        output,
        doc(indoc! {r#"
            #pragma once

            class GfxContextBase
            {
            public:
                virtual ~GfxContextBase() = default;

                GfxContextBase(FF7::GfxFunctions* impl);
                FF7::GfxFunctions* GetFunctions();

                virtual u32 Clear(u32 a0, u32 a1);
                virtual void DrawTiles(void* a0, void* a1);

            private:
                FF7::GfxFunctions* const m_originalImpl;
                FF7::GfxFunctions m_impl;
            };
        "#})
    );
}

#[test]
fn class_source() {
    let config = small_config();
    let functions = functions();
    let table = Table::build(&functions, &config).unwrap();

    let output = Emitter::new(&functions, &table, &config).emit_class_source();

    assert_eq!(
        output,
        doc(indoc! {r#"

            static u32 __cdecl Clear_wrapper(u32 a0, u32 a1)
            {
                ScopedD3DEvent _(L"Clear(0x%x, 0x%x)", a0, a1);
                return FF7::GetGfxFunctions()->rendererInstance->Clear(a0, a1);
            }

            static void __cdecl DrawTiles_wrapper(void* a0, void* a1)
            {
                ScopedD3DEvent _(L"DrawTiles(%p, %p)", a0, a1);
                FF7::GetGfxFunctions()->rendererInstance->DrawTiles(a0, a1);
            }


            GfxContextBase::GfxContextBase(FF7::GfxFunctions* impl):
                m_originalImpl(impl), m_impl(*impl)
            {
                m_impl.rendererInstance = this;
                m_impl.Clear = Clear_wrapper;
                m_impl.DrawTiles = DrawTiles_wrapper;
            }

            FF7::GfxFunctions* GfxContextBase::GetFunctions()
            {
                return &m_impl;
            }


            u32 GfxContextBase::Clear(u32 a0, u32 a1)
            {
                return m_originalImpl->Clear(a0, a1);
            }

            void GfxContextBase::DrawTiles(void* a0, void* a1)
            {
                m_originalImpl->DrawTiles(a0, a1);
            }

        "#})
    );
}

#[test]
fn empty_descriptor_list() {
    let config = small_config();
    let table = Table::build(&[], &config).unwrap();

    let artifacts = Emitter::new(&[], &table, &config).emit();

    assert!(artifacts.class_header.contains("\n    \n\nprivate:"));
    assert!(
        artifacts
            .class_source
            .contains("m_impl.rendererInstance = this;\n    \n}")
    );
    assert!(!artifacts.class_source.contains("_wrapper"));
    assert_eq!(artifacts.table_header.matches("dword").count(), 3);
}

#[test]
fn custom_names_propagate() {
    let config = small_config()
        .namespace("Game")
        .table_struct("AudioVTable")
        .class_name("AudioHookBase")
        .back_reference_field("owner");
    let functions = functions();
    let table = Table::build(&functions, &config).unwrap();

    let artifacts = Emitter::new(&functions, &table, &config).emit();

    assert!(artifacts.table_header.contains("class AudioHookBase;"));
    assert!(artifacts.table_header.contains("namespace Game\n"));
    assert!(artifacts.table_header.contains("struct AudioVTable\n"));
    assert!(artifacts.table_header.contains("/* 0x04 */ AudioHookBase* owner;"));
    assert!(artifacts.class_header.contains("AudioHookBase(Game::AudioVTable* impl);"));
    assert!(artifacts.class_source.contains("m_impl.owner = this;"));
    assert!(artifacts.class_source.contains("u32 AudioHookBase::Clear(u32 a0, u32 a1)"));
}

#[test]
fn empty_namespace_is_unqualified() {
    let config = small_config().namespace("");
    let functions = functions();
    let table = Table::build(&functions, &config).unwrap();

    let header = Emitter::new(&functions, &table, &config).emit_class_header();

    assert!(header.contains("GfxContextBase(GfxFunctions* impl);"));
    assert!(!header.contains("::GfxFunctions"));
}

#[test]
fn empty_namespace_emits_global_struct() {
    let config = small_config().namespace("");
    let functions = functions();
    let table = Table::build(&functions, &config).unwrap();

    let output = Emitter::new(&functions, &table, &config).emit_table_header();

    assert_eq!(
        output,
        doc(indoc! {r#"
            #pragma once

            class GfxContextBase;

            struct GfxFunctions
            {
                /* 0x00 */ u32 dword00;
                /* 0x04 */ GfxContextBase* rendererInstance;
                /* 0x08 */ u32 (__cdecl *Clear)(u32 a0, u32 a1);
                /* 0x0C */ void (__cdecl *DrawTiles)(void* a0, void* a1);
            };
        "#})
    );
}
