use serde::Serialize;

use slotgen_lib::layout::dump;
use slotgen_lib::{Table, catalog};

use super::{CommandError, catalog_config, fail};
use crate::cli::LayoutFormat;

pub struct LayoutArgs {
    pub format: LayoutFormat,
    pub allow_collisions: bool,
    pub color: bool,
}

/// JSON shape of the `layout` output.
#[derive(Serialize)]
struct LayoutReport<'a> {
    size: u32,
    back_reference_offset: u32,
    #[serde(flatten)]
    table: &'a Table<'a>,
}

pub fn run(args: LayoutArgs) {
    match render(&args) {
        Ok(output) => print!("{}", output),
        Err(e) => fail(e),
    }
}

fn render(args: &LayoutArgs) -> Result<String, CommandError> {
    let config = catalog_config(args.allow_collisions).colored(args.color);
    let functions = catalog::gfx_functions();
    let table = Table::build(&functions, &config)?;

    match args.format {
        LayoutFormat::Text => Ok(dump(&table, &config)),
        LayoutFormat::Json => {
            let shape = table.shape();
            let report = LayoutReport {
                size: shape.size,
                back_reference_offset: shape.back_reference_offset,
                table: &table,
            };
            let mut json = serde_json::to_string_pretty(&report)?;
            json.push('\n');
            Ok(json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(format: LayoutFormat) -> LayoutArgs {
        LayoutArgs {
            format,
            allow_collisions: false,
            color: false,
        }
    }

    #[test]
    fn text_lists_every_slot() {
        let output = render(&args(LayoutFormat::Text)).unwrap();

        assert_eq!(output.lines().count(), 60);
        assert!(output.starts_with("/* 0x00 */ u32 (__cdecl *GfxFn_0)(u32 a0);\n"));
        assert!(output.contains("/* 0x24 */ GfxContextBase* rendererInstance;\n"));
    }

    #[test]
    fn json_report() {
        let output = render(&args(LayoutFormat::Json)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["size"], 0xF0);
        assert_eq!(value["back_reference_offset"], 0x24);
        let slots = value["slots"].as_array().unwrap();
        assert_eq!(slots.len(), 60);
        assert_eq!(slots[9]["kind"], "back_reference");
        assert_eq!(slots[5]["descriptor"]["name"], "Clear");
    }
}
