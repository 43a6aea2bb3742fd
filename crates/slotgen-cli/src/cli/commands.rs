//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("slotgen")
        .about("Generate C++ wrappers for the graphics driver function table")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(generate_command())
        .subcommand(layout_command())
}

/// Write the table header and wrapper class sources.
pub fn generate_command() -> Command {
    Command::new("generate")
        .about("Write the table header and wrapper class sources")
        .after_help(
            r#"EXAMPLES:
  slotgen generate                    # writes into ./Generated
  slotgen generate -o src/Generated   # custom directory
  RUST_LOG=info slotgen generate      # list written files"#,
        )
        .arg(out_dir_arg())
        .arg(allow_collisions_arg())
}

/// Print the slot table.
pub fn layout_command() -> Command {
    Command::new("layout")
        .about("Print the slot table")
        .after_help(
            r#"EXAMPLES:
  slotgen layout                      # struct fields, one per slot
  slotgen layout --format json        # machine-readable slots"#,
        )
        .arg(format_arg())
        .arg(allow_collisions_arg())
        .arg(color_arg())
}
