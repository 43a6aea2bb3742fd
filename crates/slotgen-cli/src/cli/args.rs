//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};
use slotgen_lib::writer::DEFAULT_OUT_DIR;

/// Output directory (-o/--out-dir).
pub fn out_dir_arg() -> Arg {
    Arg::new("out_dir")
        .short('o')
        .long("out-dir")
        .value_name("DIR")
        .default_value(DEFAULT_OUT_DIR)
        .value_parser(value_parser!(PathBuf))
        .help("Directory receiving the generated files")
}

/// Keep the last descriptor on slot conflicts (--allow-collisions).
pub fn allow_collisions_arg() -> Arg {
    Arg::new("allow_collisions")
        .long("allow-collisions")
        .action(ArgAction::SetTrue)
        .help("Let later descriptors overwrite earlier ones instead of failing")
}

/// Layout output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("text")
        .value_parser(["text", "json"])
        .help("Output format")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}
