//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use super::{ColorChoice, LayoutFormat};
use crate::commands::generate::GenerateArgs;
use crate::commands::layout::LayoutArgs;

pub struct GenerateParams {
    pub out_dir: PathBuf,
    pub allow_collisions: bool,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            out_dir: m
                .get_one::<PathBuf>("out_dir")
                .cloned()
                .unwrap_or_else(|| PathBuf::from(slotgen_lib::writer::DEFAULT_OUT_DIR)),
            allow_collisions: m.get_flag("allow_collisions"),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            out_dir: p.out_dir,
            allow_collisions: p.allow_collisions,
        }
    }
}

pub struct LayoutParams {
    pub format: LayoutFormat,
    pub allow_collisions: bool,
    pub color: ColorChoice,
}

impl LayoutParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            format: parse_format(m),
            allow_collisions: m.get_flag("allow_collisions"),
            color: parse_color(m),
        }
    }
}

impl From<LayoutParams> for LayoutArgs {
    fn from(p: LayoutParams) -> Self {
        Self {
            format: p.format,
            allow_collisions: p.allow_collisions,
            // JSON is never colored
            color: p.format == LayoutFormat::Text && p.color.should_colorize(),
        }
    }
}

fn parse_format(m: &ArgMatches) -> LayoutFormat {
    match m.get_one::<String>("format").map(|s| s.as_str()) {
        Some("json") => LayoutFormat::Json,
        _ => LayoutFormat::Text,
    }
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
