mod cli;
mod commands;

use cli::{GenerateParams, LayoutParams, build_cli};

fn main() {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("warn"));

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("generate", m)) => {
            let params = GenerateParams::from_matches(m);
            commands::generate::run(params.into());
        }
        Some(("layout", m)) => {
            let params = LayoutParams::from_matches(m);
            commands::layout::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
