use std::path::PathBuf;

use slotgen_lib::{catalog, generate};

use super::{CommandError, catalog_config, fail};

pub struct GenerateArgs {
    pub out_dir: PathBuf,
    pub allow_collisions: bool,
}

pub fn run(args: GenerateArgs) {
    match execute(&args) {
        Ok(written) => {
            for path in written {
                println!("{}", path.display());
            }
        }
        Err(e) => fail(e),
    }
}

fn execute(args: &GenerateArgs) -> Result<Vec<PathBuf>, CommandError> {
    let config = catalog_config(args.allow_collisions);
    let functions = catalog::gfx_functions();
    log::debug!("generating {} functions", functions.len());

    let artifacts = generate(&functions, &config)?;
    Ok(artifacts.write_to(&args.out_dir, &config)?)
}
