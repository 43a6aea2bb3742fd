pub mod generate;
pub mod layout;

use slotgen_lib::{CollisionPolicy, Config};

/// Errors surfaced to the user by command handlers.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Generate(#[from] slotgen_lib::Error),

    #[error(transparent)]
    Layout(#[from] slotgen_lib::ValidationError),

    #[error("failed to serialize layout: {0}")]
    Json(#[from] serde_json::Error),
}

/// Generator config for the built-in catalog.
pub fn catalog_config(allow_collisions: bool) -> Config {
    let policy = if allow_collisions {
        CollisionPolicy::LastWins
    } else {
        CollisionPolicy::Reject
    };
    Config::new().collisions(policy)
}

/// Print a command error and exit with status 1.
pub fn fail(err: CommandError) -> ! {
    eprintln!("error: {}", err);
    std::process::exit(1);
}
