use clap::Parser;
use securenest::cli::{self, output, Cli};
use securenest::config::Settings;
use securenest::errors::SecureNestError;

fn main() {
    let _cli = Cli::parse();
    init_tracing();

    let result = Settings::from_current_dir().and_then(|settings| cli::run(&settings));

    if let Err(e) = result {
        output::error(&e.to_string());
        match e {
            SecureNestError::VaultLocked(_) => {
                output::tip("Close the other SecureNest session and try again.");
            }
            SecureNestError::MissingSalt(_) | SecureNestError::InvalidSalt { .. } => {
                output::tip("The salt file is required to open this vault; restore it from backup.");
            }
            _ => {}
        }
        std::process::exit(1);
    }
}

/// Diagnostics go to stderr; `RUST_LOG` can raise the default level.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("securenest=warn,warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
