//! VLC playlist generator
//!
//! Command-line front end: parses arguments, runs the generator and maps
//! the outcome to an exit code.

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use vlc_playlist_generator::cli::{parse_command, usage, CliCommand, APP_NAME};
use vlc_playlist_generator::{CliError, GeneratorConfig, PlaylistGenerator};

/// Application version
const VERSION: &str = env!("CARGO_PKG_VERSION");

#[tokio::main]
async fn main() -> ExitCode {
    // Load configuration
    let config_path = GeneratorConfig::config_path();
    let loaded = config_path
        .exists()
        .then(|| GeneratorConfig::from_file(&config_path));
    let config = match &loaded {
        Some(Ok(config)) => config.clone(),
        _ => GeneratorConfig::default(),
    };

    init_logging(&config.log_level);

    if let Some(Err(e)) = &loaded {
        tracing::warn!(
            "Failed to load config file {}: {}. Using defaults.",
            config_path.display(),
            e
        );
    }

    tracing::debug!("{} v{} starting", APP_NAME, VERSION);

    match run(&config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!();
            eprintln!("{}", usage());
            ExitCode::FAILURE
        }
    }
}

async fn run(config: &GeneratorConfig) -> Result<(), CliError> {
    let request = match parse_command(std::env::args_os().skip(1))? {
        CliCommand::Help => {
            println!("{}", usage());
            return Ok(());
        }
        CliCommand::Generate(request) => request,
    };

    let generator = PlaylistGenerator::new(config);
    let output = generator.create_playlist(&request).await?;

    println!("Playlist generated: {}", output.display());
    Ok(())
}

/// Initialize logging with tracing, on stderr so stdout stays clean
fn init_logging(default_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
