//! MakeSrt - SRT subtitles from timestamped word transcripts
//!
//! This is the main entry point for the makesrt application, which turns
//! word-timing transcripts produced by a speech-to-text engine into SubRip
//! (SRT) subtitle files.

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use makesrt::cli::{Args, Commands, ConfigAction};
use makesrt::config::Config;
use makesrt::workflow::Workflow;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Setup logging to both console and file
    setup_logging(args.verbose)?;

    // Load configuration
    let mut config = match &args.config {
        Some(config_path) => Config::from_file(config_path)?,
        None => {
            // Try to load config.toml from current directory first
            if std::path::Path::new("config.toml").exists() {
                info!("Found config.toml in current directory, loading...");
                Config::from_file("config.toml")?
            } else {
                Config::default()
            }
        }
    };

    // Execute command
    match args.command {
        Commands::Render {
            input,
            output,
            endpoint_sec,
            length_limit,
            no_length_limit,
        } => {
            apply_overrides(&mut config, endpoint_sec, length_limit, no_length_limit);

            let workflow = Workflow::new(config);
            workflow.render_file(&input, output.as_deref()).await?;
        }
        Commands::Batch {
            input_dir,
            output_dir,
            endpoint_sec,
            length_limit,
            no_length_limit,
        } => {
            apply_overrides(&mut config, endpoint_sec, length_limit, no_length_limit);

            let workflow = Workflow::new(config);
            workflow
                .render_directory(&input_dir, output_dir.as_deref())
                .await?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Init => {
                Config::default().save_to_file("config.toml")?;
                println!("Wrote default configuration to config.toml");
            }
            ConfigAction::Show => {
                let content = toml::to_string_pretty(&config)
                    .map_err(|e| anyhow::anyhow!("Failed to serialize config: {}", e))?;
                println!("{}", content);
            }
        },
    }

    Ok(())
}

/// Apply command line threshold overrides on top of the loaded configuration
fn apply_overrides(
    config: &mut Config,
    endpoint_sec: Option<f64>,
    length_limit: Option<usize>,
    no_length_limit: bool,
) {
    if let Some(endpoint_sec) = endpoint_sec {
        config.segment.endpoint_sec = endpoint_sec;
    }
    if let Some(length_limit) = length_limit {
        config.segment.length_limit = Some(length_limit);
    }
    if no_length_limit {
        config.segment.length_limit = None;
    }
}

/// Setup logging to both console and file
fn setup_logging(verbose: bool) -> Result<()> {
    // Create log directory
    let makesrt_dir = std::env::current_dir()?.join(".makesrt");
    let log_dir = makesrt_dir.join("log");
    std::fs::create_dir_all(&log_dir)?;

    // Set up file appender with daily rotation
    let file_appender = rolling::daily(&log_dir, "makesrt.log");
    let (non_blocking_file, _guard) = non_blocking(file_appender);
    // Keep the guard alive for the duration of the program
    std::mem::forget(_guard);

    // Determine log level
    let log_level = if verbose { Level::DEBUG } else { Level::INFO };

    // Console layer writes to stderr so stdout stays clean for SRT output
    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    // Create file layer
    let file_layer = fmt::layer()
        .with_writer(non_blocking_file)
        .with_target(false)
        .with_file(true)
        .with_line_number(true)
        .with_ansi(false); // No ANSI colors in file

    // Setup layered subscriber
    let subscriber = tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(console_layer)
        .with(file_layer);

    // Initialize the subscriber
    subscriber
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}
