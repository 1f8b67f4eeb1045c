//! # Countdown GIF CLI
//!
//! Command-line interface for the countdown GIF service.
//!
//! ## Usage
//!
//! ```bash
//! # Serve on port 3000 with bearer auth
//! RENDER_API_KEY=secret countdown-gif serve
//!
//! # Serve with extra fonts (Roboto-Regular.ttf, Roboto-Bold.ttf, ...)
//! countdown-gif serve --port 8080 --fonts-dir ./fonts
//!
//! # Render a GIF locally
//! countdown-gif render --diff-ms 93784000 --config countdown.json --output countdown.gif
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use countdown_gif::{
    config::CountdownConfig,
    fonts,
    sequence,
    server::{self, ServerConfig},
    CountdownError,
};

/// Countdown GIF - animated countdown timer renderer
#[derive(Parser, Debug)]
#[command(name = "countdown-gif")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP service
    Serve {
        /// Full listen address (overrides --port)
        #[arg(long, env = "LISTEN_ADDR")]
        listen: Option<String>,

        /// Port to listen on, all interfaces
        #[arg(long, env = "PORT", default_value = "3000")]
        port: u16,

        /// Bearer token for /generate-gif (unset or empty disables auth)
        #[arg(long, env = "RENDER_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        /// Directory of extra .ttf/.otf fonts to register
        #[arg(long, env = "FONTS_DIR", value_name = "DIR")]
        fonts_dir: Option<PathBuf>,
    },

    /// Render a countdown GIF to a file
    Render {
        /// Milliseconds until the countdown target
        #[arg(long, allow_hyphen_values = true)]
        diff_ms: i64,

        /// JSON file with the countdown config (defaults if omitted)
        #[arg(long, value_name = "FILE")]
        config: Option<PathBuf>,

        /// Output GIF path
        #[arg(long, short, value_name = "FILE")]
        output: PathBuf,

        /// Directory of extra .ttf/.otf fonts to register
        #[arg(long, env = "FONTS_DIR", value_name = "DIR")]
        fonts_dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let filter = if cli.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run(cli).await {
        error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), CountdownError> {
    match cli.command {
        Commands::Serve {
            listen,
            port,
            api_key,
            fonts_dir,
        } => {
            fonts::init(fonts_dir.as_deref())?;

            let config = ServerConfig {
                listen_addr: listen.unwrap_or_else(|| format!("0.0.0.0:{}", port)),
                api_key,
            };
            server::serve(config).await
        }

        Commands::Render {
            diff_ms,
            config,
            output,
            fonts_dir,
        } => {
            fonts::init(fonts_dir.as_deref())?;

            let config = match config {
                Some(path) => serde_json::from_str(&std::fs::read_to_string(&path)?)?,
                None => CountdownConfig::default(),
            };

            let gif = sequence::render_gif(&config, diff_ms)?;
            std::fs::write(&output, &gif)?;
            info!(path = %output.display(), bytes = gif.len(), "saved countdown gif");
            Ok(())
        }
    }
}
