//! pksite - PK Associates website header server and CLI

mod cli;
mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use pksite_core::config::{self, ConfigSource};
use pksite_core::HeaderAction;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "pksite",
    version,
    about = "Responsive website header for PK Associates",
    long_about = "Serves and renders the PK Associates site header: logo, contact details,\n\
                  desktop hover dropdowns and the mobile hamburger menu.\n\
                  \n\
                  Examples:\n\
                    pksite serve                          # Serve on 127.0.0.1:3000\n\
                    pksite serve --port 8080              # Custom port\n\
                    pksite render                         # HTML of the initial header\n\
                    pksite render -a enter:services       # Header with Services hovered\n\
                    pksite render -a menu -a accordion:knowledge --json\n\
                    pksite menu                           # List menu labels\n\
                  \n\
                  Actions (for render):\n\
                    menu                                  # Tap the hamburger button\n\
                    enter:<group> / leave:<group>         # Pointer over a desktop dropdown\n\
                    accordion:<group>                     # Tap a mobile accordion header\n\
                  \n\
                  Environment Variables:\n\
                    PKSITE_CONFIG                         # Path to config.toml\n\
                    PKSITE_NO_COLOR                       # Disable ANSI colors\n\
                    RUST_LOG                              # Log filter (overrides -v)"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Path to config.toml (default: <config dir>/pksite/config.toml)
    #[arg(long, global = true, env = "PKSITE_CONFIG")]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Disable ANSI colors (log-friendly)
    #[arg(long, global = true, env = "PKSITE_NO_COLOR")]
    no_color: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Run the web server (default)
    Serve {
        /// Address to bind (overrides server.host)
        #[arg(long)]
        host: Option<IpAddr>,
        /// Port for web server (overrides server.port)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print the header for a sequence of actions and exit
    Render {
        /// Action to apply, in order (repeatable)
        #[arg(long = "action", short = 'a')]
        actions: Vec<HeaderAction>,
        /// Output the render tree as JSON instead of HTML
        #[arg(long)]
        json: bool,
    },
    /// Print menu groups and labels
    Menu,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.no_color);

    let loaded = match config::load(cli.config.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            if let Some(hint) = e.suggestion() {
                eprintln!("hint: {}", hint);
            }
            return Err(e).context("Failed to load configuration");
        }
    };
    match &loaded.source {
        ConfigSource::File(path) => info!(path = %path.display(), "using config file"),
        ConfigSource::Defaults => info!("using built-in configuration"),
    }
    let config = loaded.config;

    match cli.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
    }) {
        Command::Serve { host, port } => {
            let host = match host {
                Some(host) => host,
                None => config
                    .server
                    .host
                    .parse()
                    .with_context(|| format!("Invalid server.host '{}'", config.server.host))?,
            };
            let addr = SocketAddr::new(host, port.unwrap_or(config.server.port));
            pksite_web::run(Arc::new(config), addr).await?;
        }
        Command::Render { actions, json } => {
            println!("{}", cli::render_output(&config, &actions, json)?);
        }
        Command::Menu => {
            println!("{}", cli::format_menu_table(cli.no_color));
        }
    }

    Ok(())
}
