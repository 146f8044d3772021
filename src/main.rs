mod badge;
mod catalog;
mod error;
mod html;
mod pipeline;
mod slug;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use pipeline::{Settings, DEFAULT_BADGE_URL, DEFAULT_CATALOG_URL};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "simplebadge")]
#[command(about = "Download simple-icons badges from shields.io and embed them in HTML")]
#[command(after_help = "Example: simplebadge \"GitHub, Docker, Node.js\"")]
struct Cli {
    /// Comma-separated service names, e.g. "GitHub, Docker"
    services: Vec<String>,

    /// Directory to save badges into (prompted for when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Logo color passed to the badge service
    #[arg(long, default_value = "white")]
    logo_color: String,

    /// URL of the simple-icons JSON catalog
    #[arg(long, default_value = DEFAULT_CATALOG_URL)]
    catalog_url: String,

    /// Base URL of the badge service
    #[arg(long, default_value = DEFAULT_BADGE_URL)]
    badge_url: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    /// Usage is shown only when no service arguments were given at all
    fn wants_usage(&self) -> bool {
        self.services.is_empty()
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    if cli.wants_usage() {
        Cli::command().print_help()?;
        return Ok(());
    }

    let services = pipeline::split_services(&cli.services);

    let settings = Settings {
        catalog_url: cli.catalog_url,
        badge_url: cli.badge_url,
        logo_color: cli.logo_color,
        output: cli.output,
    };

    let stdin = std::io::stdin();
    pipeline::run(&settings, &services, &mut stdin.lock(), &mut std::io::stdout())
}
