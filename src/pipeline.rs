use crate::badge::{download_badge, BadgeRequest};
use crate::catalog::{fetch_catalog, find_icon};
use crate::html::{img_tag, is_confirmed, write_html};
use crate::slug::{slugify, strip_hash};
use anyhow::Result;
use reqwest::blocking::Client;
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub const DEFAULT_CATALOG_URL: &str =
    "https://raw.githubusercontent.com/simple-icons/simple-icons/develop/_data/simple-icons.json";
pub const DEFAULT_BADGE_URL: &str = "https://img.shields.io";

/// Options for a single run, collected from the command line
#[derive(Debug, Clone)]
pub struct Settings {
    pub catalog_url: String,
    pub badge_url: String,
    pub logo_color: String,
    /// Destination directory; prompted for when not set
    pub output: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            badge_url: DEFAULT_BADGE_URL.to_string(),
            logo_color: "white".to_string(),
            output: None,
        }
    }
}

/// Turn raw arguments like `["GitHub,", "Docker"]` into trimmed service names
pub fn split_services(args: &[String]) -> Vec<String> {
    args.join(" ")
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Run the whole lookup, download and embed sequence.
///
/// Prompts are written to `out` and answered from `input`. Network and
/// filesystem failures are reported on `out` and never abort the run; only
/// failing to talk to the terminal itself is returned as an error.
pub fn run<R: BufRead, W: Write>(
    settings: &Settings,
    services: &[String],
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    let client = match Client::builder()
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
    {
        Ok(client) => client,
        Err(e) => {
            writeln!(out, "Error creating HTTP client: {e}")?;
            return Ok(());
        }
    };

    // Fetch the icon catalog
    let icons = match fetch_catalog(&client, &settings.catalog_url) {
        Ok(icons) => icons,
        Err(e) => {
            writeln!(out, "Error fetching icons: {e}")?;
            return Ok(());
        }
    };

    let dest_dir = match &settings.output {
        Some(dir) => dir.clone(),
        None => PathBuf::from(prompt(input, out, "Enter the destination directory: ")?),
    };

    // One <img> tag per badge that made it to disk
    let mut tags = Vec::new();

    for service in services {
        let Some(icon) = find_icon(&icons, service) else {
            writeln!(out, "Service '{service}' not found. Skipping...")?;
            continue;
        };

        let slug = slugify(&icon.title);
        writeln!(
            out,
            "Found icon for {} (computed slug: {}) with color #{}",
            icon.title,
            slug,
            strip_hash(&icon.hex)
        )?;
        let label = prompt(input, out, "Enter the text on the badge: ")?;

        let req = BadgeRequest {
            label: &label,
            icon_name: &icon.title,
            background: &icon.hex,
            logo_color: &settings.logo_color,
            dest_dir: &dest_dir,
        };

        match download_badge(&client, &settings.badge_url, &req, out) {
            Ok(file_name) => tags.push(img_tag(&slug, &file_name)),
            Err(e) => writeln!(out, "Error downloading badge for {service}: {e}")?,
        }
    }

    // Ask if the HTML embed file should be written
    let answer = prompt(
        input,
        out,
        "Do you want to create an HTML file to embed the badges? (yes/no): ",
    )?;
    if is_confirmed(&answer) {
        match write_html(&tags, &dest_dir) {
            Ok(path) => writeln!(out, "HTML file created successfully as {}", path.display())?,
            Err(e) => writeln!(out, "Error writing HTML file: {e}")?,
        }
    }

    Ok(())
}

/// Print a prompt and read one trimmed line.
///
/// EOF reads as an empty answer, and bytes that aren't valid UTF-8 are
/// replaced rather than rejected.
fn prompt<R: BufRead, W: Write>(input: &mut R, out: &mut W, message: &str) -> Result<String> {
    write!(out, "{message}")?;
    out.flush()?;

    let mut line = Vec::new();
    input.read_until(b'\n', &mut line)?;
    Ok(String::from_utf8_lossy(&line).trim().to_string())
}
