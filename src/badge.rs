use crate::error::BadgeError;
use crate::slug::{slugify, strip_hash};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::io::Write;
use std::path::Path;
use usvg::{Options, Tree};

/// Everything needed to fetch and store one badge
#[derive(Debug, Clone)]
pub struct BadgeRequest<'a> {
    /// Text shown on the badge, as typed by the user
    pub label: &'a str,
    /// Icon title; slugified into the badge service's `logo` parameter
    pub icon_name: &'a str,
    /// Badge background, with or without a leading '#'
    pub background: &'a str,
    /// Logo color, with or without a leading '#'
    pub logo_color: &'a str,
    /// Directory the badge is saved into, created if missing
    pub dest_dir: &'a Path,
}

impl BadgeRequest<'_> {
    /// Filename the badge is saved under, relative to `dest_dir`
    pub fn file_name(&self) -> String {
        format!("{}-badge.svg", slugify(self.label))
    }
}

/// Build the shields.io style URL for a badge.
///
/// Label and icon are slugified but not percent-encoded.
pub fn badge_url(base_url: &str, req: &BadgeRequest) -> String {
    format!(
        "{}/badge/-{}-{}?style=flat-square&logo={}&logoColor={}",
        base_url.trim_end_matches('/'),
        slugify(req.label),
        strip_hash(req.background),
        slugify(req.icon_name),
        strip_hash(req.logo_color)
    )
}

/// Fetch a badge and save it into the destination directory.
///
/// Returns the filename (not the full path) on success. Nothing is written
/// to disk unless the service answers 200.
pub fn download_badge<W: Write>(
    client: &Client,
    base_url: &str,
    req: &BadgeRequest,
    out: &mut W,
) -> Result<String, BadgeError> {
    let url = badge_url(base_url, req);
    writeln!(out, "Constructed URL: {url}")?;

    let resp = client.get(&url).send()?;
    let status = resp.status();
    log::debug!("badge service responded with {status}");
    if status != StatusCode::OK {
        return Err(BadgeError::HttpStatus { url, status });
    }
    let body = resp.bytes()?;

    // Create output directory if it doesn't exist
    std::fs::create_dir_all(req.dest_dir).map_err(|e| BadgeError::fs(req.dest_dir, e))?;

    let file_name = req.file_name();
    let file_path = req.dest_dir.join(&file_name);
    write_file(&file_path, &body)?;
    log::debug!("wrote {} bytes to {}", body.len(), file_path.display());

    // Inspect the SVG
    match badge_size(&body) {
        Some((width, height)) => log::debug!("badge renders at {width}x{height}"),
        None => log::warn!("{} does not look like a valid SVG", file_path.display()),
    }

    writeln!(out, "Badge downloaded successfully as {}", file_path.display())?;
    Ok(file_name)
}

fn write_file(path: &Path, data: &[u8]) -> Result<(), BadgeError> {
    let mut file = std::fs::File::create(path).map_err(|e| BadgeError::fs(path, e))?;
    file.write_all(data).map_err(|e| BadgeError::fs(path, e))?;
    Ok(())
}

/// Width and height of an SVG document, or None if it doesn't parse
fn badge_size(data: &[u8]) -> Option<(f32, f32)> {
    let tree = Tree::from_data(data, &Options::default()).ok()?;
    let size = tree.size();
    Some((size.width(), size.height()))
}
