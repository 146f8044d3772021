use crate::error::BadgeError;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Name of the embed file written next to the badges
pub const HTML_FILE_NAME: &str = "badges.html";

/// `<img>` tag embedding a downloaded badge
pub fn img_tag(icon_slug: &str, file_name: &str) -> String {
    format!(r#"<img alt="{icon_slug}" src="{file_name}" />"#)
}

/// Whether the user answered "yes" (any case) to the HTML prompt
pub fn is_confirmed(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("yes")
}

/// Write one tag per line into `<dest_dir>/badges.html`
pub fn write_html(tags: &[String], dest_dir: &Path) -> Result<PathBuf, BadgeError> {
    let output_path = dest_dir.join(HTML_FILE_NAME);

    let mut file =
        std::fs::File::create(&output_path).map_err(|e| BadgeError::fs(&output_path, e))?;

    for tag in tags {
        writeln!(file, "{tag}").map_err(|e| BadgeError::fs(&output_path, e))?;
    }

    Ok(output_path)
}
