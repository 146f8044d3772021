/// Convert a display name into the identifier used in badge URLs and filenames
///
/// Lowercases, drops spaces and spells out dots, so "Node.js" becomes
/// "nodedotjs". Nothing else is escaped: characters such as `&`, `?` or `#`
/// survive as-is and will end up unencoded in the badge URL.
pub fn slugify(name: &str) -> String {
    name.to_lowercase().replace(' ', "").replace('.', "dot")
}

/// Strip a single leading '#' from a color value
pub fn strip_hash(color: &str) -> &str {
    color.strip_prefix('#').unwrap_or(color)
}
