use crate::error::BadgeError;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::Deserialize;

/// One entry of the simple-icons catalog
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct IconRecord {
    /// Display name, e.g. "GitHub"
    pub title: String,
    /// Brand color as six hex digits without '#'
    pub hex: String,
}

/// The catalog has been published both wrapped in `{ "icons": [...] }` and as a bare array
#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    Wrapped { icons: Vec<IconRecord> },
    Bare(Vec<IconRecord>),
}

impl From<CatalogDocument> for Vec<IconRecord> {
    fn from(doc: CatalogDocument) -> Self {
        match doc {
            CatalogDocument::Wrapped { icons } => icons,
            CatalogDocument::Bare(icons) => icons,
        }
    }
}

/// Download and parse the icon catalog
pub fn fetch_catalog(client: &Client, url: &str) -> Result<Vec<IconRecord>, BadgeError> {
    log::debug!("GET {url}");
    let resp = client.get(url).send()?;

    let status = resp.status();
    log::debug!("catalog responded with {status}");
    if status != StatusCode::OK {
        return Err(BadgeError::HttpStatus {
            url: url.to_string(),
            status,
        });
    }

    let body = resp.bytes()?;
    let icons = parse_catalog(&body)?;
    log::debug!("catalog holds {} icons", icons.len());

    Ok(icons)
}

fn parse_catalog(body: &[u8]) -> Result<Vec<IconRecord>, BadgeError> {
    let doc: CatalogDocument = serde_json::from_slice(body)?;
    Ok(doc.into())
}

/// Find an icon by title, ignoring case. The first match wins.
pub fn find_icon<'a>(icons: &'a [IconRecord], name: &str) -> Option<&'a IconRecord> {
    let name = name.to_lowercase();
    icons.iter().find(|icon| icon.title.to_lowercase() == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn icon(title: &str, hex: &str) -> IconRecord {
        IconRecord {
            title: title.to_string(),
            hex: hex.to_string(),
        }
    }

    #[test]
    fn test_find_icon_ignores_case() {
        let icons = vec![icon("Docker", "2496ED"), icon("GitHub", "181717")];

        let lower = find_icon(&icons, "github").unwrap();
        let exact = find_icon(&icons, "GitHub").unwrap();
        assert_eq!(lower, exact);
        assert_eq!(lower.hex, "181717");
    }

    #[test]
    fn test_find_icon_requires_trimmed_name() {
        let icons = vec![icon("GitHub", "181717")];
        assert!(find_icon(&icons, "gIThub  ").is_none());
        assert!(find_icon(&icons, "gIThub  ".trim()).is_some());
    }

    #[test]
    fn test_find_icon_missing() {
        let icons = vec![icon("GitHub", "181717")];
        assert!(find_icon(&icons, "GitLab").is_none());
        assert!(find_icon(&[], "GitHub").is_none());
    }

    #[test]
    fn test_find_icon_first_match_wins() {
        let icons = vec![icon("Mail", "111111"), icon("MAIL", "222222")];
        assert_eq!(find_icon(&icons, "mail").unwrap().hex, "111111");
    }

    #[test]
    fn test_parse_catalog_shapes() {
        let wrapped = br#"{"icons":[{"title":"GitHub","hex":"181717","source":"x"}]}"#;
        let bare = br#"[{"title":"GitHub","hex":"181717"}]"#;

        assert_eq!(parse_catalog(wrapped).unwrap(), vec![icon("GitHub", "181717")]);
        assert_eq!(parse_catalog(bare).unwrap(), vec![icon("GitHub", "181717")]);
    }

    #[test]
    fn test_parse_catalog_malformed() {
        assert!(matches!(
            parse_catalog(b"{\"icons\": [").unwrap_err(),
            BadgeError::Parse(_)
        ));
        assert!(matches!(
            parse_catalog(br#"{"icons":[{"name":"GitHub"}]}"#).unwrap_err(),
            BadgeError::Parse(_)
        ));
    }

    #[test]
    fn test_fetch_catalog() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/icons.json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"icons":[{"title":"GitHub","hex":"181717"},{"title":"Node.js","hex":"5FA04E"}]}"#)
            .create();

        let icons = fetch_catalog(&Client::new(), &format!("{}/icons.json", server.url())).unwrap();

        mock.assert();
        assert_eq!(icons.len(), 2);
        assert_eq!(icons[1], icon("Node.js", "5FA04E"));
    }

    #[test]
    fn test_fetch_catalog_not_found() {
        let mut server = mockito::Server::new();
        let _m = server.mock("GET", "/icons.json").with_status(404).create();

        let err = fetch_catalog(&Client::new(), &format!("{}/icons.json", server.url())).unwrap_err();
        match err {
            BadgeError::HttpStatus { status, .. } => assert_eq!(status, StatusCode::NOT_FOUND),
            other => panic!("expected HttpStatus, got {other:?}"),
        }
    }

    #[test]
    fn test_fetch_catalog_unreachable() {
        // Port 9 (discard) on localhost is not expected to accept connections.
        let err = fetch_catalog(&Client::new(), "http://127.0.0.1:9/icons.json").unwrap_err();
        assert!(matches!(err, BadgeError::Network(_)));
    }
}
