//! Shareable links and view-mode selection.
//!
//! A shareable link carries the snapshot id plus two flags as query
//! parameters: `preview` forces read-only rendering, and `admin` is
//! compared against a configured secret to grant edit capability.
//!
//! The admin token is access control by obscurity, not authentication:
//! anyone holding the link with the token can edit. It is acceptable for
//! this app's low-stakes use case and is deliberately not hardened.

use url::Url;

use crate::error::{Error, Result};

/// How the loaded card should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Full editing capability.
    Editor,
    /// Read-only rendering.
    ReadOnly,
}

impl std::fmt::Display for ViewMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Editor => write!(f, "editor"),
            Self::ReadOnly => write!(f, "read-only"),
        }
    }
}

/// Parameters extracted from a shareable link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchParams {
    /// Snapshot id to load, if any.
    pub card_id: Option<String>,
    /// Whether `preview=true` was present.
    pub preview: bool,
    /// Whether the `admin` parameter matched the configured secret.
    pub admin: bool,
}

impl LaunchParams {
    /// Parse a shareable link.
    ///
    /// Reads the `id`, `preview`, and `admin` query parameters. Admin is
    /// granted only when a secret is configured and the parameter matches
    /// it exactly. Unknown parameters are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ShareLink`] if the URL cannot be parsed.
    pub fn parse(link: &str, admin_secret: Option<&str>) -> Result<Self> {
        let url = Url::parse(link).map_err(|e| Error::share_link(e.to_string()))?;

        let mut card_id = None;
        let mut preview = false;
        let mut admin = false;

        for (name, value) in url.query_pairs() {
            match name.as_ref() {
                "id" => card_id = Some(value.into_owned()),
                "preview" => preview = value == "true",
                "admin" => {
                    admin = admin_secret.is_some_and(|secret| value == secret);
                }
                _ => {}
            }
        }

        Ok(Self {
            card_id,
            preview,
            admin,
        })
    }

    /// Select the effective view mode.
    ///
    /// `preview=true` forces read-only rendering regardless of admin
    /// status; otherwise editing requires the admin token.
    #[must_use]
    pub fn view_mode(&self) -> ViewMode {
        if self.preview {
            ViewMode::ReadOnly
        } else if self.admin {
            ViewMode::Editor
        } else {
            ViewMode::ReadOnly
        }
    }
}

/// Build a shareable link for a snapshot id.
///
/// # Errors
///
/// Returns [`Error::ShareLink`] if the base URL cannot be parsed.
pub fn build_share_link(base_url: &str, id: &str) -> Result<String> {
    let mut url = Url::parse(base_url).map_err(|e| Error::share_link(e.to_string()))?;
    url.query_pairs_mut()
        .clear()
        .append_pair("id", id)
        .append_pair("preview", "true");
    Ok(url.to_string())
}

/// Choose the QR payload: the shareable link if present, else the fallback.
#[must_use]
pub fn qr_payload<'a>(share_link: Option<&'a str>, fallback: &'a str) -> &'a str {
    share_link.unwrap_or(fallback)
}
