//! Service type identifiers

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Kind of remote service an account points at.
///
/// Serialized as the lowercase tag (`"webdav"`, `"gdrive"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceType {
    /// Plain web server, reachable with GET.
    #[serde(rename = "web")]
    Web,
    /// `WebDAV` server (Nextcloud, ownCloud, Apache `mod_dav`, ...).
    #[serde(rename = "webdav")]
    WebDav,
    /// Facebook.
    #[serde(rename = "facebook")]
    Facebook,
    /// Twitter.
    #[serde(rename = "twitter")]
    Twitter,
    /// Flickr.
    #[serde(rename = "flickr")]
    Flickr,
    /// Google Photos.
    #[serde(rename = "gphotos")]
    GooglePhotos,
    /// Google Drive.
    #[serde(rename = "gdrive")]
    GoogleDrive,
    /// Microsoft `OneDrive`.
    #[serde(rename = "onedrive")]
    OneDrive,
}

impl ServiceType {
    /// Every known service type.
    pub const ALL: [Self; 8] = [
        Self::Web,
        Self::WebDav,
        Self::Facebook,
        Self::Twitter,
        Self::Flickr,
        Self::GooglePhotos,
        Self::GoogleDrive,
        Self::OneDrive,
    ];

    /// Lowercase tag, as stored on an account
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Web => "web",
            Self::WebDav => "webdav",
            Self::Facebook => "facebook",
            Self::Twitter => "twitter",
            Self::Flickr => "flickr",
            Self::GooglePhotos => "gphotos",
            Self::GoogleDrive => "gdrive",
            Self::OneDrive => "onedrive",
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by [`ServiceType::from_str`] for an unknown tag.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown service type: {0}")]
pub struct UnknownServiceType(pub String);

impl FromStr for ServiceType {
    type Err = UnknownServiceType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownServiceType(s.to_string()))
    }
}
