//! URL user-info helpers
//!
//! `url` keeps user-info percent-encoded; these helpers work with the
//! decoded values.

use url::Url;

/// Decoded `(username, password)` embedded in `url`; empty strings when absent.
pub fn credentials(url: &Url) -> (String, String) {
    (
        decode(url.username()),
        url.password().map(decode).unwrap_or_default(),
    )
}

/// Whether `url` carries any user-info.
pub fn has_credentials(url: &Url) -> bool {
    !url.username().is_empty() || url.password().is_some()
}

/// Replace the user-info of `url`.
///
/// An empty password is written as no password.
pub fn embed(url: &mut Url, user: &str, pass: &str) {
    // Setters only fail for URLs without a host, which cannot carry user-info anyway.
    let _ = url.set_username(user);
    let _ = url.set_password((!pass.is_empty()).then_some(pass));
}

/// Remove any user-info from `url`.
pub fn strip(url: &mut Url) {
    let _ = url.set_username("");
    let _ = url.set_password(None);
}

fn decode(raw: &str) -> String {
    urlencoding::decode(raw).map_or_else(|_| raw.to_string(), |s| s.into_owned())
}
