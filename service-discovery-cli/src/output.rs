//! Rendering of accounts and the heuristic table

use std::fmt::Write;

use service_discovery_core::{Account, Heuristic};

/// `key: value` lines; the password is masked.
pub fn render_account(account: &Account) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "name: {}", account.name);
    let _ = writeln!(out, "type: {}", account.service_type);
    let _ = writeln!(out, "url: {}", account.url);
    if !account.user.is_empty() {
        let _ = writeln!(out, "user: {}", account.user);
    }
    if !account.pass.is_empty() {
        let _ = writeln!(out, "password: ***");
    }
    let _ = writeln!(out, "retry limit: {}", account.retry_limit);
    out
}

/// Pretty JSON; the password is blanked unless `include_password`.
pub fn render_json(account: &Account, include_password: bool) -> serde_json::Result<String> {
    if include_password {
        return serde_json::to_string_pretty(account);
    }
    let mut masked = account.clone();
    masked.pass.clear();
    serde_json::to_string_pretty(&masked)
}

/// One line per rule, in scan order.
pub fn render_heuristics(heuristics: &[Heuristic]) -> String {
    let mut out = String::new();
    for (i, h) in heuristics.iter().enumerate() {
        let domains = if h.domains.is_empty() {
            "*".to_string()
        } else {
            h.domains.join(",")
        };
        let paths = if h.paths.is_empty() {
            "(as given)".to_string()
        } else {
            h.paths.join(" ")
        };
        let _ = writeln!(
            out,
            "{:>2}. {:<9} {:<8} {domains}  {paths}",
            i + 1,
            h.service_type.as_str(),
            h.method.as_str()
        );
    }
    out
}
