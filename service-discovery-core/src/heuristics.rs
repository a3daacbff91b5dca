//! Service detection heuristics
//!
//! A heuristic names one service type together with where it may live
//! (domains) and where to look for it (candidate paths). The table is
//! scanned in declaration order, so named providers and `WebDAV` must come
//! before the generic web fallback.

use url::Url;

use crate::probe::probe_url;
use crate::traits::HttpTransport;
use crate::types::{ProbeMethod, ServiceType};
use crate::utils::log_sanitizer::{redact_url, truncate_for_log};

/// Placeholder in candidate paths, replaced by the resolved username.
pub const USER_PLACEHOLDER: &str = "{user}";

/// Detection rule for one service type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Heuristic {
    /// Service type reported on a match
    pub service_type: ServiceType,
    /// Accepted hosts, lowercase; empty matches every host
    pub domains: &'static [&'static str],
    /// Candidate paths, may contain [`USER_PLACEHOLDER`]; empty means the input path only
    pub paths: &'static [&'static str],
    /// Probe method
    pub method: ProbeMethod,
}

/// Built-in rules, highest priority first.
pub static DEFAULT_HEURISTICS: &[Heuristic] = &[
    Heuristic {
        service_type: ServiceType::Facebook,
        domains: &["facebook.com", "www.facebook.com"],
        paths: &[],
        method: ProbeMethod::Get,
    },
    Heuristic {
        service_type: ServiceType::Twitter,
        domains: &["twitter.com"],
        paths: &[],
        method: ProbeMethod::Get,
    },
    Heuristic {
        service_type: ServiceType::Flickr,
        domains: &["flickr.com", "www.flickr.com"],
        paths: &[],
        method: ProbeMethod::Get,
    },
    Heuristic {
        service_type: ServiceType::OneDrive,
        domains: &["onedrive.live.com"],
        paths: &[],
        method: ProbeMethod::Get,
    },
    Heuristic {
        service_type: ServiceType::GoogleDrive,
        domains: &["drive.google.com"],
        paths: &[],
        method: ProbeMethod::Get,
    },
    Heuristic {
        service_type: ServiceType::GooglePhotos,
        domains: &["photos.google.com"],
        paths: &[],
        method: ProbeMethod::Get,
    },
    Heuristic {
        service_type: ServiceType::WebDav,
        domains: &[],
        paths: &[
            "/",
            "/webdav",
            "/remote.php/dav/files/{user}",
            "/remote.php/webdav",
            "/dav/files/{user}",
            "/servlet/webdav.infostore/",
        ],
        method: ProbeMethod::Propfind,
    },
    Heuristic {
        service_type: ServiceType::Web,
        domains: &[],
        paths: &[],
        method: ProbeMethod::Get,
    },
];

impl Heuristic {
    /// Whether this rule applies to `host`.
    ///
    /// Exact comparison only: callers lowercase the host beforehand.
    pub fn matches_domain(&self, host: &str) -> bool {
        self.domains.is_empty() || self.domains.iter().any(|d| *d == host)
    }

    /// Candidate path with the username substituted in.
    pub fn expand_path(path: &str, user: &str) -> String {
        path.replace(USER_PLACEHOLDER, user)
    }

    /// Try to confirm this service at `raw_url`.
    ///
    /// The URL is probed as given first; only if that fails are the
    /// candidate paths tried, in order. Returns the first URL that answered,
    /// or `None` when the URL does not parse or nothing answered.
    pub async fn discover(
        &self,
        transport: &dyn HttpTransport,
        raw_url: &str,
        user: &str,
    ) -> Option<Url> {
        let mut url = match Url::parse(raw_url) {
            Ok(url) => url,
            Err(e) => {
                log::debug!(
                    "[{}] Cannot parse {}: {e}",
                    self.service_type,
                    truncate_for_log(raw_url)
                );
                return None;
            }
        };

        if probe_url(transport, self.method, &url).await.is_reachable() {
            return Some(url);
        }

        for path in self.paths {
            url.set_path(&Self::expand_path(path, user));
            if probe_url(transport, self.method, &url).await.is_reachable() {
                return Some(url);
            }
        }

        log::debug!(
            "[{}] No candidate answered at {}",
            self.service_type,
            redact_url(&url)
        );
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::MockTransport;

    const WEBDAV: Heuristic = Heuristic {
        service_type: ServiceType::WebDav,
        domains: &[],
        paths: &["/webdav", "/remote.php/dav/files/{user}", "/dav/files/{user}"],
        method: ProbeMethod::Propfind,
    };

    // ==================== matches_domain ====================

    #[test]
    fn listed_domains_match_exactly() {
        for h in DEFAULT_HEURISTICS.iter().filter(|h| !h.domains.is_empty()) {
            for domain in h.domains {
                assert!(h.matches_domain(domain), "{} should match {domain}", h.service_type);
                assert!(!h.matches_domain(&format!("sub.{domain}")));
                assert!(!h.matches_domain(&domain.to_uppercase()));
            }
            assert!(!h.matches_domain("example.com"));
            assert!(!h.matches_domain(""));
        }
    }

    #[test]
    fn empty_domain_list_matches_everything() {
        assert!(WEBDAV.matches_domain("cloud.example.com"));
        assert!(WEBDAV.matches_domain("drive.google.com"));
        assert!(WEBDAV.matches_domain(""));
    }

    // ==================== table ====================

    #[test]
    fn default_table_order() {
        let order: Vec<ServiceType> = DEFAULT_HEURISTICS.iter().map(|h| h.service_type).collect();
        assert_eq!(
            order,
            vec![
                ServiceType::Facebook,
                ServiceType::Twitter,
                ServiceType::Flickr,
                ServiceType::OneDrive,
                ServiceType::GoogleDrive,
                ServiceType::GooglePhotos,
                ServiceType::WebDav,
                ServiceType::Web,
            ]
        );
    }

    #[test]
    fn generic_fallback_is_last_and_unscoped() {
        let last = DEFAULT_HEURISTICS.last().unwrap();
        assert_eq!(last.service_type, ServiceType::Web);
        assert!(last.domains.is_empty());
        assert!(last.paths.is_empty());
        assert_eq!(last.method, ProbeMethod::Get);
    }

    #[test]
    fn declared_domains_are_lowercase() {
        for h in DEFAULT_HEURISTICS {
            for domain in h.domains {
                assert_eq!(*domain, domain.to_lowercase());
            }
        }
    }

    // ==================== discover ====================

    #[test]
    fn expand_path_substitutes_every_placeholder() {
        assert_eq!(
            Heuristic::expand_path("/remote.php/dav/files/{user}", "alice"),
            "/remote.php/dav/files/alice"
        );
        assert_eq!(Heuristic::expand_path("/{user}/{user}", "a"), "/a/a");
        assert_eq!(Heuristic::expand_path("/webdav", "alice"), "/webdav");
    }

    #[tokio::test]
    async fn as_is_success_skips_candidate_paths() {
        let transport = MockTransport::with_default_status(207);
        let found = WEBDAV
            .discover(&transport, "https://dav.example.com/files", "alice")
            .await
            .unwrap();

        assert_eq!(found.as_str(), "https://dav.example.com/files");
        assert_eq!(
            transport.requests().await,
            vec![(
                "PROPFIND".to_string(),
                "https://dav.example.com/files".to_string()
            )]
        );
    }

    #[tokio::test]
    async fn probed_path_has_user_substituted() {
        let transport = MockTransport::with_default_status(404);
        transport
            .respond("PROPFIND", "https://dav.example.com/remote.php/dav/files/alice", 207)
            .await;

        let found = WEBDAV
            .discover(&transport, "https://dav.example.com", "alice")
            .await
            .unwrap();

        assert_eq!(
            found.as_str(),
            "https://dav.example.com/remote.php/dav/files/alice"
        );
        let probed: Vec<String> = transport
            .requests()
            .await
            .into_iter()
            .map(|(_, url)| url)
            .collect();
        assert_eq!(
            probed,
            vec![
                "https://dav.example.com/",
                "https://dav.example.com/webdav",
                "https://dav.example.com/remote.php/dav/files/alice",
            ]
        );
        assert!(probed.iter().all(|u| !u.contains(USER_PLACEHOLDER)));
    }

    #[tokio::test]
    async fn candidate_paths_tried_in_order_then_give_up() {
        let transport = MockTransport::with_default_status(404);
        let found = WEBDAV
            .discover(&transport, "https://dav.example.com/", "bob")
            .await;

        assert!(found.is_none());
        let probed: Vec<String> = transport
            .requests()
            .await
            .into_iter()
            .map(|(_, url)| url)
            .collect();
        assert_eq!(
            probed,
            vec![
                "https://dav.example.com/",
                "https://dav.example.com/webdav",
                "https://dav.example.com/remote.php/dav/files/bob",
                "https://dav.example.com/dav/files/bob",
            ]
        );
    }

    #[tokio::test]
    async fn no_paths_means_single_probe() {
        let web = DEFAULT_HEURISTICS.last().unwrap();
        let transport = MockTransport::with_default_status(500);
        assert!(web
            .discover(&transport, "https://example.com/x", "")
            .await
            .is_none());
        assert_eq!(transport.requests().await.len(), 1);
    }

    #[tokio::test]
    async fn unparsable_url_is_no_match() {
        let transport = MockTransport::with_default_status(200);
        assert!(WEBDAV.discover(&transport, "http://[::1", "bob").await.is_none());
        assert!(transport.requests().await.is_empty());
    }

    #[tokio::test]
    async fn query_survives_path_substitution() {
        let transport = MockTransport::with_default_status(404);
        transport
            .respond("PROPFIND", "https://dav.example.com/webdav?x=1", 207)
            .await;
        let found = WEBDAV
            .discover(&transport, "https://dav.example.com/?x=1", "bob")
            .await
            .unwrap();
        assert_eq!(found.path(), "/webdav");
        assert_eq!(found.query(), Some("x=1"));
    }
}
