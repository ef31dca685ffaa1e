//! Site-host extraction from a configured site address.

use url::{Host, Url};

/// The host a site address points at.
#[cfg_attr(feature = "with-serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteHost {
    /// IP literal or `localhost`; DNS posture checks do not apply.
    Local(String),
    /// Publicly resolvable domain name, IDNA-encoded and lowercased.
    Domain(String),
}

impl SiteHost {
    pub fn name(&self) -> &str {
        match self {
            Self::Local(name) | Self::Domain(name) => name,
        }
    }
}

/// Extract the host from a site address, which may be a bare hostname or a
/// full URL. Returns `None` when no host can be determined.
pub fn site_host(input: &str) -> Option<SiteHost> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    // A bare hostname gets a synthetic scheme so the URL parser accepts it.
    let with_scheme = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("http://{trimmed}")
    };
    let url = Url::parse(&with_scheme).ok()?;

    match url.host()? {
        Host::Ipv4(ip) => Some(SiteHost::Local(ip.to_string())),
        Host::Ipv6(ip) => Some(SiteHost::Local(ip.to_string())),
        Host::Domain(domain) => classify_domain(domain),
    }
}

fn classify_domain(domain: &str) -> Option<SiteHost> {
    // Absolute names carry a trailing dot; compare relative.
    let host = domain.trim_matches('.').to_ascii_lowercase();
    if host.is_empty() {
        return None;
    }
    if host == "localhost" {
        return Some(SiteHost::Local(host));
    }
    match idna::domain_to_ascii(&host) {
        Ok(ascii) if !ascii.is_empty() => Some(SiteHost::Domain(ascii)),
        _ => None,
    }
}
