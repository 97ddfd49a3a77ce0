//! Same-site computations over parsed URLs.
//!
//! A URL's *site* is the registrable domain of its host according to the
//! public suffix list (`a.example.com` and `b.example.com` share the site
//! `example.com`). Hosts that have no registrable domain, such as IP
//! addresses, `localhost` or a bare public suffix, are their own site.

use crate::constants::scheme;
use url::{Host, Url};

/// Registrable domain of `host`, if the public suffix list yields one.
pub fn registrable_domain(host: &str) -> Option<&str> {
    psl::domain_str(host)
}

/// Site of `url`, or `None` for URLs without a host.
pub fn site_of(url: &Url) -> Option<&str> {
    match url.host()? {
        Host::Domain(domain) => Some(registrable_domain(domain).unwrap_or(domain)),
        Host::Ipv4(_) | Host::Ipv6(_) => url.host_str(),
    }
}

/// Whether both URLs have a host and resolve to the same site.
pub fn same_site(a: &Url, b: &Url) -> bool {
    match (site_of(a), site_of(b)) {
        (Some(left), Some(right)) => left == right,
        _ => false,
    }
}

pub fn is_http_scheme(url: &Url) -> bool {
    matches!(url.scheme(), scheme::HTTP | scheme::HTTPS)
}

/// Serialized origin of `url`: scheme, host and non-default port, no path.
pub fn origin_of(url: &Url) -> String {
    url.origin().ascii_serialization()
}

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;
