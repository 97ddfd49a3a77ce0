use crate::result::{ContextError, Status};
use url::Url;

/// Read access to the host's in-flight request object.
pub trait UrlRequest {
    fn url(&self) -> &str;

    fn referrer(&self) -> Option<&str>;

    /// First-party context of the request; may be a non-HTTP origin such as
    /// a browser extension page.
    fn site_for_cookies(&self) -> Option<&str>;
}

/// Per-request snapshot handed to the hooks, plus the slots they write
/// their decisions into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub url: Url,
    pub referrer: Option<Url>,
    pub site_for_cookies: Option<Url>,
    /// Replacement for the outbound referrer, set when a hook trims it.
    pub new_referrer: Option<String>,
    /// Replacement destination. No built-in rule redirects, so this stays
    /// unset.
    pub new_url: Option<String>,
    pub status: Status,
}

impl RequestContext {
    /// Parses a context from raw strings. Empty `referrer` or
    /// `site_for_cookies` values are treated as absent.
    pub fn new(
        url: &str,
        referrer: Option<&str>,
        site_for_cookies: Option<&str>,
    ) -> Result<Self, ContextError> {
        let url = Url::parse(url).map_err(|source| ContextError::InvalidUrl {
            input: url.to_string(),
            source,
        })?;
        let referrer = parse_optional(referrer).map_err(|(input, source)| {
            ContextError::InvalidReferrer { input, source }
        })?;
        let site_for_cookies = parse_optional(site_for_cookies).map_err(|(input, source)| {
            ContextError::InvalidSiteForCookies { input, source }
        })?;

        Ok(Self::from_parts(url, referrer, site_for_cookies))
    }

    pub fn from_parts(url: Url, referrer: Option<Url>, site_for_cookies: Option<Url>) -> Self {
        Self {
            url,
            referrer,
            site_for_cookies,
            new_referrer: None,
            new_url: None,
            status: Status::Continue,
        }
    }

    pub fn from_request<R: UrlRequest + ?Sized>(request: &R) -> Result<Self, ContextError> {
        Self::new(request.url(), request.referrer(), request.site_for_cookies())
    }

    /// Referrer the request will carry once the hooks' decisions apply.
    pub fn effective_referrer(&self) -> Option<&str> {
        self.new_referrer
            .as_deref()
            .or_else(|| self.referrer.as_ref().map(Url::as_str))
    }
}

fn parse_optional(value: Option<&str>) -> Result<Option<Url>, (String, url::ParseError)> {
    match value {
        Some(raw) if !raw.is_empty() => Url::parse(raw)
            .map(Some)
            .map_err(|source| (raw.to_string(), source)),
        _ => Ok(None),
    }
}

#[cfg(test)]
#[path = "context_test.rs"]
mod context_test;
