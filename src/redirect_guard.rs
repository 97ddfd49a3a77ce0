use crate::constants::header;
use crate::headers::HeaderSet;
use crate::rules::{RuleAction, RuleTable};
use crate::site::same_site;
use tracing::debug;
use url::Url;

/// Whether `url` is a guarded redirector endpoint being re-entered from its
/// own site, which would bounce the client back to itself indefinitely.
///
/// `referrer` is the request's referrer as formed, before any cross-site
/// trimming rewrote it to the destination's own origin. Without one the
/// `Referer` header in `headers` is consulted; a missing or unparseable value
/// never blocks.
pub fn is_blocked_redirect(
    rules: &RuleTable,
    url: &Url,
    referrer: Option<&Url>,
    headers: &HeaderSet,
) -> bool {
    let Some(rule) = rules.rules().iter().find(|rule| {
        matches!(rule.action, RuleAction::BlockSameSiteReferrer) && rule.matcher.matches(url)
    }) else {
        return false;
    };

    let header_referrer;
    let referrer = match referrer {
        Some(referrer) => referrer,
        None => {
            header_referrer = headers
                .get(header::REFERER)
                .and_then(|value| Url::parse(value).ok());
            match &header_referrer {
                Some(referrer) => referrer,
                None => return false,
            }
        }
    };

    let blocked = same_site(url, referrer);
    if blocked {
        debug!(
            rule = %rule.name,
            referrer = %referrer,
            "aborted same-site redirect loop"
        );
    }
    blocked
}

#[cfg(test)]
#[path = "redirect_guard_test.rs"]
mod redirect_guard_test;
