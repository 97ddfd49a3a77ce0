//! Cross-site referrer trimming applied when a request is first formed.

use crate::context::RequestContext;
use crate::site::{is_http_scheme, origin_of, same_site, site_of};
use tracing::debug;

/// Decides the replacement referrer for `ctx`, or `None` to keep it as is.
///
/// A referrer survives untouched when the request is first-party to it, or
/// when the request's site for cookies is not an HTTP(S) origin (extension
/// pages keep full referrers). Any other cross-site referrer is replaced by
/// the destination's own origin. Destinations outside HTTP(S) have no
/// serializable origin and are left alone.
pub fn referrer_override(ctx: &RequestContext) -> Option<String> {
    let referrer = ctx.referrer.as_ref()?;

    if !is_http_scheme(&ctx.url) {
        return None;
    }

    if ctx
        .site_for_cookies
        .as_ref()
        .is_some_and(|site_for_cookies| !is_http_scheme(site_for_cookies))
    {
        return None;
    }

    if same_site(&ctx.url, referrer) {
        return None;
    }

    let replacement = origin_of(&ctx.url);
    debug!(
        destination_site = site_of(&ctx.url).unwrap_or_default(),
        referrer_site = site_of(referrer).unwrap_or_default(),
        referrer = %replacement,
        "trimmed cross-site referrer"
    );
    Some(replacement)
}

#[cfg(test)]
#[path = "referrer_test.rs"]
mod referrer_test;
