use crate::constants::header;
use crate::context::{RequestContext, UrlRequest};
use crate::cookies::inject_cookies;
use crate::headers::HeaderSet;
use crate::redirect_guard::is_blocked_redirect;
use crate::referrer::referrer_override;
use crate::result::Status;
use crate::rules::{RuleTable, ValidationError};
use once_cell::sync::Lazy;
use std::sync::Arc;
use tracing::trace;

/// Completion handle shared with the host's asynchronous hooks.
///
/// Every decision here is synchronous, so the handle is accepted for
/// signature compatibility and never invoked.
pub type ResponseCallback = Arc<dyn Fn(Status) + Send + Sync>;

static SHARED: Lazy<SiteHacks> = Lazy::new(|| SiteHacks {
    rules: RuleTable::default(),
});

/// Entry points the host network stack calls for every request.
///
/// The engine holds an immutable [`RuleTable`] and no per-request state, so
/// one instance serves any number of concurrent requests.
#[derive(Debug, Clone)]
pub struct SiteHacks {
    rules: RuleTable,
}

impl SiteHacks {
    pub fn new(rules: RuleTable) -> Result<Self, ValidationError> {
        rules.validate()?;
        Ok(Self { rules })
    }

    /// Engine over the built-in rule table.
    pub fn shared() -> &'static SiteHacks {
        &SHARED
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    /// Hook run when a request is first formed. Trims cross-site referrers
    /// into `ctx.new_referrer` and never aborts.
    pub fn on_before_url_request(
        &self,
        _callback: Option<&ResponseCallback>,
        ctx: &mut RequestContext,
    ) -> Status {
        if let Some(referrer) = referrer_override(ctx) {
            ctx.new_referrer = Some(referrer);
        }

        ctx.status = Status::Continue;
        ctx.status
    }

    /// Hook run right before headers are sent. Injects cookies, then vetoes
    /// guarded redirect loops.
    ///
    /// The guard judges the referrer the request was formed with, since by
    /// now the `Referer` header may carry the trimmed value from
    /// [`on_before_url_request`](Self::on_before_url_request).
    ///
    /// An aborted request gets its `Cookie` header back as it was on entry.
    pub fn on_before_start_transaction<R>(
        &self,
        _request: &R,
        headers: &mut HeaderSet,
        _callback: Option<&ResponseCallback>,
        ctx: &mut RequestContext,
    ) -> Status
    where
        R: UrlRequest + ?Sized,
    {
        let original_cookies = headers.get(header::COOKIE).map(str::to_owned);
        let injected = inject_cookies(&self.rules, &ctx.url, headers);

        let blocked = is_blocked_redirect(&self.rules, &ctx.url, ctx.referrer.as_ref(), headers);
        ctx.status = if blocked {
            if injected {
                match original_cookies {
                    Some(cookies) => headers.set(header::COOKIE, cookies),
                    None => headers.remove(header::COOKIE),
                };
            }
            Status::Abort
        } else {
            Status::Continue
        };

        trace!(url = %ctx.url, status = ?ctx.status, "site hacks applied");
        ctx.status
    }
}

#[cfg(test)]
#[path = "site_hacks_test.rs"]
mod site_hacks_test;
