use crate::constants::header;
use crate::headers::HeaderSet;
use crate::rules::{RuleAction, RuleTable};
use tracing::debug;
use url::Url;

/// Applies every cookie-injection rule matching `url` to `headers`, in table
/// order. Returns whether the `Cookie` header changed.
pub fn inject_cookies(rules: &RuleTable, url: &Url, headers: &mut HeaderSet) -> bool {
    let mut modified = false;

    for rule in rules.rules() {
        let RuleAction::InjectCookies(extra) = &rule.action else {
            continue;
        };
        if !rule.matcher.matches(url) {
            continue;
        }

        let value = match headers.get(header::COOKIE) {
            Some(existing) => format!("{existing}; {extra}"),
            None => extra.clone(),
        };
        headers.set(header::COOKIE, value);
        modified = true;

        debug!(
            rule = %rule.name,
            host = url.host_str().unwrap_or_default(),
            "injected extra cookies"
        );
    }

    modified
}

#[cfg(test)]
#[path = "cookies_test.rs"]
mod cookies_test;
