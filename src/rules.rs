use crate::constants::site;
use crate::matcher::UrlMatcher;
use crate::util::{is_cookie_value, is_http_token};
use std::collections::HashSet;
use thiserror::Error;

/// What a rule does to a request its matcher selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleAction {
    /// Append the literal `name=value` pairs to the outbound `Cookie` header.
    InjectCookies(String),
    /// Abort the request when its `Referer` is on the destination's own site.
    BlockSameSiteReferrer,
}

#[derive(Debug, Clone)]
pub struct DomainRule {
    pub name: String,
    pub matcher: UrlMatcher,
    pub action: RuleAction,
}

impl DomainRule {
    pub fn new<S: Into<String>>(name: S, matcher: UrlMatcher, action: RuleAction) -> Self {
        Self {
            name: name.into(),
            matcher,
            action,
        }
    }

    pub fn inject_cookies<S, C>(name: S, matcher: UrlMatcher, cookies: C) -> Self
    where
        S: Into<String>,
        C: Into<String>,
    {
        Self::new(name, matcher, RuleAction::InjectCookies(cookies.into()))
    }

    pub fn block_same_site_referrer<S: Into<String>>(name: S, matcher: UrlMatcher) -> Self {
        Self::new(name, matcher, RuleAction::BlockSameSiteReferrer)
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("rule names must not be empty")]
    EmptyRuleName,
    #[error("rule `{0}` is declared more than once")]
    DuplicateRuleName(String),
    #[error("rule `{0}` matches an empty host")]
    EmptyMatcherHost(String),
    #[error("rule `{0}` injects an empty cookie string")]
    EmptyCookies(String),
    #[error("rule `{rule}` injects malformed cookie pair `{pair}`; expected `name=value` pairs joined by `; `")]
    MalformedCookiePair { rule: String, pair: String },
}

/// Immutable, ordered set of [`DomainRule`]s consulted by the hooks.
///
/// [`RuleTable::default`] holds the built-in site hacks.
#[derive(Debug, Clone)]
pub struct RuleTable {
    rules: Vec<DomainRule>,
}

impl RuleTable {
    pub fn new<I>(rules: I) -> Self
    where
        I: IntoIterator<Item = DomainRule>,
    {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn rules(&self) -> &[DomainRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut seen = HashSet::with_capacity(self.rules.len());

        for rule in &self.rules {
            if rule.name.trim().is_empty() {
                return Err(ValidationError::EmptyRuleName);
            }
            if !seen.insert(rule.name.as_str()) {
                return Err(ValidationError::DuplicateRuleName(rule.name.clone()));
            }
            if rule
                .matcher
                .anchor_host()
                .is_some_and(|host| host.trim().is_empty())
            {
                return Err(ValidationError::EmptyMatcherHost(rule.name.clone()));
            }
            if let RuleAction::InjectCookies(cookies) = &rule.action {
                validate_cookie_text(&rule.name, cookies)?;
            }
        }

        Ok(())
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        Self::new([
            DomainRule::inject_cookies(
                "forbes",
                UrlMatcher::domain(site::FORBES_DOMAIN),
                site::FORBES_EXTRA_COOKIES,
            ),
            DomainRule::block_same_site_referrer(
                "twitter-nojs-router",
                UrlMatcher::host_path(site::TWITTER_MOBILE_HOST, site::TWITTER_NOJS_ROUTER_PATH),
            ),
        ])
    }
}

fn validate_cookie_text(rule: &str, cookies: &str) -> Result<(), ValidationError> {
    if cookies.trim().is_empty() {
        return Err(ValidationError::EmptyCookies(rule.to_string()));
    }

    for pair in cookies.split("; ") {
        let well_formed = pair
            .split_once('=')
            .is_some_and(|(name, value)| is_http_token(name) && is_cookie_value(value));
        if !well_formed {
            return Err(ValidationError::MalformedCookiePair {
                rule: rule.to_string(),
                pair: pair.to_string(),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "rules_test.rs"]
mod rules_test;
