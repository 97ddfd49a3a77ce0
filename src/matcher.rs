use crate::util::normalize_lower;
use regex_automata::meta::{BuildError, Regex};
use std::fmt;
use std::time::{Duration, Instant};
use url::Url;

#[derive(Debug)]
pub enum PatternError {
    Build(Box<BuildError>),
    Timeout { elapsed: Duration, budget: Duration },
    TooLong { length: usize, max: usize },
}

impl fmt::Display for PatternError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PatternError::Build(_) => write!(f, "failed to compile url pattern"),
            PatternError::Timeout { .. } => {
                write!(f, "compiling url pattern exceeded the configured budget")
            }
            PatternError::TooLong { length, max } => write!(
                f,
                "url pattern length {} exceeds maximum allowed {}",
                length, max
            ),
        }
    }
}

impl std::error::Error for PatternError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PatternError::Build(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

const PATTERN_COMPILE_BUDGET: Duration = Duration::from_millis(100);
const MAX_PATTERN_LENGTH: usize = 4_096;

/// Match predicate selecting the destinations a rule applies to.
#[derive(Debug, Clone)]
pub enum UrlMatcher {
    /// Host equals the value.
    Host(String),
    /// Host equals the value or is one of its subdomains.
    Domain(String),
    /// Host equals `host` and the path starts with `path_prefix`.
    HostPath { host: String, path_prefix: String },
    /// Glob over the full serialized URL.
    Pattern(Regex),
}

impl UrlMatcher {
    pub fn host<S: AsRef<str>>(value: S) -> Self {
        Self::Host(normalize_lower(value.as_ref()))
    }

    pub fn domain<S: AsRef<str>>(value: S) -> Self {
        Self::Domain(normalize_lower(value.as_ref()))
    }

    pub fn host_path<H, P>(host: H, path_prefix: P) -> Self
    where
        H: AsRef<str>,
        P: Into<String>,
    {
        Self::HostPath {
            host: normalize_lower(host.as_ref()),
            path_prefix: path_prefix.into(),
        }
    }

    pub fn pattern(regex: Regex) -> Self {
        Self::Pattern(regex)
    }

    /// Compiles a glob such as `https://*.example.com/login*`, where `*`
    /// matches any run of characters and everything else is literal.
    pub fn pattern_str(glob: &str) -> Result<Self, PatternError> {
        Self::compile_glob(glob, PATTERN_COMPILE_BUDGET).map(Self::Pattern)
    }

    fn compile_glob(glob: &str, budget: Duration) -> Result<Regex, PatternError> {
        if glob.len() > MAX_PATTERN_LENGTH {
            return Err(PatternError::TooLong {
                length: glob.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        let started = Instant::now();
        let regex = Regex::new(&format!("(?i:^{}$)", glob_to_regex(glob)))
            .map_err(|err| PatternError::Build(Box::new(err)))?;
        let elapsed = started.elapsed();
        if elapsed > budget {
            return Err(PatternError::Timeout { elapsed, budget });
        }

        Ok(regex)
    }

    #[cfg(test)]
    pub(crate) fn pattern_str_with_budget(
        glob: &str,
        budget: Duration,
    ) -> Result<Self, PatternError> {
        Self::compile_glob(glob, budget).map(Self::Pattern)
    }

    /// Host the matcher is anchored to, if it has one.
    pub fn anchor_host(&self) -> Option<&str> {
        match self {
            UrlMatcher::Host(host) | UrlMatcher::Domain(host) => Some(host.as_str()),
            UrlMatcher::HostPath { host, .. } => Some(host.as_str()),
            UrlMatcher::Pattern(_) => None,
        }
    }

    pub fn matches(&self, url: &Url) -> bool {
        let host = url.host_str().unwrap_or_default();
        match self {
            UrlMatcher::Host(value) => host == value.as_str(),
            UrlMatcher::Domain(value) => is_same_or_subdomain(host, value),
            UrlMatcher::HostPath { host: value, path_prefix } => {
                host == value.as_str() && url.path().starts_with(path_prefix.as_str())
            }
            UrlMatcher::Pattern(regex) => regex.is_match(url.as_str().as_bytes()),
        }
    }
}

fn is_same_or_subdomain(host: &str, domain: &str) -> bool {
    if host.len() == domain.len() {
        return host == domain;
    }

    host.len() > domain.len()
        && host.ends_with(domain)
        && host.as_bytes()[host.len() - domain.len() - 1] == b'.'
}

fn glob_to_regex(glob: &str) -> String {
    let mut pattern = String::with_capacity(glob.len() * 2);
    for ch in glob.chars() {
        match ch {
            '*' => pattern.push_str(".*"),
            '\\' | '.' | '+' | '?' | '(' | ')' | '|' | '[' | ']' | '{' | '}' | '^' | '$'
            | '#' | '&' | '-' | '~' => {
                pattern.push('\\');
                pattern.push(ch);
            }
            _ => pattern.push(ch),
        }
    }
    pattern
}

#[cfg(test)]
#[path = "matcher_test.rs"]
mod matcher_test;
