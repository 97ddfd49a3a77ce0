use crate::constants::net_error;
use thiserror::Error;

/// Outcome of a hook invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Status {
    /// The request proceeds, possibly with a rewritten referrer or headers.
    #[default]
    Continue,
    /// The request is terminated before it reaches the wire.
    Abort,
}

impl Status {
    pub fn is_abort(self) -> bool {
        matches!(self, Status::Abort)
    }

    /// Integer code understood by the host network stack.
    pub fn net_error(self) -> i32 {
        match self {
            Status::Continue => net_error::OK,
            Status::Abort => net_error::ERR_ABORTED,
        }
    }
}

/// Errors raised while snapshotting a host request into a
/// [`RequestContext`](crate::RequestContext).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContextError {
    #[error("request url `{input}` could not be parsed: {source}")]
    InvalidUrl {
        input: String,
        #[source]
        source: url::ParseError,
    },
    #[error("referrer `{input}` could not be parsed: {source}")]
    InvalidReferrer {
        input: String,
        #[source]
        source: url::ParseError,
    },
    #[error("site for cookies `{input}` could not be parsed: {source}")]
    InvalidSiteForCookies {
        input: String,
        #[source]
        source: url::ParseError,
    },
}

#[cfg(test)]
#[path = "result_test.rs"]
mod result_test;
